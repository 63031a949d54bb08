//! Runs the catalog fetch and the location lookup side by side and folds
//! their results into a [`SelectionState`].
//!
//! Each lookup is a tokio task that reports back over a channel exactly
//! once. The two complete in whatever order the network allows, and neither
//! waits on the other. Dropping the [`Session`] aborts both tasks; a task that
//! still manages to finish finds the channel closed and discards its result.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use cloudpick_core::{Location, RegionRecord, SelectionEvent, SelectionState};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::CatalogError;

/// A boxed one-shot lookup, e.g. `Box::pin(async move { client.fetch_regions().await })`.
pub type Lookup<T> = Pin<Box<dyn Future<Output = Result<T, CatalogError>> + Send + 'static>>;

#[derive(Debug)]
enum Completion {
    Catalog(Result<Vec<RegionRecord>, CatalogError>),
    Location(Result<Location, CatalogError>),
}

pub struct Session {
    state: SelectionState,
    completions: mpsc::Receiver<Completion>,
    tasks: Vec<JoinHandle<()>>,
    catalog_pending: bool,
    location_pending: bool,
}

impl Session {
    /// Spawns the catalog lookup and, if given, the location lookup.
    ///
    /// The state starts at `fallback` with `is_loading` set.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn start(
        fallback: Location,
        catalog: Lookup<Vec<RegionRecord>>,
        location: Option<Lookup<Location>>,
    ) -> Self {
        let (tx, completions) = mpsc::channel(2);

        let mut state = SelectionState::new(fallback);
        state.apply(SelectionEvent::LoadStarted);

        let mut tasks = vec![spawn_lookup(tx.clone(), catalog, Completion::Catalog)];
        let location_pending = location.is_some();
        if let Some(lookup) = location {
            tasks.push(spawn_lookup(tx, lookup, Completion::Location));
        }

        Self {
            state,
            completions,
            tasks,
            catalog_pending: true,
            location_pending,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Hands the current state over, leaving a fresh default behind.
    #[must_use]
    pub fn into_state(mut self) -> SelectionState {
        std::mem::take(&mut self.state)
    }

    /// `true` once neither lookup is outstanding.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.catalog_pending && !self.location_pending
    }

    /// Applies a user-driven event (provider, region or city change).
    pub fn dispatch(&mut self, event: SelectionEvent) {
        self.state.apply(event);
    }

    /// Processes lookup results until the catalog has either loaded or failed.
    ///
    /// A location result that arrives first is applied along the way.
    pub async fn wait_for_catalog(&mut self) {
        while self.catalog_pending {
            match self.completions.recv().await {
                Some(completion) => self.handle(completion),
                None => self.close(),
            }
        }
    }

    /// Waits at most `timeout` for a pending location lookup.
    ///
    /// On timeout the lookup keeps running in the background; its result is
    /// applied on a later wait, or discarded when the session is dropped.
    /// A `timeout` too large to express as a deadline waits without bound.
    pub async fn wait_for_location(&mut self, timeout: Duration) {
        let deadline = tokio::time::Instant::now().checked_add(timeout);
        while self.location_pending {
            let next = match deadline {
                Some(deadline) => tokio::time::timeout_at(deadline, self.completions.recv()).await,
                None => Ok(self.completions.recv().await),
            };
            match next {
                Ok(Some(completion)) => self.handle(completion),
                Ok(None) => self.close(),
                Err(_) => {
                    tracing::info!(
                        timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                        "geolocation still pending; ranking from current location"
                    );
                    break;
                }
            }
        }
    }

    /// Waits for the catalog, then gives the location up to `location_timeout`.
    pub async fn settle(&mut self, location_timeout: Duration) {
        self.wait_for_catalog().await;
        self.wait_for_location(location_timeout).await;
    }

    fn handle(&mut self, completion: Completion) {
        match completion {
            Completion::Catalog(Ok(records)) => {
                self.catalog_pending = false;
                self.state.apply(SelectionEvent::CatalogLoaded(records));
            }
            Completion::Catalog(Err(e)) => {
                self.catalog_pending = false;
                tracing::warn!(error = %e, "catalog fetch failed; continuing with an empty catalog");
                self.state.apply(SelectionEvent::CatalogFailed);
            }
            Completion::Location(Ok(location)) => {
                self.location_pending = false;
                self.state.apply(SelectionEvent::LocationResolved(location));
            }
            Completion::Location(Err(e)) => {
                self.location_pending = false;
                tracing::warn!(
                    error = %e,
                    lat = self.state.location.lat,
                    lon = self.state.location.lon,
                    "geolocation failed; keeping fallback location"
                );
            }
        }
    }

    /// Every sender is gone, so nothing more will arrive. Only reachable if a
    /// lookup task panicked or was aborted before reporting.
    fn close(&mut self) {
        if self.catalog_pending {
            tracing::warn!("catalog lookup ended without a result");
            self.catalog_pending = false;
            self.state.apply(SelectionEvent::CatalogFailed);
        }
        self.location_pending = false;
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

fn spawn_lookup<T: Send + 'static>(
    tx: mpsc::Sender<Completion>,
    lookup: Lookup<T>,
    wrap: fn(Result<T, CatalogError>) -> Completion,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = lookup.await;
        if tx.send(wrap(result)).await.is_err() {
            tracing::debug!("session closed before lookup finished; result dropped");
        }
    })
}
