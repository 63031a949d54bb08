//! Selection state and the reducer that drives it.
//!
//! The catalog fetch, the location lookup and the user's picks all arrive as
//! [`SelectionEvent`]s. [`SelectionState::apply`] is the only place state
//! changes, and derived views (`provider_options`, `region_options`,
//! `filtered`) are rebuilt from the catalog each time they are touched.

use serde::Serialize;

use crate::filter::apply_filters;
use crate::options::{derive_provider_options, derive_region_options, SelectOption};
use crate::rank::rank_by_distance;
use crate::region::{Location, RegionRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    LoadStarted,
    CatalogLoaded(Vec<RegionRecord>),
    CatalogFailed,
    LocationResolved(Location),
    ProviderChanged(String),
    RegionChanged(String),
    /// Terminal pick; nothing downstream is recomputed.
    CityChanged(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionState {
    pub catalog: Vec<RegionRecord>,
    pub is_loading: bool,
    pub provider_options: Vec<SelectOption>,
    pub region_options: Vec<SelectOption>,
    pub selected_provider: String,
    pub selected_region: String,
    pub selected_city: String,
    /// Catalog narrowed by the current picks, nearest first.
    pub filtered: Vec<RegionRecord>,
    pub location: Location,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(Location::default())
    }
}

impl SelectionState {
    /// Empty state positioned at `fallback` until a real location arrives.
    #[must_use]
    pub fn new(fallback: Location) -> Self {
        Self {
            catalog: Vec::new(),
            is_loading: false,
            provider_options: vec![SelectOption::sentinel()],
            region_options: vec![SelectOption::sentinel()],
            selected_provider: String::new(),
            selected_region: String::new(),
            selected_city: String::new(),
            filtered: Vec::new(),
            location: fallback,
        }
    }

    pub fn apply(&mut self, event: SelectionEvent) {
        match event {
            SelectionEvent::LoadStarted => {
                self.is_loading = true;
            }
            SelectionEvent::CatalogLoaded(records) => {
                tracing::debug!(records = records.len(), "catalog loaded");
                self.catalog = records;
                self.provider_options = derive_provider_options(&self.catalog);
                self.region_options = derive_region_options(&self.catalog);
                self.refilter();
                self.is_loading = false;
            }
            SelectionEvent::CatalogFailed => {
                self.catalog.clear();
                self.provider_options = derive_provider_options(&self.catalog);
                self.region_options = derive_region_options(&self.catalog);
                self.filtered.clear();
                self.is_loading = false;
            }
            SelectionEvent::LocationResolved(location) => {
                tracing::debug!(lat = location.lat, lon = location.lon, "location resolved");
                self.location = location;
                let current = std::mem::take(&mut self.filtered);
                self.filtered = rank_by_distance(current, self.location);
            }
            SelectionEvent::ProviderChanged(code) => {
                self.selected_provider = code;
                self.refilter();
            }
            SelectionEvent::RegionChanged(region) => {
                self.selected_region = region;
                self.refilter();
            }
            SelectionEvent::CityChanged(description) => {
                self.selected_city = description;
            }
        }
    }

    /// The first result, when there is more than one to choose between.
    #[must_use]
    pub fn nearest(&self) -> Option<&RegionRecord> {
        if self.filtered.len() > 1 {
            self.filtered.first()
        } else {
            None
        }
    }

    /// The filtered record whose description matches the selected city.
    #[must_use]
    pub fn selected_record(&self) -> Option<&RegionRecord> {
        if self.selected_city.is_empty() {
            return None;
        }
        self.filtered
            .iter()
            .find(|r| r.description == self.selected_city)
    }

    fn refilter(&mut self) {
        let narrowed = apply_filters(&self.catalog, &self.selected_provider, &self.selected_region);
        self.filtered = rank_by_distance(narrowed, self.location);
    }
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;
