//! HTTP client for the public cloud region catalog.
//!
//! One `GET` of a fixed URL, no auth, no paging. Non-2xx statuses and
//! malformed bodies surface as typed [`CatalogError`]s; deciding to degrade
//! them to an empty catalog is the caller's job (see [`crate::Session`]).

use std::time::Duration;

use cloudpick_core::RegionRecord;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::CatalogError;
use crate::types::CatalogResponse;

/// Client for the region catalog endpoint.
///
/// Use [`CatalogClient::new`] with the configured URL; tests point it at a
/// wiremock server instead.
pub struct CatalogClient {
    client: Client,
    url: Url,
}

impl CatalogClient {
    /// Creates a client for the catalog at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidUrl`] if `url` does not parse, or
    /// [`CatalogError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let url = parse_url(url)?;
        let client = build_http_client(timeout_secs, user_agent)?;
        Ok(Self { client, url })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetches every region record the catalog publishes.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] on network failure.
    /// - [`CatalogError::UnexpectedStatus`] on any non-2xx status.
    /// - [`CatalogError::Deserialize`] if the body is not a catalog envelope.
    pub async fn fetch_regions(&self) -> Result<Vec<RegionRecord>, CatalogError> {
        let response: CatalogResponse = get_json(&self.client, &self.url, "region catalog").await?;
        tracing::info!(url = %self.url, regions = response.clouds.len(), "fetched region catalog");
        Ok(response.clouds)
    }
}

pub(crate) fn parse_url(raw: &str) -> Result<Url, CatalogError> {
    Url::parse(raw).map_err(|e| CatalogError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}

pub(crate) fn build_http_client(timeout_secs: u64, user_agent: &str) -> Result<Client, CatalogError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Sends a GET request, rejects non-2xx statuses, and parses the body as `T`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &Url,
    context: &str,
) -> Result<T, CatalogError> {
    let response = client
        .get(url.clone())
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?;
    let status = response.status();

    if !status.is_success() {
        return Err(CatalogError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| CatalogError::Deserialize {
        context: format!("{context} from {url}"),
        source: e,
    })
}
