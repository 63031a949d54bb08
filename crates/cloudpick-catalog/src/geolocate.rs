//! Approximate user position from IP geolocation.
//!
//! Stands in for a browser's one-shot position query. Works with any
//! endpoint that speaks the ip-api.com JSON shape (see
//! [`GeolocationResponse`]).

use cloudpick_core::Location;
use reqwest::{Client, Url};

use crate::client::{build_http_client, get_json, parse_url};
use crate::error::CatalogError;
use crate::types::GeolocationResponse;

pub struct GeolocationClient {
    client: Client,
    url: Url,
}

impl GeolocationClient {
    /// Creates a client for the geolocation service at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidUrl`] if `url` does not parse, or
    /// [`CatalogError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let url = parse_url(url)?;
        let client = build_http_client(timeout_secs, user_agent)?;
        Ok(Self { client, url })
    }

    /// Asks the service where the caller is.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Geolocation`] when the service reports a failure or
    ///   omits coordinates.
    /// - [`CatalogError::Http`], [`CatalogError::UnexpectedStatus`] or
    ///   [`CatalogError::Deserialize`] for transport and payload problems.
    pub async fn locate(&self) -> Result<Location, CatalogError> {
        let response: GeolocationResponse = get_json(&self.client, &self.url, "geolocation").await?;
        let location = into_location(response)?;
        tracing::info!(lat = location.lat, lon = location.lon, "geolocation resolved");
        Ok(location)
    }
}

fn into_location(response: GeolocationResponse) -> Result<Location, CatalogError> {
    if response.status != "success" {
        return Err(CatalogError::Geolocation(
            response
                .message
                .unwrap_or_else(|| format!("status {}", response.status)),
        ));
    }

    match (response.lat, response.lon) {
        (Some(lat), Some(lon)) => Ok(Location::new(lat, lon)),
        _ => Err(CatalogError::Geolocation(
            "response is missing coordinates".to_owned(),
        )),
    }
}
