//! Response envelopes for the catalog and geolocation endpoints.

use cloudpick_core::RegionRecord;
use serde::Deserialize;

/// Top-level response from `GET /v1/clouds`: `{ "clouds": [ ... ] }`.
///
/// A body without `clouds` is treated as an empty catalog.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub clouds: Vec<RegionRecord>,
}

/// ip-api.com style payload.
///
/// On success: `{"status": "success", "lat": 60.17, "lon": 24.94, ...}`.
/// On failure: `{"status": "fail", "message": "private range"}` with no
/// coordinates.
#[derive(Debug, Deserialize)]
pub struct GeolocationResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}
