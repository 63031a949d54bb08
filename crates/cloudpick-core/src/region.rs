//! Region records as published by the cloud catalog endpoint.
//!
//! ## Observed shape (`GET /v1/clouds`)
//!
//! ```json
//! {
//!   "cloud_description": "Europe, Finland - Google Cloud: Finland",
//!   "cloud_name": "google-europe-north1",
//!   "geo_latitude": 60.5693,
//!   "geo_longitude": 27.1878,
//!   "geo_region": "europe"
//! }
//! ```
//!
//! The live endpoint also sends `provider_description` and a few other keys;
//! serde ignores them. `geo_region` is always lowercase in observed responses.

use serde::{Deserialize, Serialize};

/// One entry of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    /// Human-readable label (e.g. `"Europe, Finland - Google Cloud: Finland"`).
    #[serde(rename = "cloud_description")]
    pub description: String,

    /// Provider-prefixed identifier (e.g. `"google-europe-north1"`).
    #[serde(rename = "cloud_name")]
    pub name: String,

    #[serde(rename = "geo_latitude")]
    pub latitude: f64,

    #[serde(rename = "geo_longitude")]
    pub longitude: f64,

    /// Free-text geographic grouping (e.g. `"east asia"`).
    #[serde(rename = "geo_region")]
    pub region: String,

    /// Kilometres from the user, set only by [`crate::rank_by_distance`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl RegionRecord {
    /// The provider code: everything before the first `-` in `name`.
    ///
    /// A name without a hyphen is its own provider code.
    #[must_use]
    pub fn provider_code(&self) -> &str {
        self.name.split('-').next().unwrap_or(&self.name)
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    /// Helsinki, used whenever the user's own position is unknown.
    pub const HELSINKI: Location = Location {
        lat: 60.1699,
        lon: 24.9384,
    };

    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::HELSINKI
    }
}

pub const LATITUDE_LIMIT: f64 = 90.0;
pub const LONGITUDE_LIMIT: f64 = 180.0;

/// Parses a latitude in decimal degrees, rejecting anything non-finite or
/// beyond ±90.
///
/// # Errors
///
/// Returns a human-readable reason when `raw` is not a usable latitude.
pub fn parse_latitude(raw: &str) -> Result<f64, String> {
    parse_degrees(raw, LATITUDE_LIMIT)
}

/// Parses a longitude in decimal degrees, rejecting anything non-finite or
/// beyond ±180.
///
/// # Errors
///
/// Returns a human-readable reason when `raw` is not a usable longitude.
pub fn parse_longitude(raw: &str) -> Result<f64, String> {
    parse_degrees(raw, LONGITUDE_LIMIT)
}

fn parse_degrees(raw: &str, limit: f64) -> Result<f64, String> {
    let value = raw.trim().parse::<f64>().map_err(|e| e.to_string())?;
    if !value.is_finite() || value.abs() > limit {
        return Err(format!("{value} is outside ±{limit}"));
    }
    Ok(value)
}
