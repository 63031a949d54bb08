use crate::region::Location;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub catalog_url: String,
    pub geolocation_url: String,
    /// When `false`, no lookup is issued and `fallback_location` is used as-is.
    pub geolocate: bool,
    pub request_timeout_secs: u64,
    /// Upper bound the CLI waits for a pending geolocation before rendering.
    pub geolocation_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
    pub fallback_location: Location,
}
