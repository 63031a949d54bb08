use crate::app_config::AppConfig;
use crate::region::{parse_latitude, parse_longitude, Location};
use crate::ConfigError;

pub const DEFAULT_CATALOG_URL: &str = "https://api.aiven.io/v1/clouds";
pub const DEFAULT_GEOLOCATION_URL: &str = "http://ip-api.com/json";
pub const DEFAULT_USER_AGENT: &str = "cloudpick/0.1 (region-picker)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so the only failure mode is a value that is
/// present but malformed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .to_ascii_lowercase()
            .parse::<bool>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_coordinate =
        |var: &str, default: &str, parse: fn(&str) -> Result<f64, String>| -> Result<f64, ConfigError> {
            parse(&or_default(var, default)).map_err(|reason| invalid(var, reason))
        };

    let catalog_url = or_default("CLOUDPICK_CATALOG_URL", DEFAULT_CATALOG_URL);
    let geolocation_url = or_default("CLOUDPICK_GEOLOCATION_URL", DEFAULT_GEOLOCATION_URL);
    let geolocate = parse_bool("CLOUDPICK_GEOLOCATE", "true")?;

    let request_timeout_secs = parse_u64("CLOUDPICK_REQUEST_TIMEOUT_SECS", "30")?;
    let geolocation_timeout_secs = parse_u64("CLOUDPICK_GEOLOCATION_TIMEOUT_SECS", "5")?;
    let user_agent = or_default("CLOUDPICK_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("CLOUDPICK_LOG_LEVEL", "info");

    let fallback = Location::default();
    let lat = parse_coordinate(
        "CLOUDPICK_FALLBACK_LAT",
        &fallback.lat.to_string(),
        parse_latitude,
    )?;
    let lon = parse_coordinate(
        "CLOUDPICK_FALLBACK_LON",
        &fallback.lon.to_string(),
        parse_longitude,
    )?;

    Ok(AppConfig {
        catalog_url,
        geolocation_url,
        geolocate,
        request_timeout_secs,
        geolocation_timeout_secs,
        user_agent,
        log_level,
        fallback_location: Location::new(lat, lon),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
