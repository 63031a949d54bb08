//! Region catalog model and the selection logic built on top of it.
//!
//! Everything here is synchronous and free of network I/O. Fetching the
//! catalog and resolving the user's position live in `cloudpick-catalog`.

pub mod app_config;
pub mod config;
pub mod distance;
pub mod filter;
pub mod options;
pub mod rank;
pub mod region;
pub mod selection;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use distance::great_circle_distance_km;
pub use filter::{apply_filters, filter_by_provider, filter_by_region};
pub use options::{
    capitalize_words, derive_provider_options, derive_region_options, provider_full_name,
    SelectOption,
};
pub use rank::rank_by_distance;
pub use region::{parse_latitude, parse_longitude, Location, RegionRecord};
pub use selection::{SelectionEvent, SelectionState};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
