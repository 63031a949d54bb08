pub mod client;
pub mod error;
pub mod geolocate;
pub mod session;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use geolocate::GeolocationClient;
pub use session::{Lookup, Session};
pub use types::{CatalogResponse, GeolocationResponse};
