use thiserror::Error;

/// Errors returned by the catalog and geolocation clients.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The geolocation service answered but could not place the caller.
    #[error("geolocation failed: {0}")]
    Geolocation(String),
}
