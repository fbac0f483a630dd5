// crates/geofill-core/src/error.rs
use thiserror::Error;

/// Errors produced while configuring the widget or talking to the provider.
///
/// Only configuration errors ever reach the host. Fetch failures are caught
/// at the fetch boundary and logged.
#[derive(Debug, Error)]
pub enum GeofillError {
    #[error("Invalid provider endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Provider answered with HTTP status {0}")]
    Status(u16),

    #[error("Malformed provider response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Host error: {0}")]
    Host(String),

    #[cfg(feature = "blocking")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GeofillError>;
