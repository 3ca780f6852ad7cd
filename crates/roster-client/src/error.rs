//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (timeout, DNS, connection reset). The remote
    /// contract does not distinguish these further.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The remote rejected the bearer token (or none was sent).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The addressed record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success response from the server.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the server, if it sent one.
        message: String,
    },

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this is an authentication failure.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized(_)) || matches!(self, Error::Api { status: 401, .. })
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_)) || matches!(self, Error::Api { status: 404, .. })
    }

    /// Check if this is a server-side error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error body the mock API sends on rejected requests.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub error: String,
}
