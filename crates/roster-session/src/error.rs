//! Error types for session storage.

/// Error type for session storage operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A storage area failed to read or write.
    #[error("storage area error: {0}")]
    Area(String),
}

/// Result type for session storage operations.
pub type Result<T> = std::result::Result<T, Error>;
