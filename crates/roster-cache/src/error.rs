//! Error types for cache operations.

/// Error type for cache operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backing store failed to load or save the blob.
    #[error("store error: {0}")]
    Store(String),

    /// The cache structure could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, Error>;
