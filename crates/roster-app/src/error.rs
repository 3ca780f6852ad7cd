//! Application error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Application error type.
///
/// Library callers see the full taxonomy; flattening remote failures into
/// a generic "try again" message is left to the outermost UI layer.
#[derive(Debug, Error)]
pub enum Error {
    /// No session token is present; the caller should route to login.
    #[error("not authenticated — log in first")]
    NotAuthenticated,

    /// Credentials failed the local check against the demo account. No
    /// network call was made.
    #[error("invalid credentials — use the provided test credentials")]
    InvalidCredentials,

    /// A field failed the local format check; the update never reached the
    /// directory client.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Edit and delete are only available once a page is loaded.
    #[error("no page loaded — load a page first")]
    NotReady,

    /// The directory client failed.
    #[error(transparent)]
    Client(#[from] roster_client::Error),

    /// The page cache failed.
    #[error(transparent)]
    Cache(#[from] roster_cache::Error),

    /// The session store failed.
    #[error(transparent)]
    Session(#[from] roster_session::Error),
}

impl Error {
    /// Whether the remote rejected our token; callers usually respond by
    /// logging out and routing to login.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Client(e) if e.is_unauthorized())
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, Error>;
