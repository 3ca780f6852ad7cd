//! The session store: token lifecycle over two storage areas.

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::area::TokenArea;
use crate::error::Result;

/// Session token store over a primary (session-scoped) area and a legacy
/// durable area.
///
/// Older deployments stored the token durably; [`SessionStore::initialize`]
/// migrates such a token into the primary area once and deletes the durable
/// copy. Authenticated-ness is derived from what initialization found plus
/// subsequent logins and logouts — the store does not watch the areas for
/// external changes.
pub struct SessionStore<P: TokenArea, L: TokenArea> {
    primary: P,
    legacy: L,
    token: Mutex<Option<String>>,
}

impl<P: TokenArea, L: TokenArea> SessionStore<P, L> {
    /// Create a store over the given areas without touching them.
    ///
    /// Call [`initialize`](Self::initialize) before using the store.
    pub fn new(primary: P, legacy: L) -> Self {
        Self {
            primary,
            legacy,
            token: Mutex::new(None),
        }
    }

    /// Create and initialize a store in one step.
    pub fn open(primary: P, legacy: L) -> Result<Self> {
        let store = Self::new(primary, legacy);
        store.initialize()?;
        Ok(store)
    }

    /// Read the areas and perform the one-time legacy migration.
    ///
    /// The primary area wins when both hold a token. Any token in the
    /// legacy durable area is deleted after the winning token is written to
    /// the primary area, so the durable copy never survives an
    /// initialization.
    pub fn initialize(&self) -> Result<()> {
        let primary = self.primary.load()?;
        let legacy = self.legacy.load()?;

        let token = match (primary, legacy) {
            (Some(token), None) => Some(token),
            (primary, Some(legacy_token)) => {
                let token = primary.unwrap_or(legacy_token);
                info!("migrating legacy durable token to session-scoped area");
                self.primary.save(&token)?;
                self.legacy.clear()?;
                Some(token)
            }
            (None, None) => None,
        };

        debug!(authenticated = token.is_some(), "session initialized");
        *self.token.lock() = token;
        Ok(())
    }

    /// Store a freshly issued token and mark the session authenticated.
    pub fn login(&self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        self.primary.save(&token)?;
        *self.token.lock() = Some(token);
        debug!("session authenticated");
        Ok(())
    }

    /// Clear the token from both areas. Idempotent.
    pub fn logout(&self) -> Result<()> {
        self.primary.clear()?;
        self.legacy.clear()?;
        *self.token.lock() = None;
        debug!("session cleared");
        Ok(())
    }

    /// The current token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.lock().clone()
    }

    /// Whether a token is present.
    ///
    /// Presence only — the remote API is the sole authority on validity,
    /// discovered lazily when a request fails.
    pub fn is_authenticated(&self) -> bool {
        self.token.lock().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::MemoryArea;

    #[test]
    fn test_empty_areas_mean_logged_out() {
        let store = SessionStore::open(MemoryArea::new(), MemoryArea::new()).unwrap();
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_login_persists_to_primary() {
        let store = SessionStore::open(MemoryArea::new(), MemoryArea::new()).unwrap();
        store.login("tok-1").unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_primary_token_survives_reopen() {
        let primary = MemoryArea::with_token("tok-1");
        let store = SessionStore::open(primary, MemoryArea::new()).unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_legacy_token_migrates_once() {
        let primary = MemoryArea::new();
        let legacy = MemoryArea::with_token("old-tok");
        let store = SessionStore::open(primary, legacy).unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("old-tok"));

        // Moved, not copied
        assert_eq!(store.primary.load().unwrap().as_deref(), Some("old-tok"));
        assert_eq!(store.legacy.load().unwrap(), None);
    }

    #[test]
    fn test_primary_wins_over_legacy() {
        let primary = MemoryArea::with_token("new-tok");
        let legacy = MemoryArea::with_token("old-tok");
        let store = SessionStore::open(primary, legacy).unwrap();

        assert_eq!(store.token().as_deref(), Some("new-tok"));
        // The durable copy is deleted either way
        assert_eq!(store.legacy.load().unwrap(), None);
        assert_eq!(store.primary.load().unwrap().as_deref(), Some("new-tok"));
    }

    #[test]
    fn test_logout_clears_both_areas() {
        let primary = MemoryArea::with_token("new-tok");
        let legacy = MemoryArea::with_token("old-tok");
        let store = SessionStore::open(primary, legacy).unwrap();

        store.logout().unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(store.primary.load().unwrap(), None);
        assert_eq!(store.legacy.load().unwrap(), None);

        // Idempotent
        store.logout().unwrap();
    }

    #[test]
    fn test_not_reactive_to_external_changes() {
        let store = SessionStore::open(MemoryArea::new(), MemoryArea::new()).unwrap();
        assert!(!store.is_authenticated());

        // Another writer drops a token into the area after initialization;
        // the store only re-checks on initialize()
        store.primary.save("sneaky").unwrap();
        assert!(!store.is_authenticated());

        store.initialize().unwrap();
        assert!(store.is_authenticated());
    }
}
