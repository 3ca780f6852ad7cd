//! Configuration for the page cache.

use std::time::Duration;

/// Default freshness window for cached pages: 24 hours.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Policy for updating the shared `total_pages` scalar on write.
///
/// Concurrent page fetches can complete out of order, so a late response
/// for an early page may carry a stale `total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TotalPagesPolicy {
    /// Never lower a previously recorded value.
    #[default]
    MonotonicMax,

    /// Overwrite unconditionally, stale or not.
    LastWriteWins,
}

/// Configuration for the page cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Freshness window. Entries older than this are treated as misses
    /// (hard expiry, no revalidation).
    pub ttl: Duration,

    /// How writes update the shared `total_pages` scalar.
    pub total_pages_policy: TotalPagesPolicy,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            total_pages_policy: TotalPagesPolicy::default(),
        }
    }
}

impl CacheConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the freshness window.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the `total_pages` update policy.
    pub fn with_total_pages_policy(mut self, policy: TotalPagesPolicy) -> Self {
        self.total_pages_policy = policy;
        self
    }
}
