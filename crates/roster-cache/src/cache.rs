//! The page cache: read-with-expiry and write-through over a blob store.

use std::collections::HashMap;

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::config::{CacheConfig, TotalPagesPolicy};
use crate::error::Result;
use crate::freshness::PageEntry;
use crate::store::{BlobStore, MemoryStore};

/// The persisted cache document: per-page entries plus the shared
/// `total_pages` scalar.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(bound(serialize = "V: Serialize", deserialize = "V: DeserializeOwned"))]
struct CacheBlob<V> {
    #[serde(default)]
    pages: HashMap<u32, PageEntry<V>>,

    #[serde(rename = "totalPages", default, skip_serializing_if = "Option::is_none")]
    total_pages: Option<u32>,
}

impl<V> Default for CacheBlob<V> {
    fn default() -> Self {
        Self {
            pages: HashMap::new(),
            total_pages: None,
        }
    }
}

/// A cache hit: the page's records plus the stored page count.
#[derive(Debug, Clone)]
pub struct CachedPage<V> {
    /// Records for the requested page, exactly as last written.
    pub records: Vec<V>,
    /// The shared `total_pages` scalar at read time.
    pub total_pages: Option<u32>,
}

/// Page cache with hard freshness expiry.
///
/// Every read loads and deserializes the entire document from the backing
/// store; every write serializes all of it back. There is no partial
/// access, corruption detection, or schema versioning — an unparseable
/// document is treated as an empty cache.
pub struct PageCache<S: BlobStore = MemoryStore, V = serde_json::Value> {
    store: S,
    config: CacheConfig,
    _marker: std::marker::PhantomData<fn() -> V>,
}

impl<V> PageCache<MemoryStore, V>
where
    V: Clone + Serialize + DeserializeOwned,
{
    /// Create a cache over an in-memory store.
    pub fn in_memory(config: CacheConfig) -> Self {
        Self::with_store(config, MemoryStore::new())
    }
}

impl<S, V> PageCache<S, V>
where
    S: BlobStore,
    V: Clone + Serialize + DeserializeOwned,
{
    /// Create a cache over the given store.
    pub fn with_store(config: CacheConfig, store: S) -> Self {
        Self {
            store,
            config,
            _marker: std::marker::PhantomData,
        }
    }

    /// Get the cache configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Read a page, honoring the freshness window.
    ///
    /// Returns `None` when no entry exists for the page or the entry has
    /// aged past the TTL.
    pub fn read(&self, page: u32) -> Result<Option<CachedPage<V>>> {
        let blob = self.load_blob()?;

        match blob.pages.get(&page) {
            Some(entry) if entry.is_fresh(self.config.ttl, Utc::now()) => {
                trace!(page, "cache hit");
                Ok(Some(CachedPage {
                    records: entry.records.clone(),
                    total_pages: blob.total_pages,
                }))
            }
            Some(_) => {
                debug!(page, "cache entry stale, treating as miss");
                Ok(None)
            }
            None => {
                trace!(page, "cache miss");
                Ok(None)
            }
        }
    }

    /// Replace a page's entry and update the shared page count.
    ///
    /// The entry is replaced wholesale with a fresh timestamp (both on
    /// re-fetch and after a successful edit or delete of a contained
    /// record). The `total_pages` update follows the configured policy.
    pub fn write(&self, page: u32, records: Vec<V>, total_pages: u32) -> Result<()> {
        let mut blob = self.load_blob()?;

        blob.pages.insert(page, PageEntry::new(records));
        blob.total_pages = Some(match (self.config.total_pages_policy, blob.total_pages) {
            (TotalPagesPolicy::MonotonicMax, Some(existing)) => existing.max(total_pages),
            _ => total_pages,
        });

        debug!(page, total_pages = ?blob.total_pages, "cache write");
        self.save_blob(&blob)
    }

    /// Drop the entire cache document.
    pub fn clear(&self) -> Result<()> {
        debug!("cache cleared");
        self.store.clear()
    }

    /// Number of stored page entries, fresh or not.
    pub fn len(&self) -> Result<usize> {
        Ok(self.load_blob()?.pages.len())
    }

    /// Whether no page entries are stored.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.load_blob()?.pages.is_empty())
    }

    fn load_blob(&self) -> Result<CacheBlob<V>> {
        match self.store.load()? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(blob) => Ok(blob),
                Err(e) => {
                    warn!(error = %e, "cache document unparseable, starting empty");
                    Ok(CacheBlob::default())
                }
            },
            None => Ok(CacheBlob::default()),
        }
    }

    fn save_blob(&self, blob: &CacheBlob<V>) -> Result<()> {
        let raw = serde_json::to_string(blob)?;
        self.store.save(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use std::time::Duration;

    fn cache() -> PageCache<MemoryStore, u32> {
        PageCache::in_memory(CacheConfig::default())
    }

    #[test]
    fn test_read_returns_last_write() {
        let cache = cache();
        cache.write(1, vec![10, 20], 2).unwrap();

        let hit = cache.read(1).unwrap().unwrap();
        assert_eq!(hit.records, vec![10, 20]);
        assert_eq!(hit.total_pages, Some(2));
    }

    #[test]
    fn test_absent_page_is_miss() {
        let cache = cache();
        assert!(cache.read(3).unwrap().is_none());
    }

    #[test]
    fn test_stale_entry_is_miss() {
        let store = MemoryStore::new();

        // Plant an entry aged past the 24h window
        let stale = PageEntry {
            records: vec![1u32],
            fetched_at: Utc::now() - TimeDelta::hours(25),
        };
        let blob = serde_json::json!({
            "pages": { "1": serde_json::to_value(&stale).unwrap() },
            "totalPages": 2
        });
        store.save(&blob.to_string()).unwrap();

        let cache: PageCache<_, u32> = PageCache::with_store(CacheConfig::default(), store);
        assert!(cache.read(1).unwrap().is_none());
    }

    #[test]
    fn test_entry_within_window_is_hit() {
        let store = MemoryStore::new();

        let recent = PageEntry {
            records: vec![5u32],
            fetched_at: Utc::now() - TimeDelta::hours(23),
        };
        let blob = serde_json::json!({
            "pages": { "2": serde_json::to_value(&recent).unwrap() },
            "totalPages": 2
        });
        store.save(&blob.to_string()).unwrap();

        let cache: PageCache<_, u32> = PageCache::with_store(CacheConfig::default(), store);
        let hit = cache.read(2).unwrap().unwrap();
        assert_eq!(hit.records, vec![5]);
    }

    #[test]
    fn test_rewrite_replaces_wholesale() {
        let cache = cache();
        cache.write(1, vec![1, 2, 3], 2).unwrap();
        cache.write(1, vec![9], 2).unwrap();

        let hit = cache.read(1).unwrap().unwrap();
        assert_eq!(hit.records, vec![9]);
    }

    #[test]
    fn test_total_pages_monotonic_max() {
        let cache = cache();
        cache.write(1, vec![1], 3).unwrap();
        // A late out-of-order write carrying a stale count must not lower it
        cache.write(2, vec![2], 2).unwrap();

        let hit = cache.read(1).unwrap().unwrap();
        assert_eq!(hit.total_pages, Some(3));
    }

    #[test]
    fn test_total_pages_last_write_wins() {
        let config = CacheConfig::new().with_total_pages_policy(TotalPagesPolicy::LastWriteWins);
        let cache: PageCache<_, u32> = PageCache::in_memory(config);

        cache.write(1, vec![1], 3).unwrap();
        cache.write(2, vec![2], 2).unwrap();

        let hit = cache.read(1).unwrap().unwrap();
        assert_eq!(hit.total_pages, Some(2));
    }

    #[test]
    fn test_clear_drops_everything() {
        let cache = cache();
        cache.write(1, vec![1], 1).unwrap();
        cache.write(2, vec![2], 2).unwrap();

        cache.clear().unwrap();

        assert!(cache.read(1).unwrap().is_none());
        assert!(cache.read(2).unwrap().is_none());
        assert!(cache.is_empty().unwrap());
    }

    #[test]
    fn test_unparseable_document_starts_empty() {
        let store = MemoryStore::new();
        store.save("not json at all").unwrap();

        let cache: PageCache<_, u32> = PageCache::with_store(CacheConfig::default(), store);
        assert!(cache.read(1).unwrap().is_none());

        // And writes still work over the top of it
        cache.write(1, vec![4], 1).unwrap();
        assert_eq!(cache.read(1).unwrap().unwrap().records, vec![4]);
    }

    #[test]
    fn test_short_ttl_expires() {
        let config = CacheConfig::new().with_ttl(Duration::ZERO);
        let cache: PageCache<_, u32> = PageCache::in_memory(config);

        cache.write(1, vec![1], 1).unwrap();
        assert!(cache.read(1).unwrap().is_none());
    }

    #[test]
    fn test_pages_are_independent() {
        let cache = cache();
        cache.write(1, vec![1], 2).unwrap();
        cache.write(2, vec![2], 2).unwrap();

        assert_eq!(cache.read(1).unwrap().unwrap().records, vec![1]);
        assert_eq!(cache.read(2).unwrap().unwrap().records, vec![2]);
        assert_eq!(cache.len().unwrap(), 2);
    }
}
