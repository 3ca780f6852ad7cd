//! Time-boxed page cache persisted as a single JSON blob.
//!
//! This crate caches paginated record lists keyed by page number, with a
//! hard freshness expiry (default 24 hours) and a shared `total_pages`
//! scalar stored alongside the per-page map. The whole structure lives in
//! one serialized document behind a pluggable [`BlobStore`]: every write
//! serializes the entire cache and every read deserializes it, so two
//! logically independent writers can clobber each other (last write wins at
//! the blob level; an accepted property of the single-document layout).
//!
//! # Example
//!
//! ```rust
//! use roster_cache::{CacheConfig, PageCache};
//!
//! # fn main() -> roster_cache::Result<()> {
//! let cache: PageCache<_, String> = PageCache::in_memory(CacheConfig::default());
//! cache.write(1, vec!["george".to_string()], 2)?;
//!
//! let hit = cache.read(1)?.unwrap();
//! assert_eq!(hit.records, ["george"]);
//! assert_eq!(hit.total_pages, Some(2));
//! # Ok(())
//! # }
//! ```

mod cache;
mod config;
mod error;
mod freshness;
mod store;

pub use cache::{CachedPage, PageCache};
pub use config::{CacheConfig, DEFAULT_TTL, TotalPagesPolicy};
pub use error::{Error, Result};
pub use freshness::PageEntry;
pub use store::{BlobStore, JsonFileStore, MemoryStore};
