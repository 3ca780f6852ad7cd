//! Page entries and hard-expiry freshness checks.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One cached page of records.
///
/// Serialized field names match the persisted blob layout
/// (`{ "users": [...], "lastUpdated": millis }`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEntry<V> {
    /// The records on this page.
    #[serde(rename = "users")]
    pub records: Vec<V>,

    /// When this page was fetched, as epoch milliseconds.
    #[serde(rename = "lastUpdated", with = "chrono::serde::ts_milliseconds")]
    pub fetched_at: DateTime<Utc>,
}

impl<V> PageEntry<V> {
    /// Create an entry stamped with the current time.
    pub fn new(records: Vec<V>) -> Self {
        Self {
            records,
            fetched_at: Utc::now(),
        }
    }

    /// Age of this entry relative to `now`.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        (now - self.fetched_at).to_std().unwrap_or(Duration::ZERO)
    }

    /// Whether this entry is still within the freshness window.
    ///
    /// This is a hard expiry: a stale entry is a miss, never revalidated.
    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        self.age(now) < ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn test_new_entry_is_fresh() {
        let entry = PageEntry::new(vec![1u32, 2, 3]);
        assert!(entry.is_fresh(Duration::from_secs(60), Utc::now()));
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let mut entry = PageEntry::new(vec![1u32]);
        entry.fetched_at = Utc::now() - TimeDelta::hours(25);

        assert!(!entry.is_fresh(Duration::from_secs(24 * 60 * 60), Utc::now()));
        assert!(entry.is_fresh(Duration::from_secs(26 * 60 * 60), Utc::now()));
    }

    #[test]
    fn test_future_timestamp_has_zero_age() {
        let mut entry = PageEntry::new(Vec::<u32>::new());
        entry.fetched_at = Utc::now() + TimeDelta::hours(1);

        assert_eq!(entry.age(Utc::now()), Duration::ZERO);
    }

    #[test]
    fn test_serialized_layout() {
        let mut entry = PageEntry::new(vec![7u32]);
        entry.fetched_at = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["users"], serde_json::json!([7]));
        assert_eq!(json["lastUpdated"], serde_json::json!(1_700_000_000_000u64));
    }
}
