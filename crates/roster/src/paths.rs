//! On-disk locations for tokens, the cache blob, and logs.
//!
//! The primary token lives under the state directory, the legacy token
//! under the config directory (migrated away from on startup), and the
//! cache blob under the cache directory.

use std::path::PathBuf;

const APP_DIR: &str = "roster";

fn base(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Primary (session-scoped) token file.
pub fn primary_token_path() -> PathBuf {
    base(dirs::state_dir().or_else(dirs::data_local_dir)).join("token")
}

/// Legacy durable token file, migrated away from on startup.
pub fn legacy_token_path() -> PathBuf {
    base(dirs::config_dir()).join("token")
}

/// Serialized page-cache blob.
pub fn cache_blob_path() -> PathBuf {
    base(dirs::cache_dir()).join("users.json")
}

/// Log directory for the rotating JSON file layer.
pub fn log_dir() -> PathBuf {
    base(dirs::state_dir().or_else(dirs::data_local_dir)).join("logs")
}
