//! Blob stores: where the serialized cache document lives.
//!
//! The cache structure is persisted as a single document under one key, so
//! the store interface is deliberately coarse: load the whole thing, save
//! the whole thing, or drop it.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{Error, Result};

/// Storage backend for the serialized cache document.
pub trait BlobStore: Send + Sync {
    /// Load the document, if one exists.
    fn load(&self) -> Result<Option<String>>;

    /// Overwrite the document.
    fn save(&self, blob: &str) -> Result<()>;

    /// Delete the document. Deleting an absent document is not an error.
    fn clear(&self) -> Result<()>;
}

/// In-memory store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.blob.lock().clone())
    }

    fn save(&self, blob: &str) -> Result<()> {
        *self.blob.lock() = Some(blob.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.blob.lock() = None;
        Ok(())
    }
}

/// File-backed store holding the document at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlobStore for JsonFileStore {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Store(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn save(&self, blob: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::Store(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(&self.path, blob).map_err(|e| {
            Error::Store(format!("failed to write {}: {}", self.path.display(), e))
        })
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Store(format!(
                "failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
