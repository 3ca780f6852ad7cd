//! Token storage areas.
//!
//! An area holds at most one raw token string. Two implementations are
//! provided: an in-memory area scoped to the process and a file under an
//! OS directory.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{Error, Result};

/// A storage area holding at most one raw token string.
pub trait TokenArea: Send + Sync {
    /// Read the stored token, if any.
    fn load(&self) -> Result<Option<String>>;

    /// Store a token, replacing any existing one.
    fn save(&self, token: &str) -> Result<()>;

    /// Remove the stored token. Removing an absent token is not an error.
    fn clear(&self) -> Result<()>;
}

/// In-memory area, scoped to the process lifetime.
#[derive(Debug, Default)]
pub struct MemoryArea {
    token: Mutex<Option<String>>,
}

impl MemoryArea {
    /// Create an empty in-memory area.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an area pre-loaded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenArea for MemoryArea {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.lock().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock() = None;
        Ok(())
    }
}

/// File-backed area holding the raw token string at a fixed path.
#[derive(Debug, Clone)]
pub struct FileArea {
    path: PathBuf,
}

impl FileArea {
    /// Create an area backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenArea for FileArea {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Area(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::Area(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(&self.path, token)
            .map_err(|e| Error::Area(format!("failed to write {}: {}", self.path.display(), e)))
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Area(format!(
                "failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
