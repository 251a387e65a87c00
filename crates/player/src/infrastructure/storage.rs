//! Storage providers
//!
//! [`SessionStorageProvider`] keeps values in memory for the life of the
//! process, which is what browser session storage gives the web client.
//! [`FileStorageProvider`] keeps each key in its own file for desktop use.

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::ports::StorageProvider;

/// In-memory storage scoped to the running process
#[derive(Clone, Default)]
pub struct SessionStorageProvider {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for SessionStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.values.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
            }
            Err(e) => tracing::error!("Failed to acquire write lock for storage: {}", e),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.values.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.values.write() {
            Ok(mut guard) => {
                guard.remove(key);
            }
            Err(e) => tracing::error!("Failed to acquire write lock for storage: {}", e),
        }
    }
}

/// Durable storage for the desktop client, one file per key
///
/// Each slot lives at `<dir>/<key>.json`, so the location slot is
/// `horoscope_location.json` in the platform config directory. Writes go
/// to a sibling temp file first and are renamed into place, so a crash
/// mid-write leaves the previous value readable.
#[derive(Debug, Clone)]
pub struct FileStorageProvider {
    dir: PathBuf,
}

impl Default for FileStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStorageProvider {
    /// Slots under the platform config directory, or `./kundli` when there is none.
    pub fn new() -> Self {
        let dir = ProjectDirs::from("app", "astrokundli", "kundli")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("kundli"));
        Self::at(dir)
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`; `None` for keys that are not plain identifiers.
    pub fn slot_path(&self, key: &str) -> Option<PathBuf> {
        let plain = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !plain {
            tracing::warn!(key, "Refusing storage key that is not a plain identifier");
            return None;
        }
        Some(self.dir.join(format!("{key}.json")))
    }

    fn write_slot(&self, path: &Path, value: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)?;
        fs::rename(&staging, path)
    }
}

impl StorageProvider for FileStorageProvider {
    fn save(&self, key: &str, value: &str) {
        let Some(path) = self.slot_path(key) else {
            return;
        };
        if let Err(e) = self.write_slot(&path, value) {
            tracing::error!(key, path = %path.display(), error = %e, "Failed to write storage slot");
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key, path = %path.display(), error = %e, "Failed to read storage slot");
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        let Some(path) = self.slot_path(key) else {
            return;
        };
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::error!(key, path = %path.display(), error = %e, "Failed to remove storage slot")
            }
        }
    }
}
