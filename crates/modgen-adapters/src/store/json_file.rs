//! JSON-file key-value store.
//!
//! One JSON object per file, keys mapped to opaque string values. The
//! conventional location is `<modules-root>/.modgen/cache.json`; the
//! parent directory is created on first write.
//!
//! Reads of a corrupt file error out so the cache layer falls back to a
//! live scan. Writes replace the corrupt file wholesale, so the next
//! `cache build` heals it without manual cleanup.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use modgen_core::application::{ApplicationError, AppResult, ports::KeyValueStore};

/// Persisted key-value store over a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the conventional location under a modules root.
    pub fn for_root(root: &Path) -> Self {
        Self::new(root.join(".modgen").join("cache.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, String> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(format!("Failed to read cache file: {}", e)),
        };
        serde_json::from_str(&raw).map_err(|e| format!("Cache file is not valid JSON: {}", e))
    }

    /// Lossy read for the write paths. A corrupt file starts over empty
    /// rather than wedging every future write.
    fn read_entries_or_reset(&self) -> BTreeMap<String, String> {
        self.read_entries().unwrap_or_else(|reason| {
            warn!(path = %self.path.display(), reason, "resetting unreadable cache file");
            BTreeMap::new()
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create cache directory: {}", e))?;
        }
        let mut raw = serde_json::to_string_pretty(entries)
            .map_err(|e| format!("Failed to encode cache file: {}", e))?;
        raw.push('\n');
        std::fs::write(&self.path, raw).map_err(|e| format!("Failed to write cache file: {}", e))
    }

    fn store_error(key: &str, reason: String) -> ApplicationError {
        ApplicationError::Store {
            key: key.to_string(),
            reason,
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self
            .read_entries()
            .map_err(|reason| Self::store_error(key, reason))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.read_entries_or_reset();
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
            .map_err(|reason| Self::store_error(key, reason))
    }

    fn forget(&self, key: &str) -> AppResult<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut entries = self.read_entries_or_reset();
        entries.remove(key);
        self.write_entries(&entries)
            .map_err(|reason| Self::store_error(key, reason))
    }
}
