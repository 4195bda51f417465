//! The persisted module index.
//!
//! Three derived values live in the injected key-value store: the module
//! list, the view-namespace map, and the route-file map. They are built
//! and dropped together. Readers treat the store as an optimization
//! only: absent or unreadable entries fall back to a live scan, so a
//! cold or corrupted cache can never change behavior, only speed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::application::error::{AppResult, ApplicationError};
use crate::application::ports::output::{Filesystem, KeyValueStore};

/// Store keys for the three cache entries.
pub mod keys {
    pub const MODULES: &str = "modgen.modules";
    pub const VIEW_NAMESPACES: &str = "modgen.view-namespaces";
    pub const ROUTE_PATHS: &str = "modgen.route-paths";

    pub const ALL: [&str; 3] = [MODULES, VIEW_NAMESPACES, ROUTE_PATHS];
}

/// One full scan result over the modules root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheIndex {
    /// Module names in sorted order.
    pub modules: Vec<String>,
    /// Lowercased module name to its Views directory.
    pub view_namespaces: BTreeMap<String, PathBuf>,
    /// Module name to its route files, sorted.
    pub route_paths: BTreeMap<String, Vec<PathBuf>>,
}

/// Builds, persists, and serves the module index.
#[derive(Clone)]
pub struct CacheService {
    filesystem: Arc<dyn Filesystem>,
    store: Arc<dyn KeyValueStore>,
}

impl CacheService {
    pub fn new(filesystem: Arc<dyn Filesystem>, store: Arc<dyn KeyValueStore>) -> Self {
        Self { filesystem, store }
    }

    /// Live scan of the modules root. A missing root is an empty index,
    /// not an error. Hidden directories are never modules.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn scan(&self, root: &Path) -> AppResult<CacheIndex> {
        let mut index = CacheIndex::default();
        if !self.filesystem.is_dir(root) {
            debug!("modules root missing, empty index");
            return Ok(index);
        }

        let mut dirs: Vec<(String, PathBuf)> = Vec::new();
        for path in self.filesystem.read_dir(root)? {
            if !self.filesystem.is_dir(&path) {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            dirs.push((name.to_string(), path.clone()));
        }
        dirs.sort();

        for (name, path) in dirs {
            let views = path.join("Views");
            if self.filesystem.is_dir(&views) {
                index.view_namespaces.insert(name.to_lowercase(), views);
            }

            let routes = path.join("Routes");
            if self.filesystem.is_dir(&routes) {
                let mut files: Vec<PathBuf> = self
                    .filesystem
                    .read_dir(&routes)?
                    .into_iter()
                    .filter(|p| !self.filesystem.is_dir(p))
                    .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("php"))
                    .collect();
                files.sort();
                index.route_paths.insert(name.clone(), files);
            }

            index.modules.push(name);
        }

        debug!(modules = index.modules.len(), "scan complete");
        Ok(index)
    }

    /// Scans and persists all three entries.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn rebuild(&self, root: &Path) -> AppResult<CacheIndex> {
        let index = self.scan(root)?;
        self.put_json(keys::MODULES, &index.modules)?;
        self.put_json(keys::VIEW_NAMESPACES, &index.view_namespaces)?;
        self.put_json(keys::ROUTE_PATHS, &index.route_paths)?;
        debug!(modules = index.modules.len(), "cache rebuilt");
        Ok(index)
    }

    /// Forgets all three entries. Forgetting an absent key is fine.
    #[instrument(skip_all)]
    pub fn invalidate(&self) -> AppResult<()> {
        for key in keys::ALL {
            self.store.forget(key)?;
        }
        debug!("cache invalidated");
        Ok(())
    }

    /// Module list, cache-first with scan fallback.
    pub fn modules(&self, root: &Path) -> AppResult<Vec<String>> {
        if let Some(modules) = self.cached(keys::MODULES) {
            return Ok(modules);
        }
        Ok(self.scan(root)?.modules)
    }

    /// View-namespace map, cache-first with scan fallback.
    pub fn view_namespaces(&self, root: &Path) -> AppResult<BTreeMap<String, PathBuf>> {
        if let Some(map) = self.cached(keys::VIEW_NAMESPACES) {
            return Ok(map);
        }
        Ok(self.scan(root)?.view_namespaces)
    }

    /// Route-file map, cache-first with scan fallback.
    pub fn route_paths(&self, root: &Path) -> AppResult<BTreeMap<String, Vec<PathBuf>>> {
        if let Some(map) = self.cached(keys::ROUTE_PATHS) {
            return Ok(map);
        }
        Ok(self.scan(root)?.route_paths)
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    /// Cached value for `key`, or `None` when missing, unreadable, or
    /// the store itself fails. Read paths never surface store trouble.
    fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(key, error = %e, "unreadable cache entry, falling back to scan");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key, error = %e, "cache read failed, falling back to scan");
                None
            }
        }
    }

    fn put_json<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value).map_err(|e| ApplicationError::Store {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.store.put(key, &raw)
    }
}
