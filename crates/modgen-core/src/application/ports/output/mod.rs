//! Driven (output) ports.
//!
//! Interfaces the application needs from the outside world. Adapters in
//! `modgen-adapters` implement them for production; tests use the
//! in-crate doubles from `crate::testing`. The original tool reached for
//! framework facades here — filesystem, cache, console prompt — which is
//! exactly what made it untestable; each facade became a port.

use std::path::{Path, PathBuf};

use crate::application::error::AppResult;
use crate::domain::stubs::StubId;
use crate::domain::value_objects::RouteKind;

/// Filesystem access for scaffolding, editing, and scanning.
///
/// `read_dir` returns immediate children only — every scan in this
/// domain is single-level.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    fn create_dir_all(&self, path: &Path) -> AppResult<()>;
    fn write_file(&self, path: &Path, content: &str) -> AppResult<()>;
    fn read_to_string(&self, path: &Path) -> AppResult<String>;
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn remove_file(&self, path: &Path) -> AppResult<()>;
    fn remove_dir_all(&self, path: &Path) -> AppResult<()>;
    fn read_dir(&self, path: &Path) -> AppResult<Vec<PathBuf>>;
}

/// Source of stub template bodies.
pub trait StubSource: Send + Sync {
    /// Fetches the literal stub text, or
    /// [`StubNotFound`](crate::application::error::ApplicationError::StubNotFound).
    fn fetch(&self, id: StubId) -> AppResult<String>;
}

/// Persisted key-value store backing the module cache.
///
/// Values are opaque strings; the cache layer owns serialization.
/// Entries live until explicitly forgotten.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn put(&self, key: &str, value: &str) -> AppResult<()>;
    fn forget(&self, key: &str) -> AppResult<()>;
}

/// Yes/no confirmation for destructive operations.
pub trait ConfirmationPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> AppResult<bool>;
}

/// Host-framework registration surface consumed at boot.
pub trait HostRegistry: Send + Sync {
    fn register_route_file(&self, module: &str, file: &Path, kind: RouteKind) -> AppResult<()>;
    fn register_view_namespace(&self, namespace: &str, views_dir: &Path) -> AppResult<()>;
    fn register_migrations_dir(&self, dir: &Path) -> AppResult<()>;
    fn register_component(&self, alias: &str, class: &str) -> AppResult<()>;
}
