//! In-crate test doubles for the output ports.
//!
//! Shared by the unit tests across this crate. `MemoryFs` mirrors the
//! strictness of the real filesystem adapter (writes need an existing
//! parent directory), so service tests catch missing `create_dir_all`
//! calls the way a real run would.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::application::error::{AppResult, ApplicationError};
use crate::application::ports::output::{
    ConfirmationPrompt, Filesystem, HostRegistry, KeyValueStore, StubSource,
};
use crate::domain::stubs::StubId;
use crate::domain::value_objects::RouteKind;

// ── MemoryFs ─────────────────────────────────────────────────────────────────

/// In-memory filesystem double.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    inner: Arc<Mutex<MemoryFsInner>>,
}

#[derive(Debug, Default)]
struct MemoryFsInner {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file, creating parent directories implicitly.
    pub fn insert_file(&self, path: &str, content: &str) {
        let mut inner = self.inner.lock().unwrap();
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            let mut current = PathBuf::new();
            for component in parent.components() {
                current.push(component);
                inner.dirs.insert(current.clone());
            }
        }
        inner.files.insert(path, content.to_string());
    }

    /// File content at `path`, if present.
    pub fn read(&self, path: &str) -> Option<String> {
        self.inner.lock().unwrap().files.get(Path::new(path)).cloned()
    }

    /// Sorted list of file paths under `prefix`.
    pub fn files_under(&self, prefix: &str) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        inner
            .files
            .keys()
            .filter(|p| p.starts_with(prefix))
            .map(|p| p.display().to_string())
            .collect()
    }

    /// Full state, files and directories, for byte-level comparisons.
    pub fn snapshot(&self) -> (BTreeMap<String, String>, BTreeSet<String>) {
        let inner = self.inner.lock().unwrap();
        (
            inner
                .files
                .iter()
                .map(|(k, v)| (k.display().to_string(), v.clone()))
                .collect(),
            inner.dirs.iter().map(|p| p.display().to_string()).collect(),
        )
    }
}

impl Filesystem for MemoryFs {
    fn create_dir_all(&self, path: &Path) -> AppResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.dirs.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> AppResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.dirs.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".to_string(),
                });
            }
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> AppResult<String> {
        self.inner
            .lock()
            .unwrap()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "no such file".to_string(),
            })
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.files.contains_key(path) || inner.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.lock().unwrap().dirs.contains(path)
    }

    fn remove_file(&self, path: &Path) -> AppResult<()> {
        self.inner
            .lock()
            .unwrap()
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "no such file".to_string(),
            })
    }

    fn remove_dir_all(&self, path: &Path) -> AppResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.dirs.contains(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "no such directory".to_string(),
            });
        }
        inner.dirs.retain(|d| !d.starts_with(path));
        inner.files.retain(|f, _| !f.starts_with(path));
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> AppResult<Vec<PathBuf>> {
        let inner = self.inner.lock().unwrap();
        if !inner.dirs.contains(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "no such directory".to_string(),
            });
        }
        let mut children = BTreeSet::new();
        for file in inner.files.keys() {
            if file.parent() == Some(path) {
                children.insert(file.clone());
            }
        }
        for dir in &inner.dirs {
            if dir.parent() == Some(path) {
                children.insert(dir.clone());
            }
        }
        Ok(children.into_iter().collect())
    }
}

// ── TestStubs ────────────────────────────────────────────────────────────────

/// Stub source with a compact body for every stub.
#[derive(Debug, Clone, Default)]
pub struct TestStubs {
    missing: Vec<StubId>,
}

impl TestStubs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops one stub to exercise the not-found path.
    pub fn without(mut self, id: StubId) -> Self {
        self.missing.push(id);
        self
    }
}

impl StubSource for TestStubs {
    fn fetch(&self, id: StubId) -> AppResult<String> {
        if self.missing.contains(&id) {
            return Err(ApplicationError::StubNotFound(id));
        }
        Ok(test_stub_body(id).to_string())
    }
}

/// Bodies are much smaller than the shipped stubs but keep the same
/// structure: route files carry the import section and the insertion
/// anchor the editor depends on.
fn test_stub_body(id: StubId) -> &'static str {
    match id {
        StubId::Controller => {
            "<?php\n\nnamespace {{EntityNamespace}}\\Http\\Controllers;\n\nclass {{EntityName}}Controller\n{\n}\n"
        }
        StubId::ApiController => {
            "<?php\n\nnamespace {{EntityNamespace}}\\Http\\Controllers\\Api;\n\nclass {{EntityName}}Controller\n{\n}\n"
        }
        StubId::Model => {
            "<?php\n\nnamespace {{EntityNamespace}}\\Models;\n\nclass {{EntityName}}\n{\n    protected $table = '{{EntityNameSnakePlural}}';\n}\n"
        }
        StubId::Migration => {
            "<?php\n\n// create table {{EntityNameSnakePlural}}\n"
        }
        StubId::Request => {
            "<?php\n\nnamespace {{EntityNamespace}}\\Http\\Requests;\n\nclass {{EntityName}}Request\n{\n}\n"
        }
        StubId::Service => {
            "<?php\n\nnamespace {{EntityNamespace}}\\Services;\n\nclass {{EntityName}}Service\n{\n}\n"
        }
        StubId::ServiceProvider => {
            "<?php\n\nnamespace {{EntityNamespace}}\\Providers;\n\nclass {{EntityName}}ServiceProvider\n{\n}\n"
        }
        StubId::WebRoutes => {
            "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\nuse {{EntityNamespace}}\\Http\\Controllers\\{{EntityName}}Controller;\n\nRoute::get('/{{EntityNameKebab}}', [{{EntityName}}Controller::class, 'index'])->name('{{EntityNameKebab}}.index');\n\n// Entity routes will be added here\n"
        }
        StubId::ApiRoutes => {
            "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\nuse {{EntityNamespace}}\\Http\\Controllers\\Api\\{{EntityName}}Controller;\n\nRoute::get('/{{EntityNameKebab}}', [{{EntityName}}Controller::class, 'index'])->name('api.{{EntityNameKebab}}.index');\n\n// Entity routes will be added here\n"
        }
        StubId::View => "<h1>{{EntityName}}</h1>\n",
        StubId::Livewire => {
            "<?php\n\nnamespace {{EntityNamespace}}\\Livewire;\n\nclass {{EntityName}}Component\n{\n}\n"
        }
        StubId::LivewireView => "<div>{{entityName}}</div>\n",
    }
}

// ── MemoryStore ──────────────────────────────────────────────────────────────

/// Key-value store double; `failing()` makes every call error.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<BTreeMap<String, String>>>,
    fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Stored value without going through the port.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.lock().unwrap().get(key).cloned()
    }

    fn check(&self, key: &str) -> AppResult<()> {
        if self.fail {
            return Err(ApplicationError::Store {
                key: key.to_string(),
                reason: "store offline".to_string(),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.check(key)?;
        Ok(self.inner.lock().unwrap().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> AppResult<()> {
        self.check(key)?;
        self.inner
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn forget(&self, key: &str) -> AppResult<()> {
        self.check(key)?;
        self.inner.lock().unwrap().remove(key);
        Ok(())
    }
}

// ── ScriptedPrompt ───────────────────────────────────────────────────────────

/// Confirmation prompt with a fixed answer; records what it was asked.
#[derive(Debug, Clone)]
pub struct ScriptedPrompt {
    answer: bool,
    asked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompt {
    pub fn always(answer: bool) -> Self {
        Self {
            answer,
            asked: Arc::default(),
        }
    }

    /// Every question asked so far, in order.
    pub fn questions(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl ConfirmationPrompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> AppResult<bool> {
        self.asked.lock().unwrap().push(message.to_string());
        Ok(self.answer)
    }
}

// ── RecordingRegistry ────────────────────────────────────────────────────────

/// One host registration, as observed by the double.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    Route {
        module: String,
        file: PathBuf,
        kind: RouteKind,
    },
    ViewNamespace {
        namespace: String,
        dir: PathBuf,
    },
    Migrations {
        dir: PathBuf,
    },
    Component {
        alias: String,
        class: String,
    },
}

/// Host registry double that records every registration.
#[derive(Debug, Clone, Default)]
pub struct RecordingRegistry {
    events: Arc<Mutex<Vec<RegistryEvent>>>,
}

impl RecordingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: RegistryEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl HostRegistry for RecordingRegistry {
    fn register_route_file(&self, module: &str, file: &Path, kind: RouteKind) -> AppResult<()> {
        self.push(RegistryEvent::Route {
            module: module.to_string(),
            file: file.to_path_buf(),
            kind,
        });
        Ok(())
    }

    fn register_view_namespace(&self, namespace: &str, views_dir: &Path) -> AppResult<()> {
        self.push(RegistryEvent::ViewNamespace {
            namespace: namespace.to_string(),
            dir: views_dir.to_path_buf(),
        });
        Ok(())
    }

    fn register_migrations_dir(&self, dir: &Path) -> AppResult<()> {
        self.push(RegistryEvent::Migrations {
            dir: dir.to_path_buf(),
        });
        Ok(())
    }

    fn register_component(&self, alias: &str, class: &str) -> AppResult<()> {
        self.push(RegistryEvent::Component {
            alias: alias.to_string(),
            class: class.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_fs_requires_parents_for_writes() {
        let fs = MemoryFs::new();
        let err = fs.write_file(Path::new("a/b/c.txt"), "x").unwrap_err();
        assert!(matches!(err, ApplicationError::Filesystem { .. }));

        fs.create_dir_all(Path::new("a/b")).unwrap();
        fs.write_file(Path::new("a/b/c.txt"), "x").unwrap();
        assert_eq!(fs.read("a/b/c.txt").unwrap(), "x");
        assert!(fs.is_dir(Path::new("a")));
    }

    #[test]
    fn memory_fs_remove_dir_all_is_scoped() {
        let fs = MemoryFs::new();
        fs.insert_file("a/b/one.txt", "1");
        fs.insert_file("a/bc/two.txt", "2");

        fs.remove_dir_all(Path::new("a/b")).unwrap();

        // "a/bc" shares a string prefix with "a/b" but is a different dir
        assert!(fs.read("a/b/one.txt").is_none());
        assert_eq!(fs.read("a/bc/two.txt").unwrap(), "2");
        assert!(!fs.is_dir(Path::new("a/b")));
        assert!(fs.is_dir(Path::new("a/bc")));
    }

    #[test]
    fn memory_fs_read_dir_lists_immediate_children() {
        let fs = MemoryFs::new();
        fs.insert_file("root/Blog/Models/Blog.php", "x");
        fs.insert_file("root/Shop/Models/Shop.php", "x");
        fs.insert_file("root/notes.txt", "x");

        let children = fs.read_dir(Path::new("root")).unwrap();
        assert_eq!(
            children,
            vec![
                PathBuf::from("root/Blog"),
                PathBuf::from("root/Shop"),
                PathBuf::from("root/notes.txt"),
            ]
        );
    }

    #[test]
    fn every_stub_has_a_test_body() {
        let stubs = TestStubs::new();
        for id in StubId::ALL {
            assert!(!stubs.fetch(id).unwrap().is_empty(), "empty body for {id}");
        }
    }
}
