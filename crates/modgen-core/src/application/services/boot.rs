//! Boot-time module registration.
//!
//! At host startup every active module is wired into the framework:
//! route files (middleware picked from the file name), a view namespace,
//! the migrations directory, and component classes when the component
//! capability is on. The module list and per-module paths come from the
//! cache with a live-scan fallback, so registration works identically
//! with a cold cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::error::AppResult;
use crate::application::ports::output::{Filesystem, HostRegistry};
use crate::application::services::cache_service::CacheService;
use crate::domain::value_objects::{Capability, CapabilitySet, RouteKind};

/// Counts of everything registered in one boot pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootReport {
    pub modules: usize,
    pub route_files: usize,
    pub view_namespaces: usize,
    pub migration_dirs: usize,
    pub components: usize,
}

/// Registers every module's surface with the host framework.
pub struct BootRegistrar {
    filesystem: Arc<dyn Filesystem>,
    cache: CacheService,
    registry: Arc<dyn HostRegistry>,
    capabilities: CapabilitySet,
}

impl BootRegistrar {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        cache: CacheService,
        registry: Arc<dyn HostRegistry>,
        capabilities: CapabilitySet,
    ) -> Self {
        Self {
            filesystem,
            cache,
            registry,
            capabilities,
        }
    }

    /// One full registration pass over the modules under `root`.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn register_all(&self, root: &Path) -> AppResult<BootReport> {
        let modules = self.cache.modules(root)?;
        let view_namespaces = self.cache.view_namespaces(root)?;
        let route_paths = self.cache.route_paths(root)?;

        let mut report = BootReport {
            modules: modules.len(),
            ..BootReport::default()
        };

        for module in &modules {
            let module_path = root.join(module);

            let routes_dir = module_path.join("Routes");
            if self.filesystem.is_dir(&routes_dir) {
                let mut files = route_paths.get(module.as_str()).cloned().unwrap_or_default();
                if files.is_empty() {
                    files = self.route_files_in(&routes_dir)?;
                }
                for file in files {
                    let Some(kind) = route_kind_for(&file) else {
                        debug!(file = %file.display(), "unrecognized route file name, skipped");
                        continue;
                    };
                    self.registry.register_route_file(module, &file, kind)?;
                    report.route_files += 1;
                }
            }

            let views_dir = module_path.join("Views");
            if self.filesystem.is_dir(&views_dir) {
                let namespace = module.to_lowercase();
                let dir = view_namespaces
                    .get(&namespace)
                    .cloned()
                    .unwrap_or(views_dir);
                self.registry.register_view_namespace(&namespace, &dir)?;
                report.view_namespaces += 1;
            }

            let migrations_dir = module_path.join("Migrations");
            if self.filesystem.is_dir(&migrations_dir) {
                self.registry.register_migrations_dir(&migrations_dir)?;
                report.migration_dirs += 1;
            }

            if self.capabilities.has(Capability::Livewire) {
                report.components += self.register_components(module, &module_path)?;
            }
        }

        info!(
            modules = report.modules,
            routes = report.route_files,
            components = report.components,
            "boot registration complete"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    fn route_files_in(&self, dir: &Path) -> AppResult<Vec<PathBuf>> {
        let mut files: Vec<PathBuf> = self
            .filesystem
            .read_dir(dir)?
            .into_iter()
            .filter(|p| !self.filesystem.is_dir(p))
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("php"))
            .collect();
        files.sort();
        Ok(files)
    }

    /// Registers each component class under `<module>-<component>`,
    /// both halves lowercased.
    fn register_components(&self, module: &str, module_path: &Path) -> AppResult<usize> {
        let dir = module_path.join("Livewire");
        if !self.filesystem.is_dir(&dir) {
            return Ok(0);
        }
        let mut count = 0;
        let mut files: Vec<PathBuf> = self.filesystem.read_dir(&dir)?;
        files.sort();
        for file in files {
            if self.filesystem.is_dir(&file) {
                continue;
            }
            let Some(stem) = file.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if file.extension().and_then(|e| e.to_str()) != Some("php") {
                continue;
            }
            let class = format!("App\\Modules\\{module}\\Livewire\\{stem}");
            let alias = format!("{}-{}", module.to_lowercase(), stem.to_lowercase());
            self.registry.register_component(&alias, &class)?;
            count += 1;
        }
        Ok(count)
    }
}

/// Middleware kind from a route file name; current shared files and
/// legacy per-entity files both resolve.
pub fn route_kind_for(path: &Path) -> Option<RouteKind> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(".php")?;
    if stem == "web" || stem.starts_with("web-") {
        Some(RouteKind::Web)
    } else if stem == "api" || stem.starts_with("api-") {
        Some(RouteKind::Api)
    } else {
        None
    }
}
