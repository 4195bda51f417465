//! Module lifecycle - creating and deleting whole modules.
//!
//! Creation flow:
//! 1. Derive the name variants
//! 2. Check preconditions (API capability, target absent)
//! 3. Build the module plan and materialize it
//!
//! Deletion is a confirmed recursive removal of the module directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::error::{AppResult, ApplicationError};
use crate::application::ports::output::{ConfirmationPrompt, Filesystem, StubSource};
use crate::application::services::renderer::StubRenderer;
use crate::application::services::synthesizer::{FileSynthesizer, SynthesisReport};
use crate::application::services::migration_stamp;
use crate::domain::entities::context::StubContext;
use crate::domain::entities::name::NameVariantSet;
use crate::domain::entities::plan::ScaffoldPlan;
use crate::domain::value_objects::{Capability, CapabilitySet, ModuleKind, OverwritePolicy};

/// Result of a successful module creation.
#[derive(Debug)]
pub struct ModuleCreation {
    pub names: NameVariantSet,
    pub kind: ModuleKind,
    pub report: SynthesisReport,
}

/// Result of a delete request; declining the prompt is not an error.
#[derive(Debug)]
pub enum ModuleDeletion {
    Deleted { names: NameVariantSet },
    Cancelled,
}

/// Orchestrates module creation and deletion.
pub struct ModuleService {
    filesystem: Arc<dyn Filesystem>,
    synthesizer: FileSynthesizer,
    renderer: StubRenderer,
    prompt: Arc<dyn ConfirmationPrompt>,
    capabilities: CapabilitySet,
}

impl ModuleService {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        stubs: Arc<dyn StubSource>,
        prompt: Arc<dyn ConfirmationPrompt>,
        capabilities: CapabilitySet,
    ) -> Self {
        Self {
            synthesizer: FileSynthesizer::new(Arc::clone(&filesystem)),
            renderer: StubRenderer::new(stubs),
            filesystem,
            prompt,
            capabilities,
        }
    }

    /// Creates the module skeleton and its seed artifacts under `root`.
    #[instrument(skip_all, fields(root = %root.display(), name, kind = ?kind))]
    pub fn create(&self, root: &Path, name: &str, kind: ModuleKind) -> AppResult<ModuleCreation> {
        let names = NameVariantSet::derive(name)?;

        if kind.is_api() && !self.capabilities.has(Capability::ApiAuth) {
            return Err(ApplicationError::ApiDependencyMissing(
                "no API authentication capability is configured".to_string(),
            ));
        }

        let dir = module_dir(root, &names);
        if self.filesystem.exists(&dir) {
            return Err(ApplicationError::ModuleExists(names.studly().to_string()));
        }

        let plan = ScaffoldPlan::for_module(&names, kind, &self.capabilities, &migration_stamp())?;
        let context = StubContext::for_module(&names);
        let report = self.synthesizer.materialize(
            &dir,
            &plan,
            &self.renderer,
            &context,
            OverwritePolicy::Reject,
        );

        info!(
            module = names.studly(),
            created = report.created_count(),
            failed = report.failed().count(),
            "module created"
        );
        Ok(ModuleCreation {
            names,
            kind,
            report,
        })
    }

    /// Deletes the whole module directory after confirmation.
    #[instrument(skip_all, fields(root = %root.display(), name))]
    pub fn delete(&self, root: &Path, name: &str) -> AppResult<ModuleDeletion> {
        let names = NameVariantSet::derive(name)?;

        let dir = module_dir(root, &names);
        if !self.filesystem.exists(&dir) {
            return Err(ApplicationError::ModuleNotFound(names.studly().to_string()));
        }

        let question = format!(
            "Are you sure you want to delete the module {}? This action cannot be undone.",
            names.studly()
        );
        if !self.prompt.confirm(&question)? {
            info!(module = names.studly(), "deletion cancelled");
            return Ok(ModuleDeletion::Cancelled);
        }

        self.filesystem.remove_dir_all(&dir)?;
        info!(module = names.studly(), "module deleted");
        Ok(ModuleDeletion::Deleted { names })
    }
}

/// Directory a module occupies under the modules root.
pub fn module_dir(root: &Path, names: &NameVariantSet) -> PathBuf {
    root.join(names.studly())
}

/// A module's kind is defined by its directory shape, not a manifest.
pub fn module_kind(filesystem: &dyn Filesystem, module_dir: &Path) -> ModuleKind {
    if filesystem.is_dir(&module_dir.join("Http/Controllers/Api")) {
        ModuleKind::Api
    } else {
        ModuleKind::Plain
    }
}
