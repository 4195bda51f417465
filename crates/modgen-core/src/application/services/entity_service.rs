//! Entity lifecycle - adding a resource to a module and taking it out.
//!
//! Creation flow:
//! 1. Derive name variants for module and entity
//! 2. Check preconditions (module present, kind match, entity absent)
//! 3. Materialize the entity plan
//! 4. Register the route line(s) in the shared route file(s)
//!
//! Deletion reverses it best-effort across every layout the tool has
//! ever generated, including legacy per-entity route files.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::application::error::{AppResult, ApplicationError};
use crate::application::ports::output::{ConfirmationPrompt, Filesystem, StubSource};
use crate::application::services::migration_stamp;
use crate::application::services::module_service::{module_dir, module_kind};
use crate::application::services::renderer::StubRenderer;
use crate::application::services::route_editor::{
    RouteFileEditor, RouteInsertion, RouteRemoval,
};
use crate::application::services::synthesizer::{FileSynthesizer, RemovalReport, SynthesisReport};
use crate::domain::entities::common::RelativePath;
use crate::domain::entities::context::StubContext;
use crate::domain::entities::name::NameVariantSet;
use crate::domain::entities::plan::ScaffoldPlan;
use crate::domain::value_objects::{CapabilitySet, ModuleKind, OverwritePolicy, RouteKind};

/// Result of a successful entity creation.
#[derive(Debug)]
pub struct EntityCreation {
    pub module: NameVariantSet,
    pub entity: NameVariantSet,
    pub report: SynthesisReport,
    pub web_route: RouteInsertion,
    pub api_route: Option<RouteInsertion>,
}

/// Everything a confirmed delete touched.
#[derive(Debug)]
pub struct EntityRemoval {
    pub module: NameVariantSet,
    pub entity: NameVariantSet,
    pub files: RemovalReport,
    pub web_route: RouteRemoval,
    pub api_route: RouteRemoval,
}

impl EntityRemoval {
    /// True when no artifact and no route line existed for the entity.
    pub fn nothing_found(&self) -> bool {
        self.files.removed_count() == 0
            && self.web_route != RouteRemoval::Removed
            && self.api_route != RouteRemoval::Removed
    }
}

/// Result of a delete request; declining the prompt is not an error.
#[derive(Debug)]
pub enum EntityDeletion {
    Completed(EntityRemoval),
    Cancelled,
}

/// Orchestrates entity creation and deletion inside one module.
pub struct EntityService {
    filesystem: Arc<dyn Filesystem>,
    synthesizer: FileSynthesizer,
    renderer: StubRenderer,
    route_editor: RouteFileEditor,
    prompt: Arc<dyn ConfirmationPrompt>,
    capabilities: CapabilitySet,
}

impl EntityService {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        stubs: Arc<dyn StubSource>,
        prompt: Arc<dyn ConfirmationPrompt>,
        capabilities: CapabilitySet,
    ) -> Self {
        Self {
            synthesizer: FileSynthesizer::new(Arc::clone(&filesystem)),
            renderer: StubRenderer::new(stubs),
            route_editor: RouteFileEditor::new(Arc::clone(&filesystem)),
            filesystem,
            prompt,
            capabilities,
        }
    }

    /// Adds an entity to an existing module.
    ///
    /// All preconditions are checked before the first write, so a
    /// rejected request leaves the module untouched.
    #[instrument(skip_all, fields(root = %root.display(), module, entity, api))]
    pub fn create(
        &self,
        root: &Path,
        module: &str,
        entity: &str,
        api: bool,
    ) -> AppResult<EntityCreation> {
        let module_names = NameVariantSet::derive(module)?;
        let entity_names = NameVariantSet::derive(entity)?;

        let dir = module_dir(root, &module_names);
        if !self.filesystem.exists(&dir) {
            return Err(ApplicationError::ModuleNotFound(
                module_names.studly().to_string(),
            ));
        }
        if api && module_kind(self.filesystem.as_ref(), &dir) != ModuleKind::Api {
            return Err(ApplicationError::KindMismatch(
                module_names.studly().to_string(),
            ));
        }
        let model = dir.join(format!("Models/{}.php", entity_names.studly()));
        if self.filesystem.exists(&model) {
            return Err(ApplicationError::EntityExists {
                module: module_names.studly().to_string(),
                entity: entity_names.studly().to_string(),
            });
        }

        let plan =
            ScaffoldPlan::for_entity(&entity_names, api, &self.capabilities, &migration_stamp())?;
        let context = StubContext::for_entity(&entity_names, &module_names);
        let report = self.synthesizer.materialize(
            &dir,
            &plan,
            &self.renderer,
            &context,
            OverwritePolicy::Reject,
        );

        let ns = module_names.namespace_path();
        let web_route = self.route_editor.insert(
            &dir.join("Routes").join(RouteKind::Web.file_name()),
            &entity_names,
            ns,
            RouteKind::Web,
        )?;
        let api_route = if api {
            Some(self.route_editor.insert(
                &dir.join("Routes").join(RouteKind::Api.file_name()),
                &entity_names,
                ns,
                RouteKind::Api,
            )?)
        } else {
            None
        };

        info!(
            module = module_names.studly(),
            entity = entity_names.studly(),
            created = report.created_count(),
            "entity created"
        );
        Ok(EntityCreation {
            module: module_names,
            entity: entity_names,
            report,
            web_route,
            api_route,
        })
    }

    /// Removes an entity's artifacts and route registrations after
    /// confirmation.
    ///
    /// Every conventional location is tried; absence of any single
    /// artifact is not an error. Reports a distinct nothing-found
    /// outcome when the entity left no trace at all.
    #[instrument(skip_all, fields(root = %root.display(), module, entity))]
    pub fn delete(&self, root: &Path, module: &str, entity: &str) -> AppResult<EntityDeletion> {
        let module_names = NameVariantSet::derive(module)?;
        let entity_names = NameVariantSet::derive(entity)?;

        let dir = module_dir(root, &module_names);
        if !self.filesystem.exists(&dir) {
            return Err(ApplicationError::ModuleNotFound(
                module_names.studly().to_string(),
            ));
        }

        let question = format!(
            "Are you sure you want to delete the entity {} from module {}? This action cannot be undone.",
            entity_names.studly(),
            module_names.studly()
        );
        if !self.prompt.confirm(&question)? {
            info!(entity = entity_names.studly(), "deletion cancelled");
            return Ok(EntityDeletion::Cancelled);
        }

        let mut targets = entity_artifacts(&entity_names);
        targets.extend(self.matching_migrations(&dir, &entity_names)?);
        let files = self.synthesizer.remove(&dir, &targets);

        let ns = module_names.namespace_path();
        let web_route = self.route_editor.remove(
            &dir.join("Routes").join(RouteKind::Web.file_name()),
            &entity_names,
            ns,
            RouteKind::Web,
        )?;
        let api_route = self.route_editor.remove(
            &dir.join("Routes").join(RouteKind::Api.file_name()),
            &entity_names,
            ns,
            RouteKind::Api,
        )?;

        let removal = EntityRemoval {
            module: module_names,
            entity: entity_names,
            files,
            web_route,
            api_route,
        };
        if removal.nothing_found() {
            warn!(entity = removal.entity.studly(), "nothing found to delete");
        } else {
            info!(
                entity = removal.entity.studly(),
                removed = removal.files.removed_count(),
                "entity deleted"
            );
        }
        Ok(EntityDeletion::Completed(removal))
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    /// Migration files created for this entity, matched by the exact
    /// `create_<snake_plural>_table` tail so unrelated tables survive.
    fn matching_migrations(
        &self,
        module_dir: &Path,
        names: &NameVariantSet,
    ) -> AppResult<Vec<RelativePath>> {
        let migrations = module_dir.join("Migrations");
        if !self.filesystem.is_dir(&migrations) {
            return Ok(Vec::new());
        }
        let suffix = format!("_create_{}_table.php", names.snake_plural());
        let mut found = Vec::new();
        for path in self.filesystem.read_dir(&migrations)? {
            if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
                if file_name.ends_with(&suffix) {
                    found.push(RelativePath::try_new(format!("Migrations/{file_name}"))?);
                }
            }
        }
        Ok(found)
    }
}

/// Every fixed location an entity's artifacts may occupy, current and
/// legacy layouts both.
fn entity_artifacts(names: &NameVariantSet) -> Vec<RelativePath> {
    let studly = names.studly();
    let kebab = names.kebab();
    [
        format!("Models/{studly}.php"),
        format!("Http/Controllers/{studly}Controller.php"),
        format!("Http/Controllers/Api/{studly}Controller.php"),
        format!("Http/Requests/{studly}Request.php"),
        format!("Services/{studly}Service.php"),
        format!("Livewire/{studly}Component.php"),
        format!("Views/livewire/{kebab}-component.blade.php"),
        format!("Views/{}", names.kebab_plural()),
        // pre-plural view folders and per-entity route files
        format!("Views/{kebab}"),
        format!("Routes/web-{kebab}.php"),
        format!("Routes/api-{kebab}.php"),
    ]
    .into_iter()
    .map(RelativePath::new)
    .collect()
}
