//! Scaffold plans.

use std::collections::HashSet;

use crate::domain::entities::common::RelativePath;
use crate::domain::entities::name::NameVariantSet;
use crate::domain::error::DomainError;
use crate::domain::stubs::{STUB_REGISTRY, StubId, StubScope};
use crate::domain::value_objects::{CapabilitySet, ModuleKind};

/// Directory skeleton every module carries.
const MODULE_FOLDERS: &[&str] = &[
    "Http/Controllers",
    "Http/Requests",
    "Models",
    "Services",
    "Providers",
    "Routes",
    "Migrations",
    "Views",
];

/// One template rendering the plan calls for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub stub: StubId,
    pub dest: RelativePath,
}

/// The ordered recipe for one generation run: directories to ensure, then
/// stub renderings to write. Deterministic given its inputs — the
/// migration `stamp` is passed in, never read from a clock here.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldPlan {
    folders: Vec<RelativePath>,
    entries: Vec<PlanEntry>,
}

impl ScaffoldPlan {
    /// Plan for creating a whole module: the directory skeleton, the
    /// module-only stubs, and the module's own entity seed.
    pub fn for_module(
        names: &NameVariantSet,
        kind: ModuleKind,
        capabilities: &CapabilitySet,
        stamp: &str,
    ) -> Result<Self, DomainError> {
        let mut folders: Vec<RelativePath> = MODULE_FOLDERS
            .iter()
            .map(|f| RelativePath::try_new(*f))
            .collect::<Result<_, _>>()?;
        if kind.is_api() {
            folders.push(RelativePath::try_new("Http/Controllers/Api")?);
        }
        if capabilities.has(crate::domain::value_objects::Capability::Livewire) {
            folders.push(RelativePath::try_new("Livewire")?);
        }

        let entries = Self::select(names, stamp, kind.is_api(), capabilities, None)?;
        let plan = Self { folders, entries };
        plan.validate()?;
        Ok(plan)
    }

    /// Plan for adding one entity to an existing module. No skeleton —
    /// missing parents are created per file.
    pub fn for_entity(
        names: &NameVariantSet,
        api: bool,
        capabilities: &CapabilitySet,
        stamp: &str,
    ) -> Result<Self, DomainError> {
        let entries = Self::select(names, stamp, api, capabilities, Some(StubScope::Entity))?;
        let plan = Self {
            folders: Vec::new(),
            entries,
        };
        plan.validate()?;
        Ok(plan)
    }

    fn select(
        names: &NameVariantSet,
        stamp: &str,
        api: bool,
        capabilities: &CapabilitySet,
        only_scope: Option<StubScope>,
    ) -> Result<Vec<PlanEntry>, DomainError> {
        STUB_REGISTRY
            .iter()
            .filter(|def| only_scope.is_none_or(|scope| def.scope == scope))
            .filter(|def| !def.api_only || api)
            .filter(|def| def.requires.is_none_or(|cap| capabilities.has(cap)))
            .map(|def| {
                Ok(PlanEntry {
                    stub: def.id,
                    dest: RelativePath::try_new(def.id.destination(names, stamp))?,
                })
            })
            .collect()
    }

    fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(&entry.dest) {
                return Err(DomainError::DuplicatePlanEntry(entry.dest.to_string()));
            }
        }
        Ok(())
    }

    pub fn folders(&self) -> &[RelativePath] {
        &self.folders
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
