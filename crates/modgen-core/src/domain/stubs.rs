//! Stub registry.
//!
//! Single source of truth for every stub the generator knows: its scope,
//! its filters, and where its rendered output lands. Plan assembly, stub
//! lookup, and entity deletion all derive from this table, so the set of
//! artifacts can never drift between create and delete paths.
//!
//! # Adding a new stub
//!
//! 1. Add a [`StubId`] variant (and its `as_str` name).
//! 2. Add its destination arm to [`StubId::destination`].
//! 3. Add one [`StubDef`] entry to [`STUB_REGISTRY`].
//! 4. Give it a default body in the adapters crate.
//!
//! The registry integrity test at the bottom enforces the table's
//! invariants.

use std::fmt;

use crate::domain::entities::name::NameVariantSet;
use crate::domain::value_objects::Capability;

// ── Stub identifiers ─────────────────────────────────────────────────────────

/// Identifier of one stub template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubId {
    Controller,
    ApiController,
    Model,
    Migration,
    Request,
    Service,
    ServiceProvider,
    WebRoutes,
    ApiRoutes,
    View,
    Livewire,
    LivewireView,
}

impl StubId {
    pub const ALL: [StubId; 12] = [
        StubId::Controller,
        StubId::ApiController,
        StubId::Model,
        StubId::Migration,
        StubId::Request,
        StubId::Service,
        StubId::ServiceProvider,
        StubId::WebRoutes,
        StubId::ApiRoutes,
        StubId::View,
        StubId::Livewire,
        StubId::LivewireView,
    ];

    /// Stable name, used for stub-file overrides (`<name>.stub`) and
    /// messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::ApiController => "api-controller",
            Self::Model => "model",
            Self::Migration => "migration",
            Self::Request => "request",
            Self::Service => "service",
            Self::ServiceProvider => "service-provider",
            Self::WebRoutes => "route",
            Self::ApiRoutes => "api-route",
            Self::View => "view",
            Self::Livewire => "livewire",
            Self::LivewireView => "view-livewire",
        }
    }

    /// Destination of this stub's rendered output, relative to the module
    /// root.
    ///
    /// `stamp` is the migration filename timestamp — the planner's only
    /// non-pure input, supplied by the caller.
    pub fn destination(self, names: &NameVariantSet, stamp: &str) -> String {
        match self {
            Self::Controller => format!("Http/Controllers/{}Controller.php", names.studly()),
            Self::ApiController => {
                format!("Http/Controllers/Api/{}Controller.php", names.studly())
            }
            Self::Model => format!("Models/{}.php", names.studly()),
            Self::Migration => format!(
                "Migrations/{stamp}_create_{}_table.php",
                names.snake_plural()
            ),
            Self::Request => format!("Http/Requests/{}Request.php", names.studly()),
            Self::Service => format!("Services/{}Service.php", names.studly()),
            Self::ServiceProvider => {
                format!("Providers/{}ServiceProvider.php", names.studly())
            }
            Self::WebRoutes => "Routes/web.php".to_string(),
            Self::ApiRoutes => "Routes/api.php".to_string(),
            Self::View => format!("Views/{}/index.blade.php", names.kebab_plural()),
            Self::Livewire => format!("Livewire/{}Component.php", names.studly()),
            Self::LivewireView => {
                format!("Views/livewire/{}-component.blade.php", names.kebab())
            }
        }
    }
}

impl fmt::Display for StubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Registry ─────────────────────────────────────────────────────────────────

/// When a stub is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubScope {
    /// Only while creating a module (providers, shared route files).
    Module,
    /// For every entity seed — entity creation, and module creation
    /// seeding the module's own entity.
    Entity,
}

/// Everything the planner needs to know about one stub.
#[derive(Debug, Clone, Copy)]
pub struct StubDef {
    pub id: StubId,
    pub scope: StubScope,
    /// Planned only for API modules / `--api` entities.
    pub api_only: bool,
    /// Planned only when this capability was resolved at startup.
    pub requires: Option<Capability>,
}

/// The full stub table, in write order.
pub static STUB_REGISTRY: &[StubDef] = &[
    StubDef {
        id: StubId::Controller,
        scope: StubScope::Entity,
        api_only: false,
        requires: None,
    },
    StubDef {
        id: StubId::ApiController,
        scope: StubScope::Entity,
        api_only: true,
        requires: None,
    },
    StubDef {
        id: StubId::Model,
        scope: StubScope::Entity,
        api_only: false,
        requires: None,
    },
    StubDef {
        id: StubId::Migration,
        scope: StubScope::Entity,
        api_only: false,
        requires: None,
    },
    StubDef {
        id: StubId::Request,
        scope: StubScope::Entity,
        api_only: false,
        requires: None,
    },
    StubDef {
        id: StubId::Service,
        scope: StubScope::Entity,
        api_only: false,
        requires: None,
    },
    StubDef {
        id: StubId::ServiceProvider,
        scope: StubScope::Module,
        api_only: false,
        requires: None,
    },
    StubDef {
        id: StubId::WebRoutes,
        scope: StubScope::Module,
        api_only: false,
        requires: None,
    },
    StubDef {
        id: StubId::ApiRoutes,
        scope: StubScope::Module,
        api_only: true,
        requires: None,
    },
    StubDef {
        id: StubId::View,
        scope: StubScope::Entity,
        api_only: false,
        requires: None,
    },
    StubDef {
        id: StubId::Livewire,
        scope: StubScope::Entity,
        api_only: false,
        requires: Some(Capability::Livewire),
    },
    StubDef {
        id: StubId::LivewireView,
        scope: StubScope::Entity,
        api_only: false,
        requires: Some(Capability::Livewire),
    },
];
