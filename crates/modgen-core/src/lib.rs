//! Modgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the modgen
//! module scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           modgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ModuleService, EntityService,         │
//! │   CacheService, BootRegistrar)          │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, StubSource, Store,        │
//! │   Prompt, HostRegistry)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    modgen-adapters (Infrastructure)     │
//! │  (LocalFilesystem, BuiltinStubs,        │
//! │   JsonFileStore, etc)                   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (NameVariantSet, ScaffoldPlan,         │
//! │   StubContext, the stub registry)       │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! The domain layer is pure and usable on its own:
//!
//! ```rust
//! use modgen_core::domain::NameVariantSet;
//!
//! let names = NameVariantSet::derive("blog post").unwrap();
//! assert_eq!(names.studly(), "BlogPost");
//! assert_eq!(names.kebab_plural(), "blog-posts");
//! assert_eq!(names.namespace_path(), "App\\Modules\\BlogPost");
//! ```
//!
//! The services are constructed with injected adapters:
//!
//! ```rust,ignore
//! let service = ModuleService::new(filesystem, stubs, prompt, CapabilitySet::empty());
//! service.create(Path::new("modules"), "blog_post", ModuleKind::Plain)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Shared test doubles for the port traits
#[cfg(test)]
pub(crate) mod testing;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BootRegistrar, BootReport, CacheService, EntityDeletion, EntityService, ModuleDeletion,
        ModuleService,
        ports::output::{ConfirmationPrompt, Filesystem, HostRegistry, KeyValueStore, StubSource},
    };
    pub use crate::domain::{
        Capability, CapabilitySet, ModuleKind, NameVariantSet, OverwritePolicy, RelativePath,
        RouteKind, ScaffoldPlan, StubContext, StubId,
    };
    pub use crate::error::{ModgenError, ModgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
