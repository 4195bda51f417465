//! Application layer for modgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (module/entity lifecycles, the
//!   route editor, the module cache, boot registration)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming or planning rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ArtifactOutcome, BootRegistrar, BootReport, CacheIndex, CacheService, EntityCreation,
    EntityDeletion, EntityRemoval, EntityService, FileSynthesizer, ModuleCreation, ModuleDeletion,
    ModuleService, RemovalOutcome, RouteFileEditor, RouteInsertion, RouteRemoval, StubRenderer,
    SynthesisReport,
};

// Re-export port traits (for adapter implementation)
pub use ports::output::{ConfirmationPrompt, Filesystem, HostRegistry, KeyValueStore, StubSource};

pub use error::{AppResult, ApplicationError};
