//! Core domain layer.
//!
//! Pure business logic: name derivation, the stub registry, scaffold
//! plans, and placeholder substitution. No I/O, no clock, no external
//! calls — everything effectful goes through the ports defined in the
//! application layer.

pub mod entities;
pub mod error;
pub mod stubs;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    context::StubContext,
    name::NameVariantSet,
    plan::{PlanEntry, ScaffoldPlan},
};

pub use error::{DomainError, ErrorCategory};

pub use stubs::{STUB_REGISTRY, StubDef, StubId, StubScope};

pub use value_objects::{Capability, CapabilitySet, ModuleKind, OverwritePolicy, RouteKind};
