//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a module", "add an entity", or
//! "rebuild the module cache".

pub mod boot;
pub mod cache_service;
pub mod entity_service;
pub mod module_service;
pub mod renderer;
pub mod route_editor;
pub mod synthesizer;

pub use boot::{BootRegistrar, BootReport};
pub use cache_service::{CacheIndex, CacheService};
pub use entity_service::{EntityCreation, EntityDeletion, EntityRemoval, EntityService};
pub use module_service::{ModuleCreation, ModuleDeletion, ModuleService};
pub use renderer::StubRenderer;
pub use route_editor::{ROUTE_ANCHOR, RouteFileEditor, RouteInsertion, RouteRemoval};
pub use synthesizer::{
    ArtifactOutcome, FileSynthesizer, RemovalOutcome, RemovalReport, SynthesisReport,
};

/// Timestamp prefix for migration file names, `YYYY_MM_DD_HHMMSS` in
/// local time. The only non-deterministic input to a scaffold plan.
pub fn migration_stamp() -> String {
    chrono::Local::now().format("%Y_%m_%d_%H%M%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migration_stamp_has_the_expected_shape() {
        let stamp = migration_stamp();
        // e.g. 2026_08_25_143022
        assert_eq!(stamp.len(), 17);
        let bytes = stamp.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            match i {
                4 | 7 | 10 => assert_eq!(*b, b'_', "separator at {i} in {stamp}"),
                _ => assert!(b.is_ascii_digit(), "digit at {i} in {stamp}"),
            }
        }
    }
}
