//! Infrastructure adapters for modgen.
//!
//! This crate implements the ports defined in `modgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod prompt;
pub mod store;
pub mod stubs;

// Re-export commonly used adapters
pub use filesystem::LocalFilesystem;
pub use prompt::PresetPrompt;
pub use store::JsonFileStore;
pub use stubs::{BuiltinStubs, OverlayStubSource};
