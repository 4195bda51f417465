//! Application ports (traits) for external dependencies.
//!
//! - **Driven (output) ports**: called by the application, implemented by
//!   infrastructure — filesystem, stub source, key-value store, prompt,
//!   host registry.
//! - **Driving (input) ports**: the services themselves; the CLI calls
//!   them directly.

pub mod output;

pub use output::{ConfirmationPrompt, Filesystem, HostRegistry, KeyValueStore, StubSource};
