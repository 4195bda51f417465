//! Key-value store adapters backing the module cache.

mod json_file;

pub use json_file::JsonFileStore;
