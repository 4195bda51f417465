//! Domain entities and value types.

pub mod common;
pub mod context;
pub mod name;
pub mod plan;
