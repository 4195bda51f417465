//! Stub sources.
//!
//! Stub bodies are resolved in this priority order, per stub:
//!
//! 1. **Override directory** — `<stubs-dir>/<name>.stub`, where `<name>` is
//!    the stub's stable name (`controller.stub`, `api-route.stub`, ...).
//!    Configured via `stubs_dir` in `modgen.toml`.
//! 2. **Built-in body** — compiled into the binary.
//!
//! A missing override falls through to the built-in body; an override file
//! that exists but cannot be read is an error, not a fallthrough. Overrides
//! are resolved per stub, so a directory holding a single `model.stub`
//! customizes models and nothing else.

mod builtin;
mod overlay;

pub use builtin::BuiltinStubs;
pub use overlay::OverlayStubSource;
