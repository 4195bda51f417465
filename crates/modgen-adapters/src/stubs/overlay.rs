//! Stub override directory layered over the built-in bodies.

use std::path::PathBuf;

use tracing::debug;

use modgen_core::application::{ApplicationError, AppResult, ports::StubSource};
use modgen_core::domain::StubId;

use super::BuiltinStubs;

/// Resolves stubs from `<dir>/<name>.stub` first, falling back to the
/// compiled-in body when no override file exists.
#[derive(Debug, Clone)]
pub struct OverlayStubSource {
    dir: PathBuf,
    builtin: BuiltinStubs,
}

impl OverlayStubSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            builtin: BuiltinStubs::new(),
        }
    }

    fn override_path(&self, id: StubId) -> PathBuf {
        self.dir.join(format!("{}.stub", id.as_str()))
    }
}

impl StubSource for OverlayStubSource {
    fn fetch(&self, id: StubId) -> AppResult<String> {
        let candidate = self.override_path(id);
        if candidate.is_file() {
            debug!(stub = %id, path = %candidate.display(), "using stub override");
            return std::fs::read_to_string(&candidate).map_err(|e| ApplicationError::Filesystem {
                path: candidate,
                reason: format!("failed to read stub override: {e}"),
            });
        }
        self.builtin.fetch(id)
    }
}
