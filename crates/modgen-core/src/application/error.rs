//! Application layer errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::{DomainError, ErrorCategory};
use crate::domain::stubs::StubId;

/// Result alias used throughout the application layer.
pub type AppResult<T> = Result<T, ApplicationError>;

/// Errors raised while orchestrating use cases.
#[derive(Debug, Error)]
pub enum ApplicationError {
    // ── Domain passthrough ───────────────────────────────────────────────
    #[error(transparent)]
    Domain(#[from] DomainError),

    // ── Lifecycle preconditions ──────────────────────────────────────────

    /// Creating a module that is already on disk.
    #[error("module '{0}' already exists")]
    ModuleExists(String),

    /// Operating on a module that is not on disk.
    #[error("module '{0}' does not exist")]
    ModuleNotFound(String),

    /// Creating an entity whose model file already exists.
    #[error("entity '{entity}' already exists in module '{module}'")]
    EntityExists { module: String, entity: String },

    /// `--api` requested against a module without API support.
    #[error("module '{0}' is not an API module (no Http/Controllers/Api directory)")]
    KindMismatch(String),

    /// API artifacts requested but the API capability is not enabled.
    #[error("API support is not enabled: {0}")]
    ApiDependencyMissing(String),

    // ── Template resolution ──────────────────────────────────────────────

    /// No builtin body or override file for the stub.
    #[error("no source for stub '{0}'")]
    StubNotFound(StubId),

    // ── Infrastructure ───────────────────────────────────────────────────

    /// A filesystem port operation failed.
    #[error("filesystem operation failed on '{path}': {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The key-value store behind the module cache failed.
    #[error("cache store failure for key '{key}': {reason}")]
    Store { key: String, reason: String },

    /// The confirmation prompt could not be read.
    #[error("confirmation prompt failed: {0}")]
    Prompt(String),

    /// The host registry rejected a boot-time registration.
    #[error("host registration failed: {0}")]
    Registration(String),
}

impl ApplicationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::ModuleExists(_) | Self::EntityExists { .. } => ErrorCategory::Conflict,
            Self::ModuleNotFound(_) => ErrorCategory::NotFound,
            Self::KindMismatch(_) | Self::ApiDependencyMissing(_) => ErrorCategory::Compatibility,
            Self::StubNotFound(_) => ErrorCategory::NotFound,
            Self::Filesystem { .. }
            | Self::Store { .. }
            | Self::Prompt(_)
            | Self::Registration(_) => ErrorCategory::Internal,
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::ModuleExists(name) => vec![
                format!("Pick a different name, or delete it first: modgen module delete {name}"),
            ],
            Self::ModuleNotFound(name) => vec![
                format!("Create it first: modgen module create {name}"),
                "Check --root points at your modules directory".to_string(),
            ],
            Self::EntityExists { module, entity } => vec![format!(
                "Delete it first: modgen entity delete {module} {entity}"
            )],
            Self::KindMismatch(name) => vec![
                format!("Recreate the module with API support: modgen module create {name} --api"),
                "Or drop the --api flag".to_string(),
            ],
            Self::ApiDependencyMissing(_) => vec![
                "Enable it in modgen.toml: [capabilities] api_auth = true".to_string(),
            ],
            Self::StubNotFound(id) => vec![format!(
                "Provide {}.stub in your stub override directory or remove the override",
                id.as_str()
            )],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_the_taxonomy() {
        assert_eq!(
            ApplicationError::ModuleExists("Blog".into()).category(),
            ErrorCategory::Conflict
        );
        assert_eq!(
            ApplicationError::ModuleNotFound("Blog".into()).category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            ApplicationError::KindMismatch("Blog".into()).category(),
            ErrorCategory::Compatibility
        );
        assert_eq!(
            ApplicationError::Filesystem {
                path: PathBuf::from("/x"),
                reason: "denied".into()
            }
            .category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn domain_errors_pass_through() {
        let err: ApplicationError = DomainError::EmptyName.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn suggestions_name_the_follow_up_command() {
        let err = ApplicationError::ModuleNotFound("Shop".into());
        assert!(err.suggestions()[0].contains("module create Shop"));
    }
}
