//! Domain-level errors.
//!
//! These cover violations of pure business rules: malformed names and
//! inconsistent scaffold plans. Anything touching the outside world
//! (filesystem, stores, prompts) belongs in
//! [`crate::application::error::ApplicationError`].

use thiserror::Error;

/// Errors raised by the domain layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ── Name validation ──────────────────────────────────────────────────

    /// The raw name was empty or whitespace-only.
    #[error("name cannot be empty")]
    EmptyName,

    /// The raw name contains characters that cannot appear in class names
    /// or filesystem paths.
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    // ── Plan assembly ────────────────────────────────────────────────────

    /// A plan destination was absolute or escaped the module root.
    #[error("path '{0}' is not relative to the module root")]
    PathNotRelative(String),

    /// Two plan entries resolved to the same destination.
    #[error("duplicate plan destination '{0}'")]
    DuplicatePlanEntry(String),
}

impl DomainError {
    /// Actionable hints for the CLI layer.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec!["Provide a name, e.g. 'BlogPost' or 'blog-post'".to_string()],
            Self::InvalidName { .. } => vec![
                "Names may contain letters, digits, spaces, '-' and '_'".to_string(),
                "Example: 'BlogPost', 'blog_post' and 'blog post' are equivalent".to_string(),
            ],
            Self::PathNotRelative(_) | Self::DuplicatePlanEntry(_) => Vec::new(),
        }
    }

    /// Coarse classification used for exit codes and log levels.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyName | Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::PathNotRelative(_) | Self::DuplicatePlanEntry(_) => ErrorCategory::Internal,
        }
    }
}

/// Coarse error classification shared by every layer.
///
/// The CLI maps these onto exit codes; log severity follows the same split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller passed something malformed.
    Validation,
    /// A referenced module or entity does not exist.
    NotFound,
    /// The thing being created already exists.
    Conflict,
    /// The request contradicts the module's kind or a missing capability.
    Compatibility,
    /// Infrastructure failure or a bug.
    Internal,
}
