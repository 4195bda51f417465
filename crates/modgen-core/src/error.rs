//! Unified error handling for modgen core.
//!
//! Wraps domain and application errors behind one type so callers get a
//! single surface with categories and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::error::{DomainError, ErrorCategory};

/// Root error type for modgen core operations.
#[derive(Debug, Error)]
pub enum ModgenError {
    /// Errors from the domain layer (name and plan rules).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl ModgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Convenient result type alias.
pub type ModgenResult<T> = Result<T, ModgenError>;
