//! Unified error handling for Stencil Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

// One category enum for both layers; defined with the domain errors.
pub use crate::domain::error::ErrorCategory;

/// Root error type for Stencil Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// stencil-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum StencilError {
    /// Errors from the domain layer (validation, template syntax).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl StencilError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Convenient result type alias.
pub type StencilResult<T> = Result<T, StencilError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn target_exists_is_validation() {
        let err: StencilError = ApplicationError::TargetExists {
            path: PathBuf::from("/tmp/x"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn syntax_error_keeps_its_category_through_wrapping() {
        let err: StencilError = ApplicationError::TemplateSyntax {
            path: PathBuf::from("tpl/a.txt"),
            reason: "unterminated placeholder starting at byte 3".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Syntax);
        assert!(err.to_string().contains("tpl/a.txt"));
    }

    #[test]
    fn suggestions_are_never_empty() {
        let errors: Vec<StencilError> = vec![
            DomainError::InvalidProjectName {
                name: ".x".into(),
                reason: "starts with '.'".into(),
            }
            .into(),
            ApplicationError::TemplateNotFound {
                name: "missing".into(),
            }
            .into(),
            ApplicationError::PostProcess {
                command: "pnpm install".into(),
                reason: "exit status 1".into(),
            }
            .into(),
        ];
        for err in errors {
            assert!(!err.suggestions().is_empty(), "no suggestions for {err}");
        }
    }
}
