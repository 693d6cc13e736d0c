//! Domain errors — validation and template-syntax failures.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("invalid template name '{name}': {reason}")]
    InvalidTemplateName { name: String, reason: String },

    // ========================================================================
    // Template Syntax Errors
    // ========================================================================
    /// A `<%=` opener with no matching `%>` closer.
    ///
    /// `offset` is the byte position of the opener in the file content.
    /// The materializer attaches the offending file path when it wraps
    /// this into an application error.
    #[error("unterminated placeholder starting at byte {offset}")]
    UnterminatedPlaceholder { offset: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: my-project, my_app, project123".into(),
            ],
            Self::InvalidTemplateName { name, .. } => vec![
                format!("Template name '{}' is invalid", name),
                "Run 'stencil list' to see available templates".into(),
            ],
            Self::UnterminatedPlaceholder { .. } => vec![
                "A '<%=' placeholder is missing its closing '%>'".into(),
                "Fix the template file and try again".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::InvalidTemplateName { .. } => {
                ErrorCategory::Validation
            }
            Self::UnterminatedPlaceholder { .. } => ErrorCategory::Syntax,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Syntax,
    NotFound,
    Internal,
}
