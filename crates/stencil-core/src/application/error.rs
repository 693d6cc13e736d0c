//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The destination directory already exists. Nothing was created or
    /// modified.
    #[error("target already exists at {path}")]
    TargetExists { path: PathBuf },

    /// A template file has malformed placeholder syntax.
    #[error("template syntax error in {path}: {reason}")]
    TemplateSyntax { path: PathBuf, reason: String },

    /// Filesystem operation failed (read, write, mkdir, listing).
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The requested template does not exist in the catalog.
    #[error("template not found: {name}")]
    TemplateNotFound { name: String },

    /// The package-install collaborator reported failure. Materialized
    /// files are deliberately left in place.
    #[error("post-process failed: {command}: {reason}")]
    PostProcess { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TargetExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different project name".into(),
                "Or delete the existing directory first".into(),
            ],
            Self::TemplateSyntax { path, .. } => vec![
                format!("Malformed placeholder in: {}", path.display()),
                "Every '<%=' needs a matching '%>'".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::TemplateNotFound { name } => vec![
                format!("No template named '{}'", name),
                "Run 'stencil list' to see available templates".into(),
            ],
            Self::PostProcess { command, .. } => vec![
                format!("'{}' failed in the new project directory", command),
                "The generated files were kept; run the install manually".into(),
                "Ensure the command is installed and in your PATH".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetExists { .. } => ErrorCategory::Validation,
            Self::TemplateSyntax { .. } => ErrorCategory::Syntax,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::Filesystem { .. } | Self::PostProcess { .. } => ErrorCategory::Internal,
        }
    }
}
