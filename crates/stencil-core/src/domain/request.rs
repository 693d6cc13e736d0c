//! Scaffold request — the validated boundary input.

use super::DomainError;

/// What the user asked for: one template, one project name.
///
/// Prompt answers and CLI flags are both funnelled through this struct, so
/// validation happens exactly once at the boundary and the core downstream
/// is total over its inputs.
///
/// ## Validation policy
///
/// The project name is used verbatim both as a directory name and as a
/// substitution value, so path-unsafe names are rejected here:
/// - must be non-empty
/// - must not start with `.`
/// - must not contain `/` or `\`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    template_name: String,
    project_name: String,
}

impl ScaffoldRequest {
    /// Validate and construct a request.
    pub fn new(
        template_name: impl Into<String>,
        project_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let template_name = template_name.into();
        let project_name = project_name.into();

        if template_name.is_empty() {
            return Err(DomainError::InvalidTemplateName {
                name: template_name,
                reason: "name cannot be empty".into(),
            });
        }

        validate_project_name(&project_name)?;

        Ok(Self {
            template_name,
            project_name,
        })
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }
}

fn validate_project_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}
