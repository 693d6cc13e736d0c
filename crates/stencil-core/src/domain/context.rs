//! Render context — the variable map applied to template files.

use std::collections::HashMap;

/// Context for template rendering.
///
/// A **Value Object** containing all data needed to render a template file.
/// Built once from validated CLI input and passed unchanged through the
/// whole recursive copy — transformations create new instances (see
/// [`Self::with_variable`]).
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `projectName` | "demo-app" | User input |
///
/// Templates reference variables with `<%= projectName %>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Original project name as provided by the user.
    /// Kept separate from variables for debugging and display purposes.
    project_name: String,

    /// Variable map for substitution. HashMap because order doesn't matter
    /// for simple replacement and lookup is O(1).
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Create a new render context for a project name.
    ///
    /// `projectName` is the contract between Stencil and templates: any
    /// template using `<%= projectName %>` can expect it to exist.
    pub fn new(project_name: impl Into<String>) -> Self {
        let name = project_name.into();
        let mut vars = HashMap::new();
        vars.insert("projectName".to_string(), name.clone());

        Self {
            project_name: name,
            variables: vars,
        }
    }

    /// Add a custom variable, consuming self and returning a new context.
    ///
    /// ```rust
    /// # use stencil_core::domain::RenderContext;
    /// let ctx = RenderContext::new("demo")
    ///     .with_variable("author", "Alice")
    ///     .with_variable("license", "MIT");
    /// ```
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    ///
    /// Returns `None` for undefined variables; the renderer substitutes
    /// those with the empty string.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// The project name this context was built for.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }
}
