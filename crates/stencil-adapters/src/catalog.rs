//! On-disk template catalog: one subdirectory per template.

use std::path::{Path, PathBuf};

use tracing::debug;

use stencil_core::{
    application::{ApplicationError, ports::TemplateCatalog},
    error::StencilResult,
};

/// Template catalog backed by a root directory.
///
/// Every immediate subdirectory of the root is one selectable template;
/// its directory name is the template name. Files directly under the root
/// are ignored.
#[derive(Debug, Clone)]
pub struct DirCatalog {
    root: PathBuf,
}

impl DirCatalog {
    /// Create a catalog over `root`. The directory does not have to exist
    /// yet; listing a missing root is reported as a filesystem error.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured template root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateCatalog for DirCatalog {
    fn list(&self) -> StencilResult<Vec<String>> {
        let iter = std::fs::read_dir(&self.root).map_err(|e| ApplicationError::Filesystem {
            path: self.root.clone(),
            reason: format!("Failed to list template root: {e}"),
        })?;

        let mut names = Vec::new();
        for item in iter {
            let item = item.map_err(|e| ApplicationError::Filesystem {
                path: self.root.clone(),
                reason: format!("Failed to list template root: {e}"),
            })?;
            let is_dir = item
                .file_type()
                .map(|t| t.is_dir())
                .unwrap_or(false);
            if is_dir {
                names.push(item.file_name().to_string_lossy().into_owned());
            }
        }

        names.sort();
        debug!(count = names.len(), "Templates discovered");
        Ok(names)
    }

    fn template_path(&self, name: &str) -> StencilResult<PathBuf> {
        let path = self.root.join(name);
        if !path.is_dir() {
            return Err(ApplicationError::TemplateNotFound { name: name.into() }.into());
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn catalog_with_templates(names: &[&str]) -> (TempDir, DirCatalog) {
        let tmp = TempDir::new().unwrap();
        for name in names {
            std::fs::create_dir(tmp.path().join(name)).unwrap();
        }
        let catalog = DirCatalog::new(tmp.path());
        (tmp, catalog)
    }

    #[test]
    fn list_returns_sorted_subdirectory_names() {
        let (_tmp, catalog) = catalog_with_templates(&["node-app", "rust-cli", "basic"]);
        assert_eq!(catalog.list().unwrap(), vec!["basic", "node-app", "rust-cli"]);
    }

    #[test]
    fn list_ignores_plain_files_under_root() {
        let (tmp, catalog) = catalog_with_templates(&["node-app"]);
        std::fs::write(tmp.path().join("README.md"), "not a template").unwrap();
        assert_eq!(catalog.list().unwrap(), vec!["node-app"]);
    }

    #[test]
    fn template_path_resolves_existing_template() {
        let (tmp, catalog) = catalog_with_templates(&["node-app"]);
        assert_eq!(
            catalog.template_path("node-app").unwrap(),
            tmp.path().join("node-app")
        );
    }

    #[test]
    fn template_path_for_unknown_name_is_not_found() {
        let (_tmp, catalog) = catalog_with_templates(&["node-app"]);
        let err = catalog.template_path("missing").unwrap_err();
        assert!(err.to_string().contains("template not found"));
    }

    #[test]
    fn missing_root_reports_filesystem_error() {
        let catalog = DirCatalog::new("/no/such/template/root");
        assert!(catalog.list().is_err());
    }
}
