//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stencil-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateCatalog`: Template discovery
//!   - `PackageInstaller`: Post-scaffold dependency installation
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

use std::path::{Path, PathBuf};

use crate::error::StencilResult;

/// Kind of a directory entry, as far as materialization cares.
///
/// Symlinks and other special files are classified by what they resolve to;
/// the core never follows links itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One immediate child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name of the entry (no parent components).
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stencil_adapters::filesystem::LocalFilesystem` (production)
/// - `stencil_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `read_dir` returns one level at a time; the materializer recurses
///   instead of pre-flattening the tree
/// - Entry order is whatever the implementation yields — callers must not
///   assume sorting
pub trait Filesystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StencilResult<()>;

    /// List the immediate children of a directory.
    fn read_dir(&self, path: &Path) -> StencilResult<Vec<DirEntry>>;

    /// Read an entire file as text.
    fn read_to_string(&self, path: &Path) -> StencilResult<String>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()>;
}

/// Port for discovering templates under the configured template root.
///
/// Implemented by:
/// - `stencil_adapters::catalog::DirCatalog` (one subdirectory per template)
pub trait TemplateCatalog: Send + Sync {
    /// Names of all available templates.
    fn list(&self) -> StencilResult<Vec<String>>;

    /// Absolute path of a template directory, if the template exists.
    fn template_path(&self, name: &str) -> StencilResult<PathBuf>;
}

/// Port for the external package-installation step.
///
/// Implemented by:
/// - `stencil_adapters::installer::CommandInstaller` (spawns e.g. `pnpm install`)
/// - `stencil_adapters::installer::RecordingInstaller` (testing)
pub trait PackageInstaller: Send + Sync {
    /// Run the install step with `project_dir` as working directory.
    ///
    /// Blocking, no timeout: a hung installer hangs the whole run, same as
    /// the rest of the synchronous pipeline.
    fn install(&self, project_dir: &Path) -> StencilResult<()>;
}
