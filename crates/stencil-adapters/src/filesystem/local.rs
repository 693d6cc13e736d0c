//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use stencil_core::{
    application::ports::{DirEntry, EntryKind, Filesystem},
    error::StencilResult,
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> StencilResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn read_dir(&self, path: &Path) -> StencilResult<Vec<DirEntry>> {
        let iter = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;

        let mut entries = Vec::new();
        for item in iter {
            let item = item.map_err(|e| map_io_error(path, e, "list directory"))?;
            let file_type = item
                .file_type()
                .map_err(|e| map_io_error(&item.path(), e, "stat entry"))?;

            // Symlinks classify by their target; broken links are skipped the
            // same way std::fs::metadata would fail on them.
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };

            entries.push(DirEntry {
                name: item.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }

        // No sorting: traversal order is filesystem-dependent.
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> StencilResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> stencil_core::error::StencilError {
    use stencil_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_dir_lists_files_and_directories() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.txt"), "hello").unwrap();
        std::fs::create_dir(tmp.path().join("sub")).unwrap();

        let fs = LocalFilesystem::new();
        let mut entries = fs.read_dir(tmp.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], DirEntry::file("a.txt"));
        assert_eq!(entries[1], DirEntry::directory("sub"));
    }

    #[test]
    fn read_dir_on_missing_path_is_filesystem_error() {
        let fs = LocalFilesystem::new();
        let err = fs.read_dir(Path::new("/definitely/not/here")).unwrap_err();
        assert!(err.to_string().contains("list directory"));
    }

    #[test]
    fn write_then_read_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.txt");

        let fs = LocalFilesystem::new();
        fs.write_file(&path, "content").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "content");
        assert!(fs.exists(&path));
    }
}
