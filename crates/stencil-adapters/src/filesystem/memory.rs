//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stencil_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, EntryKind, Filesystem},
    },
    error::{StencilError, StencilResult},
};

/// In-memory filesystem for testing.
///
/// Besides the plain port implementation it supports injecting a write
/// failure on a specific path (`fail_write_on`), which is how the
/// fail-fast behaviour of the materializer is exercised without touching
/// a real disk.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    fail_writes: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Pre-populate a file, creating parent directories (setup helper).
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            let mut current = PathBuf::new();
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path, content.into());
    }

    /// Pre-populate a directory (setup helper).
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Make the next `write_file` on `path` fail.
    pub fn fail_write_on(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().fail_writes.insert(path.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all file paths (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Snapshot of every path (files and directories) for before/after diffs.
    pub fn snapshot(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .cloned()
            .collect()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_poisoned(path: &Path) -> StencilError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> StencilResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn read_dir(&self, path: &Path) -> StencilResult<Vec<DirEntry>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned(path))?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "Failed to list directory: no such directory".into(),
            }
            .into());
        }

        let mut entries = Vec::new();

        for file in inner.files.keys() {
            if file.parent() == Some(path) {
                if let Some(name) = file.file_name() {
                    entries.push(DirEntry {
                        name: name.to_string_lossy().into_owned(),
                        kind: EntryKind::File,
                    });
                }
            }
        }
        for dir in &inner.directories {
            if dir.parent() == Some(path) {
                if let Some(name) = dir.file_name() {
                    entries.push(DirEntry {
                        name: name.to_string_lossy().into_owned(),
                        kind: EntryKind::Directory,
                    });
                }
            }
        }

        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> StencilResult<String> {
        let inner = self.inner.read().map_err(|_| lock_poisoned(path))?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "Failed to read file: no such file".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(path))?;

        if inner.fail_writes.remove(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "Failed to write file: injected failure".into(),
            }
            .into());
        }

        // Parent must exist, same contract as the real filesystem.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Failed to write file: parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_existing_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("/a")).unwrap();
        assert!(fs.write_file(Path::new("/a/b.txt"), "x").is_ok());
        assert_eq!(fs.read_file(Path::new("/a/b.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn read_dir_returns_immediate_children_only() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/root/a.txt", "a");
        fs.add_file("/root/sub/b.txt", "b");

        let entries = fs.read_dir(Path::new("/root")).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert!(names.contains(&"a.txt"));
        assert!(names.contains(&"sub"));
        assert!(!names.contains(&"b.txt"));
    }

    #[test]
    fn injected_write_failure_fires_once() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out")).unwrap();
        fs.fail_write_on("/out/x.txt");

        assert!(fs.write_file(Path::new("/out/x.txt"), "v").is_err());
        // The injection is consumed; a retry succeeds.
        assert!(fs.write_file(Path::new("/out/x.txt"), "v").is_ok());
    }
}
