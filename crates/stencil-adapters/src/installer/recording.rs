//! Recording installer for tests.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use stencil_core::{
    application::{ApplicationError, ports::PackageInstaller},
    error::StencilResult,
};

/// Test double that records every invocation instead of spawning anything.
///
/// Clone it before handing it to the service; both handles share the same
/// invocation list.
#[derive(Debug, Clone, Default)]
pub struct RecordingInstaller {
    invocations: Arc<Mutex<Vec<PathBuf>>>,
    fail: bool,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder whose `install` always reports failure.
    pub fn failing() -> Self {
        Self {
            invocations: Arc::default(),
            fail: true,
        }
    }

    /// Directories `install` was called with, in order.
    pub fn invocations(&self) -> Vec<PathBuf> {
        self.invocations.lock().unwrap().clone()
    }
}

impl PackageInstaller for RecordingInstaller {
    fn install(&self, project_dir: &Path) -> StencilResult<()> {
        self.invocations
            .lock()
            .unwrap()
            .push(project_dir.to_path_buf());

        if self.fail {
            return Err(ApplicationError::PostProcess {
                command: "recording-installer".into(),
                reason: "configured to fail".into(),
            }
            .into());
        }
        Ok(())
    }
}
