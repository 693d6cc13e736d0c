//! Package installer that spawns an external command.

use std::path::Path;
use std::process::Command;

use tracing::{info, instrument};

use stencil_core::{
    application::{ApplicationError, ports::PackageInstaller},
    error::StencilResult,
};

/// Runs the configured install command in the new project directory.
///
/// Defaults to `pnpm install`. The child process inherits stdout/stderr so
/// the user sees the installer's own progress output. Blocking, no
/// timeout.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    program: String,
    args: Vec<String>,
}

impl CommandInstaller {
    /// Create an installer for a specific command line.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The command line this installer runs, for display and errors.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl Default for CommandInstaller {
    fn default() -> Self {
        Self::new("pnpm", vec!["install".into()])
    }
}

impl PackageInstaller for CommandInstaller {
    #[instrument(skip_all, fields(command = %self.command_line(), dir = %project_dir.display()))]
    fn install(&self, project_dir: &Path) -> StencilResult<()> {
        info!("Running install command");

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_dir)
            .status()
            .map_err(|e| ApplicationError::PostProcess {
                command: self.command_line(),
                reason: format!("failed to spawn: {e}"),
            })?;

        if !status.success() {
            return Err(ApplicationError::PostProcess {
                command: self.command_line(),
                reason: format!("exited with {status}"),
            }
            .into());
        }

        info!("Install command completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn command_line_joins_program_and_args() {
        let installer = CommandInstaller::default();
        assert_eq!(installer.command_line(), "pnpm install");
    }

    #[test]
    fn missing_program_is_post_process_error() {
        let tmp = TempDir::new().unwrap();
        let installer = CommandInstaller::new("definitely-not-a-real-binary", vec![]);
        let err = installer.install(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("post-process failed"));
    }

    #[test]
    #[cfg(unix)]
    fn nonzero_exit_is_post_process_error() {
        let tmp = TempDir::new().unwrap();
        let installer = CommandInstaller::new("false", vec![]);
        let err = installer.install(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("exited with"));
    }

    #[test]
    #[cfg(unix)]
    fn zero_exit_is_ok() {
        let tmp = TempDir::new().unwrap();
        let installer = CommandInstaller::new("true", vec![]);
        assert!(installer.install(tmp.path()).is_ok());
    }
}
