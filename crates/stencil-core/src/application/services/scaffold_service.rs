//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Reject an existing target, create a fresh one
//! 2. Materialize the template tree (recursive, depth-first)
//! 3. Hand off to the package installer when the template carries a manifest
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::Path;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{EntryKind, Filesystem, PackageInstaller},
    },
    domain::{RenderContext, render, skip},
    error::StencilResult,
};

/// Name of the manifest file that gates the install step.
///
/// Checked at the template root only; its presence means the generated
/// project needs a dependency install.
pub const INSTALL_MANIFEST: &str = "package.json";

/// Main scaffolding service.
///
/// Orchestrates validation, tree materialization, and the post-process
/// handoff. Strictly sequential: every filesystem call blocks until done,
/// and the first failure anywhere ends the whole run.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    installer: Box<dyn PackageInstaller>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, installer: Box<dyn PackageInstaller>) -> Self {
        Self {
            filesystem,
            installer,
        }
    }

    /// Scaffold a new project.
    ///
    /// This is the main use case — reconstructs `template_path` at
    /// `target_path`, rendering every file through `context`.
    ///
    /// # Errors
    ///
    /// - `TargetExists` if `target_path` is already present; nothing is
    ///   created or modified in that case.
    /// - Any materialization failure propagates unmodified. The target may
    ///   be left partially populated — there is no rollback.
    /// - `PostProcess` if the install collaborator reports failure; the
    ///   materialized files are kept.
    #[instrument(
        skip_all,
        fields(
            template = %template_path.display(),
            target = %target_path.display(),
        )
    )]
    pub fn scaffold(
        &self,
        template_path: &Path,
        target_path: &Path,
        context: &RenderContext,
    ) -> StencilResult<()> {
        info!(project = %context.project_name(), "Scaffolding project");

        // 1. Existence check — the only validation before mutation.
        if self.filesystem.exists(target_path) {
            return Err(ApplicationError::TargetExists {
                path: target_path.to_path_buf(),
            }
            .into());
        }

        // 2. Create the target root.
        self.filesystem.create_dir_all(target_path)?;

        // 3. Materialize the tree. Failures leave the partial tree in place.
        self.materialize(template_path, target_path, context)?;
        info!("Template materialized");

        // 4. Post-process handoff, gated on the manifest at the template root.
        if self.filesystem.exists(&template_path.join(INSTALL_MANIFEST)) {
            info!(manifest = INSTALL_MANIFEST, "Running install step");
            self.installer.install(target_path)?;
        } else {
            debug!("No manifest at template root, skipping install step");
        }

        info!("Scaffold completed successfully");
        Ok(())
    }

    /// Recursively copy `source_dir` into `dest_dir`, rendering file
    /// contents.
    ///
    /// Precondition: `dest_dir` exists (the root is created by
    /// [`Self::scaffold`], nested destinations by the recursion itself).
    /// Children are visited in the order the filesystem yields them.
    fn materialize(
        &self,
        source_dir: &Path,
        dest_dir: &Path,
        context: &RenderContext,
    ) -> StencilResult<()> {
        for entry in self.filesystem.read_dir(source_dir)? {
            if skip::is_skipped(&entry.name) {
                debug!(entry = %entry.name, "Skipping excluded entry");
                continue;
            }

            let source = source_dir.join(&entry.name);
            let dest = dest_dir.join(&entry.name);

            match entry.kind {
                EntryKind::File => {
                    // All template files are treated as text and rendered
                    // uniformly; there is no binary detection.
                    let raw = self.filesystem.read_to_string(&source)?;
                    let rendered =
                        render(&raw, context).map_err(|e| ApplicationError::TemplateSyntax {
                            path: source.clone(),
                            reason: e.to_string(),
                        })?;
                    self.filesystem.write_file(&dest, &rendered)?;
                    debug!(file = %dest.display(), "File written");
                }
                EntryKind::Directory => {
                    self.filesystem.create_dir_all(&dest)?;
                    self.materialize(&source, &dest, context)?;
                }
            }
        }

        Ok(())
    }
}
