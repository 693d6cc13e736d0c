//! Implementation of the `stencil new` command.
//!
//! Responsibility: translate CLI arguments (or prompt answers) into a
//! validated `ScaffoldRequest`, wire up the adapters, call the core scaffold
//! service, and display results. No business logic lives here.

use std::path::Path;

use tracing::{debug, info, instrument};

use stencil_adapters::{CommandInstaller, DirCatalog, LocalFilesystem};
use stencil_core::{
    application::{ApplicationError, PackageInstaller, ScaffoldService, TemplateCatalog},
    domain::{DomainError, RenderContext, ScaffoldRequest},
    error::{StencilError, StencilResult},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute the `stencil new` command.
///
/// Dispatch sequence:
/// 1. Resolve template and project name (arguments, or prompts when omitted)
/// 2. Validate them into a `ScaffoldRequest`
/// 3. Resolve the template directory through the catalog
/// 4. Confirm with user unless `--yes` or `--quiet`
/// 5. Early-exit if `--dry-run`
/// 6. Execute scaffolding via `ScaffoldService`
/// 7. Print next-steps guidance
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let template_root = config.template_root(global.template_root.as_deref());
    let catalog = DirCatalog::new(&template_root);

    // 1. Resolve template + name, prompting for whichever was omitted.
    let template_name = resolve_template_name(&args, &catalog)?;
    let project_name = match &args.name {
        Some(name) => name.clone(),
        None => prompt::input_project_name()?,
    };

    // 2. Validate at the boundary.
    let request = ScaffoldRequest::new(&template_name, &project_name).map_err(|e| match e {
        DomainError::InvalidProjectName { name, reason } => {
            CliError::InvalidProjectName { name, reason }
        }
        other => CliError::Core(other.into()),
    })?;

    // 3. Resolve the template directory.
    let template_path = catalog
        .template_path(request.template_name())
        .map_err(|e| match e {
            StencilError::Application(ApplicationError::TemplateNotFound { name }) => {
                CliError::TemplateNotFound { name }
            }
            other => CliError::Core(other),
        })?;

    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "failed to resolve the current directory".into(),
        source: e,
    })?;
    let project_path = cwd.join(request.project_name());

    debug!(
        template = %request.template_name(),
        project = %request.project_name(),
        path = %project_path.display(),
        "Request resolved"
    );

    // Fail before prompting: a doomed run should not ask for confirmation.
    if project_path.exists() {
        return Err(CliError::ProjectExists { path: project_path });
    }

    // 4. Show configuration and confirm.
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&request, &template_path, &project_path, &config, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            request.project_name(),
            project_path.display(),
        ))?;
        output.info(&format!(
            "  Template: {} ({})",
            request.template_name(),
            template_path.display(),
        ))?;
        if !args.no_install && config.install.enabled {
            output.info(&format!(
                "  Install:  {} (when the template ships a package.json)",
                CommandInstaller::new(config.install.command.clone(), config.install.args.clone())
                    .command_line(),
            ))?;
        }
        return Ok(());
    }

    // 6. Create adapters and scaffold.
    let filesystem = Box::new(LocalFilesystem::new());
    let installer = build_installer(&args, &config);
    let service = ScaffoldService::new(filesystem, installer);
    let context = RenderContext::new(request.project_name());

    output.header(&format!("Creating '{}'...", request.project_name()))?;
    info!(project = %request.project_name(), path = %project_path.display(), "Scaffold started");

    service
        .scaffold(&template_path, &project_path, &context)
        .map_err(CliError::Core)?;

    info!(project = %request.project_name(), "Scaffold completed");

    // 7. Success + next steps.
    output.success(&format!("Project '{}' created!", request.project_name()))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", request.project_name()))?;
        if args.no_install {
            output.print(&format!(
                "  {}   # install step was skipped",
                config.install.command,
            ))?;
        }
    }

    Ok(())
}

// ── Resolution helpers ────────────────────────────────────────────────────────

fn resolve_template_name(args: &NewArgs, catalog: &DirCatalog) -> CliResult<String> {
    if let Some(template) = &args.template {
        return Ok(template.clone());
    }

    let names = catalog.list().map_err(CliError::Core)?;
    if names.is_empty() {
        return Err(CliError::TemplateNotFound {
            name: format!("(no templates under {})", catalog.root().display()),
        });
    }
    prompt::select_template(&names)
}

/// Pick the installer for this run.
///
/// `--no-install` (or `install.enabled = false` in the config) swaps in a
/// no-op so the manifest check in the core service stays the single place
/// that decides *whether* an install applies.
fn build_installer(args: &NewArgs, config: &AppConfig) -> Box<dyn PackageInstaller> {
    if args.no_install || !config.install.enabled {
        Box::new(SkipInstaller)
    } else {
        Box::new(CommandInstaller::new(
            config.install.command.clone(),
            config.install.args.clone(),
        ))
    }
}

struct SkipInstaller;

impl PackageInstaller for SkipInstaller {
    fn install(&self, project_path: &Path) -> StencilResult<()> {
        debug!(path = %project_path.display(), "Install step disabled for this run");
        Ok(())
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    request: &ScaffoldRequest,
    template_path: &Path,
    project_path: &Path,
    config: &AppConfig,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:  {}", request.project_name()))?;
    out.print(&format!("  Template: {}", request.template_name()))?;
    out.print(&format!("  Source:   {}", template_path.display()))?;
    out.print(&format!("  Target:   {}", project_path.display()))?;
    out.print(&format!(
        "  Install:  {} {}",
        config.install.command,
        config.install.args.join(" "),
    ))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_installer_always_succeeds() {
        let installer = SkipInstaller;
        assert!(installer.install(Path::new("/tmp/anywhere")).is_ok());
    }

    #[test]
    fn resolve_template_name_prefers_the_flag() {
        let args = NewArgs {
            name: Some("app".into()),
            template: Some("node-app".into()),
            yes: true,
            dry_run: false,
            no_install: false,
        };
        // The catalog root doesn't exist; the flag short-circuits the listing.
        let catalog = DirCatalog::new("/no/such/root");
        assert_eq!(resolve_template_name(&args, &catalog).unwrap(), "node-app");
    }
}
