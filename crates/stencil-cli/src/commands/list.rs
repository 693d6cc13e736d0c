//! Implementation of the `stencil list` command.

use stencil_adapters::DirCatalog;
use stencil_core::application::TemplateCatalog;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = config.template_root(global.template_root.as_deref());
    let catalog = DirCatalog::new(&root);
    let templates = catalog.list().map_err(CliError::Core)?;

    match args.format {
        ListFormat::Table => {
            if templates.is_empty() {
                output.info(&format!("No templates found under {}", root.display()))?;
                return Ok(());
            }
            output.header("Available Templates:")?;
            for name in &templates {
                output.print(&format!("  {name}"))?;
            }
        }

        ListFormat::List => {
            for name in &templates {
                println!("{name}");
            }
        }

        ListFormat::Json => {
            // Serialise directly to stdout, bypassing the OutputManager:
            // JSON output must be parseable even in non-TTY pipes.
            let json =
                serde_json::to_string_pretty(&templates).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise template list: {e}"),
                    source: Some(Box::new(e)),
                })?;
            println!("{json}");
        }
    }

    Ok(())
}
