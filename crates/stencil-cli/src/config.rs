//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it — the template root
//! and install command are threaded into the adapters explicitly.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` or the default location)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Template discovery settings.
    pub templates: TemplateConfig,
    /// Package install step settings.
    pub install: InstallConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory containing one subdirectory per template.  When unset the
    /// root is resolved relative to the executable (see
    /// [`AppConfig::template_root`]).
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Program run in the new project directory after materialization.
    pub command: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Master switch; `false` disables the install step for every run,
    /// same effect as passing `--no-install` each time.
    pub enabled: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            command: "pnpm".into(),
            args: vec!["install".into()],
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to use the default location).  A missing file at the default
    /// location is fine — defaults apply; a missing file passed explicitly
    /// is an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if required {
                anyhow::bail!("config file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
        let config = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stencil.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stencil", "stencil")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stencil.toml"))
    }

    /// Resolve the template root.
    ///
    /// Priority: the `--template-root` flag, then the config file, then a
    /// `templates/` directory next to the executable (the bundled layout),
    /// then `./templates`.
    pub fn template_root(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(root) = flag {
            return root.to_path_buf();
        }
        if let Some(root) = &self.templates.root {
            return root.clone();
        }
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let bundled = dir.join("templates");
                if bundled.is_dir() {
                    return bundled;
                }
            }
        }
        PathBuf::from("templates")
    }
}
