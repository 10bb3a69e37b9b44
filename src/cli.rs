//! Command-line argument parsing
//!
//! Supports:
//! - Rendering the panel for a project directory
//! - JSON output of the partition
//! - Activating an entry to see the command it dispatches
//! - Watch mode that re-renders on file changes

use clap::Parser;
use std::path::PathBuf;

use crate::config::PanelConfig;

/// Show the configuration files of a sandbox project
#[derive(Parser, Debug)]
#[command(
    name = "sandbox-config",
    version,
    about = "Show the configuration files of a sandbox project"
)]
pub struct CliArgs {
    /// Project directory
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Template identifier (defaults to sandbox.config.json, then config)
    #[arg(short = 't', long, value_name = "NAME")]
    pub template: Option<String>,

    /// Print the partition as JSON instead of the panel
    #[arg(long)]
    pub json: bool,

    /// Re-render whenever files in DIR change
    #[arg(short = 'w', long)]
    pub watch: bool,

    /// Print the command the panel dispatches for this configuration path
    #[arg(long, value_name = "PATH")]
    pub activate: Option<String>,

    /// Don't prefix entries with Nerd Font icons
    #[arg(long)]
    pub no_icons: bool,

    /// Panel width in columns
    #[arg(long, value_name = "N")]
    pub width: Option<usize>,

    /// List known templates and their icons, then exit
    #[arg(long)]
    pub list_templates: bool,

    /// Write the effective settings to the config file, then exit
    #[arg(long)]
    pub init_config: bool,

    /// More console logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What the binary should print
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Render the panel (once, or continuously when watching)
    Panel { watch: bool },
    /// Print the partition as JSON
    Json,
    /// Print the command for one entry
    Activate(String),
    /// Print the template table
    ListTemplates,
    /// Persist the effective panel settings
    InitConfig,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root: PathBuf,
    pub template: Option<String>,
    pub mode: RunMode,
    pub json: bool,
    pub no_icons: bool,
    pub width: Option<usize>,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        if self.watch && self.activate.is_some() {
            return Err("--watch cannot be combined with --activate".to_string());
        }

        let mode = if self.init_config {
            RunMode::InitConfig
        } else if self.list_templates {
            RunMode::ListTemplates
        } else if let Some(path) = self.activate {
            RunMode::Activate(normalize_config_path(&path))
        } else if self.json && !self.watch {
            RunMode::Json
        } else {
            RunMode::Panel { watch: self.watch }
        };

        let needs_dir = !matches!(mode, RunMode::ListTemplates | RunMode::InitConfig);
        if needs_dir && !self.dir.is_dir() {
            return Err(format!("Not a directory: {}", self.dir.display()));
        }

        if self.width == Some(0) {
            return Err("--width must be greater than zero".to_string());
        }

        Ok(RunConfig {
            root: self.dir,
            template: self.template,
            mode,
            json: self.json,
            no_icons: self.no_icons,
            width: self.width,
        })
    }
}

impl RunConfig {
    /// Apply command-line overrides on top of the persisted config
    pub fn apply_to(&self, config: &mut PanelConfig) {
        if self.no_icons {
            config.show_icons = false;
        }
        if let Some(width) = self.width {
            config.panel_width = width;
        }
    }
}

/// Configuration paths are keyed with a leading `/`
pub fn normalize_config_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            dir: std::env::temp_dir(),
            template: None,
            json: false,
            watch: false,
            activate: None,
            no_icons: false,
            width: None,
            list_templates: false,
            init_config: false,
            verbose: 0,
        }
    }

    #[test]
    fn test_default_is_panel() {
        let config = args().into_config().unwrap();
        assert_eq!(config.mode, RunMode::Panel { watch: false });
    }

    #[test]
    fn test_json_mode() {
        let config = CliArgs {
            json: true,
            ..args()
        }
        .into_config()
        .unwrap();
        assert_eq!(config.mode, RunMode::Json);
    }

    #[test]
    fn test_activate_normalizes_path() {
        let config = CliArgs {
            activate: Some("netlify.toml".to_string()),
            ..args()
        }
        .into_config()
        .unwrap();
        assert_eq!(config.mode, RunMode::Activate("/netlify.toml".to_string()));
    }

    #[test]
    fn test_watch_and_activate_conflict() {
        let result = CliArgs {
            watch: true,
            activate: Some("/now.json".to_string()),
            ..args()
        }
        .into_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_directory() {
        let result = CliArgs {
            dir: PathBuf::from("/definitely/not/here"),
            ..args()
        }
        .into_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_list_templates_ignores_directory() {
        let config = CliArgs {
            dir: PathBuf::from("/definitely/not/here"),
            list_templates: true,
            ..args()
        }
        .into_config()
        .unwrap();
        assert_eq!(config.mode, RunMode::ListTemplates);
    }

    #[test]
    fn test_init_config_ignores_directory() {
        let config = CliArgs {
            dir: PathBuf::from("/definitely/not/here"),
            init_config: true,
            ..args()
        }
        .into_config()
        .unwrap();
        assert_eq!(config.mode, RunMode::InitConfig);
    }

    #[test]
    fn test_overrides_applied() {
        let run = CliArgs {
            no_icons: true,
            width: Some(80),
            ..args()
        }
        .into_config()
        .unwrap();
        let mut config = PanelConfig::default();
        run.apply_to(&mut config);
        assert!(!config.show_icons);
        assert_eq!(config.panel_width, 80);
    }
}
