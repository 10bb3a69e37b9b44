//! Panel configuration persistence
//!
//! Stores user preferences in `~/.config/sandbox-config/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::template::TemplateId;

/// Panel configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Template used when a project doesn't declare one
    #[serde(default = "default_template")]
    pub default_template: String,

    /// Show each file's description under its title
    #[serde(default = "default_true")]
    pub show_descriptions: bool,

    /// Prefix entries with Nerd Font icons
    #[serde(default = "default_true")]
    pub show_icons: bool,

    /// Width of the rendered panel in columns
    #[serde(default = "default_panel_width")]
    pub panel_width: usize,
}

fn default_template() -> String {
    TemplateId::DEFAULT.name().to_string()
}

fn default_true() -> bool {
    true
}

fn default_panel_width() -> usize {
    60
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            default_template: default_template(),
            show_descriptions: true,
            show_icons: true,
            panel_width: default_panel_width(),
        }
    }
}

impl PanelConfig {
    /// Load from the user config dir, falling back to defaults
    pub fn load() -> Self {
        match crate::config_paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Load from `path`; a missing or unreadable file yields defaults
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                return Self::default();
            }
        };

        Self::from_yaml(&content).unwrap_or_else(|e| {
            tracing::warn!("Invalid config at {}: {}", path.display(), e);
            Self::default()
        })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())
    }

    /// Write to the user config dir, returning the file written
    pub fn save(&self) -> Result<PathBuf, String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| e.to_string())?;
        std::fs::write(path, yaml)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

        tracing::info!("Saved panel config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = PanelConfig::from_yaml("show_icons: false\n").unwrap();
        assert!(!config.show_icons);
        assert!(config.show_descriptions);
        assert_eq!(config.default_template, "create-react-app");
        assert_eq!(config.panel_width, 60);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(PanelConfig::from_yaml("panel_width: wide\n").is_err());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = PanelConfig {
            panel_width: 72,
            ..PanelConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(PanelConfig::load_from(&path), config);
    }

    #[test]
    fn test_missing_or_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        assert_eq!(PanelConfig::load_from(&path), PanelConfig::default());

        std::fs::write(&path, "panel_width: [1, 2]\n").unwrap();
        assert_eq!(PanelConfig::load_from(&path), PanelConfig::default());
    }
}
