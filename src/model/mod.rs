//! Application model - the complete state of the panel
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod project;

pub use project::{Directory, Module, ModuleId, ProjectTree};

use std::path::Path;

use serde::Deserialize;

use crate::config::PanelConfig;
use crate::panels::{ConfigurationFilesPanel, ConfigurationPartition, ConfigurationView};
use crate::template::{icon_for_template, BuiltinTemplates, TemplateIcon};

/// Name of the per-project file that declares the sandbox's template
pub const SANDBOX_CONFIG_FILE: &str = "sandbox.config.json";

/// The subset of `sandbox.config.json` this crate reads
#[derive(Debug, Default, Deserialize)]
struct SandboxConfigFile {
    #[serde(default)]
    template: Option<String>,
}

/// The sandbox being configured: its template and its files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sandbox {
    /// Template identifier (e.g. `create-react-app`)
    pub template: String,
    pub project: ProjectTree,
}

impl Sandbox {
    pub fn new(template: impl Into<String>, project: ProjectTree) -> Self {
        Self {
            template: template.into(),
            project,
        }
    }

    /// Load a sandbox from a directory on disk
    ///
    /// The template comes from `explicit`, then `sandbox.config.json` in the
    /// directory, then `fallback`.
    pub fn from_directory(
        root: &Path,
        explicit: Option<&str>,
        fallback: &str,
    ) -> std::io::Result<Self> {
        let project = ProjectTree::from_directory(root)?;
        let template = match explicit {
            Some(template) => template.to_string(),
            None => detect_template(root).unwrap_or_else(|| fallback.to_string()),
        };
        tracing::debug!("Sandbox at {} uses template {}", root.display(), template);
        Ok(Self { template, project })
    }

    pub fn icon(&self) -> TemplateIcon {
        icon_for_template(&self.template)
    }
}

/// Read the `template` field of `sandbox.config.json`, if any
pub fn detect_template(root: &Path) -> Option<String> {
    let path = root.join(SANDBOX_CONFIG_FILE);
    let content = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str::<SandboxConfigFile>(&content) {
        Ok(file) => file.template.filter(|t| !t.trim().is_empty()),
        Err(e) => {
            tracing::warn!("Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    pub sandbox: Sandbox,
    pub registry: BuiltinTemplates,
    pub panel: ConfigurationFilesPanel,
    pub config: PanelConfig,
}

impl AppModel {
    pub fn new(sandbox: Sandbox, registry: BuiltinTemplates, config: PanelConfig) -> Self {
        Self {
            sandbox,
            registry,
            panel: ConfigurationFilesPanel::default(),
            config,
        }
    }

    /// Partition the current template's files against the current tree
    ///
    /// Built fresh on every call; nothing is cached between renders.
    pub fn partition(&self) -> ConfigurationPartition {
        ConfigurationPartition::for_template(
            &self.registry,
            &self.sandbox.template,
            &self.sandbox.project,
        )
    }

    pub fn view(&self) -> ConfigurationView {
        ConfigurationView::new(&self.partition())
    }

    pub fn template_icon(&self) -> TemplateIcon {
        self.sandbox.icon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SANDBOX_CONFIG_FILE),
            r#"{ "template": "vue-cli", "infiniteLoopProtection": true }"#,
        )
        .unwrap();
        assert_eq!(detect_template(dir.path()).as_deref(), Some("vue-cli"));
    }

    #[test]
    fn test_detect_template_missing_or_invalid() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(detect_template(dir.path()), None);

        std::fs::write(dir.path().join(SANDBOX_CONFIG_FILE), "{ not json").unwrap();
        assert_eq!(detect_template(dir.path()), None);
    }

    #[test]
    fn test_explicit_template_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SANDBOX_CONFIG_FILE),
            r#"{ "template": "vue-cli" }"#,
        )
        .unwrap();
        let sandbox = Sandbox::from_directory(dir.path(), Some("node"), "static").unwrap();
        assert_eq!(sandbox.template, "node");
        assert_eq!(sandbox.icon(), TemplateIcon::Node);
    }
}
