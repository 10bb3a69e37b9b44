//! YAML overrides for the template table
//!
//! Parses `templates.yaml` files that add or replace configuration-file
//! descriptors per template name:
//!
//! ```yaml
//! templates:
//!   create-react-app:
//!     /.eslintrc:
//!       title: .eslintrc
//!       description: Lint rules for the project.
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ConfigurationFile, TemplateDefinition};

/// Root structure of a templates YAML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateOverrides {
    #[serde(default)]
    pub templates: BTreeMap<String, BTreeMap<String, ConfigurationFile>>,
}

impl TemplateOverrides {
    /// Number of templates with overrides
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Merge the overrides for `template` into a definition
    ///
    /// Descriptors at an existing path replace the built-in one.
    pub fn apply(&self, template: &str, definition: &mut TemplateDefinition) {
        if let Some(files) = self.templates.get(template) {
            for (path, file) in files {
                definition
                    .configuration_files
                    .insert(path.clone(), file.clone());
            }
        }
    }
}

/// Load template overrides from a YAML file
pub fn load_overrides_file(path: &Path) -> Result<TemplateOverrides, RegistryError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| RegistryError::IoError(e.to_string()))?;

    parse_overrides_yaml(&content)
}

/// Parse template overrides from a YAML string
///
/// Paths are normalized to start with `/`.
pub fn parse_overrides_yaml(yaml: &str) -> Result<TemplateOverrides, RegistryError> {
    let raw: TemplateOverrides =
        serde_yaml::from_str(yaml).map_err(|e| RegistryError::ParseError(e.to_string()))?;

    let mut templates = BTreeMap::new();
    for (template, files) in raw.templates {
        let mut normalized = BTreeMap::new();
        for (path, file) in files {
            let trimmed = path.trim();
            if trimmed.trim_start_matches('/').is_empty() {
                return Err(RegistryError::InvalidPath(format!(
                    "{} (template {})",
                    path, template
                )));
            }
            if file.title.trim().is_empty() {
                return Err(RegistryError::MissingTitle(trimmed.to_string()));
            }

            let key = if trimmed.starts_with('/') {
                trimmed.to_string()
            } else {
                format!("/{}", trimmed)
            };
            normalized.insert(key, file);
        }
        templates.insert(template, normalized);
    }

    Ok(TemplateOverrides { templates })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    IoError(String),
    ParseError(String),
    InvalidPath(String),
    MissingTitle(String),
    UnknownTemplate(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::IoError(e) => write!(f, "IO error: {}", e),
            RegistryError::ParseError(e) => write!(f, "Parse error: {}", e),
            RegistryError::InvalidPath(p) => write!(f, "Invalid configuration path: {}", p),
            RegistryError::MissingTitle(p) => write!(f, "Missing title for {}", p),
            RegistryError::UnknownTemplate(name) => write!(f, "Unknown template: {}", name),
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{BuiltinTemplates, TemplateRegistry};

    const SAMPLE: &str = r#"
templates:
  create-react-app:
    .eslintrc:
      title: .eslintrc
      description: Lint rules for the project.
    /package.json:
      title: package.json
      description: Custom description.
"#;

    #[test]
    fn test_parse_normalizes_paths() {
        let overrides = parse_overrides_yaml(SAMPLE).unwrap();
        let files = &overrides.templates["create-react-app"];
        assert!(files.contains_key("/.eslintrc"));
        assert!(files.contains_key("/package.json"));
    }

    #[test]
    fn test_overrides_replace_and_extend() {
        let overrides = parse_overrides_yaml(SAMPLE).unwrap();
        let registry = BuiltinTemplates::with_overrides(overrides);
        let def = registry.definition("create-react-app");

        assert_eq!(
            def.configuration_files["/package.json"].description,
            "Custom description."
        );
        assert!(def.configuration_files.contains_key("/.eslintrc"));
        assert!(def.configuration_files.contains_key("/netlify.toml"));
    }

    #[test]
    fn test_overrides_only_touch_named_template() {
        let overrides = parse_overrides_yaml(SAMPLE).unwrap();
        let registry = BuiltinTemplates::with_overrides(overrides);
        let def = registry.definition("vue-cli");
        assert!(!def.configuration_files.contains_key("/.eslintrc"));
    }

    #[test]
    fn test_empty_path_rejected() {
        let yaml = "templates:\n  node:\n    /:\n      title: x\n";
        assert!(matches!(
            parse_overrides_yaml(yaml),
            Err(RegistryError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_missing_title_rejected() {
        let yaml = "templates:\n  node:\n    /a.json:\n      title: ''\n";
        assert!(matches!(
            parse_overrides_yaml(yaml),
            Err(RegistryError::MissingTitle(_))
        ));
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(
            parse_overrides_yaml("templates: [not, a, map"),
            Err(RegistryError::ParseError(_))
        ));
    }
}
