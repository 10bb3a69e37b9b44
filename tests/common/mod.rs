//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::Path;

use sandbox_config::config::PanelConfig;
use sandbox_config::model::{AppModel, ProjectTree, Sandbox};
use sandbox_config::template::{BuiltinTemplates, ConfigurationFile, TemplateDefinition};

/// Create a test model for a template with the given project paths
pub fn test_model(template: &str, paths: &[&str]) -> AppModel {
    let sandbox = Sandbox::new(template, ProjectTree::from_paths(paths));
    AppModel::new(sandbox, BuiltinTemplates::new(), PanelConfig::default())
}

/// Create a definition whose descriptor titles are the path's file name
pub fn test_definition(paths: &[&str]) -> TemplateDefinition {
    paths
        .iter()
        .fold(TemplateDefinition::new("test"), |def, path| {
            let title = path.rsplit('/').next().unwrap_or(*path);
            def.with_file(
                *path,
                ConfigurationFile::new(title, format!("Describes {}", title)),
            )
        })
}

/// Write files (and their parent directories) under `root`
pub fn write_files(root: &Path, files: &[&str]) {
    for file in files {
        let path = root.join(file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directory");
        }
        std::fs::write(&path, "").expect("Failed to write file");
    }
}
