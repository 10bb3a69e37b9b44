//! Shared helpers for benchmarks

use sandbox_config::config::PanelConfig;
use sandbox_config::model::{AppModel, ProjectTree, Sandbox};
use sandbox_config::template::BuiltinTemplates;

/// Build a project tree with `files` source files spread over ten directories
#[allow(dead_code)]
pub fn make_tree(files: usize) -> ProjectTree {
    let mut tree = ProjectTree::from_paths(&["package.json", ".prettierrc"]);
    for i in 0..files {
        tree.insert_path(&format!("src/dir{}/file{}.js", i % 10, i));
    }
    tree
}

/// Create an AppModel over a tree of the given size
#[allow(dead_code)]
pub fn make_model(template: &str, files: usize) -> AppModel {
    AppModel::new(
        Sandbox::new(template, make_tree(files)),
        BuiltinTemplates::new(),
        PanelConfig::default(),
    )
}
