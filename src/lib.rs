//! Sandbox configuration panel - Elm-style panel for a sandbox's config files
//!
//! This crate provides the core types and logic for listing the configuration
//! files a project template supports, split into files that exist and files
//! that can be created, plus the icon lookup for templates.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod fs_watcher;
pub mod messages;
pub mod model;
pub mod panels;
pub mod template;
pub mod tracing;
pub mod update;
pub mod util;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::PanelConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use panels::{ConfigurationPartition, ConfigurationView};
pub use template::{icon_for_template, TemplateIcon, TemplateRegistry};
