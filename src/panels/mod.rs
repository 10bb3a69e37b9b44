//! Panel implementations
//!
//! Each panel owns its interaction state and builds a view model that the
//! text view renders. Side effects leave a panel only as [`crate::Cmd`]s.
//!
//! ## Available Panels
//!
//! - **ConfigurationFilesPanel**: the sandbox's configuration files, grouped
//!   into files that exist and files that can be created

pub mod configuration_files;

pub use configuration_files::{
    ConfigEntry, ConfigFileIcon, ConfigurationFilesPanel, ConfigurationPartition,
    ConfigurationView, CreatedFile, PanelAction, Section,
};
