//! Configuration files panel
//!
//! Lists the configuration files a sandbox's template knows about, split into
//! files that already exist in the project ("Configuration Files", with an
//! Edit action) and files that could be added ("Other Configuration", with a
//! Create File action).
//!
//! The panel performs no I/O: activating an entry produces a [`PanelAction`],
//! which the update loop turns into a [`Cmd`] for the host to execute.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::commands::Cmd;
use crate::model::project::{Module, ModuleId, ProjectTree};
use crate::template::{ConfigurationFile, TemplateDefinition, TemplateRegistry};

// ============================================================================
// Config File Icons
// ============================================================================

/// Icon shown next to a configuration file entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConfigFileIcon {
    Netlify,
    Npm,
    Zeit,
    Prettier,
}

impl ConfigFileIcon {
    /// Look up the icon by descriptor title; unknown titles get the npm icon
    pub fn for_title(title: &str) -> Self {
        match title {
            "netlify.toml" => Self::Netlify,
            "package.json" => Self::Npm,
            "now.json" => Self::Zeit,
            ".prettierrc" => Self::Prettier,
            _ => Self::Npm,
        }
    }

    /// Get a text-based icon (Nerd Font)
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Netlify => "\u{e83f}",
            Self::Npm => "\u{e71e}",
            Self::Zeit => "\u{f0e1e}",
            Self::Prettier => "\u{e6b4}",
        }
    }
}

// ============================================================================
// Partition
// ============================================================================

/// A configuration file that exists in the project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedFile {
    pub config: ConfigurationFile,
    pub module: Module,
}

/// Template descriptors split by whether the file exists
///
/// Every descriptor path lands in exactly one of the two maps. Both maps
/// iterate in ascending path order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigurationPartition {
    pub created: BTreeMap<String, CreatedFile>,
    pub pending: BTreeMap<String, ConfigurationFile>,
}

impl ConfigurationPartition {
    /// Partition a template's descriptors against the project tree
    pub fn build(definition: &TemplateDefinition, tree: &ProjectTree) -> Self {
        let mut partition = Self::default();

        for (path, config) in &definition.configuration_files {
            match tree.resolve_module(path) {
                Some(module) => {
                    partition.created.insert(
                        path.clone(),
                        CreatedFile {
                            config: config.clone(),
                            module: module.clone(),
                        },
                    );
                }
                None => {
                    partition.pending.insert(path.clone(), config.clone());
                }
            }
        }

        tracing::trace!(
            template = %definition.name,
            created = partition.created.len(),
            pending = partition.pending.len(),
            "Partitioned configuration files"
        );

        partition
    }

    /// Look up the template for `template` in `registry` and partition it
    pub fn for_template(
        registry: &impl TemplateRegistry,
        template: &str,
        tree: &ProjectTree,
    ) -> Self {
        Self::build(&registry.definition(template), tree)
    }

    pub fn len(&self) -> usize {
        self.created.len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.pending.is_empty()
    }

    pub fn is_created(&self, path: &str) -> bool {
        self.created.contains_key(path)
    }

    /// The action for the entry at `path`, if the path is part of the template
    pub fn action_for(&self, path: &str) -> Option<PanelAction> {
        if let Some(created) = self.created.get(path) {
            return Some(PanelAction::Edit {
                module_id: created.module.id,
            });
        }
        self.pending.get(path).map(|config| PanelAction::Create {
            title: config.title.clone(),
        })
    }
}

// ============================================================================
// Actions
// ============================================================================

/// What activating an entry asks the host to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PanelAction {
    /// Open the existing file
    Edit { module_id: ModuleId },
    /// Create the file at the project root
    Create { title: String },
}

impl PanelAction {
    pub fn button_label(&self) -> &'static str {
        match self {
            PanelAction::Edit { .. } => "Edit",
            PanelAction::Create { .. } => "Create File",
        }
    }

    /// Convert to the command the host executes
    pub fn into_cmd(self) -> Cmd {
        match self {
            PanelAction::Edit { module_id } => Cmd::SelectModule { id: module_id },
            PanelAction::Create { title } => Cmd::CreateModule {
                title,
                directory_shortid: None,
            },
        }
    }
}

// ============================================================================
// View Model
// ============================================================================

/// The two groups shown by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Section {
    /// Files that already exist
    Created,
    /// Files the template supports but the project lacks
    Other,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Created, Section::Other];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Created => "Configuration Files",
            Section::Other => "Other Configuration",
        }
    }
}

/// Heading shown above the created files
pub const INTRO_HEADING: &str = "Configure your Sandbox";

/// Explanation shown under the heading
pub const INTRO_TEXT: &str = "Several configuration files are supported per template. \
     You can see and edit all supported files for the current sandbox here.";

/// One row of the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    pub path: String,
    pub title: String,
    pub description: String,
    pub icon: ConfigFileIcon,
    pub action: PanelAction,
}

impl ConfigEntry {
    fn new(path: &str, config: &ConfigurationFile, action: PanelAction) -> Self {
        Self {
            path: path.to_string(),
            title: config.title.clone(),
            description: config.description.clone(),
            icon: ConfigFileIcon::for_title(&config.title),
            action,
        }
    }
}

/// Renderable content of the panel, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigurationView {
    pub created: Vec<ConfigEntry>,
    pub other: Vec<ConfigEntry>,
}

impl ConfigurationView {
    pub fn new(partition: &ConfigurationPartition) -> Self {
        let created = partition
            .created
            .iter()
            .map(|(path, file)| {
                ConfigEntry::new(
                    path,
                    &file.config,
                    PanelAction::Edit {
                        module_id: file.module.id,
                    },
                )
            })
            .collect();

        let other = partition
            .pending
            .iter()
            .map(|(path, config)| {
                ConfigEntry::new(
                    path,
                    config,
                    PanelAction::Create {
                        title: config.title.clone(),
                    },
                )
            })
            .collect();

        Self { created, other }
    }

    pub fn entries(&self, section: Section) -> &[ConfigEntry] {
        match section {
            Section::Created => &self.created,
            Section::Other => &self.other,
        }
    }

    /// All entries, created first
    pub fn iter(&self) -> impl Iterator<Item = &ConfigEntry> {
        self.created.iter().chain(self.other.iter())
    }
}

// ============================================================================
// Panel State
// ============================================================================

/// Collapsible state of the panel's two sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationFilesPanel {
    pub created_open: bool,
    pub other_open: bool,
}

impl Default for ConfigurationFilesPanel {
    fn default() -> Self {
        // Both sections start expanded
        Self {
            created_open: true,
            other_open: true,
        }
    }
}

impl ConfigurationFilesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, section: Section) -> bool {
        match section {
            Section::Created => self.created_open,
            Section::Other => self.other_open,
        }
    }

    pub fn toggle(&mut self, section: Section) {
        match section {
            Section::Created => self.created_open = !self.created_open,
            Section::Other => self.other_open = !self.other_open,
        }
    }

    pub fn set_open(&mut self, section: Section, open: bool) {
        match section {
            Section::Created => self.created_open = open,
            Section::Other => self.other_open = open,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
