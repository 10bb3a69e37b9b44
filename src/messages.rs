//! Message types for the Elm-style architecture
//!
//! Messages represent all possible events that can occur in the panel.

use crate::model::project::ProjectTree;
use crate::panels::Section;

/// Panel interaction messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMsg {
    /// Expand or collapse a section
    ToggleSection(Section),
    /// Force a section open or closed
    SetSectionOpen { section: Section, open: bool },
    /// Press the button of the entry at this sandbox path
    Activate(String),
}

/// Changes to the sandbox, pushed by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SandboxMsg {
    /// The project tree was replaced (files created, deleted, renamed)
    ProjectChanged(ProjectTree),
    /// The sandbox switched to another template
    TemplateChanged(String),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Panel messages (sections, buttons)
    Panel(PanelMsg),
    /// Sandbox messages (project tree, template)
    Sandbox(SandboxMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create an activation message for a configuration path
    pub fn activate(path: impl Into<String>) -> Self {
        Msg::Panel(PanelMsg::Activate(path.into()))
    }

    /// Create a section toggle message
    pub fn toggle_section(section: Section) -> Self {
        Msg::Panel(PanelMsg::ToggleSection(section))
    }

    /// Create a project-changed message
    pub fn project_changed(tree: ProjectTree) -> Self {
        Msg::Sandbox(SandboxMsg::ProjectChanged(tree))
    }
}
