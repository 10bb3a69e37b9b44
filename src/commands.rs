//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! Selecting and creating modules belong to the host application; the panel
//! only describes what it wants done.

use serde::Serialize;

use crate::model::project::ModuleId;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "command", content = "args", rename_all = "snake_case")]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the panel
    Redraw,
    /// Ask the host to open an existing module in the editor
    SelectModule { id: ModuleId },
    /// Ask the host to create a new module
    CreateModule {
        title: String,
        /// Parent directory; `None` creates the file at the project root
        directory_shortid: Option<String>,
    },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a redraw command
    pub fn redraw() -> Self {
        Cmd::Redraw
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            _ => false,
        }
    }

    /// Flatten nested batches into a list of leaf commands, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_redraw() {
        assert!(Cmd::Redraw.needs_redraw());
        assert!(!Cmd::None.needs_redraw());
        assert!(Cmd::Batch(vec![Cmd::None, Cmd::Redraw]).needs_redraw());
        assert!(!Cmd::SelectModule { id: ModuleId(1) }.needs_redraw());
    }

    #[test]
    fn test_flatten() {
        let cmd = Cmd::Batch(vec![
            Cmd::None,
            Cmd::Batch(vec![Cmd::Redraw, Cmd::SelectModule { id: ModuleId(2) }]),
        ]);
        assert_eq!(
            cmd.flatten(),
            vec![Cmd::Redraw, Cmd::SelectModule { id: ModuleId(2) }]
        );
    }
}
