//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod panel;
mod sandbox;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

pub use panel::update_panel;
pub use sandbox::update_sandbox;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let span = tracing::debug_span!("update", msg = msg_kind(&msg));
    let _guard = span.enter();

    let result = match msg {
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::Sandbox(m) => sandbox::update_sandbox(model, m),
    };

    tracing::trace!(cmd = ?result, "update complete");
    result
}

/// Short label for a message, without its payload (trees can be large)
fn msg_kind(msg: &Msg) -> &'static str {
    use crate::messages::{PanelMsg, SandboxMsg};

    match msg {
        Msg::Panel(PanelMsg::ToggleSection(_)) => "Panel::ToggleSection",
        Msg::Panel(PanelMsg::SetSectionOpen { .. }) => "Panel::SetSectionOpen",
        Msg::Panel(PanelMsg::Activate(_)) => "Panel::Activate",
        Msg::Sandbox(SandboxMsg::ProjectChanged(_)) => "Sandbox::ProjectChanged",
        Msg::Sandbox(SandboxMsg::TemplateChanged(_)) => "Sandbox::TemplateChanged",
    }
}
