//! Configuration panel message handlers

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::AppModel;

/// Handle panel messages (sections, entry buttons)
pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::ToggleSection(section) => {
            model.panel.toggle(section);
            tracing::trace!(
                "Section {:?} toggled: open={}",
                section,
                model.panel.is_open(section)
            );
            Some(Cmd::redraw())
        }

        PanelMsg::SetSectionOpen { section, open } => {
            if model.panel.is_open(section) == open {
                return None;
            }
            model.panel.set_open(section, open);
            Some(Cmd::redraw())
        }

        PanelMsg::Activate(path) => {
            // Resolve against the tree as it is now, not as it was last drawn
            let partition = model.partition();
            match partition.action_for(&path) {
                Some(action) => {
                    tracing::debug!("Activating {}: {:?}", path, action);
                    Some(action.into_cmd())
                }
                None => {
                    tracing::warn!(
                        "No configuration file {} for template {}",
                        path,
                        model.sandbox.template
                    );
                    None
                }
            }
        }
    }
}
