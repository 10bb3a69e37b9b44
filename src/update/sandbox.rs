//! Sandbox change handlers (pushed by the host)

use crate::commands::Cmd;
use crate::messages::SandboxMsg;
use crate::model::AppModel;

/// Handle sandbox messages (project tree, template)
pub fn update_sandbox(model: &mut AppModel, msg: SandboxMsg) -> Option<Cmd> {
    match msg {
        SandboxMsg::ProjectChanged(tree) => {
            if model.sandbox.project == tree {
                return None;
            }
            tracing::debug!(
                "Project tree changed: {} modules, {} directories",
                tree.modules().len(),
                tree.directories().len()
            );
            model.sandbox.project = tree;
            Some(Cmd::redraw())
        }

        SandboxMsg::TemplateChanged(template) => {
            if model.sandbox.template == template {
                return None;
            }
            tracing::info!(
                "Template changed: {} -> {}",
                model.sandbox.template,
                template
            );
            model.sandbox.template = template;
            Some(Cmd::redraw())
        }
    }
}
