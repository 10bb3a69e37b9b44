//! sandbox-config - configuration files panel for sandbox projects

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;

use sandbox_config::cli::{CliArgs, RunConfig, RunMode};
use sandbox_config::commands::Cmd;
use sandbox_config::config::PanelConfig;
use sandbox_config::fs_watcher::ProjectWatcher;
use sandbox_config::messages::{Msg, SandboxMsg};
use sandbox_config::model::{detect_template, AppModel, ProjectTree, Sandbox};
use sandbox_config::template::{BuiltinTemplates, TemplateIcon, TemplateId};
use sandbox_config::update::update;
use sandbox_config::view::render_model;

/// How long a watch-mode wait blocks before checking again
const WATCH_POLL: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    let args = CliArgs::parse();
    sandbox_config::tracing::init(args.verbose);

    let run = args.into_config().map_err(|e| anyhow!(e))?;

    let mut config = PanelConfig::load();
    run.apply_to(&mut config);

    match run.mode {
        RunMode::ListTemplates => return list_templates(&config),
        RunMode::InitConfig => return init_config(&config, run.template.as_deref()),
        _ => {}
    }

    if let Some(Err(e)) = run.template.as_deref().map(str::parse::<TemplateId>) {
        tracing::warn!("{}, showing {} files", e, TemplateId::DEFAULT);
    }

    let root = run
        .root
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", run.root.display()))?;
    let sandbox = Sandbox::from_directory(&root, run.template.as_deref(), &config.default_template)
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    let mut model = AppModel::new(sandbox, BuiltinTemplates::load(), config);

    match &run.mode {
        RunMode::Json => print_json(&model),
        RunMode::Activate(path) => activate(&mut model, path, run.json),
        RunMode::Panel { watch: false } => print_panel(&model, &run),
        RunMode::Panel { watch: true } => watch(&mut model, &run),
        RunMode::ListTemplates | RunMode::InitConfig => Ok(()),
    }
}

fn list_templates(config: &PanelConfig) -> Result<()> {
    let mut out = io::stdout().lock();
    for id in TemplateId::ALL {
        let icon = TemplateIcon::for_template(*id);
        if config.show_icons {
            writeln!(out, "{} {:<30} {}", icon.glyph(), id.name(), icon.label())?;
        } else {
            writeln!(out, "{:<30} {}", id.name(), icon.label())?;
        }
    }
    Ok(())
}

fn init_config(config: &PanelConfig, template: Option<&str>) -> Result<()> {
    let mut config = config.clone();
    if let Some(template) = template {
        config.default_template = template.to_string();
    }
    let path = config.save().map_err(|e| anyhow!(e))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn print_json(model: &AppModel) -> Result<()> {
    let json = serde_json::to_string_pretty(&model.partition())
        .context("Failed to serialize configuration files")?;
    println!("{}", json);
    Ok(())
}

fn print_panel(model: &AppModel, run: &RunConfig) -> Result<()> {
    if run.json {
        return print_json(model);
    }
    let mut out = io::stdout().lock();
    for line in render_model(model) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn activate(model: &mut AppModel, path: &str, json: bool) -> Result<()> {
    let Some(cmd) = update(model, Msg::activate(path)) else {
        bail!(
            "{} is not a configuration file of template {}",
            path,
            model.sandbox.template
        );
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&cmd)?);
        return Ok(());
    }

    for cmd in cmd.flatten() {
        match cmd {
            Cmd::SelectModule { id } => {
                let module_path = model
                    .sandbox
                    .project
                    .module_path(id)
                    .unwrap_or_else(|| id.to_string());
                println!("select {} ({})", module_path, id);
            }
            Cmd::CreateModule {
                title,
                directory_shortid,
            } => {
                let parent = directory_shortid.as_deref().unwrap_or("/");
                println!("create {} in {}", title, parent);
            }
            Cmd::Redraw | Cmd::None | Cmd::Batch(_) => {}
        }
    }
    Ok(())
}

fn watch(model: &mut AppModel, run: &RunConfig) -> Result<()> {
    let root = run.root.canonicalize()?;
    let watcher = ProjectWatcher::new(root.clone())
        .with_context(|| format!("Failed to watch {}", root.display()))?;

    redraw(model, run)?;

    loop {
        let changes = watcher.wait_changes(WATCH_POLL);
        if changes.is_empty() {
            continue;
        }

        let tree = match ProjectTree::from_directory(&root) {
            Ok(tree) => tree,
            Err(e) => {
                tracing::warn!("Failed to rescan {}: {}", root.display(), e);
                continue;
            }
        };

        let mut cmds = Vec::new();
        cmds.extend(update(model, Msg::project_changed(tree)));

        // An explicit --template pins the template; otherwise follow the file
        if run.template.is_none() {
            let template =
                detect_template(&root).unwrap_or_else(|| model.config.default_template.clone());
            cmds.extend(update(
                model,
                Msg::Sandbox(SandboxMsg::TemplateChanged(template)),
            ));
        }

        if Cmd::Batch(cmds).needs_redraw() {
            redraw(model, run)?;
        }
    }
}

fn redraw(model: &AppModel, run: &RunConfig) -> Result<()> {
    // Clear screen and home cursor
    print!("\x1b[2J\x1b[H");
    print_panel(model, run)?;
    io::stdout().flush()?;
    Ok(())
}
