//! Text rendering of the configuration files panel

use crate::config::PanelConfig;
use crate::model::AppModel;
use crate::panels::configuration_files::{INTRO_HEADING, INTRO_TEXT};
use crate::panels::{ConfigEntry, ConfigurationFilesPanel, ConfigurationView, Section};
use crate::template::icon_for_template;
use crate::util::text::wrap_words;

use super::button::{button_cell, BUTTON_COLUMN_WIDTH};
use super::frame::TextFrame;

/// Indent of section content under its header
const CONTENT_INDENT: usize = 2;

/// Narrowest width the layout is computed for
const MIN_WIDTH: usize = CONTENT_INDENT + BUTTON_COLUMN_WIDTH + 12;

const CHEVRON_OPEN: &str = "▾";
const CHEVRON_CLOSED: &str = "▸";

/// Rendering switches, usually taken from [`PanelConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: usize,
    pub show_icons: bool,
    pub show_descriptions: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&PanelConfig::default())
    }
}

impl From<&PanelConfig> for RenderOptions {
    fn from(config: &PanelConfig) -> Self {
        Self {
            width: config.panel_width,
            show_icons: config.show_icons,
            show_descriptions: config.show_descriptions,
        }
    }
}

/// Render the whole model: template header plus both sections
pub fn render_model(model: &AppModel) -> Vec<String> {
    render_panel(
        &model.view(),
        &model.panel,
        &model.sandbox.template,
        RenderOptions::from(&model.config),
    )
}

/// Render a panel view into lines of text
pub fn render_panel(
    view: &ConfigurationView,
    panel: &ConfigurationFilesPanel,
    template: &str,
    options: RenderOptions,
) -> Vec<String> {
    let mut frame = TextFrame::new(options.width.max(MIN_WIDTH));

    let icon = icon_for_template(template);
    if options.show_icons {
        frame.push(&format!("{} {} · {}", icon.glyph(), icon.label(), template));
    } else {
        frame.push(&format!("{} · {}", icon.label(), template));
    }
    frame.blank();

    for section in Section::ALL {
        render_section(&mut frame, view, panel, section, options);
        frame.blank();
    }

    frame.finish()
}

fn render_section(
    frame: &mut TextFrame,
    view: &ConfigurationView,
    panel: &ConfigurationFilesPanel,
    section: Section,
    options: RenderOptions,
) {
    let open = panel.is_open(section);
    let chevron = if open { CHEVRON_OPEN } else { CHEVRON_CLOSED };
    frame.push(&format!("{} {}", chevron, section.title()));
    if !open {
        return;
    }

    if section == Section::Created {
        let indent = " ".repeat(CONTENT_INDENT);
        frame.push(&format!("{}{}", indent, INTRO_HEADING));
        for line in wrap_words(INTRO_TEXT, frame.width() - CONTENT_INDENT) {
            frame.push(&format!("{}{}", indent, line));
        }
        frame.blank();
    }

    for entry in view.entries(section) {
        render_entry(frame, entry, options);
        frame.blank();
    }
}

fn render_entry(frame: &mut TextFrame, entry: &ConfigEntry, options: RenderOptions) {
    let title = if options.show_icons {
        format!("{} {}", entry.icon.glyph(), entry.title)
    } else {
        entry.title.clone()
    };
    let button = button_cell(entry.action.button_label());

    if !options.show_descriptions || entry.description.is_empty() {
        frame.push_row(CONTENT_INDENT, &title, &button);
        return;
    }

    frame.push_row(CONTENT_INDENT, &title, "");

    // Description column is whatever the fixed button column leaves over
    let desc_width = frame
        .width()
        .saturating_sub(CONTENT_INDENT + BUTTON_COLUMN_WIDTH + 1);
    let mut lines = wrap_words(&entry.description, desc_width).into_iter();
    if let Some(first) = lines.next() {
        frame.push_row(CONTENT_INDENT, &first, &button);
    }
    for line in lines {
        frame.push_row(CONTENT_INDENT, &line, "");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectTree;
    use crate::panels::ConfigurationPartition;
    use crate::template::{ConfigurationFile, TemplateDefinition};

    fn sample_view() -> ConfigurationView {
        let def = TemplateDefinition::new("node")
            .with_file(
                "/package.json",
                ConfigurationFile::new("package.json", "Project manifest."),
            )
            .with_file(
                "/netlify.toml",
                ConfigurationFile::new("netlify.toml", "Netlify deploys."),
            );
        let tree = ProjectTree::from_paths(&["package.json"]);
        ConfigurationView::new(&ConfigurationPartition::build(&def, &tree))
    }

    fn plain() -> RenderOptions {
        RenderOptions {
            width: 60,
            show_icons: false,
            show_descriptions: true,
        }
    }

    #[test]
    fn test_sections_and_buttons() {
        let lines = render_panel(
            &sample_view(),
            &ConfigurationFilesPanel::default(),
            "node",
            plain(),
        );
        let text = lines.join("\n");

        assert_eq!(lines[0], "Node · node");
        let created = text.find("▾ Configuration Files").unwrap();
        let other = text.find("▾ Other Configuration").unwrap();
        let manifest = text.find("package.json").unwrap();
        let netlify = text.find("netlify.toml").unwrap();
        assert!(created < manifest && manifest < other && other < netlify);

        assert!(lines
            .iter()
            .any(|l| l.contains("Project manifest.") && l.contains("[ Edit ]")));
        assert!(lines
            .iter()
            .any(|l| l.contains("Netlify deploys.") && l.contains("[ Create File ]")));
    }

    #[test]
    fn test_collapsed_section_renders_header_only() {
        let mut panel = ConfigurationFilesPanel::default();
        panel.toggle(Section::Created);
        let lines = render_panel(&sample_view(), &panel, "node", plain());
        let text = lines.join("\n");

        assert!(text.contains("▸ Configuration Files"));
        assert!(!text.contains("package.json"));
        assert!(!text.contains(INTRO_HEADING));
        assert!(text.contains("netlify.toml"));
    }

    #[test]
    fn test_lines_never_exceed_width() {
        let options = RenderOptions {
            width: 40,
            ..plain()
        };
        let lines = render_panel(
            &sample_view(),
            &ConfigurationFilesPanel::default(),
            "node",
            options,
        );
        for line in &lines {
            assert!(line.chars().count() <= 40, "{line:?}");
        }
    }

    #[test]
    fn test_hidden_descriptions_put_button_on_title_row() {
        let options = RenderOptions {
            show_descriptions: false,
            ..plain()
        };
        let lines = render_panel(
            &sample_view(),
            &ConfigurationFilesPanel::default(),
            "node",
            options,
        );
        assert!(lines
            .iter()
            .any(|l| l.contains("package.json") && l.contains("[ Edit ]")));
        assert!(!lines.iter().any(|l| l.contains("Project manifest.")));
    }
}
