//! Template icons
//!
//! Maps a template identifier to the icon shown next to it. The lookup is
//! total: anything that isn't a known template gets the React icon.

use serde::Serialize;

use super::TemplateId;

/// Display icon for a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TemplateIcon {
    Adonis,
    Angular,
    Apollo,
    React,
    Reason,
    Ember,
    Preact,
    Rax,
    Vue,
    Svelte,
    Dojo,
    CxJS,
    Gatsby,
    Marko,
    Next,
    Nuxt,
    Node,
    Nest,
    Html5,
    Styleguidist,
    MdxDeck,
    Gridsome,
    Quasar,
    Sapper,
    JavaScript,
    VuePress,
    Unibit,
}

impl TemplateIcon {
    /// Icon used when a template is not recognised
    pub const DEFAULT: TemplateIcon = TemplateIcon::React;

    /// Icon for a known template
    pub fn for_template(id: TemplateId) -> Self {
        match id {
            TemplateId::Adonis => Self::Adonis,
            TemplateId::CreateReactApp => Self::React,
            TemplateId::VueCli => Self::Vue,
            TemplateId::PreactCli => Self::Preact,
            TemplateId::Rax => Self::Rax,
            TemplateId::CreateReactAppTypescript => Self::React,
            TemplateId::Svelte => Self::Svelte,
            TemplateId::AngularCli => Self::Angular,
            TemplateId::Parcel => Self::JavaScript,
            TemplateId::Dojo => Self::Dojo,
            TemplateId::Ember => Self::Ember,
            TemplateId::Sapper => Self::Sapper,
            TemplateId::Cxjs => Self::CxJS,
            TemplateId::Reason => Self::Reason,
            TemplateId::Gatsby => Self::Gatsby,
            TemplateId::Marko => Self::Marko,
            TemplateId::Next => Self::Next,
            TemplateId::Nuxt => Self::Nuxt,
            TemplateId::Node => Self::Node,
            TemplateId::Apollo => Self::Apollo,
            TemplateId::Nest => Self::Nest,
            TemplateId::Static => Self::Html5,
            TemplateId::Styleguidist => Self::Styleguidist,
            TemplateId::Gridsome => Self::Gridsome,
            TemplateId::Vuepress => Self::VuePress,
            TemplateId::MdxDeck => Self::MdxDeck,
            TemplateId::Quasar => Self::Quasar,
            TemplateId::Unibit => Self::Unibit,
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Adonis => "AdonisJS",
            Self::Angular => "Angular",
            Self::Apollo => "Apollo",
            Self::React => "React",
            Self::Reason => "Reason",
            Self::Ember => "Ember",
            Self::Preact => "Preact",
            Self::Rax => "Rax",
            Self::Vue => "Vue",
            Self::Svelte => "Svelte",
            Self::Dojo => "Dojo",
            Self::CxJS => "CxJS",
            Self::Gatsby => "Gatsby",
            Self::Marko => "Marko",
            Self::Next => "Next.js",
            Self::Nuxt => "Nuxt.js",
            Self::Node => "Node",
            Self::Nest => "Nest",
            Self::Html5 => "HTML5",
            Self::Styleguidist => "Styleguidist",
            Self::MdxDeck => "MDX Deck",
            Self::Gridsome => "Gridsome",
            Self::Quasar => "Quasar",
            Self::Sapper => "Sapper",
            Self::JavaScript => "JavaScript",
            Self::VuePress => "VuePress",
            Self::Unibit => "Unibit",
        }
    }

    /// Text-based icon (Nerd Font)
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::React => "\u{e7ba}",
            Self::Angular => "\u{e753}",
            Self::Vue | Self::VuePress | Self::Gridsome | Self::Quasar => "\u{e6a0}",
            Self::Nuxt => "\u{f1106}",
            Self::Svelte | Self::Sapper => "\u{e697}",
            Self::Ember => "\u{e71b}",
            Self::Node | Self::Adonis | Self::Nest => "\u{e718}",
            Self::Html5 => "\u{e736}",
            Self::JavaScript | Self::Dojo | Self::Marko | Self::Rax | Self::Unibit => "\u{e74e}",
            Self::Reason => "\u{e687}",
            Self::Gatsby => "\u{f0e43}",
            Self::Next => "\u{e83e}",
            Self::Apollo => "\u{e8d1}",
            Self::MdxDeck | Self::Styleguidist => "\u{e73e}",
            Self::Preact | Self::CxJS => "\u{e7ba}",
        }
    }
}

/// Resolve the icon for a template identifier
///
/// Exact match only; unknown identifiers fall back to [`TemplateIcon::DEFAULT`].
pub fn icon_for_template(template: &str) -> TemplateIcon {
    TemplateId::from_name(template)
        .map(TemplateIcon::for_template)
        .unwrap_or(TemplateIcon::DEFAULT)
}
