//! Template definitions - known project scaffolds and their configuration files
//!
//! A template (e.g. `create-react-app`, `vue-cli`) declares a set of
//! configuration files that a sandbox of that type is expected to carry.
//! The panel only reads this table; it never mutates it.
//!
//! ## Sources
//!
//! - [`BuiltinTemplates`]: the compiled-in table
//! - [`overrides`]: user additions loaded from `templates.yaml`

pub mod configuration;
pub mod icons;
pub mod overrides;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use configuration::ConfigurationFile;
pub use icons::{icon_for_template, TemplateIcon};
pub use overrides::{load_overrides_file, parse_overrides_yaml, RegistryError, TemplateOverrides};

// ============================================================================
// Template Identifiers
// ============================================================================

/// Every template the panel knows by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    Adonis,
    CreateReactApp,
    VueCli,
    PreactCli,
    Rax,
    CreateReactAppTypescript,
    Svelte,
    AngularCli,
    Parcel,
    Dojo,
    Ember,
    Sapper,
    Cxjs,
    Reason,
    Gatsby,
    Marko,
    Next,
    Nuxt,
    Node,
    Apollo,
    Nest,
    Static,
    Styleguidist,
    Gridsome,
    Vuepress,
    MdxDeck,
    Quasar,
    Unibit,
}

impl TemplateId {
    /// All templates, in declaration order
    pub const ALL: &'static [TemplateId] = &[
        TemplateId::Adonis,
        TemplateId::CreateReactApp,
        TemplateId::VueCli,
        TemplateId::PreactCli,
        TemplateId::Rax,
        TemplateId::CreateReactAppTypescript,
        TemplateId::Svelte,
        TemplateId::AngularCli,
        TemplateId::Parcel,
        TemplateId::Dojo,
        TemplateId::Ember,
        TemplateId::Sapper,
        TemplateId::Cxjs,
        TemplateId::Reason,
        TemplateId::Gatsby,
        TemplateId::Marko,
        TemplateId::Next,
        TemplateId::Nuxt,
        TemplateId::Node,
        TemplateId::Apollo,
        TemplateId::Nest,
        TemplateId::Static,
        TemplateId::Styleguidist,
        TemplateId::Gridsome,
        TemplateId::Vuepress,
        TemplateId::MdxDeck,
        TemplateId::Quasar,
        TemplateId::Unibit,
    ];

    /// The template used when a sandbox names an unknown one
    pub const DEFAULT: TemplateId = TemplateId::CreateReactApp;

    /// The identifier string sandboxes use for this template
    pub fn name(&self) -> &'static str {
        match self {
            Self::Adonis => "adonis",
            Self::CreateReactApp => "create-react-app",
            Self::VueCli => "vue-cli",
            Self::PreactCli => "preact-cli",
            Self::Rax => "rax",
            Self::CreateReactAppTypescript => "create-react-app-typescript",
            Self::Svelte => "svelte",
            Self::AngularCli => "angular-cli",
            Self::Parcel => "parcel",
            Self::Dojo => "@dojo/cli-create-app",
            Self::Ember => "ember",
            Self::Sapper => "sapper",
            Self::Cxjs => "cxjs",
            Self::Reason => "reason",
            Self::Gatsby => "gatsby",
            Self::Marko => "marko",
            Self::Next => "next",
            Self::Nuxt => "nuxt",
            Self::Node => "node",
            Self::Apollo => "apollo",
            Self::Nest => "nest",
            Self::Static => "static",
            Self::Styleguidist => "styleguidist",
            Self::Gridsome => "gridsome",
            Self::Vuepress => "vuepress",
            Self::MdxDeck => "mdx-deck",
            Self::Quasar => "quasar",
            Self::Unibit => "unibit",
        }
    }

    /// Exact-match lookup by identifier string
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.name() == name)
    }

    /// Configuration files a sandbox of this template is expected to have
    pub fn configuration_files(&self) -> BTreeMap<String, ConfigurationFile> {
        use configuration::*;

        let extras: &[BuiltinFile] = match self {
            Self::CreateReactApp => &[JSCONFIG],
            Self::CreateReactAppTypescript | Self::Nest => &[TSCONFIG],
            Self::AngularCli => &[TSCONFIG, ANGULAR_JSON],
            Self::Parcel => &[TSCONFIG, BABELRC],
            Self::VueCli | Self::PreactCli => &[BABELRC],
            _ => &[],
        };

        let mut files: BTreeMap<String, ConfigurationFile> = DEFAULT_FILES
            .iter()
            .chain(extras)
            .map(|file| file.to_entry())
            .collect();

        // Static sites are served as-is and carry no package manifest
        if *self == Self::Static {
            files.remove(PACKAGE_JSON.path);
        }

        files
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemplateId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| RegistryError::UnknownTemplate(s.to_string()))
    }
}

// ============================================================================
// Definitions & Registry
// ============================================================================

/// A template name paired with its configuration-file descriptors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    pub name: String,
    /// Descriptors keyed by sandbox path (e.g. `/package.json`)
    pub configuration_files: BTreeMap<String, ConfigurationFile>,
}

impl TemplateDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            configuration_files: BTreeMap::new(),
        }
    }

    /// Builder-style helper for adding a descriptor
    pub fn with_file(mut self, path: impl Into<String>, file: ConfigurationFile) -> Self {
        self.configuration_files.insert(path.into(), file);
        self
    }
}

/// Source of template definitions
///
/// Implementations must be total: a name that is not known still yields a
/// definition (usually the default template's).
pub trait TemplateRegistry {
    fn definition(&self, template: &str) -> TemplateDefinition;
}

/// The compiled-in template table, optionally extended by user overrides
#[derive(Debug, Clone, Default)]
pub struct BuiltinTemplates {
    overrides: TemplateOverrides,
}

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: TemplateOverrides) -> Self {
        Self { overrides }
    }

    /// Load `templates.yaml` from the config directory if present
    ///
    /// A missing or malformed file leaves the built-in table untouched.
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::templates_file() else {
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("No template overrides at {}", path.display());
            return Self::default();
        }

        match load_overrides_file(&path) {
            Ok(overrides) => {
                tracing::info!(
                    "Loaded {} template override(s) from {}",
                    overrides.len(),
                    path.display()
                );
                Self::with_overrides(overrides)
            }
            Err(e) => {
                tracing::warn!("Ignoring template overrides at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

impl TemplateRegistry for BuiltinTemplates {
    fn definition(&self, template: &str) -> TemplateDefinition {
        let id = TemplateId::from_name(template).unwrap_or_else(|| {
            tracing::debug!(
                "Unknown template {:?}, using {}",
                template,
                TemplateId::DEFAULT
            );
            TemplateId::DEFAULT
        });

        let mut definition = TemplateDefinition {
            name: id.name().to_string(),
            configuration_files: id.configuration_files(),
        };

        // Overrides apply to the requested name, even for unknown templates
        self.overrides.apply(template, &mut definition);
        definition
    }
}
