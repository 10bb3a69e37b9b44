//! Configuration-file descriptors shipped with the built-in templates

use serde::{Deserialize, Serialize};

/// Metadata describing a configuration file a template expects
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigurationFile {
    /// File name shown in the panel (also the name used when creating it)
    pub title: String,
    /// One-line explanation of what the file controls
    #[serde(default)]
    pub description: String,
}

impl ConfigurationFile {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A compiled-in descriptor with its sandbox path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinFile {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl BuiltinFile {
    pub fn to_entry(self) -> (String, ConfigurationFile) {
        (
            self.path.to_string(),
            ConfigurationFile::new(self.title, self.description),
        )
    }
}

pub const PACKAGE_JSON: BuiltinFile = BuiltinFile {
    path: "/package.json",
    title: "package.json",
    description: "Describes the overall configuration of your project.",
};

pub const PRETTIERRC: BuiltinFile = BuiltinFile {
    path: "/.prettierrc",
    title: ".prettierrc",
    description: "Defines how all files will be prettified by Prettier.",
};

pub const SANDBOX_CONFIG: BuiltinFile = BuiltinFile {
    path: "/sandbox.config.json",
    title: "sandbox.config.json",
    description: "Configuration specific to the current sandbox.",
};

pub const NOW_JSON: BuiltinFile = BuiltinFile {
    path: "/now.json",
    title: "now.json",
    description: "Configuration for your deployments on ZEIT Now.",
};

pub const NETLIFY_TOML: BuiltinFile = BuiltinFile {
    path: "/netlify.toml",
    title: "netlify.toml",
    description: "Configuration for your deployments on Netlify.",
};

pub const TSCONFIG: BuiltinFile = BuiltinFile {
    path: "/tsconfig.json",
    title: "tsconfig.json",
    description: "Configuration for how TypeScript transpiles.",
};

pub const JSCONFIG: BuiltinFile = BuiltinFile {
    path: "/jsconfig.json",
    title: "jsconfig.json",
    description: "Configuration for JavaScript language features in the editor.",
};

pub const BABELRC: BuiltinFile = BuiltinFile {
    path: "/.babelrc",
    title: ".babelrc",
    description: "Configuration for how Babel transpiles your code.",
};

pub const ANGULAR_JSON: BuiltinFile = BuiltinFile {
    path: "/angular.json",
    title: "angular.json",
    description: "Configuration for your Angular CLI workspace.",
};

/// Files every template declares
pub const DEFAULT_FILES: &[BuiltinFile] =
    &[PACKAGE_JSON, PRETTIERRC, SANDBOX_CONFIG, NOW_JSON, NETLIFY_TOML];
