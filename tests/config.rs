//! Integration tests for configuration loading and CLI handling

use sandbox_config::cli::{normalize_config_path, CliArgs, RunMode};
use sandbox_config::config::PanelConfig;
use sandbox_config::config_paths;
use sandbox_config::template::{parse_overrides_yaml, BuiltinTemplates, TemplateRegistry};

use clap::Parser;

#[test]
fn test_config_defaults() {
    let config = PanelConfig::default();
    assert_eq!(config.default_template, "create-react-app");
    assert!(config.show_icons);
    assert!(config.show_descriptions);
    assert_eq!(config.panel_width, 60);
}

#[test]
fn test_config_yaml_round_trip() {
    let config = PanelConfig {
        default_template: "vue-cli".to_string(),
        show_descriptions: false,
        show_icons: true,
        panel_width: 80,
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert_eq!(PanelConfig::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_config_paths_use_app_dir() {
    if let Some(file) = config_paths::config_file() {
        assert!(file.ends_with("config.yaml"));
    }
    if let Some(file) = config_paths::templates_file() {
        assert!(file.ends_with("templates.yaml"));
    }
}

#[test]
fn test_overrides_extend_registry() {
    let yaml = r#"
templates:
  node:
    .nvmrc:
      title: .nvmrc
      description: Node version.
"#;
    let registry = BuiltinTemplates::with_overrides(parse_overrides_yaml(yaml).unwrap());
    let def = registry.definition("node");
    assert_eq!(def.configuration_files["/.nvmrc"].title, ".nvmrc");
    assert!(def.configuration_files.contains_key("/package.json"));
}

#[test]
fn test_cli_activate_mode() {
    let dir = tempfile::tempdir().unwrap();
    let args = CliArgs::parse_from([
        "sandbox-config",
        dir.path().to_str().unwrap(),
        "--activate",
        "netlify.toml",
    ]);
    let config = args.into_config().unwrap();
    assert_eq!(config.mode, RunMode::Activate("/netlify.toml".to_string()));
}

#[test]
fn test_cli_watch_with_activate_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let args = CliArgs::parse_from([
        "sandbox-config",
        dir.path().to_str().unwrap(),
        "--watch",
        "--activate",
        "/package.json",
    ]);
    assert!(args.into_config().is_err());
}

#[test]
fn test_cli_overrides_apply() {
    let dir = tempfile::tempdir().unwrap();
    let args = CliArgs::parse_from([
        "sandbox-config",
        dir.path().to_str().unwrap(),
        "--no-icons",
        "--width",
        "72",
    ]);
    let run = args.into_config().unwrap();
    let mut config = PanelConfig::default();
    run.apply_to(&mut config);
    assert!(!config.show_icons);
    assert_eq!(config.panel_width, 72);
}

#[test]
fn test_normalize_config_path() {
    assert_eq!(normalize_config_path("package.json"), "/package.json");
    assert_eq!(normalize_config_path(" /now.json "), "/now.json");
}
