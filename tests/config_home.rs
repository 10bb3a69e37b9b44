//! Integration test for the config dir environment override
//!
//! Kept in its own test binary: it sets a process-wide environment variable.

use std::path::Path;

use sandbox_config::config::PanelConfig;
use sandbox_config::config_paths::{self, CONFIG_HOME_ENV};
use sandbox_config::template::{BuiltinTemplates, TemplateRegistry};

#[test]
fn test_config_home_env_redirects_all_paths() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var(CONFIG_HOME_ENV, dir.path());

    assert_eq!(config_paths::config_dir().as_deref(), Some(dir.path()));
    assert_eq!(
        config_paths::config_file(),
        Some(dir.path().join("config.yaml"))
    );
    assert_eq!(
        config_paths::templates_file(),
        Some(dir.path().join("templates.yaml"))
    );
    let logs = config_paths::ensure_logs_dir().unwrap();
    assert_eq!(logs, dir.path().join("logs"));
    assert!(logs.is_dir());

    // Settings and template overrides are read from the redirected dir
    std::fs::write(dir.path().join("config.yaml"), "panel_width: 44\n").unwrap();
    assert_eq!(PanelConfig::load().panel_width, 44);

    std::fs::write(
        dir.path().join("templates.yaml"),
        "templates:\n  node:\n    .nvmrc:\n      title: .nvmrc\n",
    )
    .unwrap();
    let def = BuiltinTemplates::load().definition("node");
    assert!(def.configuration_files.contains_key("/.nvmrc"));

    // Saving writes back into the same place
    let saved = PanelConfig::default().save().unwrap();
    assert!(saved.starts_with(dir.path()));
    assert!(Path::new(&saved).exists());

    std::env::remove_var(CONFIG_HOME_ENV);
}
