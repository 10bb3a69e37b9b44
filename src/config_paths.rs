//! Where sandbox-config keeps its files
//!
//! ```text
//! <config dir>/
//!   config.yaml      panel settings (PanelConfig)
//!   templates.yaml   per-template configuration file overrides
//!   logs/            daily-rotated sandbox-config.log.YYYY-MM-DD
//! ```
//!
//! The config dir is `$SANDBOX_CONFIG_HOME` when set, otherwise
//! `$XDG_CONFIG_HOME/sandbox-config` or `~/.config/sandbox-config`
//! (`%APPDATA%\sandbox-config` on Windows).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "sandbox-config";

/// Environment variable that points the config dir somewhere else entirely
pub const CONFIG_HOME_ENV: &str = "SANDBOX_CONFIG_HOME";

/// Base name of the rotating log file
pub const LOG_FILE_NAME: &str = "sandbox-config.log";

const CONFIG_FILE_NAME: &str = "config.yaml";
const TEMPLATES_FILE_NAME: &str = "templates.yaml";
const LOGS_DIR_NAME: &str = "logs";

/// Pick the config dir from an explicit override or a platform base dir
///
/// `base` is the directory that holds per-application config dirs
/// (e.g. `~/.config`).
pub fn resolve_config_dir(explicit: Option<PathBuf>, base: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| base.map(|b| b.join(APP_DIR)))
}

fn platform_base_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(PathBuf::from)
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
    }
}

pub fn config_dir() -> Option<PathBuf> {
    resolve_config_dir(
        env::var_os(CONFIG_HOME_ENV).map(PathBuf::from),
        platform_base_dir(),
    )
}

/// `<config dir>/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// `<config dir>/templates.yaml`
pub fn templates_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(TEMPLATES_FILE_NAME))
}

/// Create `<config dir>/logs/` if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let dir = config_dir()
        .ok_or_else(|| "No config directory available".to_string())?
        .join(LOGS_DIR_NAME);
    ensure_dir(&dir)?;
    Ok(dir)
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}
