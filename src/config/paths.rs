//! Platform directories for the global config file and log state.

use crate::error::ApiError;
use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "xmind-notes";

fn project_dirs() -> Result<ProjectDirs, ApiError> {
    ProjectDirs::from("", APP_NAME, APP_NAME).ok_or_else(|| {
        ApiError::ConfigError("Could not determine platform directories (HOME not set)".to_string())
    })
}

/// Global config file: `<config_dir>/config.toml`
///
/// On Linux this honours `$XDG_CONFIG_HOME`, defaulting to
/// `$HOME/.config/xmind-notes/config.toml`.
pub fn global_config_path() -> Result<PathBuf, ApiError> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

/// Default log file: `<state_dir>/xmind-notes.log`
///
/// Platforms without a state directory fall back to the data-local directory.
pub fn default_log_file() -> Result<PathBuf, ApiError> {
    let dirs = project_dirs()?;
    let dir = dirs
        .state_dir()
        .unwrap_or_else(|| dirs.data_local_dir())
        .to_path_buf();
    Ok(dir.join(format!("{APP_NAME}.log")))
}
