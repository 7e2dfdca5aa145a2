//! Configuration file loading and parsing.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::types::{Config, ConfigLayer};
use crate::error::{DxError, Result};

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = ".distructionsrc.toml";

/// Load configuration from the specified path.
///
/// # Errors
///
/// Returns [`DxError::InvalidConfig`] if the file cannot be read or parsed.
fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path).map_err(|e| DxError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    toml::from_str(&content).map_err(|e| DxError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

/// Merge an optional config file, warning instead of failing when it is broken.
fn merge_optional(config: &mut Config, path: &Path, level: &str) {
    if !path.exists() {
        return;
    }

    match load_config_from_path(path) {
        Ok(loaded) => {
            debug!(path = %path.display(), level, "loaded config");
            config.merge(loaded);
        }
        Err(e) => warn!(path = %path.display(), level, error = %e, "ignoring broken config file"),
    }
}

/// Load configuration with proper priority and merging.
///
/// Searches for config files in order of priority (lowest to highest):
/// 1. `~/.config/distructions/config.toml` (user-level, lowest priority)
/// 2. `.distructionsrc.toml` in the project directory (project-level)
/// 3. CLI argument `--config <path>` (highest priority)
///
/// Configs are merged with higher priority configs overriding lower priority ones.
/// Missing config files are handled gracefully (defaults are used).
///
/// # Errors
///
/// Returns [`DxError::InvalidConfig`] if the file given via `--config` cannot be
/// read or parsed. Broken default config files are only logged.
pub fn load_config(cli_config_path: Option<&Path>, project_dir: &Path) -> Result<Config> {
    let mut config = Config::default();

    if let Some(user_config_path) = Config::user_config_path() {
        merge_optional(&mut config, &user_config_path, "user");
    }

    merge_optional(&mut config, &project_dir.join(PROJECT_CONFIG_FILE), "project");

    if let Some(cli_path) = cli_config_path {
        config.merge(load_config_from_path(cli_path)?);
    }

    Ok(config)
}
