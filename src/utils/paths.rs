//! Path utilities.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::config::PROJECT_CONFIG_FILE;

/// Maximum number of parent directories to search.
pub const MAX_SEARCH_DEPTH: usize = 32;

/// Canonicalize the project directory given on the command line.
///
/// # Errors
///
/// Returns an error if the path does not exist or is not a directory.
pub fn resolve_project_dir(path: &Path) -> Result<PathBuf> {
    let dir = path.canonicalize().with_context(|| {
        format!(
            "Cannot access directory '{}': path does not exist or is not accessible",
            path.display()
        )
    })?;

    if !dir.is_dir() {
        bail!("'{}' is not a directory", path.display());
    }

    Ok(dir)
}

/// Find the nearest directory at or above `start_dir` that contains `.git`.
pub fn find_vcs_root(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .take(MAX_SEARCH_DEPTH)
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Get the config directory for distructions.
///
/// Returns `~/.config/distructions` on Unix-like systems.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("distructions"))
}

/// Get the global config file path.
///
/// Returns `~/.config/distructions/config.toml`.
pub fn global_config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Find local config file in project directory.
///
/// Looks for `.distructionsrc.toml` in the given directory.
pub fn local_config_file(project_dir: &Path) -> Option<PathBuf> {
    let config_file = project_dir.join(PROJECT_CONFIG_FILE);
    if config_file.exists() {
        Some(config_file)
    } else {
        None
    }
}
