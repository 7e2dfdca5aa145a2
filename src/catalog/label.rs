//! Project label lookup.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

/// Label used when neither the remote URL nor the directory name is usable.
pub const FALLBACK_LABEL: &str = "Unknown Project";

/// Derive the label shown in the menu header.
///
/// Tries the `origin` remote URL first, then the directory's base name.
pub fn project_label(project_dir: &Path) -> String {
    if let Some(label) = remote_origin_url(project_dir)
        .as_deref()
        .and_then(label_from_remote_url)
    {
        debug!(label = %label, "project label from remote origin");
        return label;
    }

    let dir = project_dir
        .canonicalize()
        .unwrap_or_else(|_| project_dir.to_path_buf());
    dir.file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(String::from)
        .unwrap_or_else(|| FALLBACK_LABEL.to_string())
}

/// Extract the repository name from a remote URL.
///
/// Handles `https://host/owner/repo.git`, `git@host:owner/repo.git` and
/// plain paths.
///
/// # Examples
///
/// ```
/// use distructions::catalog::label_from_remote_url;
///
/// assert_eq!(label_from_remote_url("git@github.com:acme/widgets.git").as_deref(), Some("widgets"));
/// assert_eq!(label_from_remote_url("https://github.com/acme/widgets").as_deref(), Some("widgets"));
/// ```
pub fn label_from_remote_url(url: &str) -> Option<String> {
    let url = url.trim().trim_end_matches('/');
    let url = url.strip_suffix(".git").unwrap_or(url);
    let name = url.rsplit(['/', ':']).next()?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Ask git for the `origin` remote URL of the repository containing `dir`.
fn remote_origin_url(dir: &Path) -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", "remote.origin.url"])
        .current_dir(dir)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if url.is_empty() {
        None
    } else {
        Some(url)
    }
}
