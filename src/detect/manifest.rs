//! package.json script detection.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::manager::detect_runner_reason;
use super::Detector;
use crate::catalog::CommandEntry;

/// The parts of package.json this detector reads.
#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    scripts: BTreeMap<String, String>,
    /// Only a string is meaningful; anything else is ignored.
    #[serde(rename = "packageManager")]
    package_manager: Option<serde_json::Value>,
}

/// Emits one entry per script in `package.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestDetector;

impl Detector for ManifestDetector {
    fn id(&self) -> &'static str {
        "manifest"
    }

    fn detect(&self, dir: &Path) -> Vec<CommandEntry> {
        let path = dir.join("package.json");
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Vec::new();
        };

        let manifest: Manifest = match serde_json::from_str(&content) {
            Ok(manifest) => manifest,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "ignoring unparsable package.json");
                return Vec::new();
            }
        };

        let (runner, reason) = detect_runner_reason(
            dir,
            manifest
                .package_manager
                .as_ref()
                .and_then(serde_json::Value::as_str),
        );
        debug!(%runner, %reason, "picked package manager");

        manifest
            .scripts
            .iter()
            .map(|(name, script)| {
                CommandEntry::new(
                    format!("{runner}: {name}"),
                    runner.run_command(name),
                    format!("Run {runner} script: {script}"),
                )
            })
            .collect()
    }
}
