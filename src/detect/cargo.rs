//! Cargo manifest detection.

use std::path::Path;

use tracing::debug;

use super::Detector;
use crate::catalog::CommandEntry;

/// Emits cargo run/test/build entries for a parseable `Cargo.toml`.
///
/// A workspace-only manifest has nothing to `cargo run`, so the run entry is
/// only added when a `[package]` table is present.
#[derive(Debug, Clone, Copy, Default)]
pub struct CargoDetector;

impl Detector for CargoDetector {
    fn id(&self) -> &'static str {
        "cargo"
    }

    fn detect(&self, dir: &Path) -> Vec<CommandEntry> {
        let path = dir.join("Cargo.toml");
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Vec::new();
        };

        let manifest: toml::Table = match content.parse() {
            Ok(manifest) => manifest,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "ignoring unparsable Cargo.toml");
                return Vec::new();
            }
        };

        let mut entries = Vec::with_capacity(3);
        if manifest.get("package").is_some_and(toml::Value::is_table) {
            entries.push(CommandEntry::new(
                "Cargo: Run",
                "cargo run",
                "Run the Rust binary",
            ));
        }
        entries.push(CommandEntry::new(
            "Cargo: Test",
            "cargo test",
            "Run all Rust tests",
        ));
        entries.push(CommandEntry::new(
            "Cargo: Build",
            "cargo build",
            "Build the Rust project",
        ));
        entries
    }
}
