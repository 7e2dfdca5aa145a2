//! Go module detection.

use std::path::Path;

use super::Detector;
use crate::catalog::CommandEntry;

/// Emits run/test/build entries when `go.mod` exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoModuleDetector;

impl Detector for GoModuleDetector {
    fn id(&self) -> &'static str {
        "module"
    }

    fn detect(&self, dir: &Path) -> Vec<CommandEntry> {
        if !dir.join("go.mod").exists() {
            return Vec::new();
        }

        vec![
            CommandEntry::new("Go: Run", "go run .", "Run the Go application"),
            CommandEntry::new("Go: Test", "go test ./...", "Run all tests"),
            CommandEntry::new("Go: Build", "go build", "Build the Go application"),
        ]
    }
}
