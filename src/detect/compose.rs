//! Docker Compose service detection.

use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::debug;

use super::Detector;
use crate::catalog::CommandEntry;

/// Compose file names, first existing one wins.
pub const COMPOSE_FILES: &[&str] = &[
    "docker-compose.yml",
    "docker-compose.yaml",
    "compose.yml",
    "compose.yaml",
];

/// Emits the generic up/down entries plus one start entry per service.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComposeDetector;

impl ComposeDetector {
    fn compose_file(dir: &Path) -> Option<PathBuf> {
        COMPOSE_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }
}

impl Detector for ComposeDetector {
    fn id(&self) -> &'static str {
        "compose"
    }

    fn detect(&self, dir: &Path) -> Vec<CommandEntry> {
        let Some(path) = Self::compose_file(dir) else {
            return Vec::new();
        };
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Vec::new();
        };

        let document: Value = match serde_yaml::from_str(&content) {
            Ok(document) => document,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "ignoring unparsable compose file");
                return Vec::new();
            }
        };

        let Some(services) = document.get("services").and_then(Value::as_mapping) else {
            debug!(path = %path.display(), "compose file has no services mapping");
            return Vec::new();
        };

        let mut entries = vec![
            CommandEntry::new(
                "Docker: Start All",
                "docker-compose up",
                "Start all Docker containers",
            ),
            CommandEntry::new(
                "Docker: Start All (Detached)",
                "docker-compose up -d",
                "Start all Docker containers in detached mode",
            ),
            CommandEntry::new(
                "Docker: Stop All",
                "docker-compose down",
                "Stop all Docker containers",
            ),
        ];

        for service in services.iter().filter_map(|(key, _)| service_name(key)) {
            entries.push(CommandEntry::new(
                format!("Docker: Start {service}"),
                format!("docker-compose up {service}"),
                format!("Start the {service} service"),
            ));
        }

        entries
    }
}

/// Service keys are normally strings; YAML also allows bare numbers and booleans.
fn service_name(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
