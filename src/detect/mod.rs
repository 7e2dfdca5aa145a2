//! Command detection for distructions.
//!
//! Each detector inspects the project directory for one ecosystem's marker
//! file and turns it into catalog entries. Detectors never fail: a missing,
//! unreadable or malformed marker simply yields no entries.

mod cargo;
mod compose;
mod manager;
mod manifest;
mod module;

use std::path::Path;

use tracing::debug;

use crate::catalog::CommandEntry;

pub use cargo::CargoDetector;
pub use compose::{ComposeDetector, COMPOSE_FILES};
pub use manager::{detect_runner, detect_runner_reason, Runner};
pub use manifest::ManifestDetector;
pub use module::GoModuleDetector;

/// Turns one kind of project marker into commands.
pub trait Detector {
    /// Stable identifier, used to disable the detector from config.
    fn id(&self) -> &'static str;

    /// Inspect `dir` and return the commands this ecosystem offers.
    fn detect(&self, dir: &Path) -> Vec<CommandEntry>;
}

/// The built-in detectors in their fixed run order.
pub fn default_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(ManifestDetector),
        Box::new(ComposeDetector),
        Box::new(GoModuleDetector),
        Box::new(CargoDetector),
    ]
}

/// The built-in detectors minus the ones whose id is listed in `disabled`.
pub fn enabled_detectors(disabled: &[String]) -> Vec<Box<dyn Detector>> {
    default_detectors()
        .into_iter()
        .filter(|d| !disabled.iter().any(|id| id.eq_ignore_ascii_case(d.id())))
        .collect()
}

/// Run detectors in order and concatenate their entries.
pub fn detect_all(dir: &Path, detectors: &[Box<dyn Detector>]) -> Vec<CommandEntry> {
    let mut entries = Vec::new();
    for detector in detectors {
        let found = detector.detect(dir);
        debug!(detector = detector.id(), count = found.len(), "detector finished");
        entries.extend(found);
    }
    entries
}
