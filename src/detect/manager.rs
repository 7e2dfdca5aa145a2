//! JavaScript package manager detection.
//!
//! Picks the runner used in manifest entries based on:
//! 1. `packageManager` field in package.json (highest priority)
//! 2. Lock file detection
//! 3. Fallback to npm

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Runner {
    /// Node Package Manager (npm)
    #[default]
    Npm,
    /// Yarn package manager
    Yarn,
    /// pnpm
    Pnpm,
    /// Bun
    Bun,
}

/// Lock files in detection order. Bun's are checked first as the most specific.
const LOCK_FILES: &[(&str, Runner)] = &[
    ("bun.lockb", Runner::Bun),
    ("bun.lock", Runner::Bun),
    ("pnpm-lock.yaml", Runner::Pnpm),
    ("yarn.lock", Runner::Yarn),
    ("package-lock.json", Runner::Npm),
];

impl Runner {
    /// Get the executable name for this runner.
    pub fn executable(&self) -> &'static str {
        match self {
            Runner::Npm => "npm",
            Runner::Yarn => "yarn",
            Runner::Pnpm => "pnpm",
            Runner::Bun => "bun",
        }
    }

    /// Shell command that runs a manifest script.
    ///
    /// Every supported manager accepts the `run` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use distructions::detect::Runner;
    ///
    /// assert_eq!(Runner::Npm.run_command("dev"), "npm run dev");
    /// assert_eq!(Runner::Yarn.run_command("build"), "yarn run build");
    /// ```
    pub fn run_command(&self, script: &str) -> String {
        format!("{} run {}", self.executable(), script)
    }
}

impl fmt::Display for Runner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable())
    }
}

impl FromStr for Runner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(Runner::Npm),
            "yarn" => Ok(Runner::Yarn),
            "pnpm" => Ok(Runner::Pnpm),
            "bun" => Ok(Runner::Bun),
            _ => Err(format!(
                "Unknown package manager: '{s}'. Valid options are: npm, yarn, pnpm, bun"
            )),
        }
    }
}

/// Detect the package manager for a project.
///
/// `package_manager` is the raw `packageManager` field of an already parsed
/// manifest, if it had one.
pub fn detect_runner(project_dir: &Path, package_manager: Option<&str>) -> Runner {
    detect_runner_reason(project_dir, package_manager).0
}

/// Detect the package manager and explain why it was chosen.
pub fn detect_runner_reason(project_dir: &Path, package_manager: Option<&str>) -> (Runner, String) {
    if let Some(runner) = package_manager.and_then(parse_package_manager_field) {
        return (runner, "packageManager field in package.json".to_string());
    }

    for (file, runner) in LOCK_FILES {
        let lock = project_dir.join(file);
        if lock.exists() {
            return (*runner, format!("found {}", lock.display()));
        }
    }

    (Runner::Npm, "default (no lock file found)".to_string())
}

/// Parse values like `pnpm@8.0.0`, `yarn@4.0.0+sha256.abc123` or `npm`.
fn parse_package_manager_field(value: &str) -> Option<Runner> {
    let name = value.split('@').next()?;
    name.trim().parse().ok()
}
