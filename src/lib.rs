//! distructions - project command menu
//!
//! A terminal menu that lists a project's build, test and run commands and
//! runs the one you pick.
//!
//! Commands come from a catalog file (`.project-commands.json`) next to the
//! project. When the file does not exist yet, detectors look for known project
//! markers (`package.json`, a compose file, `go.mod`, `Cargo.toml`) and the
//! result is written back so it can be edited by hand.
//!
//! # Modules
//!
//! - [`catalog`] - Catalog types, project label and the load-or-generate store
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Configuration file loading and types
//! - [`detect`] - Project marker detectors
//! - [`error`] - Error types and result helpers
//! - [`runner`] - Command execution
//! - [`tui`] - Selection state machine and terminal user interface
//! - [`utils`] - Path and terminal utilities
//!
//! # Example
//!
//! ```no_run
//! use distructions::catalog::CatalogStore;
//!
//! let store = CatalogStore::new("./my-project");
//! let catalog = store.load().expect("Failed to load commands");
//!
//! for entry in &catalog {
//!     println!("{} -> {}", entry.name(), entry.command());
//! }
//! ```

/// Command catalog and its persistence.
pub mod catalog;

/// CLI argument definitions.
pub mod cli;

/// Configuration system for loading and merging settings.
pub mod config;

/// Project marker detectors.
pub mod detect;

/// Error types and result helpers.
pub mod error;

/// Command execution.
pub mod runner;

/// Terminal user interface.
pub mod tui;

/// Path and terminal utilities.
pub mod utils;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogStore, CommandEntry};
pub use cli::Cli;
pub use config::Config;
pub use detect::Detector;
pub use error::{DxError, Result};
