//! Configuration module for distructions.
//!
//! Handles loading and merging configuration from multiple sources:
//! - CLI arguments (highest priority)
//! - Project-level `.distructionsrc.toml`
//! - User-level `~/.config/distructions/config.toml`

pub mod file;
mod types;

pub use file::{load_config, PROJECT_CONFIG_FILE};
pub use types::{
    default_shell, AppearanceConfig, AppearanceLayer, Config, ConfigLayer, DetectConfig,
    GeneralConfig, GeneralLayer, Theme,
};
