//! Configuration type definitions.

use std::path::PathBuf;

use serde::Deserialize;

use crate::catalog::CATALOG_FILE_NAME;

/// Color theme for the TUI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Full color theme.
    #[default]
    Default,
    /// Minimal colors.
    Minimal,
    /// No colors (monochrome).
    None,
}

/// General configuration settings.
#[derive(Debug, Clone)]
pub struct GeneralConfig {
    /// Catalog file name inside the project directory.
    pub catalog_file: Option<String>,
    /// Shell used to run commands.
    pub shell: Option<String>,
    /// Ask before writing a newly generated catalog.
    pub confirm_generation: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            catalog_file: None,
            shell: None,
            confirm_generation: true,
        }
    }
}

/// Detector configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectConfig {
    /// Detector ids to skip (e.g. "compose").
    #[serde(default)]
    pub disabled: Vec<String>,
}

/// Appearance configuration settings.
#[derive(Debug, Clone)]
pub struct AppearanceConfig {
    /// Color theme.
    pub theme: Theme,
    /// Show help footer.
    pub show_footer: bool,
    /// Show the description line under each command.
    pub show_descriptions: bool,
    /// Compact mode (less padding).
    pub compact: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            show_footer: true,
            show_descriptions: true,
            compact: false,
        }
    }
}

/// Resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Detector settings.
    pub detect: DetectConfig,
    /// Appearance settings.
    pub appearance: AppearanceConfig,
}

/// One config file as written. Keys the file leaves out stay `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub general: GeneralLayer,
    pub detect: DetectConfig,
    pub appearance: AppearanceLayer,
}

/// `[general]` as written in a config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneralLayer {
    pub catalog_file: Option<String>,
    pub shell: Option<String>,
    pub confirm_generation: Option<bool>,
}

/// `[appearance]` as written in a config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppearanceLayer {
    pub theme: Option<Theme>,
    pub show_footer: Option<bool>,
    pub show_descriptions: Option<bool>,
    pub compact: Option<bool>,
}

impl Config {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the config file path for the user's home directory.
    pub fn user_config_path() -> Option<PathBuf> {
        crate::utils::global_config_file()
    }

    /// Apply a config file on top of this one. Only keys the file sets win.
    pub fn merge(&mut self, layer: ConfigLayer) {
        let ConfigLayer {
            general,
            detect,
            appearance,
        } = layer;

        if general.catalog_file.is_some() {
            self.general.catalog_file = general.catalog_file;
        }
        if general.shell.is_some() {
            self.general.shell = general.shell;
        }
        if let Some(confirm) = general.confirm_generation {
            self.general.confirm_generation = confirm;
        }

        // Disabled detectors - append rather than replace
        for id in detect.disabled {
            if !self.detect.disabled.contains(&id) {
                self.detect.disabled.push(id);
            }
        }

        if let Some(theme) = appearance.theme {
            self.appearance.theme = theme;
        }
        if let Some(show_footer) = appearance.show_footer {
            self.appearance.show_footer = show_footer;
        }
        if let Some(show_descriptions) = appearance.show_descriptions {
            self.appearance.show_descriptions = show_descriptions;
        }
        if let Some(compact) = appearance.compact {
            self.appearance.compact = compact;
        }
    }

    /// Catalog file name, falling back to the default.
    pub fn catalog_file(&self) -> &str {
        self.general
            .catalog_file
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(CATALOG_FILE_NAME)
    }

    /// Shell used to run commands, falling back to the platform default.
    pub fn shell(&self) -> &str {
        self.general
            .shell
            .as_deref()
            .filter(|shell| !shell.trim().is_empty())
            .unwrap_or(default_shell())
    }
}

/// `sh` everywhere except Windows.
pub fn default_shell() -> &'static str {
    if cfg!(windows) {
        "cmd"
    } else {
        "sh"
    }
}
