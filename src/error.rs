//! Custom error types for distructions.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for distructions.
pub mod exit_code {
    /// Success, including the informational terminations.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// The persisted catalog could not be read or parsed.
    pub const INVALID_CATALOG: i32 = 2;
    /// Invalid configuration.
    pub const INVALID_CONFIG: i32 = 3;
    /// A child killed by a signal (128 + SIGINT).
    pub const INTERRUPTED: i32 = 130;

    /// Narrow a code to what a process can exit with.
    ///
    /// Codes outside `0..=255` become [`GENERAL_ERROR`].
    pub fn for_process(code: i32) -> u8 {
        u8::try_from(code).unwrap_or(GENERAL_ERROR as u8)
    }
}

/// Result type alias for distructions.
pub type Result<T> = std::result::Result<T, DxError>;

/// Main error type for distructions.
#[derive(Error, Debug)]
pub enum DxError {
    /// The persisted catalog exists but could not be read.
    #[error("Failed to read command catalog at {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted catalog is not valid JSON or does not match the schema.
    #[error("Failed to parse command catalog at {path}:\n  {message}\n\nTip: Fix the file by hand or run with --regenerate to detect commands again.")]
    CatalogParse {
        path: PathBuf,
        message: String,
        line: usize,
        column: usize,
    },

    /// The catalog could not be written.
    #[error("Failed to write command catalog at {path}: {source}")]
    CatalogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The user answered "no" to the generation prompt.
    #[error("No command catalog generated. Run again and confirm to detect commands for this project.")]
    GenerationDeclined,

    /// Nothing was detected and the directory is not under version control.
    #[error("{path} does not look like a project directory (no version control and no known project files found).")]
    NotAProject { path: PathBuf },

    /// No entry with the requested name.
    #[error("Command '{name}' not found in the catalog")]
    CommandNotFound { name: String },

    /// No entry with the requested name, with close matches.
    #[error("Command '{name}' not found\n\nDid you mean: {suggestions}?\n\nRun 'distructions --list' to see all available commands.")]
    CommandNotFoundWithSuggestions { name: String, suggestions: String },

    /// Invalid configuration file.
    #[error("Invalid config at {path}:\n  {message}\n\nTip: Check the config file syntax and ensure all values are valid.")]
    InvalidConfig { path: PathBuf, message: String },
}

impl DxError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DxError::CatalogRead { .. } => exit_code::INVALID_CATALOG,
            DxError::CatalogParse { .. } => exit_code::INVALID_CATALOG,
            DxError::CatalogWrite { .. } => exit_code::GENERAL_ERROR,
            DxError::GenerationDeclined => exit_code::SUCCESS,
            DxError::NotAProject { .. } => exit_code::SUCCESS,
            DxError::CommandNotFound { .. } => exit_code::GENERAL_ERROR,
            DxError::CommandNotFoundWithSuggestions { .. } => exit_code::GENERAL_ERROR,
            DxError::InvalidConfig { .. } => exit_code::INVALID_CONFIG,
        }
    }

    /// Expected, user-facing terminations that are reported without an "Error:" prefix.
    pub fn is_informational(&self) -> bool {
        matches!(self, DxError::GenerationDeclined | DxError::NotAProject { .. })
    }

    /// Build a parse error from a serde_json failure.
    pub fn catalog_parse(path: impl Into<PathBuf>, error: &serde_json::Error) -> Self {
        DxError::CatalogParse {
            path: path.into(),
            message: error.to_string(),
            line: error.line(),
            column: error.column(),
        }
    }

    /// Create a command not found error with suggestions based on available names.
    pub fn command_not_found_with_suggestions(name: &str, names: &[&str]) -> Self {
        let suggestions = find_similar_names(name, names);
        if suggestions.is_empty() {
            DxError::CommandNotFound {
                name: name.to_string(),
            }
        } else {
            DxError::CommandNotFoundWithSuggestions {
                name: name.to_string(),
                suggestions: suggestions.join(", "),
            }
        }
    }
}

/// Find similar command names by edit distance or substring.
fn find_similar_names(name: &str, names: &[&str]) -> Vec<String> {
    let name_lower = name.to_lowercase();
    let mut matches: Vec<(String, usize)> = names
        .iter()
        .filter_map(|&candidate| {
            let candidate_lower = candidate.to_lowercase();
            let dist = strsim::levenshtein(&name_lower, &candidate_lower);
            if dist <= 3
                || candidate_lower.contains(&name_lower)
                || name_lower.contains(&candidate_lower)
            {
                Some((candidate.to_string(), dist))
            } else {
                None
            }
        })
        .collect();

    matches.sort_by_key(|(_, d)| *d);

    matches
        .into_iter()
        .take(3)
        .map(|(s, _)| format!("'{}'", s))
        .collect()
}
