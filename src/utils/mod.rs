//! Utility module for distructions.
//!
//! Common utilities for paths and terminal detection.

mod paths;
mod terminal;

pub use paths::{
    config_dir, find_vcs_root, global_config_file, local_config_file, resolve_project_dir,
    MAX_SEARCH_DEPTH,
};
pub use terminal::{can_prompt, check_terminal_size, is_interactive, use_colors, TerminalSize};
