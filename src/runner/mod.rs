//! Runner module for distructions.
//!
//! Hands a catalog entry's command string to a shell with inherited stdio.

mod executor;

pub use executor::{
    execute_command, format_dry_run_command, run_entry, shell_invocation, ExecutionResult,
};
