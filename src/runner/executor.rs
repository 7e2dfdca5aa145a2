//! Command execution.
//!
//! Commands in the catalog are opaque shell strings, so every run goes through
//! `<shell> -c <command>` (`cmd /C` for Windows shells) in the project
//! directory with the terminal handed over to the child.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};
use tracing::debug;

use crate::catalog::CommandEntry;
use crate::error::exit_code;

/// Result of command execution.
#[derive(Debug)]
pub struct ExecutionResult {
    /// Exit status of the child.
    pub status: ExitStatus,
    /// The command string that was handed to the shell.
    pub command: String,
}

impl ExecutionResult {
    /// Check if the execution was successful.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Get the exit code, or [`exit_code::INTERRUPTED`] when killed by a signal.
    pub fn code(&self) -> i32 {
        self.status.code().unwrap_or(exit_code::INTERRUPTED)
    }
}

/// Program and arguments that run `command` through `shell`.
pub fn shell_invocation(shell: &str, command: &str) -> (String, Vec<String>) {
    // Either separator, whatever the host platform
    let program = shell
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(shell)
        .to_ascii_lowercase();
    let flag = match program.as_str() {
        "cmd" | "cmd.exe" => "/C",
        _ => "-c",
    };
    (
        shell.to_string(),
        vec![flag.to_string(), command.to_string()],
    )
}

/// Format a command for display in dry-run mode.
pub fn format_dry_run_command(command: &str) -> String {
    format!("Would run: {command}")
}

/// Execute a command string through a shell.
///
/// # Arguments
///
/// * `command` - The shell command to run
/// * `shell` - Shell program (e.g. `sh`, `bash`, `cmd`)
/// * `project_dir` - Working directory of the child
/// * `dry_run` - If true, print the command without executing
///
/// # Errors
///
/// Returns an error if the shell fails to spawn.
pub fn execute_command(
    command: &str,
    shell: &str,
    project_dir: &Path,
    dry_run: bool,
) -> Result<ExecutionResult> {
    if dry_run {
        println!("{}", format_dry_run_command(command));
        return Ok(ExecutionResult {
            status: ExitStatus::default(),
            command: command.to_string(),
        });
    }

    let (program, args) = shell_invocation(shell, command);
    debug!(%program, ?args, dir = %project_dir.display(), "spawning command");

    let status = Command::new(&program)
        .args(&args)
        .current_dir(project_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to execute: {command}"))?;

    debug!(%status, "command finished");

    Ok(ExecutionResult {
        status,
        command: command.to_string(),
    })
}

/// Run a catalog entry and return its exit code.
///
/// # Errors
///
/// Returns an error if the shell fails to spawn.
pub fn run_entry(
    entry: &CommandEntry,
    shell: &str,
    project_dir: &Path,
    dry_run: bool,
) -> Result<i32> {
    execute_command(entry.command(), shell, project_dir, dry_run).map(|result| result.code())
}
