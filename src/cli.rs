//! CLI argument definitions for distructions.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use distructions::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Project dir: {:?}", cli.project_dir());
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};

/// Interactive menu for a project's build, test and run commands.
#[derive(Parser, Debug)]
#[command(name = "distructions")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = false)]
pub struct Cli {
    /// Path to project directory (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// List commands non-interactively (no TUI)
    #[arg(short, long)]
    pub list: bool,

    /// Run a command by name without the TUI
    #[arg(short = 'n', long = "command", value_name = "NAME")]
    pub command: Option<String>,

    /// Show command without executing (with --command)
    #[arg(short, long, requires = "command")]
    pub dry_run: bool,

    /// Discard the saved command catalog and detect commands again
    #[arg(short, long)]
    pub regenerate: bool,

    /// Write a newly detected catalog without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    pub no_config: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the project directory.
    ///
    /// Returns the provided path or the current directory.
    pub fn project_dir(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Check if TUI should be shown.
    pub fn should_show_tui(&self) -> bool {
        !self.list && self.command.is_none()
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "distructions", &mut std::io::stdout());
    }
}
