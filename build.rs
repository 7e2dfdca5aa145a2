//! Build script for distructions.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// Mirrors `src/cli.rs`; build scripts cannot import the crate they build.
#[derive(Parser)]
#[command(name = "distructions")]
#[command(
    author,
    version,
    about = "Interactive menu for a project's build, test and run commands"
)]
#[command(
    long_about = "distructions lists the commands of the project in the current directory \
    and runs the one you pick.\n\n\
    Commands are read from .project-commands.json. When that file does not exist, \
    distructions looks for package.json, a Docker Compose file, go.mod and Cargo.toml, \
    and writes the detected commands to it so they can be edited by hand.\n\n\
    Use the arrow keys or j/k to move, Enter to run the selected command and q to quit."
)]
struct Cli {
    /// Path to project directory (default: current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// List commands non-interactively (no TUI)
    #[arg(short, long)]
    list: bool,

    /// Run a command by name without the TUI
    #[arg(short = 'n', long = "command", value_name = "NAME")]
    command: Option<String>,

    /// Show command without executing (with --command)
    #[arg(short, long, requires = "command")]
    dry_run: bool,

    /// Discard the saved command catalog and detect commands again
    #[arg(short, long)]
    regenerate: bool,

    /// Write a newly detected catalog without asking
    #[arg(short, long)]
    yes: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    no_config: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("DISTRUCTIONS_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let man = clap_mangen::Man::new(Cli::command());

    let mut buffer = Vec::new();
    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to generate man page: {e}");
        return;
    }

    let man_path = out_dir.join("distructions.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {e}");
        return;
    }

    // Also copy to docs directory for distribution
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        let docs_dir = PathBuf::from(manifest_dir).join("docs");
        if docs_dir.exists() {
            let _ = fs::copy(&man_path, docs_dir.join("distructions.1"));
        }
    }
}
