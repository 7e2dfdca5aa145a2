//! distructions - project command menu
//!
//! Entry point for the distructions CLI application.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use distructions::catalog::{Catalog, CatalogStore};
use distructions::cli::Cli;
use distructions::config::{load_config, Config};
use distructions::detect::enabled_detectors;
use distructions::error::{exit_code, DxError};
use distructions::runner::run_entry;
use distructions::tui::{run_tui, Controller};
use distructions::utils::{
    can_prompt, check_terminal_size, find_vcs_root, global_config_file, is_interactive,
    local_config_file, resolve_project_dir, use_colors,
};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    match run(&cli) {
        Ok(code) => ExitCode::from(exit_code::for_process(code)),
        Err(err) => {
            if let Some(dx_err) = err.downcast_ref::<DxError>() {
                if dx_err.is_informational() {
                    println!("{dx_err}");
                } else {
                    eprintln!("Error: {dx_err}");
                }
                return ExitCode::from(exit_code::for_process(dx_err.exit_code()));
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::for_process(exit_code::GENERAL_ERROR))
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `--debug`, which wins over the default.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<i32> {
    // Handle shell completions early
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    if cli.debug {
        print_debug_header();
        eprintln!("Debug: CLI arguments = {cli:#?}");
    }

    let project_dir =
        resolve_project_dir(&cli.project_dir()).context("Failed to find project directory")?;

    let config = if cli.no_config {
        Config::default()
    } else {
        load_config(cli.config.as_deref(), &project_dir)?
    };

    if cli.debug {
        eprintln!("Debug: Project directory = {}", project_dir.display());
        print_debug_paths(&project_dir, &config);
    }

    // The menu needs a terminal; check before anything is generated
    if cli.should_show_tui() && !is_interactive() {
        anyhow::bail!(
            "The interactive menu needs a terminal. Use --list to print the commands instead."
        );
    }

    let store = CatalogStore::new(&project_dir)
        .with_file_name(config.catalog_file())
        .with_detectors(enabled_detectors(&config.detect.disabled));

    if cli.regenerate && store.remove()? {
        debug!(path = %store.catalog_path().display(), "discarded persisted catalog");
    }

    let ask = !cli.yes && config.general.confirm_generation && can_prompt();
    let loaded = store.load_with_consent(|path, catalog| {
        if ask {
            confirm_generation(path, catalog)
        } else {
            true
        }
    });

    let catalog = match loaded {
        Ok(catalog) => catalog,
        Err(err) if err.is_informational() => return Err(err.into()),
        Err(err) if cli.should_show_tui() => {
            // The menu shows the failure and waits for the user to quit
            let controller = Controller::from_load(Err(err));
            return run_tui(controller, &config.appearance, config.shell(), &project_dir)
                .context("TUI error");
        }
        Err(err) => return Err(err.into()),
    };

    if catalog.is_empty() && !store.exists() && find_vcs_root(&project_dir).is_none() {
        return Err(DxError::NotAProject { path: project_dir }.into());
    }

    if cli.debug {
        eprintln!("Debug: Found {} commands", catalog.len());
        print_debug_commands(&catalog);
    }

    if cli.list {
        return list_commands(&catalog);
    }

    if let Some(name) = &cli.command {
        return run_command_by_name(&catalog, name, config.shell(), &project_dir, cli.dry_run);
    }

    let controller = Controller::new(catalog);
    run_tui(controller, &config.appearance, config.shell(), &project_dir).context("TUI error")
}

/// Ask on stderr whether a freshly detected catalog may be written.
///
/// An empty answer means yes.
fn confirm_generation(path: &Path, catalog: &Catalog) -> bool {
    eprint!(
        "Detected {} commands. Write them to {}? [Y/n] ",
        catalog.len(),
        path.display()
    );
    let _ = io::stderr().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }

    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

/// Run an entry by name directly (non-TUI mode).
fn run_command_by_name(
    catalog: &Catalog,
    name: &str,
    shell: &str,
    project_dir: &Path,
    dry_run: bool,
) -> Result<i32> {
    let Some(entry) = catalog.find(name) else {
        let err = DxError::command_not_found_with_suggestions(name, &catalog.names());
        eprintln!("Error: {err}");
        eprintln!();
        eprintln!("Available commands:");
        for entry in catalog {
            eprintln!("  {}", entry.name());
        }
        return Ok(exit_code::GENERAL_ERROR);
    };

    run_entry(entry, shell, project_dir, dry_run)
}

/// List commands in a nice format (non-TUI mode).
fn list_commands(catalog: &Catalog) -> Result<i32> {
    let use_colors = use_colors();

    if catalog.is_empty() {
        println!("No commands detected");
        return Ok(exit_code::SUCCESS);
    }

    if use_colors {
        println!("\x1b[1;36mCommands for {}:\x1b[0m", catalog.project_label());
    } else {
        println!("Commands for {}:", catalog.project_label());
    }
    println!();

    // Find the longest name for alignment
    let max_name_len = catalog
        .iter()
        .map(|e| e.name().chars().count())
        .max()
        .unwrap_or(0)
        .min(30);

    for entry in catalog {
        let name = truncate_string(entry.name(), 30);
        let command = truncate_string(entry.command(), 50);

        if use_colors {
            print!("  \x1b[1;32m{:width$}\x1b[0m", name, width = max_name_len);
            print!("  \x1b[2m{command}\x1b[0m");
            if !entry.description().is_empty() {
                print!("  \x1b[33m{}\x1b[0m", truncate_string(entry.description(), 40));
            }
        } else {
            print!("  {:width$}", name, width = max_name_len);
            print!("  {command}");
            if !entry.description().is_empty() {
                print!("  {}", truncate_string(entry.description(), 40));
            }
        }

        println!();
    }

    println!();
    if use_colors {
        println!("\x1b[2m{} commands found\x1b[0m", catalog.len());
    } else {
        println!("{} commands found", catalog.len());
    }

    Ok(exit_code::SUCCESS)
}

/// Truncate a string to a maximum length, adding ellipsis if needed.
fn truncate_string(s: &str, max_len: usize) -> String {
    if max_len < 4 {
        return s.chars().take(max_len).collect();
    }

    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}

// ==================== Debug Functions ====================

fn print_debug_header() {
    eprintln!("=== distructions debug mode ===");
    eprintln!("Version: {}", env!("CARGO_PKG_VERSION"));
    eprintln!();
}

fn print_debug_paths(project_dir: &Path, config: &Config) {
    eprintln!("Debug: File locations:");

    if let Some(cfg) = global_config_file() {
        eprintln!("  Global config: {} (exists: {})", cfg.display(), cfg.exists());
    } else {
        eprintln!("  Global config: <not available>");
    }

    match local_config_file(project_dir) {
        Some(cfg) => eprintln!("  Local config: {} (exists: true)", cfg.display()),
        None => eprintln!(
            "  Local config: {}/.distructionsrc.toml (exists: false)",
            project_dir.display()
        ),
    }

    let catalog = project_dir.join(config.catalog_file());
    eprintln!(
        "  Catalog: {} (exists: {})",
        catalog.display(),
        catalog.exists()
    );
    eprintln!("  Shell: {}", config.shell());
    if let Some(size) = check_terminal_size() {
        eprintln!("  Terminal: {}x{}", size.width, size.height);
    }

    eprintln!();
}

fn print_debug_commands(catalog: &Catalog) {
    eprintln!("Debug: Commands for {}:", catalog.project_label());
    for entry in catalog.iter().take(10) {
        eprintln!(
            "  {} = {}",
            entry.name(),
            truncate_string(entry.command(), 50)
        );
    }
    if catalog.len() > 10 {
        eprintln!("  ... and {} more", catalog.len() - 10);
    }
    eprintln!();
}
