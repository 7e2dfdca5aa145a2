//! Main UI rendering and TUI loop.

use std::io::{self, stdout, Stdout, Write};
use std::panic;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use crossterm::{
    cursor, event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tracing::{info, warn};

use super::controller::{Controller, Effect, RunRequest, View};
use super::input::map_event;
use super::layout::MainLayout;
use super::theme::Theme;
use super::widgets::{CommandList, EmptyMenu, Footer, Header, MenuState, MessageScreen};
use crate::config::AppearanceConfig;
use crate::runner::execute_command;

/// Global flag to track if terminal is in raw mode.
static TERMINAL_RAW_MODE: AtomicBool = AtomicBool::new(false);

/// RAII guard for terminal state.
/// Ensures terminal is properly restored even on panic.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Create a new terminal guard, setting up the terminal for TUI.
    pub fn new() -> Result<Self> {
        // Set up panic hook before entering raw mode
        setup_panic_hook();

        enter_tui()?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        Ok(Self { terminal })
    }

    /// Get a mutable reference to the terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Hand the terminal back to the normal screen, e.g. for a child process.
    pub fn suspend(&mut self) -> Result<()> {
        restore_terminal()
    }

    /// Take the terminal again after [`suspend`](Self::suspend).
    pub fn resume(&mut self) -> Result<()> {
        enter_tui()?;
        self.terminal.clear().context("Failed to clear terminal")?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn enter_tui() -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    TERMINAL_RAW_MODE.store(true, Ordering::SeqCst);

    execute!(stdout(), EnterAlternateScreen, cursor::Hide)
        .context("Failed to enter alternate screen")?;
    Ok(())
}

/// Set up a panic hook that restores the terminal.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if TERMINAL_RAW_MODE.load(Ordering::SeqCst) {
            let _ = disable_raw_mode();
            let _ = execute!(stdout(), LeaveAlternateScreen, cursor::Show);
        }

        original_hook(panic_info);
    }));
}

/// Restore terminal to normal state.
pub fn restore_terminal() -> Result<()> {
    if TERMINAL_RAW_MODE.load(Ordering::SeqCst) {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(stdout(), LeaveAlternateScreen, cursor::Show)
            .context("Failed to leave alternate screen")?;
        TERMINAL_RAW_MODE.store(false, Ordering::SeqCst);
    }
    io::stdout().flush()?;
    Ok(())
}

/// Run the interactive menu until the user quits.
///
/// Selected commands run in `project_dir` through `shell` while the menu is
/// suspended. Returns the controller's exit code.
pub fn run_tui(
    mut controller: Controller,
    appearance: &AppearanceConfig,
    shell: &str,
    project_dir: &Path,
) -> Result<i32> {
    let theme = Theme::new(&appearance.theme);
    let mut guard = TerminalGuard::new()?;

    let result = run_loop(
        &mut guard,
        &mut controller,
        &theme,
        appearance,
        shell,
        project_dir,
    );

    // Guard restores the terminal on drop
    drop(guard);
    result?;

    match controller.view() {
        View::Farewell(message) => println!("{message}"),
        View::Error(message) => eprintln!("Error: {message}"),
        View::Menu { .. } => {}
    }

    Ok(controller.exit_code())
}

/// Main TUI loop.
fn run_loop(
    guard: &mut TerminalGuard,
    controller: &mut Controller,
    theme: &Theme,
    appearance: &AppearanceConfig,
    shell: &str,
    project_dir: &Path,
) -> Result<()> {
    let mut menu_state = MenuState::default();
    loop {
        let view = controller.view();
        guard
            .terminal()
            .draw(|frame| render(frame, &view, theme, appearance, &mut menu_state))?;

        let Some(key) = map_event(&event::read()?) else {
            continue;
        };

        match controller.handle(key) {
            Some(Effect::Quit) => return Ok(()),
            Some(Effect::Run(request)) => run_suspended(guard, &request, shell, project_dir)?,
            None => {}
        }
    }
}

/// Leave the TUI, run the request with the terminal handed over, come back.
fn run_suspended(
    guard: &mut TerminalGuard,
    request: &RunRequest,
    shell: &str,
    project_dir: &Path,
) -> Result<()> {
    guard.suspend()?;

    info!(name = %request.name, command = %request.command, "running command");
    match execute_command(&request.command, shell, project_dir, false) {
        Ok(result) => info!(name = %request.name, status = %result.status, "command finished"),
        Err(e) => warn!(name = %request.name, error = %e, "command could not be started"),
    }

    guard.resume()
}

/// Render a view. `menu_state` carries the list's scroll position between frames.
pub fn render(
    frame: &mut Frame,
    view: &View,
    theme: &Theme,
    appearance: &AppearanceConfig,
    menu_state: &mut MenuState,
) {
    let area = frame.area();

    match view {
        View::Menu {
            header,
            items,
            footer,
        } => {
            let layout = MainLayout::with_config(area, appearance);

            frame.render_widget(Header::new(header, theme), layout.header);

            if items.is_empty() {
                frame.render_widget(EmptyMenu::new(theme), layout.menu);
            } else {
                frame.render_stateful_widget(
                    CommandList::new(items, theme, appearance),
                    layout.menu,
                    menu_state,
                );
            }

            if appearance.show_footer {
                let footer = Footer::new(footer, theme).hints(!items.is_empty());
                frame.render_widget(footer, layout.footer);
            }
        }
        View::Farewell(message) => {
            frame.render_widget(MessageScreen::farewell(message, theme), area);
        }
        View::Error(message) => {
            frame.render_widget(MessageScreen::error(message, theme), area);
        }
    }
}
