//! Terminal utilities.

use std::io::{self, IsTerminal};

use crossterm::terminal;

/// Terminal size information.
#[derive(Debug, Clone, Copy)]
pub struct TerminalSize {
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

/// Check the terminal size.
///
/// Returns the current terminal size, or None if it cannot be determined.
pub fn check_terminal_size() -> Option<TerminalSize> {
    terminal::size()
        .ok()
        .map(|(width, height)| TerminalSize { width, height })
}

/// Whether the menu can take over the terminal.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Whether a yes/no question can be asked on stdin.
pub fn can_prompt() -> bool {
    io::stdin().is_terminal()
}

/// Whether stdout should get ANSI colors.
pub fn use_colors() -> bool {
    io::stdout().is_terminal()
}
