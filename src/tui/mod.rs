//! TUI module for distructions.
//!
//! [`controller`] is the terminal-independent selection state machine; the
//! rest maps crossterm input onto it and draws its [`View`] with ratatui.

pub mod controller;
mod input;
mod layout;
mod theme;
mod ui;
pub mod widgets;

pub use controller::{Controller, Effect, Key, MenuItem, Phase, RunRequest, View};
pub use input::{map_event, map_key};
pub use layout::{rows_per_item, scroll_offset, MainLayout, MIN_HEIGHT, MIN_WIDTH};
pub use theme::Theme;
pub use widgets::MenuState;
pub use ui::{render, restore_terminal, run_tui, TerminalGuard};
