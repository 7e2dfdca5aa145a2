//! Custom widgets for the TUI.
//!
//! This module contains specialized widgets for rendering the distructions menu.

mod footer;
mod header;
mod menu;
mod message;

pub use footer::Footer;
pub use header::{truncate_with_ellipsis, Header, APP_TITLE};
pub use menu::{CommandList, EmptyMenu, MenuState};
pub use message::MessageScreen;
