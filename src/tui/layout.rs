//! Layout calculations for the TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::config::AppearanceConfig;

/// Minimum terminal dimensions.
pub const MIN_WIDTH: u16 = 30;
pub const MIN_HEIGHT: u16 = 6;

/// Main layout areas.
#[derive(Debug, Clone, Copy)]
pub struct MainLayout {
    /// Header area.
    pub header: Rect,
    /// Command list area.
    pub menu: Rect,
    /// Footer area.
    pub footer: Rect,
}

impl MainLayout {
    /// Calculate the main layout for the given area with default settings.
    pub fn new(area: Rect) -> Self {
        Self::with_config(area, &AppearanceConfig::default())
    }

    /// Calculate the main layout with configuration options.
    pub fn with_config(area: Rect, config: &AppearanceConfig) -> Self {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return Self::minimal_layout(area, config);
        }

        // The header keeps a blank line under the title unless compact.
        let header_height = if config.compact { 1 } else { 2 };
        let footer_height = match (config.show_footer, config.compact) {
            (false, _) => 0,
            (true, true) => 1,
            (true, false) => 2,
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Min(1),
                Constraint::Length(footer_height),
            ])
            .split(area);

        Self {
            header: chunks[0],
            menu: chunks[1],
            footer: bottom_line(chunks[2]),
        }
    }

    /// Create minimal layout for small terminals.
    fn minimal_layout(area: Rect, config: &AppearanceConfig) -> Self {
        let footer_height = u16::from(config.show_footer);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(footer_height),
            ])
            .split(area);

        Self {
            header: chunks[0],
            menu: chunks[1],
            footer: chunks[2],
        }
    }
}

/// Last row of `area`, or `area` itself when it is empty.
fn bottom_line(area: Rect) -> Rect {
    if area.height <= 1 {
        return area;
    }
    Rect::new(area.x, area.y + area.height - 1, area.width, 1)
}

/// Rows one menu entry occupies.
pub fn rows_per_item(config: &AppearanceConfig) -> usize {
    let description = usize::from(config.show_descriptions);
    let gap = usize::from(!config.compact);
    1 + description + gap
}

/// First visible entry after moving to `selected`.
///
/// The view stays at `previous` while the selection is on screen and only
/// moves as far as needed to bring it back.
pub fn scroll_offset(
    selected: usize,
    previous: usize,
    height: u16,
    config: &AppearanceConfig,
) -> usize {
    let visible = (height as usize / rows_per_item(config)).max(1);
    if selected < previous {
        selected
    } else if selected >= previous + visible {
        selected + 1 - visible
    } else {
        previous
    }
}
