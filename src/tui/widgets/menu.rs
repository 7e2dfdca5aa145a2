//! Command list widget for the TUI.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

use crate::config::AppearanceConfig;
use crate::tui::controller::MenuItem;
use crate::tui::layout::scroll_offset;
use crate::tui::theme::Theme;
use crate::tui::widgets::header::truncate_with_ellipsis;

/// Marker in front of the selected entry.
const CURSOR: &str = "→ ";

/// Scroll position of a [`CommandList`], kept between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    offset: usize,
}

impl MenuState {
    /// Index of the first entry on screen.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Vertical list of command names with their descriptions.
pub struct CommandList<'a> {
    items: &'a [MenuItem],
    theme: &'a Theme,
    config: &'a AppearanceConfig,
}

impl<'a> CommandList<'a> {
    /// Create a new command list widget.
    pub fn new(items: &'a [MenuItem], theme: &'a Theme, config: &'a AppearanceConfig) -> Self {
        Self {
            items,
            theme,
            config,
        }
    }

    fn selected_index(&self) -> usize {
        self.items.iter().position(|i| i.selected).unwrap_or(0)
    }

    /// Name line: two spaces and the cursor, or four spaces.
    fn name_line(&self, item: &'a MenuItem, width: u16) -> Line<'a> {
        let name = truncate_with_ellipsis(&item.name, (width as usize).saturating_sub(4));
        if item.selected {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(CURSOR, self.theme.cursor()),
                Span::styled(name, self.theme.selected()),
            ])
        } else {
            Line::from(vec![
                Span::raw("    "),
                Span::styled(name, self.theme.item()),
            ])
        }
    }

    fn description_line(&self, item: &'a MenuItem, width: u16) -> Line<'a> {
        let text = truncate_with_ellipsis(&item.description, (width as usize).saturating_sub(6));
        Line::from(vec![
            Span::raw("      "),
            Span::styled(text, self.theme.description()),
        ])
    }
}

impl StatefulWidget for CommandList<'_> {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut MenuState) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let offset = scroll_offset(self.selected_index(), state.offset, area.height, self.config);
        state.offset = offset;
        let bottom = area.y + area.height;
        let mut y = area.y;

        for item in self.items.iter().skip(offset) {
            if y >= bottom {
                break;
            }
            buf.set_line(area.x, y, &self.name_line(item, area.width), area.width);
            y += 1;

            if self.config.show_descriptions && y < bottom {
                buf.set_line(area.x, y, &self.description_line(item, area.width), area.width);
                y += 1;
            }

            if !self.config.compact {
                y += 1;
            }
        }
    }
}

/// Shown in place of the list when the catalog is empty.
pub struct EmptyMenu<'a> {
    theme: &'a Theme,
}

impl<'a> EmptyMenu<'a> {
    /// Create a new empty menu widget.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for EmptyMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let lines = [
            "Nothing to run here yet.",
            "Add a package.json, compose file, go.mod or Cargo.toml and run again.",
        ];

        let y = area.y + area.height.saturating_sub(lines.len() as u16) / 2;
        for (i, text) in lines.iter().enumerate() {
            let row = y + i as u16;
            if row >= area.y + area.height {
                break;
            }
            let len = text.chars().count() as u16;
            let x = area.x + area.width.saturating_sub(len) / 2;
            let line = Line::from(Span::styled(*text, self.theme.description()));
            buf.set_line(x, row, &line, area.width.saturating_sub(x - area.x));
        }
    }
}
