//! Footer widget for the TUI.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// Key hints shown while there is something to select.
const HINTS: &[(&str, &str)] = &[("↑/↓", "move"), ("Enter", "run")];

/// Footer widget showing keybinding hints and a status message.
pub struct Footer<'a> {
    message: &'a str,
    show_hints: bool,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    /// Create a new footer widget.
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self {
            message,
            show_hints: true,
            theme,
        }
    }

    /// Toggle the key hints in front of the message.
    pub fn hints(mut self, show: bool) -> Self {
        self.show_hints = show;
        self
    }

    /// Build the footer line, dropping hints when the terminal is narrow.
    fn build_line(&self, width: u16) -> Line<'a> {
        let hints_width: usize = HINTS
            .iter()
            .map(|(key, action)| key.chars().count() + action.len() + 3)
            .sum();
        let message_width = self.message.chars().count();

        let mut spans = vec![Span::raw(" ")];

        if self.show_hints && (width as usize) >= hints_width + message_width + 1 {
            for (key, action) in HINTS {
                spans.push(Span::styled(*key, self.theme.key()));
                spans.push(Span::styled(format!(" {action}  "), self.theme.footer()));
            }
        }

        spans.push(Span::styled(self.message, self.theme.footer()));
        Line::from(spans)
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let line = self.build_line(area.width);
        Paragraph::new(line).render(area, buf);
    }
}
