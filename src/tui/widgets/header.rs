//! Header widget for the TUI.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// Application name shown before the project label.
pub const APP_TITLE: &str = "distructions";

/// Header widget showing the application title and project label.
pub struct Header<'a> {
    label: &'a str,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// Create a new header widget.
    pub fn new(label: &'a str, theme: &'a Theme) -> Self {
        Self { label, theme }
    }

    /// Build the header line.
    fn build_line(&self, width: u16) -> Line<'a> {
        // " distructions " + label
        let fixed = APP_TITLE.len() + 2;
        let label = truncate_with_ellipsis(self.label, (width as usize).saturating_sub(fixed));

        Line::from(vec![
            Span::raw(" "),
            Span::styled(APP_TITLE, self.theme.title()),
            Span::raw(" "),
            Span::styled(label, self.theme.label()),
        ])
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let line = self.build_line(area.width);
        Paragraph::new(line).render(Rect { height: 1, ..area }, buf);
    }
}

/// Truncate a string with ellipsis if it exceeds max length.
///
/// Handles Unicode characters properly by counting characters, not bytes.
/// Uses the Unicode ellipsis character (…) which is more compact.
pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();

    if char_count <= max_len {
        s.to_string()
    } else if max_len == 0 {
        String::new()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}
