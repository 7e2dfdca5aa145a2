//! Full-screen message widgets for the TUI.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::tui::theme::Theme;

/// A block of text drawn from the top-left corner, wrapped to the area.
pub struct MessageScreen<'a> {
    title: Option<(&'a str, Style)>,
    message: &'a str,
    style: Style,
    hint: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> MessageScreen<'a> {
    /// Screen shown when the catalog could not be loaded.
    pub fn error(message: &'a str, theme: &'a Theme) -> Self {
        Self {
            title: Some(("Error:", theme.error())),
            message,
            style: Style::default(),
            hint: Some("Press q to quit."),
            theme,
        }
    }

    /// Screen shown after quitting.
    pub fn farewell(message: &'a str, theme: &'a Theme) -> Self {
        Self {
            title: None,
            message,
            style: theme.farewell(),
            hint: None,
            theme,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        let mut message_lines = self.message.lines();

        let first = message_lines.next().unwrap_or_default();
        match self.title {
            Some((title, style)) => lines.push(Line::from(vec![
                Span::styled(title, style),
                Span::raw(" "),
                Span::styled(first, self.style),
            ])),
            None => lines.push(Line::from(Span::styled(first, self.style))),
        }
        lines.extend(message_lines.map(|l| Line::from(Span::styled(l, self.style))));

        if let Some(hint) = self.hint {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(hint, self.theme.footer())));
        }

        lines
    }
}

impl Widget for MessageScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let inner = Rect::new(
            area.x + 1,
            area.y,
            area.width.saturating_sub(2),
            area.height,
        );
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
