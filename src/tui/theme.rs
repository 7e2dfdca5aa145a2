//! Color theme for the TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::config::Theme as ThemeConfig;

/// Pink accent of the default theme.
const ACCENT: Color = Color::Rgb(0xFF, 0x75, 0xB7);

/// Muted gray for descriptions.
const MUTED: Color = Color::Rgb(0x66, 0x66, 0x66);

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    // Header
    title_fg: Color,
    label_fg: Color,

    // Menu
    item_fg: Color,
    selected_fg: Color,
    cursor_fg: Color,
    description_fg: Color,

    // Footer
    footer_fg: Color,
    key_fg: Color,

    // Status
    error_fg: Color,
    farewell_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(&ThemeConfig::Default)
    }
}

impl Theme {
    /// Create a theme from configuration.
    pub fn new(config: &ThemeConfig) -> Self {
        match config {
            ThemeConfig::Default => Self::default_theme(),
            ThemeConfig::Minimal => Self::minimal_theme(),
            ThemeConfig::None => Self::no_color_theme(),
        }
    }

    /// Default full-color theme.
    fn default_theme() -> Self {
        Self {
            title_fg: ACCENT,
            label_fg: Color::White,

            item_fg: Color::Reset,
            selected_fg: ACCENT,
            cursor_fg: ACCENT,
            description_fg: MUTED,

            footer_fg: Color::DarkGray,
            key_fg: ACCENT,

            error_fg: Color::Red,
            farewell_fg: Color::Reset,
        }
    }

    /// Minimal color theme (terminal palette only).
    fn minimal_theme() -> Self {
        Self {
            title_fg: Color::Cyan,
            label_fg: Color::Reset,

            item_fg: Color::Reset,
            selected_fg: Color::Cyan,
            cursor_fg: Color::Cyan,
            description_fg: Color::DarkGray,

            footer_fg: Color::DarkGray,
            key_fg: Color::Gray,

            error_fg: Color::Red,
            farewell_fg: Color::Reset,
        }
    }

    /// No-color theme (monochrome).
    fn no_color_theme() -> Self {
        Self {
            title_fg: Color::Reset,
            label_fg: Color::Reset,

            item_fg: Color::Reset,
            selected_fg: Color::Reset,
            cursor_fg: Color::Reset,
            description_fg: Color::Reset,

            footer_fg: Color::Reset,
            key_fg: Color::Reset,

            error_fg: Color::Reset,
            farewell_fg: Color::Reset,
        }
    }

    // ==================== Header Styles ====================

    /// Get the application title style.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.title_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the project label style.
    pub fn label(&self) -> Style {
        Style::default()
            .fg(self.label_fg)
            .add_modifier(Modifier::BOLD)
    }

    // ==================== Menu Styles ====================

    /// Get the command name style.
    pub fn item(&self) -> Style {
        Style::default().fg(self.item_fg)
    }

    /// Get the selected command name style.
    ///
    /// Monochrome themes fall back to reverse video so the selection stays visible.
    pub fn selected(&self) -> Style {
        if self.selected_fg == Color::Reset {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
                .fg(self.selected_fg)
                .add_modifier(Modifier::BOLD)
        }
    }

    /// Get the cursor marker style.
    pub fn cursor(&self) -> Style {
        Style::default()
            .fg(self.cursor_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the description style.
    pub fn description(&self) -> Style {
        Style::default().fg(self.description_fg)
    }

    // ==================== Footer Styles ====================

    /// Get the footer style.
    pub fn footer(&self) -> Style {
        Style::default().fg(self.footer_fg)
    }

    /// Get the keybinding style.
    pub fn key(&self) -> Style {
        Style::default()
            .fg(self.key_fg)
            .add_modifier(Modifier::BOLD)
    }

    // ==================== Status Styles ====================

    /// Get the error style.
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.error_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the farewell message style.
    pub fn farewell(&self) -> Style {
        Style::default().fg(self.farewell_fg)
    }
}
