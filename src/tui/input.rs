//! Input handling for the TUI.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::controller::Key;

/// Translate a terminal event into a controller key.
///
/// Returns `None` for events the controller never sees (resize, mouse, focus,
/// key releases).
pub fn map_event(event: &Event) -> Option<Key> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(map_key(*key)),
        _ => None,
    }
}

/// Translate a key press.
///
/// - q/Esc/Ctrl+C: quit
/// - ↑/k: move up
/// - ↓/j: move down
/// - Home/g: first entry
/// - End/G: last entry
/// - Enter: run selected command
pub fn map_key(key: KeyEvent) -> Key {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Key::Quit,
            _ => Key::Other,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Key::Quit,
        KeyCode::Up | KeyCode::Char('k') => Key::Up,
        KeyCode::Down | KeyCode::Char('j') => Key::Down,
        KeyCode::Home | KeyCode::Char('g') => Key::First,
        KeyCode::End | KeyCode::Char('G') => Key::Last,
        KeyCode::Enter => Key::Confirm,
        _ => Key::Other,
    }
}
