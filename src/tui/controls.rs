//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Up | KeyCode::BackTab => app.prev_field(),
        KeyCode::Down | KeyCode::Tab => app.next_field(),
        KeyCode::Right | KeyCode::Char('+' | '=') => app.adjust(1),
        KeyCode::Left | KeyCode::Char('-') => app.adjust(-1),
        KeyCode::PageUp => app.adjust_coarse(1),
        KeyCode::PageDown => app.adjust_coarse(-1),
        KeyCode::Char(c @ '0'..='9') => app.type_digit(c),
        KeyCode::Backspace => app.erase_digit(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle(),
        KeyCode::Char('s') => app.save_report(),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}
