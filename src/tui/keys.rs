use crate::wizard::Event;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a terminal key into a wizard event.
///
/// `typing` is true while a text field has focus; letters are then text
/// input instead of the `q`/`h`/`j`/`k`/`l` shortcuts.
pub fn map_key(key: KeyEvent, typing: bool) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let event = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Event::Quit,
        KeyCode::Esc => Event::Quit,
        KeyCode::Up => Event::Up,
        KeyCode::Down => Event::Down,
        KeyCode::Left | KeyCode::BackTab => Event::Left,
        KeyCode::Right | KeyCode::Tab => Event::Right,
        KeyCode::Enter => Event::Select,
        KeyCode::Backspace => Event::Backspace,
        KeyCode::Char(ch) if typing => Event::Char(ch),
        KeyCode::Char('q') => Event::Quit,
        KeyCode::Char('k') => Event::Up,
        KeyCode::Char('j') => Event::Down,
        KeyCode::Char('h') => Event::Left,
        KeyCode::Char('l') => Event::Right,
        KeyCode::Char(ch) => Event::Char(ch),
        _ => return None,
    };

    log::trace!("[tui::keys] map_key: code={:?} typing={} event={:?}", key.code, typing, event);
    Some(event)
}
