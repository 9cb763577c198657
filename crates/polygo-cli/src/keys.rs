use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use polygo_core::Input;

/// Map a terminal event to a session input. Anything without a meaning in
/// any phase maps to `None`.
pub fn to_input(event: &Event) -> Option<Input> {
    match event {
        Event::Key(key) => key_to_input(key),
        _ => None,
    }
}

fn key_to_input(key: &KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Input::Quit),
            _ => None,
        };
    }

    let input = match key.code {
        KeyCode::Enter => Input::Confirm,
        KeyCode::Tab => Input::Advance,
        KeyCode::Left => Input::Left,
        KeyCode::Right => Input::Right,
        KeyCode::Up => Input::Up,
        KeyCode::Down => Input::Down,
        KeyCode::PageUp => Input::PageUp,
        KeyCode::PageDown => Input::PageDown,
        KeyCode::Backspace => Input::Backspace,
        KeyCode::Char(c) => Input::Char(c),
        _ => return None,
    };
    Some(input)
}
