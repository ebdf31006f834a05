use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use common::{constants::TURN_STEP, player::PlayerInput};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Move(PlayerInput),
    Resize(u16, u16),
    Quit,
}

// Terminals only report presses (and auto-repeats), so every key event is one
// tick of input rather than a held state.
pub fn action_from_event(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) => action_from_key(key),
        Event::Resize(cols, rows) => Some(Action::Resize(*cols, *rows)),
        _ => None,
    }
}

fn action_from_key(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(Action::Quit),
            _ => None,
        };
    }

    let mut input = PlayerInput::default();
    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => input.forward = true,
            's' => input.backward = true,
            'a' => input.left = true,
            'd' => input.right = true,
            'q' => input.yaw_delta = -TURN_STEP,
            'e' => input.yaw_delta = TURN_STEP,
            _ => return None,
        },
        KeyCode::Up => input.forward = true,
        KeyCode::Down => input.backward = true,
        KeyCode::Left => input.yaw_delta = -TURN_STEP,
        KeyCode::Right => input.yaw_delta = TURN_STEP,
        _ => return None,
    }

    Some(Action::Move(input))
}
