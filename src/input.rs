use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::grid::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Restart,
    Quit,
}

/// Translate a key press into a game command. Key releases and unbound
/// keys map to `None`.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            _ => None,
        };
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(Command::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(Command::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(Command::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(Command::Turn(Direction::Right)),
        KeyCode::Char(' ') => Some(Command::TogglePause),
        KeyCode::Enter => Some(Command::Restart),
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}
