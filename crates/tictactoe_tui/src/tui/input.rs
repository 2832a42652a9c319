//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tictactoe_core::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor by (rows, columns).
    MoveCursor(isize, isize),
    /// Play the square under the cursor.
    PlayCursor,
    /// Play a specific square.
    Play(Position),
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
}

/// Maps a key event to an action, ignoring releases and repeats.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor(-1, 0)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor(1, 0)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor(0, -1)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor(0, 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(Position::from_keypad)
            .map(Action::Play),
        _ => None,
    }
}
