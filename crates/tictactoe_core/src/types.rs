//! Core domain types: marks, squares and players.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The symbol a player leaves on the board.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player one's mark (moves first).
    #[display("X")]
    X,
    /// Player two's mark.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square claimed by the given mark.
    Marked(Mark),
}

impl Square {
    /// Returns true if no mark has been placed.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Marked(mark) => Some(mark),
        }
    }

    /// Single-character symbol, a space for empty squares.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Marked(Mark::X) => 'X',
            Square::Marked(Mark::O) => 'O',
        }
    }
}

impl From<Mark> for Square {
    fn from(mark: Mark) -> Self {
        Square::Marked(mark)
    }
}

/// A participant in the game: a display name and the mark they play.
///
/// Players are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new, Serialize, Deserialize)]
pub struct Player {
    /// Name shown in status messages.
    #[new(into)]
    name: String,
    /// Mark this player places.
    mark: Mark,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}
