//! The 3x3 board.

use crate::error::{CellOccupied, OutOfBounds};
use crate::position::Position;
use crate::types::Square;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// 3x3 tic-tac-toe board.
///
/// [`Board::set`] is the only way to change a square, and it refuses to
/// overwrite a played square with another mark. Writing [`Square::Empty`]
/// always succeeds. [`Board::reset`] clears the whole grid at once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns the square at zero-based row and column.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] for coordinates off the board.
    pub fn get_at(&self, row: usize, column: usize) -> Result<Square, OutOfBounds> {
        Ok(self.get(Position::from_coordinates(row, column)?))
    }

    /// Writes a square.
    ///
    /// # Errors
    ///
    /// Returns [`CellOccupied`] if the square already holds a mark and
    /// `square` is a mark too. The board is left untouched in that case.
    #[instrument(skip(self))]
    pub fn set(&mut self, pos: Position, square: Square) -> Result<(), CellOccupied> {
        let current = self.get(pos);
        if !current.is_empty() && !square.is_empty() {
            warn!(?current, "Refusing to overwrite played square");
            return Err(CellOccupied { position: pos });
        }
        self.squares[pos.to_index()] = square;
        Ok(())
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
        debug!("Board cleared");
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Checks if every square holds a mark.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Number of squares holding a mark.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Squares grouped by row.
    pub fn rows(&self) -> [[Square; 3]; 3] {
        let s = &self.squares;
        [[s[0], s[1], s[2]], [s[3], s[4], s[5]], [s[6], s[7], s[8]]]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            write!(f, "{}|{}|{}", row[0].symbol(), row[1].symbol(), row[2].symbol())?;
        }
        Ok(())
    }
}
