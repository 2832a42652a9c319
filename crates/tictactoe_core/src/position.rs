//! Board positions and coordinate conversion.

use crate::error::OutOfBounds;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the nine squares, in row-major order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions, row by row.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Creates a position from zero-based row and column.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if either coordinate is greater than 2.
    #[instrument]
    pub fn from_coordinates(row: usize, column: usize) -> Result<Self, OutOfBounds> {
        if row >= 3 || column >= 3 {
            return Err(OutOfBounds { row, column });
        }
        Self::from_index(row * 3 + column).ok_or(OutOfBounds { row, column })
    }

    /// Parses a keypad-style number (1-9) as shown on the board.
    pub fn from_keypad(digit: u32) -> Option<Self> {
        match digit {
            1..=9 => Self::from_index(digit as usize - 1),
            _ => None,
        }
    }

    /// Parses a label (case-insensitive) such as `"center"` or `"top-left"`.
    pub fn from_label(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == wanted)
    }

    /// Moves one step in the given direction, staying put at the edge.
    pub fn step(self, d_row: isize, d_column: isize) -> Self {
        let row = (self.row() as isize + d_row).clamp(0, 2) as usize;
        let column = (self.column() as isize + d_column).clamp(0, 2) as usize;
        Self::from_coordinates(row, column).unwrap_or(self)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = OutOfBounds;

    fn try_from((row, column): (usize, usize)) -> Result<Self, Self::Error> {
        Self::from_coordinates(row, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_round_trip_every_square() {
        for pos in Position::ALL {
            assert_eq!(Position::from_coordinates(pos.row(), pos.column()), Ok(pos));
        }
    }

    #[test]
    fn test_out_of_range_coordinates() {
        assert_eq!(
            Position::from_coordinates(3, 0),
            Err(OutOfBounds { row: 3, column: 0 })
        );
        assert!(Position::try_from((1, 7)).is_err());
    }

    #[test]
    fn test_keypad_and_labels() {
        assert_eq!(Position::from_keypad(1), Some(Position::TopLeft));
        assert_eq!(Position::from_keypad(9), Some(Position::BottomRight));
        assert_eq!(Position::from_keypad(0), None);
        assert_eq!(Position::from_label("center"), Some(Position::Center));
        assert_eq!(Position::from_label("Bottom-Left"), Some(Position::BottomLeft));
        assert_eq!(Position::from_label("nowhere"), None);
    }

    #[test]
    fn test_step_clamps_at_edges() {
        assert_eq!(Position::TopLeft.step(-1, 0), Position::TopLeft);
        assert_eq!(Position::TopLeft.step(0, 1), Position::TopCenter);
        assert_eq!(Position::Center.step(1, 1), Position::BottomRight);
        assert_eq!(Position::BottomRight.step(0, 1), Position::BottomRight);
    }
}
