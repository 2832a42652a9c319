//! Win conditions.
//!
//! Rules are kept apart from board storage so the engine can ask a
//! single question: does the active mark complete a line?

use crate::board::Board;
use crate::position::Position;
use crate::types::{Mark, Square};
use tracing::instrument;

/// Three positions that win when uniformly marked.
pub type WinLine = [Position; 3];

/// Number of squares on the board.
pub const CELL_COUNT: u8 = 9;

/// Fewest total moves after which a win is possible.
///
/// With alternating turns the first player places a third mark on the
/// fifth move.
pub const MIN_MOVES_FOR_WIN: u8 = 5;

/// Every win condition: 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::BottomLeft, Position::Center, Position::TopRight],
];

/// Returns the first line completely held by `mark`, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<WinLine> {
    let wanted = Square::Marked(mark);
    WIN_LINES
        .iter()
        .find(|line| line.iter().all(|&pos| board.get(pos) == wanted))
        .copied()
}
