//! Error types for board and engine operations.

use crate::position::Position;
use derive_more::{Display, Error};

/// A non-empty mark was written to a square that already holds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Square already assigned: {}", position)]
pub struct CellOccupied {
    /// The square that was already played.
    pub position: Position,
}

/// Raw coordinates fall outside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Coordinates ({}, {}) are outside the 3x3 board", row, column)]
pub struct OutOfBounds {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub column: usize,
}

/// Errors that escape the turn engine.
///
/// An occupied square is not among them: the engine turns it into a
/// rejected turn. Anything reported here is a caller defect.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineError {
    /// Selection used coordinates off the board.
    #[display("{}", _0)]
    OutOfBounds(OutOfBounds),
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::OutOfBounds(err) => Some(err),
        }
    }
}

impl From<OutOfBounds> for EngineError {
    fn from(err: OutOfBounds) -> Self {
        EngineError::OutOfBounds(err)
    }
}
