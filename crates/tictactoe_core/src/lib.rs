//! Tic-tac-toe game logic.
//!
//! Two components make up the core:
//!
//! - **Board**: owns the 3x3 grid of squares and guards each played square
//!   against being overwritten.
//! - **Turn engine**: owns the two players, the active player, the move
//!   count and the game phase, and sequences turns against the board.
//!
//! Presentation is left to callers: the engine reports a [`TurnOutcome`]
//! for every selection and a [`Status`] describing what to show next.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Position, Status, TurnEngine};
//!
//! let mut engine = TurnEngine::default();
//! let outcome = engine.play_turn(Position::Center);
//! assert!(outcome.is_accepted());
//! assert_eq!(engine.status_for(&outcome), Status::Turn("Player 2".to_string()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod position;
mod rules;
mod status;
mod types;

pub use board::Board;
pub use engine::{
    DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, Outcome, Phase, TurnEngine, TurnOutcome,
};
pub use error::{CellOccupied, EngineError, OutOfBounds};
pub use position::Position;
pub use rules::{CELL_COUNT, MIN_MOVES_FOR_WIN, WIN_LINES, WinLine, winning_line};
pub use status::Status;
pub use types::{Mark, Player, Square};
