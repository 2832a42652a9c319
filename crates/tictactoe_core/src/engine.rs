//! Turn sequencing for a two-player game.
//!
//! The engine is a two-state machine: it waits for a move until a line is
//! completed or the board fills up, then refuses every selection until it
//! is reset.

use crate::board::Board;
use crate::error::{CellOccupied, EngineError};
use crate::position::Position;
use crate::rules::{CELL_COUNT, MIN_MOVES_FOR_WIN, WinLine, winning_line};
use crate::status::Status;
use crate::types::{Mark, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Default name for the player who moves first.
pub const DEFAULT_PLAYER_ONE: &str = "Player 1";

/// Default name for the player who moves second.
pub const DEFAULT_PLAYER_TWO: &str = "Player 2";

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// `mark` filled `line`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: WinLine,
    },
    /// Board full, no line.
    Tie,
}

impl Outcome {
    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            Outcome::Tie => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win { mark, .. } => write!(f, "{} wins", mark),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// The active player may move.
    #[default]
    AwaitingMove,
    /// The game has ended; selections are refused until reset.
    GameOver(Outcome),
}

/// Result of a single selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Mark placed; the turn passed to `next`.
    Continue {
        /// Square that was played.
        placed: Position,
        /// Mark now on move.
        next: Mark,
    },
    /// Mark placed and the game ended.
    Finished(Outcome),
    /// Square already played; nothing changed and the same player moves again.
    Rejected(CellOccupied),
    /// Game already over; nothing changed.
    Refused(Outcome),
}

impl TurnOutcome {
    /// Returns true if a mark was placed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, TurnOutcome::Continue { .. } | TurnOutcome::Finished(_))
    }
}

/// Owns the board and the session state for one game.
///
/// Each engine is independent; nothing is shared between instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnEngine {
    board: Board,
    players: [Player; 2],
    active: Mark,
    moves_taken: u8,
    phase: Phase,
}

// ─────────────────────────────────────────────────────────────
//  Construction and reset
// ─────────────────────────────────────────────────────────────

impl TurnEngine {
    /// Creates an engine for two named players.
    ///
    /// The first name plays [`Mark::X`] and moves first.
    #[instrument(skip_all)]
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        let players = [
            Player::new(player_one, Mark::X),
            Player::new(player_two, Mark::O),
        ];
        debug!(one = %players[0], two = %players[1], "Creating turn engine");
        Self {
            board: Board::new(),
            players,
            active: Mark::X,
            moves_taken: 0,
            phase: Phase::AwaitingMove,
        }
    }

    /// Starts a fresh game with the same players.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.moves_taken = 0;
        self.active = Mark::X;
        self.phase = Phase::AwaitingMove;
        info!("Game reset");
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO)
    }
}

// ─────────────────────────────────────────────────────────────
//  Playing turns
// ─────────────────────────────────────────────────────────────

impl TurnEngine {
    /// Plays the active player's mark at `pos`.
    ///
    /// An occupied square is not an error here: it comes back as
    /// [`TurnOutcome::Rejected`] with the session unchanged.
    #[instrument(skip(self), fields(player = %self.active_player().name(), moves_taken = self.moves_taken))]
    pub fn play_turn(&mut self, pos: Position) -> TurnOutcome {
        if let Phase::GameOver(outcome) = self.phase {
            debug!(%outcome, "Game over, selection refused");
            return TurnOutcome::Refused(outcome);
        }

        let mark = self.active;
        if let Err(occupied) = self.board.set(pos, Square::Marked(mark)) {
            warn!(%occupied, "Move rejected");
            return TurnOutcome::Rejected(occupied);
        }
        self.moves_taken += 1;
        info!(position = %pos, %mark, "Move accepted");

        if self.moves_taken >= MIN_MOVES_FOR_WIN
            && let Some(line) = winning_line(&self.board, mark)
        {
            let outcome = Outcome::Win { mark, line };
            self.phase = Phase::GameOver(outcome);
            info!(winner = %self.player(mark).name(), ?line, "Game won");
            return TurnOutcome::Finished(outcome);
        }

        if self.moves_taken >= CELL_COUNT {
            self.phase = Phase::GameOver(Outcome::Tie);
            info!("Game tied");
            return TurnOutcome::Finished(Outcome::Tie);
        }

        self.active = mark.opponent();
        TurnOutcome::Continue {
            placed: pos,
            next: self.active,
        }
    }

    /// Plays at zero-based row and column.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] for coordinates off the board;
    /// the session is not touched.
    #[instrument(skip(self))]
    pub fn play_at(&mut self, row: usize, column: usize) -> Result<TurnOutcome, EngineError> {
        let pos = Position::from_coordinates(row, column)?;
        Ok(self.play_turn(pos))
    }
}

// ─────────────────────────────────────────────────────────────
//  Queries
// ─────────────────────────────────────────────────────────────

impl TurnEngine {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, player one first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player who owns `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.players[0],
            Mark::O => &self.players[1],
        }
    }

    /// The player whose move is accepted next.
    ///
    /// After a win this is the winner.
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// Moves accepted since the last reset.
    pub fn moves_taken(&self) -> u8 {
        self.moves_taken
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::AwaitingMove => None,
            Phase::GameOver(outcome) => Some(outcome),
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<&Player> {
        self.outcome()
            .and_then(|outcome| outcome.winner())
            .map(|mark| self.player(mark))
    }

    /// Status for the current state.
    pub fn status(&self) -> Status {
        match self.phase {
            Phase::AwaitingMove => Status::Turn(self.active_player().name().clone()),
            Phase::GameOver(Outcome::Win { mark, .. }) => {
                Status::Winner(self.player(mark).name().clone())
            }
            Phase::GameOver(Outcome::Tie) => Status::Tie,
        }
    }

    /// Status to show after a selection produced `outcome`.
    pub fn status_for(&self, outcome: &TurnOutcome) -> Status {
        match outcome {
            TurnOutcome::Rejected(_) => Status::SquareTaken(self.active_player().name().clone()),
            _ => self.status(),
        }
    }
}
