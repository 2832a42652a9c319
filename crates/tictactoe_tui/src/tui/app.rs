//! Application state for the terminal UI.

use crate::flow::Screen;
use tictactoe_core::{Board, Outcome, Position, Status, WinLine};
use tracing::debug;

/// What the terminal shows: the last drawn board, the status line and the
/// cursor.
#[derive(Debug, Clone)]
pub struct App {
    board: Board,
    status: String,
    cursor: Position,
    interactive: bool,
    highlight: Option<WinLine>,
}

impl App {
    /// Creates an application with an empty board and the cursor centered.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: "Waiting for game to start...".to_string(),
            cursor: Position::Center,
            interactive: true,
            highlight: None,
        }
    }

    /// The board as last drawn.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the cursor by one row and/or column.
    pub fn move_cursor(&mut self, d_row: isize, d_column: isize) {
        self.cursor = self.cursor.step(d_row, d_column);
    }

    /// Places the cursor on a square.
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = pos;
    }

    /// Returns true while selections are forwarded to the game.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Squares of the winning line, once there is one.
    pub fn highlight(&self) -> Option<WinLine> {
        self.highlight
    }

    /// Returns true if `pos` is part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlight.is_some_and(|line| line.contains(&pos))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for App {
    fn draw_board(&mut self, board: &Board) {
        self.board = board.clone();
        if board.filled() == 0 {
            // Fresh game.
            self.interactive = true;
            self.highlight = None;
        }
    }

    fn update_status(&mut self, status: &Status) {
        debug!(%status, "Status updated");
        self.status = status.to_string();
    }

    fn stop_game(&mut self, outcome: &Outcome) {
        debug!(%outcome, "Disabling board input");
        self.interactive = false;
        self.highlight = outcome.line();
        self.status.push_str(" Press 'r' to restart or 'q' to quit.");
    }
}
