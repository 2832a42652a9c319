//! Wiring between the turn engine and a screen.
//!
//! A [`GameFlow`] owns one engine and one screen. Front ends hand it cell
//! selections and resets; it tells the screen what to redraw and which
//! status to show.

use tictactoe_core::{Board, EngineError, Outcome, Position, Status, TurnEngine, TurnOutcome};
use tracing::{debug, info, instrument};

/// Anything that can show a game.
pub trait Screen {
    /// Redraws all nine squares.
    fn draw_board(&mut self, board: &Board);

    /// Replaces the status line.
    fn update_status(&mut self, status: &Status);

    /// Stops accepting selections; the game ended with `outcome`.
    fn stop_game(&mut self, outcome: &Outcome);
}

/// One game session bound to one screen.
#[derive(Debug)]
pub struct GameFlow<S: Screen> {
    engine: TurnEngine,
    screen: S,
}

impl<S: Screen> GameFlow<S> {
    /// Binds `engine` to `screen` without drawing anything yet.
    pub fn new(engine: TurnEngine, screen: S) -> Self {
        Self { engine, screen }
    }

    /// Resets the engine and shows the opening position.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        self.reset();
    }

    /// Starts a new game with the same players.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.engine.reset();
        self.screen.draw_board(self.engine.board());
        self.screen.update_status(&self.engine.status());
    }

    /// Forwards a selection to the engine and updates the screen.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) -> TurnOutcome {
        let outcome = self.engine.play_turn(pos);
        match outcome {
            TurnOutcome::Continue { .. } => {
                self.screen.draw_board(self.engine.board());
                self.screen.update_status(&self.engine.status_for(&outcome));
            }
            TurnOutcome::Finished(result) => {
                info!(%result, "Game finished");
                self.screen.draw_board(self.engine.board());
                self.screen.update_status(&self.engine.status_for(&outcome));
                self.screen.stop_game(&result);
            }
            TurnOutcome::Rejected(_) => {
                self.screen.update_status(&self.engine.status_for(&outcome));
            }
            TurnOutcome::Refused(_) => {
                debug!("Selection after game over ignored");
            }
        }
        outcome
    }

    /// Coordinate form of [`GameFlow::select`].
    ///
    /// # Errors
    ///
    /// Off-board coordinates are returned untouched; the screen is not
    /// updated.
    #[instrument(skip(self))]
    pub fn select_at(&mut self, row: usize, column: usize) -> Result<TurnOutcome, EngineError> {
        let pos = Position::from_coordinates(row, column)?;
        Ok(self.select(pos))
    }

    /// The engine driving this session.
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// The screen.
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Mutable access to the screen, for presentation-only state such as a cursor.
    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Mark, Square};

    #[derive(Debug, Default)]
    struct RecordingScreen {
        draws: Vec<Board>,
        statuses: Vec<String>,
        stops: Vec<Outcome>,
    }

    impl Screen for RecordingScreen {
        fn draw_board(&mut self, board: &Board) {
            self.draws.push(board.clone());
        }

        fn update_status(&mut self, status: &Status) {
            self.statuses.push(status.to_string());
        }

        fn stop_game(&mut self, outcome: &Outcome) {
            self.stops.push(*outcome);
        }
    }

    fn flow() -> GameFlow<RecordingScreen> {
        let mut flow = GameFlow::new(TurnEngine::default(), RecordingScreen::default());
        flow.start();
        flow
    }

    #[test]
    fn test_start_draws_and_announces_first_player() {
        let flow = flow();
        assert_eq!(flow.screen().draws, vec![Board::new()]);
        assert_eq!(flow.screen().statuses, vec!["Player 1's turn"]);
    }

    #[test]
    fn test_accepted_move_redraws() {
        let mut flow = flow();
        flow.select(Position::Center);
        let screen = flow.screen();
        assert_eq!(screen.draws.len(), 2);
        assert_eq!(screen.draws[1].get(Position::Center), Square::Marked(Mark::X));
        assert_eq!(screen.statuses.last().map(String::as_str), Some("Player 2's turn"));
    }

    #[test]
    fn test_rejected_move_only_updates_status() {
        let mut flow = flow();
        flow.select(Position::Center);
        flow.select(Position::Center);
        let screen = flow.screen();
        assert_eq!(screen.draws.len(), 2);
        assert_eq!(
            screen.statuses.last().map(String::as_str),
            Some("Square already assigned! Player 2's turn")
        );
    }

    #[test]
    fn test_win_stops_game_once() {
        let mut flow = flow();
        for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            flow.select_at(row, column).unwrap();
        }
        // Further clicks are ignored entirely.
        flow.select_at(2, 2).unwrap();

        let screen = flow.screen();
        assert_eq!(screen.stops.len(), 1);
        assert_eq!(screen.stops[0].winner(), Some(Mark::X));
        assert_eq!(screen.draws.len(), 6);
        assert_eq!(
            screen.statuses.last().map(String::as_str),
            Some("Congratulations. Player 1 is the winner!")
        );
        assert!(flow.engine().board().is_empty(Position::BottomRight));
    }

    #[test]
    fn test_out_of_bounds_selection_leaves_screen_alone() {
        let mut flow = flow();
        assert!(flow.select_at(0, 5).is_err());
        assert_eq!(flow.screen().draws.len(), 1);
        assert_eq!(flow.screen().statuses.len(), 1);
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut flow = flow();
        for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            flow.select_at(row, column).unwrap();
        }
        flow.reset();
        assert_eq!(flow.screen().draws.last(), Some(&Board::new()));
        assert_eq!(
            flow.screen().statuses.last().map(String::as_str),
            Some("Player 1's turn")
        );
        assert!(flow.select(Position::Center).is_accepted());
    }
}
