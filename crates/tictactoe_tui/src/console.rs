//! Line-oriented front end.
//!
//! Reads one command per line and prints the board plus status after every
//! change. Works over any reader and writer, so it runs the same against a
//! terminal or a scripted test.

use crate::flow::{GameFlow, Screen};
use std::io::{self, BufRead, Write};
use tictactoe_core::{Board, Outcome, Position, Status, TurnEngine};
use tracing::{debug, info, instrument, warn};

const USAGE: &str =
    "Enter 'row column' (0-2 each), a square number 1-9, 'r' to reset or 'q' to quit.";
const GAME_OVER_HINT: &str = "Game over. Type 'r' to play again or 'q' to quit.";

/// A console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Play at zero-based row and column (not yet range-checked).
    PlayAt(usize, usize),
    /// Play a keypad square.
    Play(Position),
    /// Start over.
    Reset,
    /// Leave the game.
    Quit,
}

impl ConsoleCommand {
    /// Parses one input line.
    pub fn parse(line: &str) -> Option<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["r" | "reset"] => Some(Self::Reset),
            ["q" | "quit"] => Some(Self::Quit),
            [digit] => digit
                .parse::<u32>()
                .ok()
                .and_then(Position::from_keypad)
                .or_else(|| Position::from_label(digit))
                .map(Self::Play),
            [row, column] => Some(Self::PlayAt(row.parse().ok()?, column.parse().ok()?)),
            _ => None,
        }
    }
}

/// Screen that buffers text until the console loop flushes it.
#[derive(Debug, Default)]
pub struct ConsoleScreen {
    pending: String,
    stopped: bool,
}

impl ConsoleScreen {
    /// Takes everything written since the last call.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.pending)
    }

    /// Returns true once the game has ended.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Screen for ConsoleScreen {
    fn draw_board(&mut self, board: &Board) {
        self.stopped = false;
        self.pending.push_str(&format!("\n{}\n\n", board));
    }

    fn update_status(&mut self, status: &Status) {
        self.pending.push_str(&format!("{}\n", status));
    }

    fn stop_game(&mut self, outcome: &Outcome) {
        debug!(%outcome, "Console game stopped");
        self.stopped = true;
        self.pending.push_str(GAME_OVER_HINT);
        self.pending.push('\n');
    }
}

/// Runs a game reading commands from `input` until `q` or end of input.
#[instrument(skip_all)]
pub fn run_console<R: BufRead, W: Write>(
    engine: TurnEngine,
    input: R,
    mut output: W,
) -> io::Result<()> {
    info!("Starting console game");
    let mut flow = GameFlow::new(engine, ConsoleScreen::default());
    flow.start();
    writeln!(output, "{}", USAGE)?;
    write!(output, "{}", flow.screen_mut().take_output())?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = ConsoleCommand::parse(&line) else {
            warn!(%line, "Unrecognized console input");
            writeln!(output, "{}", USAGE)?;
            continue;
        };
        debug!(?command, "Console command");

        match command {
            ConsoleCommand::Quit => break,
            ConsoleCommand::Reset => flow.reset(),
            ConsoleCommand::Play(_) | ConsoleCommand::PlayAt(..) if flow.screen().is_stopped() => {
                debug!("Game over, selection ignored");
                writeln!(output, "{}", GAME_OVER_HINT)?;
            }
            ConsoleCommand::Play(pos) => {
                flow.select(pos);
            }
            ConsoleCommand::PlayAt(row, column) => {
                if let Err(e) = flow.select_at(row, column) {
                    writeln!(output, "{}", e)?;
                }
            }
        }

        write!(output, "{}", flow.screen_mut().take_output())?;
        output.flush()?;
    }

    info!("Console game ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ConsoleCommand::parse("1 2"), Some(ConsoleCommand::PlayAt(1, 2)));
        assert_eq!(
            ConsoleCommand::parse(" 5 "),
            Some(ConsoleCommand::Play(Position::Center))
        );
        assert_eq!(
            ConsoleCommand::parse("top-right"),
            Some(ConsoleCommand::Play(Position::TopRight))
        );
        assert_eq!(ConsoleCommand::parse("r"), Some(ConsoleCommand::Reset));
        assert_eq!(ConsoleCommand::parse("quit"), Some(ConsoleCommand::Quit));
        assert_eq!(ConsoleCommand::parse("0"), None);
        assert_eq!(ConsoleCommand::parse("a b"), None);
        assert_eq!(ConsoleCommand::parse(""), None);
    }

    #[test]
    fn test_screen_buffers_until_taken() {
        let mut screen = ConsoleScreen::default();
        screen.update_status(&Status::Tie);
        assert_eq!(screen.take_output(), "The game is tied!\n");
        assert_eq!(screen.take_output(), "");
    }

    #[test]
    fn test_screen_stops_until_redrawn() {
        let mut screen = ConsoleScreen::default();
        assert!(!screen.is_stopped());
        screen.stop_game(&Outcome::Tie);
        assert!(screen.is_stopped());
        screen.draw_board(&Board::new());
        assert!(!screen.is_stopped());
    }
}
