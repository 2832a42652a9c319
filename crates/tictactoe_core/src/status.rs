//! Status lines reported to the presentation layer.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// What the presentation should tell the players.
///
/// The `Display` form is the exact status text.
#[derive(Debug, Display, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Waiting for the named player.
    #[display("{}'s turn", _0)]
    Turn(String),
    /// The last selection hit a played square; still the named player's turn.
    #[display("Square already assigned! {}'s turn", _0)]
    SquareTaken(String),
    /// The named player completed a line.
    #[display("Congratulations. {} is the winner!", _0)]
    Winner(String),
    /// All squares filled without a line.
    #[display("The game is tied!")]
    Tie,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Turn("Player 1".into()).to_string(), "Player 1's turn");
        assert_eq!(
            Status::SquareTaken("Player 2".into()).to_string(),
            "Square already assigned! Player 2's turn"
        );
        assert_eq!(
            Status::Winner("Player 1".into()).to_string(),
            "Congratulations. Player 1 is the winner!"
        );
        assert_eq!(Status::Tie.to_string(), "The game is tied!");
    }
}
