//! Turn tracking and game outcomes.

use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Player 1 owns a complete line.
    Player1Wins,
    /// Player 2 owns a complete line (and player 1 does not).
    Player2Wins,
    /// Board is full with no complete line.
    Draw,
    /// The game continues.
    InProgress,
}

impl Outcome {
    /// Returns true if the game is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winning seat, if any.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Player1Wins => Some(Seat::One),
            Outcome::Player2Wins => Some(Seat::Two),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Player1Wins => write!(f, "Player 1 wins"),
            Outcome::Player2Wins => write!(f, "Player 2 wins"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::InProgress => write!(f, "In progress"),
        }
    }
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Player 1, always moves first.
    One,
    /// Player 2.
    Two,
}

/// Whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// No move requested yet.
    NotStarted,
    /// Player 1 is (or was last) asked to move.
    Player1Turn,
    /// Player 2 is (or was last) asked to move.
    Player2Turn,
    /// The game reached a terminal outcome.
    Finished(Outcome),
}

impl TurnState {
    /// Advances the marker and returns the seat that moves now.
    ///
    /// `NotStarted` and `Player2Turn` hand the move to player 1,
    /// `Player1Turn` hands it to player 2. `Finished` has no next seat.
    pub fn advance(&mut self) -> Option<Seat> {
        let (next, seat) = match self {
            TurnState::NotStarted | TurnState::Player2Turn => (TurnState::Player1Turn, Seat::One),
            TurnState::Player1Turn => (TurnState::Player2Turn, Seat::Two),
            TurnState::Finished(_) => return None,
        };
        *self = next;
        Some(seat)
    }
}
