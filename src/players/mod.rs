//! Player trait and implementations.

mod computer;
mod human;
mod input;

pub use computer::{ComputerPlayer, Strategy};
pub use human::HumanPlayer;
pub use input::{IndexPolicy, InputError, MoveInput};

use crate::games::tictactoe::{Board, Position, Symbol};
use serde::{Deserialize, Serialize};

/// Kind of player sitting in a seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Reads moves from a person.
    Human,
    /// Picks moves itself.
    Computer,
}

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// The position is not checked against the board; the game controller
    /// rejects occupied cells and asks again.
    fn get_move(&mut self, board: &Board) -> Result<Position, InputError>;

    /// Returns the symbol this player marks cells with.
    fn symbol(&self) -> Symbol;

    /// Replaces the player's symbol.
    fn set_symbol(&mut self, symbol: Symbol);

    /// Returns whether a person or the computer is playing.
    fn kind(&self) -> PlayerKind;

    /// Returns the player's display name.
    fn name(&self) -> String {
        format!("{} {}", self.kind(), self.symbol())
    }
}

impl std::fmt::Debug for dyn Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("kind", &self.kind())
            .field("symbol", &self.symbol())
            .finish()
    }
}
