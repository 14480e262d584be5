//! Tic-tac-toe rules engine and turn controller.

pub mod events;
mod game;
mod phases;
mod position;
pub mod rules;
mod types;

pub use events::{GameEvent, GameObserver, NullObserver};
pub use game::{Game, GameError};
pub use phases::{Outcome, Seat, TurnState};
pub use position::Position;
pub use types::{Board, BoardError, Cell, Symbol, SymbolError};
