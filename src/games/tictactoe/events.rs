//! Events the game controller reports while it runs.

use super::{Outcome, Position, Seat, Symbol};
use serde::Serialize;

/// Messages sent from the controller to whoever displays the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new round started.
    TurnStarted {
        /// Seat whose turn it is.
        seat: Seat,
        /// Display name of the player.
        player: String,
        /// Player's symbol.
        symbol: Symbol,
    },
    /// Rendered board, shown before each move request and after the game.
    BoardShown {
        /// Output of [`super::Board::render`].
        board: String,
    },
    /// The requested cell was taken or off the board; the same player goes again.
    CellOccupied {
        /// Player who asked for the cell.
        symbol: Symbol,
        /// The rejected position.
        position: Position,
    },
    /// A mark was placed.
    MoveMade {
        /// Player who moved.
        symbol: Symbol,
        /// Where the mark went.
        position: Position,
    },
    /// The game reached a terminal outcome.
    GameOver {
        /// How it ended.
        outcome: Outcome,
        /// Winner's symbol, `None` for a draw.
        winner: Option<Symbol>,
    },
}

/// Receives [`GameEvent`]s from the controller.
pub trait GameObserver {
    /// Handles one event.
    fn on_event(&mut self, event: &GameEvent) -> std::io::Result<()>;
}

/// Observer that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_event(&mut self, _event: &GameEvent) -> std::io::Result<()> {
        Ok(())
    }
}

impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) -> std::io::Result<()> {
        self.push(event.clone());
        Ok(())
    }
}
