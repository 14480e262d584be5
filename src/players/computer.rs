//! Computer player.

use super::{InputError, Player, PlayerKind};
use crate::games::tictactoe::{Board, Position, Symbol};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Move selection strategy for the computer.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Strategy {
    /// Any cell of the 3x3 grid, uniformly, occupied or not.
    #[default]
    Random,
}

impl Strategy {
    /// Looks up a strategy by name; unknown names fall back to [`Strategy::Random`].
    #[instrument]
    pub fn from_name(name: &str) -> Self {
        name.trim().parse().unwrap_or_else(|_| {
            debug!(name, "Unknown strategy, using random");
            Strategy::Random
        })
    }
}

/// Computer player.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    symbol: Symbol,
    strategy: Strategy,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Creates a computer player seeded from the OS.
    pub fn new(symbol: impl Into<Symbol>, strategy: &str) -> Self {
        Self::with_rng(symbol, strategy, StdRng::from_os_rng())
    }

    /// Creates a computer player with a reproducible move sequence.
    pub fn seeded(symbol: impl Into<Symbol>, strategy: &str, seed: u64) -> Self {
        Self::with_rng(symbol, strategy, StdRng::seed_from_u64(seed))
    }

    fn with_rng(symbol: impl Into<Symbol>, strategy: &str, rng: StdRng) -> Self {
        Self {
            symbol: symbol.into(),
            strategy: Strategy::from_name(strategy),
            rng,
        }
    }

    /// Returns the strategy in use.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip(self, _board), fields(symbol = %self.symbol, strategy = %self.strategy))]
    fn get_move(&mut self, _board: &Board) -> Result<Position, InputError> {
        let position = match self.strategy {
            Strategy::Random => Position::new(
                self.rng.random_range(0..Position::SIZE),
                self.rng.random_range(0..Position::SIZE),
            ),
        };
        debug!(%position, "Computer chose position");
        Ok(position)
    }

    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn set_symbol(&mut self, symbol: Symbol) {
        self.symbol = symbol;
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }
}
