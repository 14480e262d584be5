//! Human player that types a cell index.

use super::{IndexPolicy, InputError, MoveInput, Player, PlayerKind};
use crate::games::tictactoe::{Board, Position, Symbol};
use tracing::{debug, instrument, warn};

/// Human player reading cell indices (0-8) from a [`MoveInput`].
pub struct HumanPlayer {
    symbol: Symbol,
    input: Box<dyn MoveInput>,
    policy: IndexPolicy,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(symbol: impl Into<Symbol>, input: Box<dyn MoveInput>) -> Self {
        Self {
            symbol: symbol.into(),
            input,
            policy: IndexPolicy::default(),
        }
    }

    /// Sets how out-of-range numbers are handled.
    pub fn with_policy(mut self, policy: IndexPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the out-of-range policy.
    pub fn policy(&self) -> IndexPolicy {
        self.policy
    }
}

impl Player for HumanPlayer {
    #[instrument(skip(self, _board), fields(symbol = %self.symbol))]
    fn get_move(&mut self, _board: &Board) -> Result<Position, InputError> {
        let prompt = format!("Player: {}\n> Position: ", self.symbol);
        loop {
            let line = self.input.read_line(&prompt)?;
            match self.policy.parse(&line) {
                Ok(position) => {
                    debug!(%position, "Human chose position");
                    return Ok(position);
                }
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "Rejected human input");
                    self.input.notify(&e.to_string())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn set_symbol(&mut self, symbol: Symbol) {
        self.symbol = symbol;
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}
