//! Game configuration loaded from TOML.

use crate::console::{PromptStream, StdioInput};
use crate::games::tictactoe::{Game, Symbol};
use crate::players::{ComputerPlayer, HumanPlayer, IndexPolicy, Player, PlayerKind, Strategy};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Configuration for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Human or computer.
    kind: PlayerKind,

    /// Mark placed on the board.
    symbol: Symbol,

    /// Computer strategy name; unknown names play randomly.
    #[serde(default = "default_strategy")]
    strategy: String,

    /// Seed for a reproducible computer player.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

#[instrument]
fn default_strategy() -> String {
    Strategy::default().to_string()
}

impl PlayerConfig {
    /// Creates a human seat.
    pub fn human(symbol: Symbol) -> Self {
        Self {
            kind: PlayerKind::Human,
            symbol,
            strategy: default_strategy(),
            seed: None,
        }
    }

    /// Creates a computer seat.
    pub fn computer(symbol: Symbol, strategy: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            kind: PlayerKind::Computer,
            symbol,
            strategy: strategy.into(),
            seed,
        }
    }

    /// Changes the player kind.
    pub fn set_kind(&mut self, kind: PlayerKind) {
        self.kind = kind;
    }

    /// Changes the symbol.
    pub fn set_symbol(&mut self, symbol: Symbol) {
        self.symbol = symbol;
    }

    /// Changes the strategy name.
    pub fn set_strategy(&mut self, strategy: impl Into<String>) {
        self.strategy = strategy.into();
    }

    /// Changes the seed.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Builds the player; humans read from the terminal and prompt on `prompts`.
    #[instrument(skip(self), fields(kind = %self.kind, symbol = %self.symbol))]
    pub fn build(&self, policy: IndexPolicy, prompts: PromptStream) -> Box<dyn Player> {
        match self.kind {
            PlayerKind::Human => Box::new(
                HumanPlayer::new(self.symbol, Box::new(StdioInput::new(prompts)))
                    .with_policy(policy),
            ),
            PlayerKind::Computer => match self.seed {
                Some(seed) => Box::new(ComputerPlayer::seeded(self.symbol, &self.strategy, seed)),
                None => Box::new(ComputerPlayer::new(self.symbol, &self.strategy)),
            },
        }
    }
}

/// Configuration for a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Handling of typed numbers outside 0-8.
    #[serde(default)]
    out_of_range: IndexPolicy,

    /// First seat; moves first.
    #[serde(default = "default_player1")]
    player1: PlayerConfig,

    /// Second seat.
    #[serde(default = "default_player2")]
    player2: PlayerConfig,
}

#[instrument]
fn default_player1() -> PlayerConfig {
    PlayerConfig::human(Symbol::new('X'))
}

#[instrument]
fn default_player2() -> PlayerConfig {
    PlayerConfig::computer(Symbol::new('O'), default_strategy(), None)
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player1: default_player1(),
            player2: default_player2(),
            out_of_range: IndexPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration from two seats.
    pub fn new(player1: PlayerConfig, player2: PlayerConfig, out_of_range: IndexPolicy) -> Self {
        Self {
            player1,
            player2,
            out_of_range,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(
            player1 = %config.player1.kind,
            player2 = %config.player2.kind,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads a TOML file, or returns the defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Warns about settings that are legal but probably unintended.
    ///
    /// Call once, after command-line overrides are applied.
    pub fn validate(&self) {
        if self.player1.symbol == self.player2.symbol {
            warn!(
                symbol = %self.player1.symbol,
                "Both players share a symbol; player 1 wins every completed line"
            );
        }
    }

    /// Mutable access to the first seat.
    pub fn player1_mut(&mut self) -> &mut PlayerConfig {
        &mut self.player1
    }

    /// Mutable access to the second seat.
    pub fn player2_mut(&mut self) -> &mut PlayerConfig {
        &mut self.player2
    }

    /// Changes the out-of-range policy.
    pub fn set_out_of_range(&mut self, policy: IndexPolicy) {
        self.out_of_range = policy;
    }

    /// Builds a game from this configuration; human prompts go to `prompts`.
    #[instrument(skip(self))]
    pub fn build_game(&self, prompts: PromptStream) -> Game {
        Game::new(
            self.player1.build(self.out_of_range, prompts),
            self.player2.build(self.out_of_range, prompts),
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
