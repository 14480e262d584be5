//! Strictly Noughts - tic-tac-toe with human and computer players
//!
//! A console game on a 3x3 board. Two players take turns until one owns a
//! row, column or diagonal, or the board fills up.
//!
//! # Architecture
//!
//! - **Games**: board, rules and the turn controller
//! - **Players**: human (typed cell index) and computer (random) players
//! - **Console**: terminal input and text/JSON event output
//! - **Config**: TOML game configuration
//!
//! # Example
//!
//! ```no_run
//! use strictly_noughts::{ComputerPlayer, ConsoleObserver, Game, HumanPlayer, StdioInput};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut game = Game::new(
//!     Box::new(ComputerPlayer::new('X', "random")),
//!     Box::new(HumanPlayer::new('O', Box::new(StdioInput::default()))),
//! );
//! let outcome = game.play(&mut ConsoleObserver::new(std::io::stdout()))?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod console;
mod games;
mod players;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, PlayerConfig};

// Crate-level exports - Console
pub use console::{
    ConsoleInput, ConsoleObserver, JsonObserver, OutputFormat, PromptStream, StdioInput,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardError, Cell, Game, GameError, GameEvent, GameObserver, NullObserver, Outcome,
    Position, Seat, Symbol, SymbolError, TurnState, rules,
};

// Crate-level exports - Players
pub use players::{
    ComputerPlayer, HumanPlayer, IndexPolicy, InputError, MoveInput, Player, PlayerKind, Strategy,
};
