//! Command-line interface for strictly_noughts.

use crate::console::OutputFormat;
use crate::games::tictactoe::Symbol;
use crate::players::{IndexPolicy, PlayerKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_noughts")]
#[command(about = "Tic-tac-toe for humans and computers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game
    Play {
        /// Path to game config (TOML). Missing file means defaults.
        #[arg(short, long, default_value = "noughts.toml")]
        config: PathBuf,

        /// Who sits in seat 1 (moves first)
        #[arg(long)]
        player1: Option<PlayerKind>,

        /// Who sits in seat 2
        #[arg(long)]
        player2: Option<PlayerKind>,

        /// Symbol for player 1
        #[arg(long)]
        symbol1: Option<Symbol>,

        /// Symbol for player 2
        #[arg(long)]
        symbol2: Option<Symbol>,

        /// Strategy name for computer players
        #[arg(long)]
        strategy: Option<String>,

        /// Seed for computer players
        #[arg(long)]
        seed: Option<u64>,

        /// What to do with typed numbers outside 0-8 (reject, last-cell)
        #[arg(long)]
        out_of_range: Option<IndexPolicy>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Play the two sample matches: human vs human, then computer vs human
    Demo {
        /// Seed for the computer player
        #[arg(long)]
        seed: Option<u64>,
    },
}
