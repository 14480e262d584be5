//! Strictly Noughts - Unified CLI
//!
//! Runs tic-tac-toe games in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use strictly_noughts::{
    Cli, Command, ConsoleObserver, GameConfig, IndexPolicy, OutputFormat, PlayerConfig,
    PlayerKind, PromptStream, Symbol,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they stay out of the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            player1,
            player2,
            symbol1,
            symbol2,
            strategy,
            seed,
            out_of_range,
            format,
        } => {
            let overrides = Overrides {
                player1,
                player2,
                symbol1,
                symbol2,
                strategy,
                seed,
                out_of_range,
            };
            run_play(&config, overrides, format)
        }
        Command::Demo { seed } => run_demo(seed),
    }
}

/// Command-line values that replace config file settings.
#[derive(Debug)]
struct Overrides {
    player1: Option<PlayerKind>,
    player2: Option<PlayerKind>,
    symbol1: Option<Symbol>,
    symbol2: Option<Symbol>,
    strategy: Option<String>,
    seed: Option<u64>,
    out_of_range: Option<IndexPolicy>,
}

impl Overrides {
    fn apply(self, config: &mut GameConfig) {
        if let Some(policy) = self.out_of_range {
            config.set_out_of_range(policy);
        }
        apply_seat(config.player1_mut(), self.player1, self.symbol1, &self.strategy, self.seed);
        // Seat 2 draws from seed + 1
        let seed2 = self.seed.map(|seed| seed.wrapping_add(1));
        apply_seat(config.player2_mut(), self.player2, self.symbol2, &self.strategy, seed2);
    }
}

fn apply_seat(
    seat: &mut PlayerConfig,
    kind: Option<PlayerKind>,
    symbol: Option<Symbol>,
    strategy: &Option<String>,
    seed: Option<u64>,
) {
    if let Some(kind) = kind {
        seat.set_kind(kind);
    }
    if let Some(symbol) = symbol {
        seat.set_symbol(symbol);
    }
    if let Some(strategy) = strategy {
        seat.set_strategy(strategy.as_str());
    }
    if seed.is_some() {
        seat.set_seed(seed);
    }
}

/// Play one game from config and flags
#[instrument(skip(overrides))]
fn run_play(config_path: &Path, overrides: Overrides, format: OutputFormat) -> Result<()> {
    let mut config = GameConfig::load_or_default(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    overrides.apply(&mut config);
    config.validate();

    let mut game = config.build_game(format.prompt_stream());
    let mut observer = format.observer(std::io::stdout());
    let outcome = game.play(observer.as_mut()).context("Game ended abnormally")?;
    info!(%outcome, "Game finished");
    Ok(())
}

/// Play the two sample matches back to back
#[instrument]
fn run_demo(seed: Option<u64>) -> Result<()> {
    let matches = [
        GameConfig::new(
            PlayerConfig::human(Symbol::new('X')),
            PlayerConfig::human(Symbol::new('O')),
            IndexPolicy::default(),
        ),
        GameConfig::new(
            PlayerConfig::computer(Symbol::new('X'), "random", seed),
            PlayerConfig::human(Symbol::new('O')),
            IndexPolicy::default(),
        ),
    ];

    for (number, config) in matches.iter().enumerate() {
        info!(game = number + 1, "Starting demo game");
        let mut game = config.build_game(PromptStream::Stdout);
        let mut observer = ConsoleObserver::new(std::io::stdout());
        let outcome = game
            .play(&mut observer)
            .with_context(|| format!("Demo game {} ended abnormally", number + 1))?;
        info!(game = number + 1, %outcome, "Demo game finished");
    }
    Ok(())
}
