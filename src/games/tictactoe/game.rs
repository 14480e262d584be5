//! Turn controller for tic-tac-toe.
//!
//! The controller owns the board and both players. Each round it hands the
//! move to the next seat, keeps asking that player until the chosen cell is
//! free, places the mark and evaluates the board.

use super::events::{GameEvent, GameObserver};
use super::phases::{Outcome, Seat, TurnState};
use super::position::Position;
use super::rules;
use super::types::{Board, Symbol};
use crate::players::{InputError, Player};
use tracing::{debug, info, instrument};

/// Errors that end a game early.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A player could not produce a move.
    #[display("Player input failed: {}", _0)]
    Input(InputError),

    /// The observer failed to display an event.
    #[display("Output failed: {}", _0)]
    Output(String),

    /// The game already reached a terminal outcome.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Input(e) => Some(e),
            GameError::Output(_) | GameError::GameOver => None,
        }
    }
}

impl From<InputError> for GameError {
    fn from(err: InputError) -> Self {
        GameError::Input(err)
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Output(err.to_string())
    }
}

/// Tic-tac-toe game between two players.
pub struct Game {
    board: Board,
    player1: Box<dyn Player>,
    player2: Box<dyn Player>,
    turn: TurnState,
}

impl Game {
    /// Creates a game; player 1 moves first.
    #[instrument(skip_all, fields(player1 = %player1.name(), player2 = %player2.name()))]
    pub fn new(player1: Box<dyn Player>, player2: Box<dyn Player>) -> Self {
        info!("Creating new game");
        Self {
            board: Board::new(),
            player1,
            player2,
            turn: TurnState::NotStarted,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn marker.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Returns player 1.
    pub fn player1(&self) -> &dyn Player {
        self.player1.as_ref()
    }

    /// Returns player 2.
    pub fn player2(&self) -> &dyn Player {
        self.player2.as_ref()
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(
            &self.board.snapshot(),
            self.player1.symbol(),
            self.player2.symbol(),
        )
    }

    fn seat(&mut self, seat: Seat) -> &mut dyn Player {
        match seat {
            Seat::One => self.player1.as_mut(),
            Seat::Two => self.player2.as_mut(),
        }
    }

    /// Advances the turn marker and returns the player who moves now.
    ///
    /// The first call returns player 1, then players alternate.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] once the game has finished.
    pub fn current_player(&mut self) -> Result<&mut dyn Player, GameError> {
        let seat = self.turn.advance().ok_or(GameError::GameOver)?;
        Ok(self.seat(seat))
    }

    /// Plays one round: one successful move by the next player.
    ///
    /// Occupied or off-board cells are reported as [`GameEvent::CellOccupied`]
    /// and the same player is asked again, without limit.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] once the game has finished. If the
    /// player or the observer fails before a mark is placed, the turn marker
    /// is restored, so the next round asks the same player again.
    #[instrument(skip(self, observer), fields(turn = ?self.turn))]
    pub fn play_round(&mut self, observer: &mut dyn GameObserver) -> Result<Outcome, GameError> {
        let previous = self.turn;
        let seat = self.turn.advance().ok_or(GameError::GameOver)?;
        let (symbol, position) = match self.place_mark(seat, observer) {
            Ok(placed) => placed,
            Err(err) => {
                debug!(%err, "Round failed, turn handed back");
                self.turn = previous;
                return Err(err);
            }
        };

        let outcome = self.outcome();
        if outcome.is_terminal() {
            self.turn = TurnState::Finished(outcome);
        }
        observer.on_event(&GameEvent::MoveMade { symbol, position })?;

        if outcome.is_terminal() {
            let winner = outcome.winner().map(|seat| self.seat(seat).symbol());
            info!(?outcome, ?winner, "Game over");
            observer.on_event(&GameEvent::BoardShown {
                board: self.board.render(),
            })?;
            observer.on_event(&GameEvent::GameOver { outcome, winner })?;
        }
        Ok(outcome)
    }

    /// Asks the seated player until a free cell is chosen and marks it.
    ///
    /// Marking is the last step, so an error means the board is unchanged.
    fn place_mark(
        &mut self,
        seat: Seat,
        observer: &mut dyn GameObserver,
    ) -> Result<(Symbol, Position), GameError> {
        let player = match seat {
            Seat::One => self.player1.as_mut(),
            Seat::Two => self.player2.as_mut(),
        };
        let symbol = player.symbol();
        observer.on_event(&GameEvent::TurnStarted {
            seat,
            player: player.name(),
            symbol,
        })?;

        loop {
            observer.on_event(&GameEvent::BoardShown {
                board: self.board.render(),
            })?;
            let position = player.get_move(&self.board)?;
            // Off-board positions fail both calls and count as unavailable
            if self.board.is_empty(position).unwrap_or(false)
                && self.board.mark(position, symbol).is_ok()
            {
                debug!(%symbol, %position, "Move made");
                return Ok((symbol, position));
            }
            debug!(%symbol, %position, "Cell unavailable, asking again");
            observer.on_event(&GameEvent::CellOccupied { symbol, position })?;
        }
    }

    /// Runs rounds until the game ends and returns the outcome.
    #[instrument(skip_all)]
    pub fn play(&mut self, observer: &mut dyn GameObserver) -> Result<Outcome, GameError> {
        info!("Starting game loop");
        loop {
            let outcome = self.play_round(observer)?;
            if outcome.is_terminal() {
                return Ok(outcome);
            }
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("player1", &self.player1)
            .field("player2", &self.player2)
            .field("turn", &self.turn)
            .finish()
    }
}
