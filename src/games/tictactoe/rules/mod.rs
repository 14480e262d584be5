//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules are kept apart from board
//! storage so the controller and the tests evaluate positions the same way.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, owns_line, winning_line};

use super::{Cell, Outcome, Symbol};
use tracing::{debug, instrument};

/// Evaluates the end-of-game condition for a board snapshot.
///
/// Player 1's lines are checked first, so player 1 wins if both symbols
/// somehow own a line. A full board with no winner is a draw.
#[instrument(skip(cells))]
pub fn evaluate(cells: &[Cell; 9], symbol1: Symbol, symbol2: Symbol) -> Outcome {
    let outcome = if owns_line(cells, symbol1) {
        Outcome::Player1Wins
    } else if owns_line(cells, symbol2) {
        Outcome::Player2Wins
    } else if is_full(cells) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    };
    debug!(?outcome, "Evaluated board");
    outcome
}
