//! Win detection logic for tic-tac-toe.

use super::super::{Cell, Symbol};
use tracing::instrument;

/// The eight winning lines as row-major index triples.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// Returns the first line fully owned by `symbol`, if any.
#[instrument(skip(cells))]
pub fn winning_line(cells: &[Cell; 9], symbol: Symbol) -> Option<[usize; 3]> {
    LINES
        .into_iter()
        .find(|line| line.iter().all(|&i| cells[i] == Cell::Occupied(symbol)))
}

/// Checks whether `symbol` owns any complete line.
pub fn owns_line(cells: &[Cell; 9], symbol: Symbol) -> bool {
    winning_line(cells, symbol).is_some()
}
