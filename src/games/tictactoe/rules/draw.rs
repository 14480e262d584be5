//! Draw detection logic for tic-tac-toe.

use super::super::Cell;

/// Checks if every cell is occupied.
///
/// A full board with no winner indicates a draw.
pub fn is_full(cells: &[Cell; 9]) -> bool {
    cells.iter().all(|c| *c != Cell::Empty)
}
