//! Board coordinates and the flat 0-8 index mapping.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A (row, column) coordinate on the board.
///
/// Construction does not validate; the board rejects coordinates outside
/// `0..=2`. Use [`Position::from_index`] to get a position that is known to
/// be on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Side length of the board.
    pub const SIZE: usize = 3;

    /// Creates a position from a row and a column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns true if both coordinates are within `0..=2`.
    pub fn is_on_board(&self) -> bool {
        self.row < Self::SIZE && self.col < Self::SIZE
    }

    /// Creates a position from a flat index: `index -> (index / 3, index % 3)`.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::SIZE * Self::SIZE).then(|| Self::new(index / Self::SIZE, index % Self::SIZE))
    }

    /// Converts an on-board position to its flat index (0-8).
    pub fn to_index(self) -> Option<usize> {
        self.is_on_board().then(|| self.row * Self::SIZE + self.col)
    }

    /// All 9 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..Self::SIZE * Self::SIZE).map(|i| Self::new(i / Self::SIZE, i % Self::SIZE))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_row_major() {
        assert_eq!(Position::from_index(0), Some(Position::new(0, 0)));
        assert_eq!(Position::from_index(2), Some(Position::new(0, 2)));
        assert_eq!(Position::from_index(3), Some(Position::new(1, 0)));
        assert_eq!(Position::from_index(4), Some(Position::new(1, 1)));
        assert_eq!(Position::from_index(8), Some(Position::new(2, 2)));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_to_index_inverts_from_index() {
        for index in 0..9 {
            let pos = Position::from_index(index).unwrap();
            assert_eq!(pos.to_index(), Some(index));
        }
        assert_eq!(Position::new(1, 3).to_index(), None);
    }

    #[test]
    fn test_all_positions() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), 9);
        assert!(all.iter().all(Position::is_on_board));
        assert_eq!(all[5], Position::new(1, 2));
    }
}
