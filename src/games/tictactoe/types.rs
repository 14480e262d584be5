//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark: any single character.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(char);

impl Symbol {
    /// Creates a symbol from a character.
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = SymbolError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => Ok(Self(c)),
            _ => Err(SymbolError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Symbol {
    type Error = SymbolError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl std::str::FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0.to_string()
    }
}

/// A symbol string that is not exactly one visible character.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Symbol must be a single visible character, got {:?}", _0)]
pub struct SymbolError(pub String);

impl std::error::Error for SymbolError {}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's symbol.
    Occupied(Symbol),
}

/// Errors raised by board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Row or column outside `0..=2`.
    #[display("Position ({row}, {col}) is outside the 3x3 board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for BoardError {}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    fn slot(pos: Position) -> Result<usize, BoardError> {
        pos.to_index().ok_or(BoardError::OutOfRange {
            row: pos.row(),
            col: pos.col(),
        })
    }

    /// Gets the cell at the given position, or `None` if it is off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        pos.to_index().map(|i| self.cells[i])
    }

    /// Checks whether the cell at `pos` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if either coordinate is outside `0..=2`.
    #[instrument(skip(self))]
    pub fn is_empty(&self, pos: Position) -> Result<bool, BoardError> {
        Ok(self.cells[Self::slot(pos)?] == Cell::Empty)
    }

    /// Writes `symbol` into the cell at `pos`.
    ///
    /// Whatever was in the cell is overwritten. Callers check
    /// [`Board::is_empty`] first; the game controller always does.
    #[instrument(skip(self))]
    pub fn mark(&mut self, pos: Position, symbol: Symbol) -> Result<(), BoardError> {
        let slot = Self::slot(pos)?;
        self.cells[slot] = Cell::Occupied(symbol);
        Ok(())
    }

    /// Returns true once every cell is occupied.
    pub fn all_filled(&self) -> bool {
        super::rules::is_full(&self.cells)
    }

    /// Returns a copy of the cells in row-major order.
    pub fn snapshot(&self) -> [Cell; 9] {
        self.cells
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their flat index, which is what a human types to
    /// claim them.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            result.push_str("     |     |\n");
            for col in 0..3 {
                let index = row * 3 + col;
                let label = match self.cells[index] {
                    Cell::Empty => index.to_string(),
                    Cell::Occupied(symbol) => symbol.to_string(),
                };
                result.push_str(&format!("  {label}  "));
                if col < 2 {
                    result.push('|');
                }
            }
            result.push_str("\n     |     |\n");
            if row < 2 {
                result.push_str("-----+-----+-----\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Symbol = Symbol::new('X');

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for index in 0..9 {
            let pos = Position::from_index(index).unwrap();
            assert_eq!(board.is_empty(pos), Ok(true));
        }
        assert!(!board.all_filled());
    }

    #[test]
    fn test_is_empty_out_of_range() {
        let board = Board::new();
        assert_eq!(
            board.is_empty(Position::new(3, 0)),
            Err(BoardError::OutOfRange { row: 3, col: 0 })
        );
        assert!(board.is_empty(Position::new(0, 7)).is_err());
    }

    #[test]
    fn test_mark_overwrites_without_error() {
        let mut board = Board::new();
        let pos = Position::new(1, 1);
        board.mark(pos, X).unwrap();
        assert_eq!(board.is_empty(pos), Ok(false));

        board.mark(pos, Symbol::new('O')).unwrap();
        assert_eq!(board.get(pos), Some(Cell::Occupied(Symbol::new('O'))));
    }

    #[test]
    fn test_mark_out_of_range() {
        let mut board = Board::new();
        assert!(board.mark(Position::new(0, 3), X).is_err());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut board = Board::new();
        let before = board.snapshot();
        board.mark(Position::new(0, 0), X).unwrap();
        assert_eq!(before[0], Cell::Empty);
        assert_eq!(board.snapshot()[0], Cell::Occupied(X));
    }

    #[test]
    fn test_all_filled() {
        let mut board = Board::new();
        for index in 0..9 {
            assert!(!board.all_filled());
            board.mark(Position::from_index(index).unwrap(), X).unwrap();
        }
        assert!(board.all_filled());
    }

    #[test]
    fn test_render_shows_indices_and_symbols() {
        let mut board = Board::new();
        board.mark(Position::new(2, 2), X).unwrap();
        let text = board.render();
        assert!(text.contains("  0  |  1  |  2  "));
        assert!(text.contains("  6  |  7  |  X  "));
        assert_eq!(text.matches("-----+-----+-----").count(), 2);
        assert_eq!(text, board.to_string());
    }

    #[test]
    fn test_symbol_parsing() {
        assert_eq!(Symbol::try_from("X"), Ok(Symbol::new('X')));
        assert_eq!("@".parse::<Symbol>(), Ok(Symbol::new('@')));
        assert!(Symbol::try_from("").is_err());
        assert!(Symbol::try_from("XO").is_err());
        assert!(Symbol::try_from(" ").is_err());
    }
}
