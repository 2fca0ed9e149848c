//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// One of the two sides in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human player, marked X, who moves first.
    #[display("X")]
    Human,
    /// The computer opponent, marked O.
    #[display("O")]
    Opponent,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    Empty,
    /// Cell carries a side's mark.
    MarkedBy(Side),
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::MarkedBy(Side::Human) => 'X',
            Cell::MarkedBy(Side::Opponent) => 'O',
        }
    }
}

/// Outcome of a board, derived from its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameOutcome {
    /// No line is complete and at least one cell is empty.
    #[display("in progress")]
    InProgress,
    /// A side owns a complete line.
    #[display("{} wins", _0)]
    Win(Side),
    /// The board is full and no line is complete.
    #[display("draw")]
    Draw,
}

impl GameOutcome {
    /// Returns true once no further moves may be played.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winning side, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameOutcome::Win(side) => Some(side),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed by `[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Gets the cell at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Gets the cell at a position.
    pub fn cell(&self, pos: Position) -> Cell {
        let (row, col) = pos.coords();
        self.cells[row][col]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos) == Cell::Empty
    }

    /// Returns all cells as rows.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Number of cells carrying a mark.
    pub fn marked_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c != Cell::Empty)
            .count()
    }

    /// Number of cells marked by one side.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Cell::MarkedBy(side))
            .count()
    }

    /// Overwrites a cell without any rule checks.
    ///
    /// Only the rules engine and the search's speculative moves write through here.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        let (row, col) = pos.coords();
        self.cells[row][col] = cell;
    }

    /// Formats the board as a grid, numbering empty cells by index.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for pos in Position::ALL {
            let symbol = match self.cell(pos) {
                Cell::Empty => pos.to_index().to_string(),
                marked => marked.symbol().to_string(),
            };
            result.push_str(&symbol);
            match pos.col() {
                2 if pos.row() < 2 => result.push_str("\n-+-+-\n"),
                2 => {}
                _ => result.push('|'),
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

/// Compact notation: three rows of `X`, `O` or `_` separated by `/`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != 3 {
            return Err(BoardParseError::new(format!(
                "expected 3 rows separated by '/', found {}",
                rows.len()
            )));
        }

        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.trim().chars().collect();
            if symbols.len() != 3 {
                return Err(BoardParseError::new(format!(
                    "row {} must have 3 cells, found {}",
                    row,
                    symbols.len()
                )));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] = match symbol {
                    'X' | 'x' => Cell::MarkedBy(Side::Human),
                    'O' | 'o' => Cell::MarkedBy(Side::Opponent),
                    '_' | '.' | '-' => Cell::Empty,
                    other => {
                        return Err(BoardParseError::new(format!(
                            "unexpected symbol '{}' at ({}, {})",
                            other, row, col
                        )));
                    }
                };
            }
        }
        Ok(board)
    }
}

/// Board notation could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.marked_count(), 0);
        assert!(Position::ALL.iter().all(|p| board.is_empty(*p)));
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(0, 3), None);
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(2, 2), Some(Cell::Empty));
    }

    #[test]
    fn test_notation_round_trip() {
        let board: Board = "XX_/OO_/___".parse().unwrap();
        assert_eq!(board.get(0, 1), Some(Cell::MarkedBy(Side::Human)));
        assert_eq!(board.get(1, 0), Some(Cell::MarkedBy(Side::Opponent)));
        assert_eq!(board.get(2, 2), Some(Cell::Empty));
        assert_eq!(board.to_string(), "XX_/OO_/___");
    }

    #[test]
    fn test_notation_accepts_alternate_empty_symbols() {
        let board: Board = "x.-/o__/...".parse().unwrap();
        assert_eq!(board.count(Side::Human), 1);
        assert_eq!(board.count(Side::Opponent), 1);
    }

    #[test]
    fn test_notation_rejects_malformed() {
        assert!("XX_/OO_".parse::<Board>().is_err());
        assert!("XX/OO_/___".parse::<Board>().is_err());
        assert!("XZ_/OO_/___".parse::<Board>().is_err());
    }

    #[test]
    fn test_render_numbers_empty_cells() {
        let board: Board = "X__/_O_/___".parse().unwrap();
        assert_eq!(board.render(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Human.opponent(), Side::Opponent);
        assert_eq!(Side::Opponent.opponent(), Side::Human);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(GameOutcome::Win(Side::Human).to_string(), "X wins");
        assert_eq!(GameOutcome::Draw.to_string(), "draw");
        assert!(!GameOutcome::InProgress.is_terminal());
    }
}
