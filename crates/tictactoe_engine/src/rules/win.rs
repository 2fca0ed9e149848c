//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Position, Side};

/// The 8 winning lines, scanned rows first, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in scan order,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Side> {
    for [a, b, c] in LINES {
        if let Cell::MarkedBy(side) = board.cell(a)
            && board.cell(b) == Cell::MarkedBy(side)
            && board.cell(c) == Cell::MarkedBy(side)
        {
            return Some(side);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Cell::MarkedBy(Side::Opponent));
            }
            assert_eq!(check_winner(&board), Some(Side::Opponent), "{:?}", line);
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "X_O/_XO/__X".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Side::Human));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XXO/___/___".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Two winners can only appear on a malformed board.
        let board: Board = "OOO/XXX/___".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Side::Opponent));
        let board: Board = "XO_/XO_/XO_".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Side::Human));
    }
}
