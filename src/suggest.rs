//! One-shot move suggestion for a board given in notation.

use anyhow::{Context, Result};
use std::io::Write;
use tictactoe_engine::{Board, Difficulty, Side, choose_move, score_moves};
use tracing::instrument;

/// Writes the chosen move for `side`, and optionally every move's minimax score.
#[instrument(skip(board, output), fields(board = %board))]
pub fn suggest(
    board: &Board,
    side: Side,
    difficulty: Difficulty,
    with_scores: bool,
    output: &mut impl Write,
) -> Result<()> {
    let pos = choose_move(board, side, difficulty)
        .with_context(|| format!("Cannot suggest a move for {} on {}", side, board))?;
    let (row, col) = pos.coords();
    writeln!(output, "{} plays {} ({}, {})", side, pos, row, col)?;

    if with_scores {
        for (pos, score) in score_moves(board, side)? {
            let (row, col) = pos.coords();
            writeln!(output, "  {:<14} ({}, {})  {:>3}", pos.label(), row, col, score)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_winning_move() {
        let board: Board = "OO_/XX_/X__".parse().unwrap();
        let mut out = Vec::new();
        suggest(&board, Side::Opponent, Difficulty::Hard, true, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("O plays Top-right (0, 2)"));
        assert!(text.contains("Top-right"));
        assert!(text.lines().count() >= 2);
    }

    #[test]
    fn test_suggest_finished_board_fails() {
        let board: Board = "XXX/OO_/___".parse().unwrap();
        let mut out = Vec::new();
        let err = suggest(&board, Side::Opponent, Difficulty::Hard, false, &mut out).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid state"));
    }
}
