//! Opponent move selection.
//!
//! `Easy` picks a uniformly random legal move. `Hard` runs a full-depth
//! minimax over the remaining game tree. Only terminal boards are scored:
//! a win for the searching side is worth `10 - depth`, a loss `depth - 10`
//! and a draw `0`, so faster wins and slower losses are preferred.

use super::rules::{evaluate_outcome, legal_moves};
use super::{Board, Cell, Difficulty, GameError, GameOutcome, Position, Side};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Score of a win completed by the root move itself.
pub const WIN_SCORE: i32 = 10;

/// A hypothetical mark that is erased when the guard drops.
///
/// Dereferences to the board with the mark in place, so recursive calls
/// can explore below it. The cell is emptied again on every exit path.
struct Speculation<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> Speculation<'a> {
    fn place(board: &'a mut Board, pos: Position, side: Side) -> Self {
        debug_assert!(board.is_empty(pos));
        board.set(pos, Cell::MarkedBy(side));
        Self { board, pos }
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, Cell::Empty);
    }
}

/// Minimax scored from the point of view of `root`.
struct Minimax {
    root: Side,
    nodes: u64,
}

impl Minimax {
    fn new(root: Side) -> Self {
        Self { root, nodes: 0 }
    }

    /// Value of `board` with `to_move` about to play, `depth` plies below the root move.
    fn value(&mut self, board: &mut Board, depth: i32, to_move: Side) -> i32 {
        self.nodes += 1;
        match evaluate_outcome(board) {
            GameOutcome::Win(side) if side == self.root => return WIN_SCORE - depth,
            GameOutcome::Win(_) => return depth - WIN_SCORE,
            GameOutcome::Draw => return 0,
            GameOutcome::InProgress => {}
        }

        let maximizing = to_move == self.root;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            let mut line = Speculation::place(board, pos, to_move);
            let score = self.value(&mut line, depth + 1, to_move.opponent());
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

fn ensure_in_progress(board: &Board) -> Result<(), GameError> {
    match evaluate_outcome(board) {
        GameOutcome::InProgress => Ok(()),
        finished => Err(GameError::InvalidState(finished)),
    }
}

/// Minimax score of every legal move for `side`, in row-major order.
///
/// Each move is placed for `side` and scored as the other side's turn at
/// depth 0. The caller's board is never written; exploration runs on a
/// private copy.
#[instrument(skip(board), fields(board = %board))]
pub fn score_moves(board: &Board, side: Side) -> Result<Vec<(Position, i32)>, GameError> {
    ensure_in_progress(board)?;

    let mut scratch = *board;
    let mut search = Minimax::new(side);
    let mut scores = Vec::with_capacity(9);
    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        let mut line = Speculation::place(&mut scratch, pos, side);
        let score = search.value(&mut line, 0, side.opponent());
        scores.push((pos, score));
    }

    debug!(nodes = search.nodes, "Minimax search finished");
    Ok(scores)
}

/// Best move for `side` under full minimax.
///
/// Ties keep the first move in row-major order.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, side: Side) -> Result<Position, GameError> {
    let scores = score_moves(board, side)?;
    let mut best: Option<(Position, i32)> = None;
    for (pos, score) in scores {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((pos, score)),
        }
    }

    let (pos, score) = best.ok_or(GameError::InvalidState(GameOutcome::Draw))?;
    debug!(%pos, score, "Selected minimax move");
    Ok(pos)
}

/// Uniformly random legal move.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Position, GameError> {
    ensure_in_progress(board)?;
    let moves: Vec<Position> = legal_moves(board).collect();
    let pos = moves
        .choose(rng)
        .copied()
        .ok_or(GameError::InvalidState(GameOutcome::Draw))?;
    debug!(%pos, choices = moves.len(), "Selected random move");
    Ok(pos)
}

/// Picks the move for `side` under `difficulty`, drawing randomness from `rng`.
pub fn choose_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Position, GameError> {
    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Hard => best_move(board, side),
    }
}

/// Picks the move for `side` under `difficulty`.
///
/// Fails with [`GameError::InvalidState`] when the board is already finished.
pub fn choose_move(board: &Board, side: Side, difficulty: Difficulty) -> Result<Position, GameError> {
    choose_move_with_rng(board, side, difficulty, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_speculation_is_undone_on_drop() {
        let mut board: Board = "X__/___/___".parse().unwrap();
        {
            let line = Speculation::place(&mut board, Position::Center, Side::Opponent);
            assert_eq!(line.cell(Position::Center), Cell::MarkedBy(Side::Opponent));
        }
        assert_eq!(board.to_string(), "X__/___/___");
    }

    #[test]
    fn test_takes_immediate_win() {
        let board: Board = "OO_/XX_/X__".parse().unwrap();
        assert_eq!(best_move(&board, Side::Opponent).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_immediate_win_scores_ten() {
        let board: Board = "OO_/XX_/X__".parse().unwrap();
        let scores = score_moves(&board, Side::Opponent).unwrap();
        assert_eq!(scores[0], (Position::TopRight, WIN_SCORE));
    }

    #[test]
    fn test_blocks_threat() {
        // X threatens column 0.
        let board: Board = "X__/X_O/___".parse().unwrap();
        assert_eq!(best_move(&board, Side::Opponent).unwrap(), Position::BottomLeft);
    }

    #[test]
    fn test_answers_corner_with_center() {
        let board: Board = "X__/___/___".parse().unwrap();
        assert_eq!(best_move(&board, Side::Opponent).unwrap(), Position::Center);
    }

    #[test]
    fn test_empty_board_tie_breaks_to_first_cell() {
        // Every opening draws under perfect play.
        let scores = score_moves(&Board::new(), Side::Opponent).unwrap();
        assert!(scores.iter().all(|(_, s)| *s == 0));
        assert_eq!(best_move(&Board::new(), Side::Opponent).unwrap(), Position::TopLeft);
    }

    #[test]
    fn test_side_agnostic() {
        // Same threat with roles swapped: X to move must complete the row.
        let board: Board = "XX_/OO_/O__".parse().unwrap();
        assert_eq!(best_move(&board, Side::Human).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_finished_board_is_invalid_state() {
        let board: Board = "XXX/OO_/___".parse().unwrap();
        assert_eq!(
            choose_move(&board, Side::Opponent, Difficulty::Hard),
            Err(GameError::InvalidState(GameOutcome::Win(Side::Human)))
        );
        assert_eq!(
            choose_move(&board, Side::Opponent, Difficulty::Easy),
            Err(GameError::InvalidState(GameOutcome::Win(Side::Human)))
        );
    }

    #[test]
    fn test_random_move_only_picks_empty_cells() {
        let board: Board = "XO_/OX_/XO_".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let pos = random_move(&board, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_caller_board_unchanged() {
        let board: Board = "X__/_O_/__X".parse().unwrap();
        let before = board;
        let _ = choose_move(&board, Side::Opponent, Difficulty::Hard).unwrap();
        assert_eq!(board, before);
    }
}
