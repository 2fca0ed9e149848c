//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Outcomes are recomputed from the
//! cells on every call; nothing about the result is cached on the board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

use super::contracts::{Contract, LegalPlacement, Placement, PlacementContract};
use super::{Board, Cell, GameError, GameOutcome, Position, Side};
use tracing::{debug, instrument};

/// Derives the outcome of a board.
///
/// Lines are checked before fullness, so a board completed by a winning
/// move is a win, not a draw.
pub fn evaluate_outcome(board: &Board) -> GameOutcome {
    if let Some(side) = check_winner(board) {
        GameOutcome::Win(side)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

/// Every empty cell, in row-major order.
pub fn legal_moves(board: &Board) -> impl Iterator<Item = Position> + '_ {
    Position::ALL
        .into_iter()
        .filter(move |pos| board.is_empty(*pos))
}

/// Places `side`'s mark at `(row, col)` and returns the new outcome.
///
/// All checks run before the board is written, so a rejected move leaves
/// `board` exactly as it was.
#[instrument(skip(board), fields(board = %board))]
pub fn place(
    board: &mut Board,
    row: usize,
    col: usize,
    side: Side,
) -> Result<GameOutcome, GameError> {
    let placement = Placement { row, col, side };
    let pos = LegalPlacement::check(board, &placement)?;

    let mut next = *board;
    next.set(pos, Cell::MarkedBy(side));

    #[cfg(debug_assertions)]
    PlacementContract::post(board, &next)?;

    *board = next;
    let outcome = evaluate_outcome(board);
    debug!(%pos, %outcome, "Mark placed");
    Ok(outcome)
}

/// Functional form of [`place`]: returns the new board and leaves the input untouched.
pub fn placed(
    board: &Board,
    row: usize,
    col: usize,
    side: Side,
) -> Result<(Board, GameOutcome), GameError> {
    let mut next = *board;
    let outcome = place(&mut next, row, col, side)?;
    Ok((next, outcome))
}

/// Places a mark at a named position.
pub fn place_at(board: &mut Board, pos: Position, side: Side) -> Result<GameOutcome, GameError> {
    let (row, col) = pos.coords();
    place(board, row, col, side)
}

/// Checks a placement without applying it.
pub fn validate(board: &Board, row: usize, col: usize, side: Side) -> Result<(), GameError> {
    PlacementContract::pre(board, &Placement { row, col, side })
}
