//! Contract-based validation for placements.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{GameError, InvalidMoveReason};
use super::{Board, Cell, Position, Side};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

/// A requested placement, still in raw coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Side placing the mark.
    pub side: Side,
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: row and column must both be within 0-2.
pub struct InBounds;

impl InBounds {
    /// Resolves the placement to a position.
    pub fn check(placement: &Placement) -> Result<Position, GameError> {
        Position::from_coords(placement.row, placement.col).ok_or_else(|| {
            GameError::invalid_move(placement.row, placement.col, InvalidMoveReason::OutOfBounds)
        })
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks that `pos` carries no mark.
    pub fn check(board: &Board, pos: Position) -> Result<(), GameError> {
        match board.cell(pos) {
            Cell::Empty => Ok(()),
            Cell::MarkedBy(owner) => {
                let (row, col) = pos.coords();
                Err(GameError::invalid_move(
                    row,
                    col,
                    InvalidMoveReason::Occupied(owner),
                ))
            }
        }
    }
}

/// Composite precondition: a placement is legal if it is in bounds and the cell is empty.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions and returns the target position.
    #[instrument(skip(board))]
    pub fn check(board: &Board, placement: &Placement) -> Result<Position, GameError> {
        let pos = InBounds::check(placement)?;
        CellIsEmpty::check(board, pos)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: exactly one cell went from empty to marked and no mark changed.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// Compares two boards cell by cell.
    pub fn holds(before: &Board, after: &Board) -> bool {
        let unchanged_marks = Position::ALL
            .iter()
            .filter(|pos| !before.is_empty(**pos))
            .all(|pos| before.cell(*pos) == after.cell(*pos));
        unchanged_marks && after.marked_count() == before.marked_count() + 1
    }

    /// Human-readable description of the postcondition.
    pub fn description() -> &'static str {
        "Exactly one new mark and no existing mark changed"
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placements.
///
/// Preconditions:
/// - Coordinates in bounds
/// - Cell empty
///
/// Postconditions:
/// - Board grew by exactly one mark, earlier marks intact
pub struct PlacementContract;

impl Contract<Board, Placement> for PlacementContract {
    fn pre(board: &Board, action: &Placement) -> Result<(), GameError> {
        LegalPlacement::check(board, action).map(|_| ())
    }

    fn post(before: &Board, after: &Board) -> Result<(), GameError> {
        if MonotonicBoard::holds(before, after) {
            Ok(())
        } else {
            warn!(before = %before, after = %after, "Placement postcondition failed");
            Err(GameError::InvariantViolation(format!(
                "Postcondition failed: {}",
                MonotonicBoard::description()
            )))
        }
    }
}
