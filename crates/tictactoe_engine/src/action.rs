//! Moves and the errors raised while validating them.

use super::{GameOutcome, Position, Side};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a side placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The position where the side places its mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.position.label())
    }
}

/// Why a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMoveReason {
    /// Row or column outside 0-2.
    #[display("coordinates out of bounds")]
    OutOfBounds,
    /// The cell already carries a mark.
    #[display("cell already marked by {}", _0)]
    Occupied(Side),
}

/// Error that can occur when applying a move or asking for one.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The move cannot be placed; the board was left untouched.
    #[display("Invalid move at ({}, {}): {}", row, col, reason)]
    InvalidMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Why the move was rejected.
        reason: InvalidMoveReason,
    },

    /// The game is not in a state that allows the request.
    #[display("Invalid state: game is {}", _0)]
    InvalidState(GameOutcome),

    /// A postcondition failed after a move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

impl GameError {
    /// Shorthand for an [`GameError::InvalidMove`].
    pub fn invalid_move(row: usize, col: usize, reason: InvalidMoveReason) -> Self {
        Self::InvalidMove { row, col, reason }
    }
}
