//! Tic-tac-toe rules and a minimax opponent.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`]: placing marks, deriving the
//!   [`GameOutcome`], enumerating legal moves
//! - **Search**: picks the opponent's move, randomly on [`Difficulty::Easy`]
//!   or by exhaustive minimax on [`Difficulty::Hard`]
//! - **Session**: one board plus the difficulty flag, running the
//!   human-move-then-reply turn cycle
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Difficulty, Position, Side, choose_move, place};
//!
//! let mut board: Board = "OO_/XX_/X__".parse()?;
//! let pos = choose_move(&board, Side::Opponent, Difficulty::Hard)?;
//! assert_eq!(pos, Position::TopRight);
//!
//! let (row, col) = pos.coords();
//! let outcome = place(&mut board, row, col, Side::Opponent)?;
//! assert_eq!(outcome.winner(), Some(Side::Opponent));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod difficulty;
mod position;
pub mod rules;
pub mod search;
mod session;
mod types;

pub use action::{GameError, InvalidMoveReason, Move};
pub use difficulty::Difficulty;
pub use position::Position;
pub use rules::{evaluate_outcome, legal_moves, place, place_at, placed};
pub use search::{choose_move, choose_move_with_rng, score_moves};
pub use session::{Session, TurnReport};
pub use types::{Board, BoardParseError, Cell, GameOutcome, Side};

/// Returns a fresh empty board.
pub fn new_game() -> Board {
    Board::new()
}
