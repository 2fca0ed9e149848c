//! A single human-versus-opponent game session.

use super::contracts::{LegalPlacement, Placement};
use super::rules::{evaluate_outcome, place_at};
use super::search::choose_move_with_rng;
use super::{Board, Difficulty, GameError, GameOutcome, Move, Side};
use derive_getters::Getters;
use derive_new::new;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What happened during one call to [`Session::play_human`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct TurnReport {
    /// The human's move.
    human: Move,
    /// The opponent's reply, absent when the human move ended the game.
    opponent: Option<Move>,
    /// Outcome after both moves.
    outcome: GameOutcome,
}

/// Owns the board, the difficulty flag and the side to move.
#[derive(Debug, Clone, Getters)]
pub struct Session {
    /// Current board.
    board: Board,
    /// Strength of future opponent replies.
    difficulty: Difficulty,
    /// Side whose turn it is.
    to_move: Side,
    /// Games finished in this session.
    games_played: u32,
    #[getter(skip)]
    rng: StdRng,
}

impl Session {
    /// Creates a session with an OS-seeded random source.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_os_rng())
    }

    /// Creates a session whose easy moves are reproducible.
    #[instrument]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(difficulty: Difficulty, rng: StdRng) -> Self {
        info!(%difficulty, "Creating new game session");
        Self {
            board: Board::new(),
            difficulty,
            to_move: Side::Human,
            games_played: 0,
            rng,
        }
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> GameOutcome {
        evaluate_outcome(&self.board)
    }

    /// Clears the board; the human moves first.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        if self.outcome().is_terminal() {
            self.games_played += 1;
        }
        debug!(games_played = self.games_played, "Starting new game");
        self.board = Board::new();
        self.to_move = Side::Human;
    }

    /// Changes the strength of future opponent replies.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(from = %self.difficulty, to = %difficulty, "Difficulty changed");
        self.difficulty = difficulty;
    }

    /// Plays the human's move at `(row, col)` and, if the game goes on, the opponent's reply.
    ///
    /// A rejected move leaves the session untouched.
    #[instrument(skip(self), fields(board = %self.board, difficulty = %self.difficulty))]
    pub fn play_human(&mut self, row: usize, col: usize) -> Result<TurnReport, GameError> {
        let outcome = self.outcome();
        if outcome.is_terminal() || self.to_move != Side::Human {
            warn!(%outcome, to_move = %self.to_move, "Human move out of turn");
            return Err(GameError::InvalidState(outcome));
        }

        let pos = LegalPlacement::check(&self.board, &Placement { row, col, side: Side::Human })?;
        let mut board = self.board;
        let mut outcome = place_at(&mut board, pos, Side::Human)?;
        let human = Move::new(Side::Human, pos);

        let mut opponent = None;
        if !outcome.is_terminal() {
            let pos = choose_move_with_rng(&board, Side::Opponent, self.difficulty, &mut self.rng)?;
            outcome = place_at(&mut board, pos, Side::Opponent)?;
            opponent = Some(Move::new(Side::Opponent, pos));
        }

        self.board = board;
        self.to_move = Side::Human;
        if outcome.is_terminal() {
            info!(%outcome, board = %self.board, "Game over");
        }
        Ok(TurnReport::new(human, opponent, outcome))
    }

    /// Hands the opening move of a fresh game to the opponent.
    #[instrument(skip(self))]
    pub fn opponent_opens(&mut self) -> Result<Move, GameError> {
        if self.board.marked_count() != 0 {
            return Err(GameError::InvalidState(self.outcome()));
        }
        let pos = choose_move_with_rng(&self.board, Side::Opponent, self.difficulty, &mut self.rng)?;
        place_at(&mut self.board, pos, Side::Opponent)?;
        self.to_move = Side::Human;
        Ok(Move::new(Side::Opponent, pos))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
