//! Line-oriented terminal front end.
//!
//! Renders the board as text, forwards the human's moves into a
//! [`Session`] and reports the opponent's replies. All game rules live in
//! the engine; this module only translates input and output.

use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_engine::{Difficulty, GameOutcome, Position, Session, Side};
use tracing::{debug, info, instrument, warn};

/// One parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at `(row, col)`; range is checked by the engine.
    Place {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// Switch to a specific difficulty.
    SetDifficulty(Difficulty),
    /// Flip between easy and hard.
    ToggleDifficulty,
    /// Abandon the current game and start over.
    NewGame,
    /// Show the command list.
    Help,
    /// Leave the session.
    Quit,
}

impl Input {
    /// Parses a line. Accepts a cell index (0-8), a label, or `row col`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Some(Input::Quit),
            "?" | "help" => return Some(Input::Help),
            "new" | "restart" => return Some(Input::NewGame),
            "toggle" | "mode" => return Some(Input::ToggleDifficulty),
            _ => {}
        }

        if let Ok(difficulty) = line.parse::<Difficulty>() {
            return Some(Input::SetDifficulty(difficulty));
        }

        let parts: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if let [row, col] = parts.as_slice()
            && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
        {
            return Some(Input::Place { row, col });
        }

        Position::from_label_or_number(line).map(|pos| {
            let (row, col) = pos.coords();
            Input::Place { row, col }
        })
    }
}

const HELP: &str = "\
Commands:
  0-8 or a label   place your X (e.g. `4`, `center`, `top-left`)
  ROW COL          place your X by coordinates (e.g. `1 1`)
  easy | hard      set the opponent's strength
  toggle           switch between easy and hard
  new              start a new game
  quit             leave";

fn outcome_message(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::Win(Side::Human) => "Winner: X. You win!",
        GameOutcome::Win(Side::Opponent) => "Winner: O. The opponent wins.",
        GameOutcome::Draw => "Draw.",
        GameOutcome::InProgress => "Game in progress.",
    }
}

/// Drives a session from `input`, writing everything to `output`.
///
/// A finished game is announced and a new one starts right away. The loop
/// ends on `quit` or end of input.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until quit or end of input.
    #[instrument(skip_all)]
    pub fn run(&mut self, session: &mut Session) -> Result<()> {
        writeln!(
            self.output,
            "You are X. Difficulty: {}. Type `help` for commands.",
            session.difficulty()
        )?;
        self.show_board(session)?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            let Some(input) = Input::parse(&line) else {
                if !line.trim().is_empty() {
                    writeln!(self.output, "Unrecognized input: {}", line.trim())?;
                }
                continue;
            };

            debug!(?input, "Parsed input");
            match input {
                Input::Quit => break,
                Input::Help => writeln!(self.output, "{}", HELP)?,
                Input::SetDifficulty(difficulty) => self.set_difficulty(session, difficulty)?,
                Input::ToggleDifficulty => {
                    let difficulty = session.difficulty().toggled();
                    self.set_difficulty(session, difficulty)?;
                }
                Input::NewGame => {
                    session.new_game();
                    writeln!(self.output, "New game.")?;
                    self.show_board(session)?;
                }
                Input::Place { row, col } => self.play(session, row, col)?,
            }
        }

        writeln!(self.output, "Bye.")?;
        Ok(())
    }

    /// Lets the opponent open the current game.
    pub fn opponent_opens(&mut self, session: &mut Session) -> Result<()> {
        let opening = session.opponent_opens()?;
        writeln!(self.output, "Opponent plays {}.", opening.position)?;
        Ok(())
    }

    fn set_difficulty(&mut self, session: &mut Session, difficulty: Difficulty) -> Result<()> {
        session.set_difficulty(difficulty);
        writeln!(self.output, "Difficulty: {}", difficulty)?;
        Ok(())
    }

    fn play(&mut self, session: &mut Session, row: usize, col: usize) -> Result<()> {
        let report = match session.play_human(row, col) {
            Ok(report) => report,
            Err(e) => {
                warn!(error = %e, "Move rejected");
                writeln!(self.output, "{}", e)?;
                return Ok(());
            }
        };

        if let Some(reply) = report.opponent() {
            writeln!(self.output, "Opponent plays {}.", reply.position)?;
        }
        self.show_board(session)?;

        let outcome = *report.outcome();
        if outcome.is_terminal() {
            info!(%outcome, "Game finished");
            writeln!(self.output, "{}", outcome_message(outcome))?;
            session.new_game();
            writeln!(self.output, "New game.")?;
            self.show_board(session)?;
        }
        Ok(())
    }

    fn show_board(&mut self, session: &Session) -> Result<()> {
        writeln!(self.output, "{}", session.board().render())?;
        Ok(())
    }
}
