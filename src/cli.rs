//! Command-line interface for tictactoe_bot.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_engine::{Board, Difficulty, Side};

/// Tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_bot")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Opponent strength (easy or hard); overrides the config file
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for reproducible easy moves; overrides the config file
        #[arg(long)]
        seed: Option<u64>,

        /// Let the opponent make the first move of the first game
        #[arg(long)]
        opponent_first: bool,
    },

    /// Print the move the opponent would choose on a board
    Suggest {
        /// Board notation, e.g. "XX_/OO_/___"
        #[arg(short, long)]
        board: Board,

        /// Side to move
        #[arg(short, long, value_enum, default_value_t = SideArg::O)]
        side: SideArg,

        /// Opponent strength
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Also print the minimax score of every legal move
        #[arg(long)]
        scores: bool,
    },
}

/// Side selector as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    /// The human side.
    X,
    /// The opponent side.
    O,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::X => Side::Human,
            SideArg::O => Side::Opponent,
        }
    }
}
