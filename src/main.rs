//! tictactoe_bot - play tic-tac-toe against a minimax opponent.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe_bot::cli::{Cli, Command};
use tictactoe_bot::{BotConfig, Terminal, suggest};
use tictactoe_engine::Session;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = BotConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Play {
            difficulty,
            seed,
            opponent_first,
        } => run_play(config.with_overrides(difficulty, seed), opponent_first),
        Command::Suggest {
            board,
            side,
            difficulty,
            scores,
        } => suggest(&board, side.into(), difficulty, scores, &mut io::stdout().lock()),
    }
}

/// Run an interactive game on stdin/stdout
fn run_play(config: BotConfig, opponent_first: bool) -> Result<()> {
    let mut session = match config.seed() {
        Some(seed) => Session::with_seed(*config.difficulty(), *seed),
        None => Session::new(*config.difficulty()),
    };
    info!(difficulty = %session.difficulty(), "Starting terminal game");

    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout().lock());
    if opponent_first {
        terminal.opponent_opens(&mut session)?;
    }
    terminal.run(&mut session)
}
