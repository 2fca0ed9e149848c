//! Terminal front end for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Terminal**: line-oriented play loop over any `BufRead`/`Write` pair
//! - **Suggest**: one-shot move suggestion for a board in notation
//!
//! Game rules and the opponent live in `tictactoe_engine`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod suggest;
mod terminal;

pub use config::{BotConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use suggest::suggest;
pub use terminal::{Input, Terminal};
