//! Command-line harness for the taskboard engine
//!
//! Loads a board seed, replays a script of board events through
//! [`taskboard::BoardController`] and prints the resulting state.

pub mod cli;
pub mod commands;
pub mod config;
pub mod exit_codes;
pub mod logging;
pub mod seed;

pub use cli::{Cli, Commands, OutputFormat};
pub use config::CliConfig;
