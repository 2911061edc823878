//! Subcommand implementations

pub mod replay;
pub mod show;

use crate::cli::{Commands, OutputFormat};
use crate::config::CliConfig;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// Run a subcommand, writing its output to `out`. Returns the exit code.
pub fn run(command: &Commands, config: &CliConfig, out: &mut impl Write) -> Result<i32> {
    match command {
        Commands::Show(args) => show::run(args, out),
        Commands::Replay(args) => replay::run(args, config, out),
    }
}

pub(crate) fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(value)?;
            text.push('\n');
            text
        }
        OutputFormat::Yaml => serde_yaml_ng::to_string(value)?,
    };
    Ok(text)
}
