use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "Drive a kanban board's selection and drag state machine")]
#[command(long_about = "
Loads a board (from a seed file or the built-in starter board), feeds it
scripted input events and prints the resulting board state.

Configuration is read from taskboard.{toml,yaml,yml,json} in the current
directory, then the file passed with --config, then TASKBOARD_* environment
variables.

Example:
  taskboard show
  taskboard show --seed board.yaml --format yaml
  taskboard replay --script events.yaml --seed board.json --activity
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Additional configuration file (toml, yaml or json)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a board without applying any events
    Show(ShowArgs),
    /// Apply a script of board events and print the outcome
    #[command(long_about = "
Reads a list of board events (json or yaml) and dispatches them in order.
Replay stops at the first event the board rejects and reports its index.

Event script example:
  - event: task
    task_id: t1
    input: { type: click }
  - event: task
    task_id: t3
    input: { type: click, modifiers: { shift: true } }
  - event: escape_key
")]
    Replay(ReplayArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Board seed file (json or yaml); defaults to the starter board
    #[arg(long, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Event script file (json or yaml)
    #[arg(long, value_name = "PATH")]
    pub script: PathBuf,

    /// Board seed file (json or yaml); defaults to the starter board
    #[arg(long, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Include the activity log in the output
    #[arg(long)]
    pub activity: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_replay_with_global_flags() {
        let cli = Cli::try_parse_from([
            "taskboard",
            "replay",
            "--script",
            "events.yaml",
            "--activity",
            "-d",
            "--format",
            "yaml",
        ])
        .unwrap();

        assert!(cli.debug);
        match cli.command {
            Commands::Replay(args) => {
                assert_eq!(args.script, PathBuf::from("events.yaml"));
                assert!(args.activity);
                assert_eq!(args.format, OutputFormat::Yaml);
                assert!(args.seed.is_none());
            }
            other => panic!("expected replay, got {other:?}"),
        }
    }

    #[test]
    fn test_replay_requires_script() {
        assert!(Cli::try_parse_from(["taskboard", "replay"]).is_err());
    }

    #[test]
    fn test_show_defaults_to_json() {
        let cli = Cli::try_parse_from(["taskboard", "show"]).unwrap();
        match cli.command {
            Commands::Show(args) => assert_eq!(args.format, OutputFormat::Json),
            other => panic!("expected show, got {other:?}"),
        }
    }
}
