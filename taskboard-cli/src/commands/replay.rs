use super::render;
use crate::cli::ReplayArgs;
use crate::config::CliConfig;
use crate::exit_codes::{EXIT_SUCCESS, EXIT_WARNING};
use crate::seed;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use taskboard::types::LogEntry;
use taskboard::{Board, BoardController, BoardView, Dispatch};

#[derive(Debug, Serialize)]
struct ReplayReport<'a> {
    board: &'a Board,
    view: BoardView,
    dispatches: Vec<Dispatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    activity: Option<Vec<&'a LogEntry>>,
}

pub fn run(args: &ReplayArgs, config: &CliConfig, out: &mut impl Write) -> Result<i32> {
    let board = seed::load_board(args.seed.as_deref())?;
    let events = seed::load_script(&args.script)?;
    let mut controller = BoardController::with_config(board, &config.board);

    let mut dispatches = Vec::with_capacity(events.len());
    for (index, event) in events.iter().enumerate() {
        let dispatch = controller.handle(event).with_context(|| format!("event {index} rejected"))?;
        dispatches.push(dispatch);
    }

    let ignored = dispatches.iter().filter(|d| !d.is_handled()).count();
    if ignored > 0 {
        tracing::warn!(ignored, total = events.len(), "some events were ignored");
    }

    let report = ReplayReport {
        board: controller.board(),
        view: controller.snapshot(),
        dispatches,
        activity: args.activity.then(|| controller.activity().collect()),
    };
    out.write_all(render(&report, args.format)?.as_bytes())?;

    Ok(if ignored > 0 { EXIT_WARNING } else { EXIT_SUCCESS })
}
