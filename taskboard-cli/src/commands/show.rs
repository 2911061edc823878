use super::render;
use crate::cli::ShowArgs;
use crate::exit_codes::EXIT_SUCCESS;
use crate::seed;
use anyhow::Result;
use std::io::Write;
use taskboard::{BoardView, DragSession, Selection};

pub fn run(args: &ShowArgs, out: &mut impl Write) -> Result<i32> {
    let board = seed::load_board(args.seed.as_deref())?;
    let view = BoardView::build(&board, &Selection::new(), &DragSession::default());

    out.write_all(render(&view, args.format)?.as_bytes())?;
    Ok(EXIT_SUCCESS)
}
