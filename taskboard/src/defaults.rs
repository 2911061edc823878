//! Starter board used when no seed is supplied

use crate::error::Result;
use crate::types::{Board, Column, ColumnId, Task};

/// Three empty-ish workflow columns with a handful of starter tasks in
/// "To do". Ids are freshly minted on every call.
pub fn default_board() -> Result<Board> {
    let tasks = [
        "First task",
        "Second task",
        "Third task",
        "Fourth task",
        "Fifth task",
    ]
    .into_iter()
    .map(Task::new)
    .collect();

    let columns = [
        Column::new(ColumnId::new(), "To do").with_items(tasks),
        Column::new(ColumnId::new(), "In Progress"),
        Column::new(ColumnId::new(), "Done"),
    ];

    Board::from_columns(columns)
}
