//! Drag resolver: turns a completed drag gesture into the next board.
//!
//! Within a column only the grabbed card moves, even when several cards are
//! selected. Across columns a multi-selection moves as a group. Cross-column
//! moves always append to the end of the destination; the drop index is
//! only honored for reorders.

use crate::error::{BoardError, Result};
use crate::types::{Board, ColumnId, DropResult, Selection, Task, TaskId};
use serde::Serialize;
use tracing::{debug, trace};

/// What a drop did to the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropOutcome {
    /// Dropped outside every column; board unchanged
    Cancelled,
    /// One card moved within its column
    Reordered {
        column: ColumnId,
        from: usize,
        to: usize,
    },
    /// Cards moved to the end of another column, in source order
    Moved {
        from: ColumnId,
        to: ColumnId,
        tasks: Vec<TaskId>,
    },
}

/// Compute the board after `drop` completes.
///
/// `dragging` is the card the user grabbed. The input board is never
/// modified; on error nothing has changed.
pub fn resolve_drop(
    board: &Board,
    selection: &Selection,
    dragging: &TaskId,
    drop: &DropResult,
) -> Result<(Board, DropOutcome)> {
    let Some(destination) = &drop.destination else {
        debug!(task = %dragging, "dropped outside any column");
        return Ok((board.clone(), DropOutcome::Cancelled));
    };

    let source = &drop.source;
    let source_column = board.require_column(&source.droppable_id)?;
    board.require_column(&destination.droppable_id)?;

    if source.index >= source_column.len() {
        return Err(BoardError::IndexOutOfRange {
            column: source.droppable_id.to_string(),
            index: source.index,
            len: source_column.len(),
        });
    }

    let mut next = board.clone();

    let outcome = if source.droppable_id == destination.droppable_id {
        let column = next.column_mut(&source.droppable_id)?;
        let removed = column.items.remove(source.index);
        // Past-the-end indices append, like an array splice
        let to = destination.index.min(column.items.len());
        trace!(task = %removed.id, from = source.index, to, "reordering within column");
        column.items.insert(to, removed);
        DropOutcome::Reordered {
            column: source.droppable_id.clone(),
            from: source.index,
            to,
        }
    } else {
        let moved = if selection.len() > 1 {
            take_selected(&mut next, &source.droppable_id, selection)?
        } else {
            take_one(&mut next, &source.droppable_id, dragging)?
        };
        let tasks = moved.iter().map(|t| t.id.clone()).collect();
        next.column_mut(&destination.droppable_id)?.items.extend(moved);
        DropOutcome::Moved {
            from: source.droppable_id.clone(),
            to: destination.droppable_id.clone(),
            tasks,
        }
    };

    debug_assert!(next.check_integrity().is_ok());
    debug!(?outcome, "resolved drop");
    Ok((next, outcome))
}

/// Remove every selected card from `column`, keeping both the moved and the
/// remaining cards in their column order.
fn take_selected(board: &mut Board, column: &ColumnId, selection: &Selection) -> Result<Vec<Task>> {
    let lookup = selection.lookup();
    let column = board.column_mut(column)?;
    let (moved, kept): (Vec<Task>, Vec<Task>) = std::mem::take(&mut column.items)
        .into_iter()
        .partition(|t| lookup.contains(&t.id));
    column.items = kept;
    Ok(moved)
}

fn take_one(board: &mut Board, column_id: &ColumnId, task_id: &TaskId) -> Result<Vec<Task>> {
    let column = board.column_mut(column_id)?;
    let index = column
        .index_of(task_id)
        .ok_or_else(|| BoardError::task_not_found(task_id.as_str()))?;
    Ok(vec![column.items.remove(index)])
}
