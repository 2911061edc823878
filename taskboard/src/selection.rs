//! Selection engine.
//!
//! Pure functions from (current selection, board, clicked task) to the next
//! selection. None of them mutate their inputs; the controller decides what
//! to keep.
//!
//! Every function resolves the clicked task on the board before doing
//! anything else, so an unknown id fails with `TaskNotFound` regardless of
//! the current selection.

use crate::error::Result;
use crate::types::{Board, Selection, TaskId};
use tracing::trace;

/// Plain click: select only this task, or deselect it if it was the only
/// selected task.
pub fn toggle_single(selection: &Selection, board: &Board, task_id: &TaskId) -> Result<Selection> {
    board.require_location(task_id)?;

    let was_selected = selection.contains(task_id);

    // Not previously selected: becomes the only selected item.
    // Part of a group: collapses the group to this item.
    if !was_selected || selection.len() > 1 {
        return Ok(Selection::single(task_id.clone()));
    }

    Ok(Selection::new())
}

/// Ctrl/Cmd click: add the task to the selection, or remove it if present.
pub fn toggle_in_group(
    selection: &Selection,
    board: &Board,
    task_id: &TaskId,
) -> Result<Selection> {
    board.require_location(task_id)?;

    let mut next = selection.clone();
    if !next.remove(task_id) {
        next.push(task_id.clone());
    }
    Ok(next)
}

/// Shift click: extend the selection from the anchor to `new_task_id`,
/// the way desktop file managers do.
///
/// Returns `Ok(None)` when there is nothing to do (the target is the
/// anchor itself). That is distinct from `Ok(Some(empty))`.
pub fn extend_range_to(
    selection: &Selection,
    board: &Board,
    new_task_id: &TaskId,
) -> Result<Option<Selection>> {
    let new = board.require_location(new_task_id)?;

    let Some(anchor_id) = selection.anchor() else {
        return Ok(Some(Selection::single(new_task_id.clone())));
    };
    let anchor = board.require_location(anchor_id)?;

    // Crossing into another column re-anchors at the top of that column.
    if new.column.id != anchor.column.id {
        trace!(
            column = %new.column.id,
            through = new.index,
            "range crosses columns, selecting from top"
        );
        let ids = new.column.items[..=new.index].iter().map(|t| t.id.clone());
        return Ok(Some(Selection::from_ids(ids)));
    }

    if new.index == anchor.index {
        return Ok(None);
    }

    let forwards = new.index > anchor.index;
    let (start, end) = if forwards {
        (anchor.index, new.index)
    } else {
        (new.index, anchor.index)
    };

    // Already selected ids keep their place; everything else is appended in
    // the direction of travel so the clicked task becomes the anchor.
    let to_add = new.column.items[start..=end]
        .iter()
        .map(|t| &t.id)
        .filter(|id| !selection.contains(id));

    let mut next = selection.clone();
    if forwards {
        to_add.for_each(|id| next.push(id.clone()));
    } else {
        to_add.rev().for_each(|id| next.push(id.clone()));
    }

    trace!(start, end, forwards, size = next.len(), "extended range");
    Ok(Some(next))
}

/// Drop every selected task
pub fn clear() -> Selection {
    Selection::new()
}
