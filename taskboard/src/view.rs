//! Read-only render snapshot

use crate::types::{Board, ColumnId, DragSession, Selection, TaskId};
use serde::Serialize;

/// A task as the renderer should draw it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    pub id: TaskId,
    pub content: String,
    pub index: usize,
    pub selected: bool,
    /// Selected and carried along by someone else's drag
    pub ghosting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    pub id: ColumnId,
    pub name: String,
    pub tasks: Vec<TaskView>,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
    pub selection: Selection,
    pub dragging_task_id: Option<TaskId>,
}

impl BoardView {
    /// Build the snapshot. Selection membership is looked up through a set
    /// rebuilt here, so the view always matches the selection it was given.
    pub fn build(board: &Board, selection: &Selection, drag: &DragSession) -> Self {
        let selected = selection.lookup();

        let columns = board
            .columns()
            .map(|column| ColumnView {
                id: column.id.clone(),
                name: column.name.clone(),
                tasks: column
                    .items
                    .iter()
                    .enumerate()
                    .map(|(index, task)| {
                        let is_selected = selected.contains(&task.id);
                        TaskView {
                            id: task.id.clone(),
                            content: task.content.clone(),
                            index,
                            selected: is_selected,
                            ghosting: is_selected
                                && drag.is_dragging()
                                && !drag.is_dragging_task(&task.id),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            columns,
            selection: selection.clone(),
            dragging_task_id: drag.dragging_task_id.clone(),
        }
    }

    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    /// Find a task's view by id
    pub fn task(&self, id: &TaskId) -> Option<&TaskView> {
        self.columns.iter().flat_map(|c| c.tasks.iter()).find(|t| &t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, Task};

    fn board() -> Board {
        Board::from_columns([Column::new("a", "A").with_items(vec![
            Task::with_id("t1", "one"),
            Task::with_id("t2", "two"),
            Task::with_id("t3", "three"),
        ])])
        .unwrap()
    }

    #[test]
    fn test_selected_flags() {
        let selection = Selection::from_ids([TaskId::from("t2")]);
        let view = BoardView::build(&board(), &selection, &DragSession::default());
        assert!(view.task(&TaskId::from("t2")).unwrap().selected);
        assert!(!view.task(&TaskId::from("t1")).unwrap().selected);
        assert_eq!(view.selection_count(), 1);
    }

    #[test]
    fn test_ghosting_only_for_other_selected_tasks() {
        let selection = Selection::from_ids([TaskId::from("t1"), TaskId::from("t3")]);
        let drag = DragSession {
            dragging_task_id: Some(TaskId::from("t1")),
        };
        let view = BoardView::build(&board(), &selection, &drag);
        assert!(!view.task(&TaskId::from("t1")).unwrap().ghosting);
        assert!(!view.task(&TaskId::from("t2")).unwrap().ghosting);
        assert!(view.task(&TaskId::from("t3")).unwrap().ghosting);
    }

    #[test]
    fn test_no_ghosting_without_drag() {
        let selection = Selection::from_ids([TaskId::from("t1"), TaskId::from("t3")]);
        let view = BoardView::build(&board(), &selection, &DragSession::default());
        assert!(view.columns[0].tasks.iter().all(|t| !t.ghosting));
    }
}
