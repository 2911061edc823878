//! Payloads emitted by the drag-and-drop library

use super::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A slot inside a column: the droppable plus an index into its items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraggableLocation {
    pub droppable_id: ColumnId,
    pub index: usize,
}

impl DraggableLocation {
    pub fn new(droppable_id: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}

/// Emitted when the user picks up a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragStart {
    pub draggable_id: TaskId,
}

impl DragStart {
    pub fn new(draggable_id: impl Into<TaskId>) -> Self {
        Self {
            draggable_id: draggable_id.into(),
        }
    }
}

/// Emitted when a drag completes. `destination` is `None` when the card
/// was dropped outside every column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draggable_id: Option<TaskId>,
    pub source: DraggableLocation,
    #[serde(default)]
    pub destination: Option<DraggableLocation>,
}

impl DropResult {
    /// A drop into `destination`
    pub fn new(source: DraggableLocation, destination: DraggableLocation) -> Self {
        Self {
            draggable_id: None,
            source,
            destination: Some(destination),
        }
    }

    /// A drop outside every column
    pub fn cancelled(source: DraggableLocation) -> Self {
        Self {
            draggable_id: None,
            source,
            destination: None,
        }
    }

    pub fn with_draggable_id(mut self, id: impl Into<TaskId>) -> Self {
        self.draggable_id = Some(id.into());
        self
    }

    /// Whether source and destination are the same column
    pub fn is_reorder(&self) -> bool {
        self.destination.as_ref().is_some_and(|dest| dest.droppable_id == self.source.droppable_id)
    }
}
