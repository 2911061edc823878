//! Selection and drag session state

use super::ids::TaskId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered set of selected task ids. The last id is the anchor for range
/// selection. Deserializing drops repeated ids.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<TaskId>", into = "Vec<TaskId>")]
pub struct Selection(Vec<TaskId>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection holding exactly one task
    pub fn single(id: TaskId) -> Self {
        Self(vec![id])
    }

    /// Build from ids in order; later duplicates are dropped
    pub fn from_ids(ids: impl IntoIterator<Item = TaskId>) -> Self {
        let mut selection = Self::new();
        for id in ids {
            selection.push(id);
        }
        selection
    }

    /// The most recently selected task
    pub fn anchor(&self) -> Option<&TaskId> {
        self.0.last()
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.0.contains(id)
    }

    pub fn ids(&self) -> &[TaskId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Membership set for per-render lookups
    pub fn lookup(&self) -> HashSet<&TaskId> {
        self.0.iter().collect()
    }

    /// Append an id unless already present
    pub(crate) fn push(&mut self, id: TaskId) {
        if !self.contains(&id) {
            self.0.push(id);
        }
    }

    /// Remove an id, keeping the rest in order. Returns whether it was present.
    pub(crate) fn remove(&mut self, id: &TaskId) -> bool {
        match self.0.iter().position(|s| s == id) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }
}

impl From<Vec<TaskId>> for Selection {
    fn from(ids: Vec<TaskId>) -> Self {
        Self::from_ids(ids)
    }
}

impl From<Selection> for Vec<TaskId> {
    fn from(selection: Selection) -> Self {
        selection.0
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a TaskId;
    type IntoIter = std::slice::Iter<'a, TaskId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Transient record of the task being dragged
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragSession {
    pub dragging_task_id: Option<TaskId>,
}

impl DragSession {
    pub fn is_dragging(&self) -> bool {
        self.dragging_task_id.is_some()
    }

    /// Whether this particular task is the one in flight
    pub fn is_dragging_task(&self, id: &TaskId) -> bool {
        self.dragging_task_id.as_ref() == Some(id)
    }
}
