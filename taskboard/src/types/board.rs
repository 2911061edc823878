//! Board-level types: Board, Column, Task

use super::ids::{ColumnId, TaskId};
use crate::error::{BoardError, Result};
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// A task card. Its column is implied by which column's items hold it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
}

impl Task {
    /// Create a new task with a freshly minted id
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            content: content.into(),
        }
    }

    /// Create a task with an explicit id
    pub fn with_id(id: impl Into<TaskId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// A column is a workflow stage holding an ordered run of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Restored from the map key after deserialization
    #[serde(skip)]
    pub id: ColumnId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Task>,
}

impl Column {
    /// Create an empty column
    pub fn new(id: impl Into<ColumnId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Set the column's tasks
    pub fn with_items(mut self, items: Vec<Task>) -> Self {
        self.items = items;
        self
    }

    /// Position of a task within this column
    pub fn index_of(&self, task_id: &TaskId) -> Option<usize> {
        self.items.iter().position(|t| &t.id == task_id)
    }

    /// Ids of the column's tasks, in order
    pub fn task_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.items.iter().map(|t| &t.id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Where a task currently sits on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    pub column: &'a Column,
    pub index: usize,
}

/// Seed shape: `{ columnId: { name, items: [{id, content}] } }`.
///
/// Entries are kept as read, repeated keys included, so that building the
/// board can reject them instead of a map silently keeping the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSeed(Vec<(ColumnId, Column)>);

impl BoardSeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column entry
    pub fn with_column(mut self, id: impl Into<ColumnId>, column: Column) -> Self {
        self.0.push((id.into(), column));
        self
    }
}

impl<'de> Deserialize<'de> for BoardSeed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct SeedVisitor;

        impl<'de> Visitor<'de> for SeedVisitor {
            type Value = BoardSeed;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of column ids to columns")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<BoardSeed, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<ColumnId, Column>()? {
                    entries.push(entry);
                }
                Ok(BoardSeed(entries))
            }
        }

        deserializer.deserialize_map(SeedVisitor)
    }
}

/// The kanban board: columns in display order, each with ordered tasks.
///
/// Every task lives in exactly one column. Constructors reject seeds that
/// would break that, and every mutation the engine performs preserves it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "BoardSeed")]
pub struct Board {
    columns: IndexMap<ColumnId, Column>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from columns, in the given order
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> Result<Self> {
        let mut map = IndexMap::new();
        for column in columns {
            if map.contains_key(&column.id) {
                return Err(BoardError::duplicate_id("column", column.id.as_str()));
            }
            map.insert(column.id.clone(), column);
        }
        let board = Self { columns: map };
        board.check_integrity()?;
        Ok(board)
    }

    /// Build a board from seed data, restoring column ids from the keys.
    /// A column id that appears twice is a `DuplicateId` error.
    pub fn from_seed(seed: BoardSeed) -> Result<Self> {
        Self::from_columns(seed.0.into_iter().map(|(id, mut column)| {
            column.id = id;
            column
        }))
    }

    /// Verify no task id appears twice across the board
    pub fn check_integrity(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for task_id in self.columns.values().flat_map(Column::task_ids) {
            if !seen.insert(task_id) {
                return Err(BoardError::duplicate_id("task", task_id.as_str()));
            }
        }
        Ok(())
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    /// Look up a column, failing with `ColumnNotFound`
    pub fn require_column(&self, id: &ColumnId) -> Result<&Column> {
        self.column(id).ok_or_else(|| BoardError::column_not_found(id.as_str()))
    }

    pub(crate) fn column_mut(&mut self, id: &ColumnId) -> Result<&mut Column> {
        self.columns.get_mut(id).ok_or_else(|| BoardError::column_not_found(id.as_str()))
    }

    /// Columns in display order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Find the column and index holding a task
    pub fn locate(&self, task_id: &TaskId) -> Option<Location<'_>> {
        self.columns.values().find_map(|column| {
            column.index_of(task_id).map(|index| Location { column, index })
        })
    }

    /// Find a task's location, failing with `TaskNotFound`
    pub fn require_location(&self, task_id: &TaskId) -> Result<Location<'_>> {
        self.locate(task_id).ok_or_else(|| BoardError::task_not_found(task_id.as_str()))
    }

    pub fn contains_task(&self, task_id: &TaskId) -> bool {
        self.locate(task_id).is_some()
    }

    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.locate(task_id).map(|loc| &loc.column.items[loc.index])
    }

    /// All task ids, column by column
    pub fn task_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.columns.values().flat_map(Column::task_ids)
    }

    pub fn task_count(&self) -> usize {
        self.columns.values().map(Column::len).sum()
    }
}

impl TryFrom<BoardSeed> for Board {
    type Error = BoardError;

    fn try_from(seed: BoardSeed) -> Result<Self> {
        Self::from_seed(seed)
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.columns.serialize(serializer)
    }
}
