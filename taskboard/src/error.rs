//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur while driving the board.
///
/// Each one means the caller broke the board's contract (an id the board
/// never held, a drag-end without a drag-start). They are returned before
/// any state is touched.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Task not found in any column
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Index outside a column's items
    #[error("index {index} out of range for column '{column}' with {len} tasks")]
    IndexOutOfRange {
        column: String,
        index: usize,
        len: usize,
    },

    /// Drag-end arrived with no drag in flight
    #[error("no drag in progress")]
    DragNotActive,
}

impl BoardError {
    /// Create a task not found error
    pub fn task_not_found(id: impl Into<String>) -> Self {
        Self::TaskNotFound { id: id.into() }
    }

    /// Create a column not found error
    pub fn column_not_found(id: impl Into<String>) -> Self {
        Self::ColumnNotFound { id: id.into() }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::task_not_found("abc123");
        assert_eq!(err.to_string(), "task not found: abc123");
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = BoardError::IndexOutOfRange {
            column: "todo".into(),
            index: 7,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "index 7 out of range for column 'todo' with 3 tasks"
        );
    }

    #[test]
    fn test_duplicate_id_display() {
        let err = BoardError::duplicate_id("column", "todo");
        assert_eq!(err.to_string(), "duplicate column ID: todo");
    }
}
