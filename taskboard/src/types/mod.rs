//! Core types for the board engine

mod board;
mod drag;
mod ids;
mod log;
mod operation;
mod selection;

// Re-export all types
pub use board::{Board, BoardSeed, Column, Location, Task};
pub use drag::{DragStart, DraggableLocation, DropResult};
pub use ids::{ColumnId, LogEntryId, TaskId};
pub use log::{ActivityLog, LogEntry};
pub use operation::{Action, Noun, Verb};
pub use selection::{DragSession, Selection};
