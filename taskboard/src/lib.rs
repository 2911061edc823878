//! Kanban board engine: multi-select and drag-and-drop reordering
//!
//! This crate holds the state machine behind a drag-and-drop kanban board.
//! Rendering and drag physics belong to the host; the host feeds input
//! events in and reads snapshots back out.
//!
//! ## Overview
//!
//! - **Selection engine** ([`selection`]) - pure functions for click,
//!   Ctrl/Cmd-click and Shift-click selection
//! - **Drag resolver** ([`drag`]) - turns a completed drag into the next board
//! - **Controller** ([`BoardController`]) - owns board, selection and drag
//!   session; routes events to the two above
//! - **Window subscription** ([`window`]) - scoped listeners that clear the
//!   selection on background clicks and Escape
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskboard::{BoardController, BoardEvent, Column, Board, Task};
//! use taskboard::types::{DragStart, DropResult, DraggableLocation};
//! use taskboard::input::{Modifiers, TaskInput};
//!
//! # fn example() -> taskboard::Result<()> {
//! let board = Board::from_columns([
//!     Column::new("todo", "To do").with_items(vec![
//!         Task::with_id("t1", "Write docs"),
//!         Task::with_id("t2", "Ship it"),
//!     ]),
//!     Column::new("done", "Done"),
//! ])?;
//! let mut controller = BoardController::new(board);
//!
//! // Select both tasks, then drag them to "done"
//! controller.handle(&BoardEvent::task("t1", TaskInput::click(Modifiers::none())))?;
//! controller.handle(&BoardEvent::task("t2", TaskInput::click(Modifiers::shift())))?;
//! controller.handle(&BoardEvent::DragStart(DragStart::new("t1")))?;
//! controller.handle(&BoardEvent::DragEnd(DropResult::new(
//!     DraggableLocation::new("todo", 0),
//!     DraggableLocation::new("done", 0),
//! )))?;
//!
//! assert_eq!(controller.board().column(&"done".into()).unwrap().len(), 2);
//! assert!(controller.selection().is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod config;
mod controller;
pub mod defaults;
pub mod drag;
mod error;
pub mod input;
pub mod selection;
pub mod types;
pub mod view;
pub mod window;

pub use config::{BoardConfig, DEFAULT_ACTIVITY_CAPACITY};
pub use controller::{BoardController, BoardEvent, Dispatch};
pub use defaults::default_board;
pub use drag::DropOutcome;
pub use error::{BoardError, Result};
pub use input::Platform;
pub use view::BoardView;

// Re-export commonly used types
pub use types::{Board, Column, ColumnId, DragSession, Selection, Task, TaskId};
