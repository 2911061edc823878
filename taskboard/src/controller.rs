//! Board controller: owns the board, selection and drag session, and routes
//! input events to the selection engine and the drag resolver.
//!
//! Each handler runs to completion. State is replaced only after every
//! fallible step has succeeded, so an error leaves the controller exactly
//! as it was.

use crate::config::BoardConfig;
use crate::drag::{self, DropOutcome};
use crate::error::{BoardError, Result};
use crate::input::{Key, Modifiers, Platform, TaskInput, PRIMARY_BUTTON};
use crate::selection;
use crate::types::{
    Action, ActivityLog, Board, DragSession, DragStart, DropResult, LogEntry, Selection, TaskId,
};
use crate::view::BoardView;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{debug, warn};

/// An input event the controller understands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BoardEvent {
    /// Pointer, keyboard or touch input on a task card
    Task {
        task_id: TaskId,
        input: TaskInput,
        /// Set when another handler already consumed the event
        #[serde(default)]
        default_prevented: bool,
    },
    EscapeKey,
    BackgroundClick,
    BackgroundTouchEnd,
    DragStart(DragStart),
    DragEnd(DropResult),
}

impl BoardEvent {
    pub fn task(task_id: impl Into<TaskId>, input: TaskInput) -> Self {
        Self::Task {
            task_id: task_id.into(),
            input,
            default_prevented: false,
        }
    }
}

/// What the controller did with an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Dispatch {
    /// The event was consumed
    Handled {
        action: Action,
        /// False when the action was a no-op (range to the anchor,
        /// clearing an empty selection)
        changed: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        drop: Option<DropOutcome>,
    },
    /// The event does not concern the board and should propagate
    Ignored,
}

impl Dispatch {
    fn handled(action: Action, changed: bool) -> Self {
        Self::Handled {
            action,
            changed,
            drop: None,
        }
    }

    pub fn action(&self) -> Option<Action> {
        match self {
            Self::Handled { action, .. } => Some(*action),
            Self::Ignored => None,
        }
    }

    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled { .. })
    }

    pub fn changed(&self) -> bool {
        matches!(self, Self::Handled { changed: true, .. })
    }
}

/// Authoritative board state plus the handlers that mutate it
#[derive(Debug, Clone)]
pub struct BoardController {
    board: Board,
    selection: Selection,
    drag: DragSession,
    platform: Platform,
    activity: ActivityLog,
}

impl BoardController {
    /// Create a controller with the default configuration
    pub fn new(board: Board) -> Self {
        Self::with_config(board, &BoardConfig::default())
    }

    pub fn with_config(board: Board, config: &BoardConfig) -> Self {
        Self {
            board,
            selection: Selection::new(),
            drag: DragSession::default(),
            platform: config.platform,
            activity: ActivityLog::with_capacity(config.activity_capacity),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn drag_session(&self) -> &DragSession {
        &self.drag
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Activity log entries, newest first
    pub fn activity(&self) -> impl Iterator<Item = &LogEntry> {
        self.activity.entries()
    }

    /// Render snapshot of the current state
    pub fn snapshot(&self) -> BoardView {
        BoardView::build(&self.board, &self.selection, &self.drag)
    }

    /// Handle one event and record it in the activity log.
    pub fn handle(&mut self, event: &BoardEvent) -> Result<Dispatch> {
        let start = Instant::now();
        let result = self.dispatch(event);
        let duration_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(dispatch @ Dispatch::Handled { action, .. }) if dispatch.changed() => {
                let output = json!({
                    "dispatch": dispatch,
                    "selection": &self.selection,
                    "drag": &self.drag,
                });
                self.activity.record(LogEntry::new(
                    action.op_string(),
                    event_value(event),
                    output,
                    duration_ms,
                ));
            }
            Ok(_) => {}
            Err(error) => {
                warn!(%error, ?event, "event rejected");
                self.activity.record(LogEntry::failure(
                    event_op(event),
                    event_value(event),
                    &error.to_string(),
                    duration_ms,
                ));
            }
        }

        result
    }

    fn dispatch(&mut self, event: &BoardEvent) -> Result<Dispatch> {
        match event {
            BoardEvent::Task {
                task_id,
                input,
                default_prevented,
            } => {
                if *default_prevented {
                    return Ok(Dispatch::Ignored);
                }
                self.task_input(task_id, input)
            }
            BoardEvent::EscapeKey
            | BoardEvent::BackgroundClick
            | BoardEvent::BackgroundTouchEnd => Ok(self.clear_selection()),
            BoardEvent::DragStart(start) => self.drag_start(start),
            BoardEvent::DragEnd(drop) => self.drag_end(drop),
        }
    }

    /// Route raw input on a task card
    pub fn task_input(&mut self, task_id: &TaskId, input: &TaskInput) -> Result<Dispatch> {
        match input {
            TaskInput::Click { button, modifiers } => {
                if *button != PRIMARY_BUTTON {
                    return Ok(Dispatch::Ignored);
                }
                self.activate(task_id, modifiers)
            }
            TaskInput::KeyDown { key, modifiers } => {
                if *key != Key::Enter || self.drag.is_dragging_task(task_id) {
                    return Ok(Dispatch::Ignored);
                }
                self.activate(task_id, modifiers)
            }
            // No modifiers on touch; always group toggle
            TaskInput::TouchEnd => self.toggle_in_group(task_id),
        }
    }

    /// Primary click or Enter on a task
    pub fn activate(&mut self, task_id: &TaskId, modifiers: &Modifiers) -> Result<Dispatch> {
        match self.platform.activation_action(modifiers) {
            Action::ToggleInGroup => self.toggle_in_group(task_id),
            Action::ExtendRange => self.extend_range_to(task_id),
            _ => self.toggle_single(task_id),
        }
    }

    pub fn toggle_single(&mut self, task_id: &TaskId) -> Result<Dispatch> {
        let next = selection::toggle_single(&self.selection, &self.board, task_id)?;
        Ok(self.commit_selection(Action::ToggleSingle, task_id, next))
    }

    pub fn toggle_in_group(&mut self, task_id: &TaskId) -> Result<Dispatch> {
        let next = selection::toggle_in_group(&self.selection, &self.board, task_id)?;
        Ok(self.commit_selection(Action::ToggleInGroup, task_id, next))
    }

    pub fn extend_range_to(&mut self, task_id: &TaskId) -> Result<Dispatch> {
        match selection::extend_range_to(&self.selection, &self.board, task_id)? {
            Some(next) => Ok(self.commit_selection(Action::ExtendRange, task_id, next)),
            None => {
                debug!(task = %task_id, "range target is the anchor, nothing to do");
                Ok(Dispatch::handled(Action::ExtendRange, false))
            }
        }
    }

    /// Escape, background click or background touch
    pub fn clear_selection(&mut self) -> Dispatch {
        let changed = !self.selection.is_empty();
        self.selection = selection::clear();
        debug!(changed, "cleared selection");
        Dispatch::handled(Action::ClearSelection, changed)
    }

    /// Idle -> Dragging. Grabbing a task outside the selection drops the
    /// selection first.
    pub fn drag_start(&mut self, start: &DragStart) -> Result<Dispatch> {
        let task_id = &start.draggable_id;
        self.board.require_location(task_id)?;

        if let Some(previous) = &self.drag.dragging_task_id {
            warn!(%previous, next = %task_id, "drag started while another was active");
        }

        if !self.selection.contains(task_id) {
            self.selection = selection::clear();
        }
        self.drag.dragging_task_id = Some(task_id.clone());

        debug!(task = %task_id, selected = self.selection.len(), "drag started");
        Ok(Dispatch::handled(Action::StartDrag, true))
    }

    /// Dragging -> Idle. Applies the drop, then clears selection and the
    /// drag session whatever the outcome.
    pub fn drag_end(&mut self, drop: &DropResult) -> Result<Dispatch> {
        let dragging = self.drag.dragging_task_id.clone().ok_or(BoardError::DragNotActive)?;

        if let Some(reported) = &drop.draggable_id {
            if reported != &dragging {
                warn!(%reported, session = %dragging, "drop names another task, using session");
            }
        }

        let (board, outcome) = drag::resolve_drop(&self.board, &self.selection, &dragging, drop)?;

        self.board = board;
        self.selection = selection::clear();
        self.drag = DragSession::default();

        debug!(task = %dragging, ?outcome, "drag ended");
        Ok(Dispatch::Handled {
            action: Action::EndDrag,
            changed: true,
            drop: Some(outcome),
        })
    }

    fn commit_selection(&mut self, action: Action, task_id: &TaskId, next: Selection) -> Dispatch {
        let changed = next != self.selection;
        self.selection = next;
        debug!(
            action = %action,
            task = %task_id,
            selected = self.selection.len(),
            "selection updated"
        );
        Dispatch::handled(action, changed)
    }
}

/// Log payload for an event. `BoardEvent` has only string map keys, so
/// conversion cannot fail; `Null` would only mark a missing payload.
fn event_value(event: &BoardEvent) -> Value {
    serde_json::to_value(event).unwrap_or(Value::Null)
}

fn event_op(event: &BoardEvent) -> String {
    match event {
        BoardEvent::Task { .. } => "task input".to_string(),
        BoardEvent::EscapeKey | BoardEvent::BackgroundClick | BoardEvent::BackgroundTouchEnd => {
            Action::ClearSelection.op_string()
        }
        BoardEvent::DragStart(_) => Action::StartDrag.op_string(),
        BoardEvent::DragEnd(_) => Action::EndDrag.op_string(),
    }
}
