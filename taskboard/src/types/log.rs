//! Log entry types for activity tracking

use super::ids::LogEntryId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::VecDeque;

/// A log entry recording a state-changing action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique ID for this log entry
    pub id: LogEntryId,

    /// When the action occurred
    pub timestamp: DateTime<Utc>,

    /// Canonical op string (e.g., "toggle selection")
    pub op: String,

    /// The event that triggered it
    pub input: Value,

    /// The resulting state (or error)
    pub output: Value,

    /// How long the action took
    pub duration_ms: u64,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(op: impl Into<String>, input: Value, output: Value, duration_ms: u64) -> Self {
        Self {
            id: LogEntryId::new(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            duration_ms,
        }
    }

    /// Create a log entry for a failed action
    pub fn failure(op: impl Into<String>, input: Value, error: &str, duration_ms: u64) -> Self {
        let output = serde_json::json!({ "error": error });
        Self::new(op, input, output, duration_ms)
    }

    /// Whether this entry records a failure
    pub fn is_failure(&self) -> bool {
        self.output.get("error").is_some()
    }
}

/// Bounded in-memory activity log. Oldest entries fall off the end.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl ActivityLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Record an entry. A zero-capacity log records nothing.
    pub fn record(&mut self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(entry);
    }

    /// Entries, newest first
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
