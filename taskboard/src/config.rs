//! Board configuration

use crate::input::Platform;
use serde::{Deserialize, Serialize};

/// Default number of activity log entries kept in memory
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 100;

/// Settings a host passes to the controller.
///
/// Loading is left to the host; every field has a default so a partial
/// file or environment overlay deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Decides whether Ctrl or Cmd toggles group selection
    pub platform: Platform,
    /// How many activity log entries to keep (0 disables the log)
    pub activity_capacity: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            activity_capacity: DEFAULT_ACTIVITY_CAPACITY,
        }
    }
}

impl BoardConfig {
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_activity_capacity(mut self, capacity: usize) -> Self {
        self.activity_capacity = capacity;
        self
    }
}
