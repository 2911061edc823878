//! Opaque identifier newtypes.
//!
//! Ids are plain strings on the wire so seeds can use any scheme
//! (slugs, uuids, ulids). Freshly minted ids are ULIDs.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint a new unique id
            pub fn new() -> Self {
                Self(ulid::Ulid::new().to_string())
            }

            /// Wrap an existing id string
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifies a task card
    TaskId
);

define_id!(
    /// Identifies a column (the drag library's droppable id)
    ColumnId
);

define_id!(
    /// Identifies an activity log entry
    LogEntryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_ulids() {
        let id = TaskId::new();
        assert_eq!(id.as_str().len(), 26);
        assert_ne!(id, TaskId::new());
    }

    #[test]
    fn test_from_string_round_trips_display() {
        let id = ColumnId::from_string("todo");
        assert_eq!(id.to_string(), "todo");
        assert_eq!(ColumnId::from("todo"), id);
    }

    #[test]
    fn test_serializes_transparently() {
        let id = TaskId::from_string("t1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"t1\"");
        let parsed: TaskId = serde_json::from_str("\"t1\"").unwrap();
        assert_eq!(parsed, id);
    }
}
