//! Verb/noun vocabulary for controller actions

use serde::{Deserialize, Serialize};
use std::fmt;

/// What an action does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verb {
    Toggle,
    Extend,
    Clear,
    Start,
    End,
}

/// What an action acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Noun {
    Selection,
    GroupSelection,
    Drag,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Toggle => "toggle",
            Self::Extend => "extend",
            Self::Clear => "clear",
            Self::Start => "start",
            Self::End => "end",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Selection => "selection",
            Self::GroupSelection => "group selection",
            Self::Drag => "drag",
        };
        f.write_str(s)
    }
}

/// An action the controller performed in response to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ToggleSingle,
    ToggleInGroup,
    ExtendRange,
    ClearSelection,
    StartDrag,
    EndDrag,
}

impl Action {
    pub fn verb(&self) -> Verb {
        match self {
            Self::ToggleSingle | Self::ToggleInGroup => Verb::Toggle,
            Self::ExtendRange => Verb::Extend,
            Self::ClearSelection => Verb::Clear,
            Self::StartDrag => Verb::Start,
            Self::EndDrag => Verb::End,
        }
    }

    pub fn noun(&self) -> Noun {
        match self {
            Self::ToggleInGroup => Noun::GroupSelection,
            Self::ToggleSingle | Self::ExtendRange | Self::ClearSelection => Noun::Selection,
            Self::StartDrag | Self::EndDrag => Noun::Drag,
        }
    }

    /// Canonical op string, e.g. "toggle group selection"
    pub fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb(), self.noun())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_strings() {
        assert_eq!(Action::ToggleSingle.op_string(), "toggle selection");
        assert_eq!(Action::ToggleInGroup.op_string(), "toggle group selection");
        assert_eq!(Action::ExtendRange.op_string(), "extend selection");
        assert_eq!(Action::ClearSelection.op_string(), "clear selection");
        assert_eq!(Action::EndDrag.to_string(), "end drag");
    }
}
