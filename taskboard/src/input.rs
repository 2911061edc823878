//! Raw input vocabulary and modifier resolution

use crate::types::Action;
use serde::{Deserialize, Serialize};

/// Mouse button index for the primary button
pub const PRIMARY_BUTTON: u8 = 0;

/// Host platform; decides which modifier toggles group selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mac,
    Windows,
    Linux,
    #[default]
    Other,
}

impl Platform {
    /// Platform this binary was built for
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Mac
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Cmd on Mac, Ctrl everywhere else
    pub fn group_modifier_held(&self, modifiers: &Modifiers) -> bool {
        match self {
            Self::Mac => modifiers.meta,
            _ => modifiers.ctrl,
        }
    }

    /// Which selection action an activation with these modifiers performs
    pub fn activation_action(&self, modifiers: &Modifiers) -> Action {
        if self.group_modifier_held(modifiers) {
            Action::ToggleInGroup
        } else if modifiers.shift {
            Action::ExtendRange
        } else {
            Action::ToggleSingle
        }
    }
}

/// Modifier keys held during an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Self::default()
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// Keys the board reacts to. Anything else arrives as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Escape,
    #[serde(untagged)]
    Other(String),
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            "Escape" => Self::Escape,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Input delivered to a single task card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskInput {
    Click {
        #[serde(default)]
        button: u8,
        #[serde(default)]
        modifiers: Modifiers,
    },
    KeyDown {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
    TouchEnd,
}

impl TaskInput {
    /// Primary-button click
    pub fn click(modifiers: Modifiers) -> Self {
        Self::Click {
            button: PRIMARY_BUTTON,
            modifiers,
        }
    }

    /// Enter key press
    pub fn enter(modifiers: Modifiers) -> Self {
        Self::KeyDown {
            key: Key::Enter,
            modifiers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::mac_cmd(Platform::Mac, Modifiers::meta(), Action::ToggleInGroup)]
    #[case::mac_ctrl_is_plain(Platform::Mac, Modifiers::ctrl(), Action::ToggleSingle)]
    #[case::windows_ctrl(Platform::Windows, Modifiers::ctrl(), Action::ToggleInGroup)]
    #[case::linux_ctrl(Platform::Linux, Modifiers::ctrl(), Action::ToggleInGroup)]
    #[case::linux_meta_is_plain(Platform::Linux, Modifiers::meta(), Action::ToggleSingle)]
    #[case::shift(Platform::Other, Modifiers::shift(), Action::ExtendRange)]
    #[case::plain(Platform::Mac, Modifiers::none(), Action::ToggleSingle)]
    fn test_activation_action(
        #[case] platform: Platform,
        #[case] modifiers: Modifiers,
        #[case] expected: Action,
    ) {
        assert_eq!(platform.activation_action(&modifiers), expected);
    }

    #[test]
    fn test_group_modifier_beats_shift() {
        let both = Modifiers {
            ctrl: true,
            shift: true,
            ..Modifiers::default()
        };
        assert_eq!(
            Platform::Windows.activation_action(&both),
            Action::ToggleInGroup
        );
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!(Key::from("Enter"), Key::Enter);
        assert_eq!(Key::from("a"), Key::Other("a".into()));
        let key: Key = serde_json::from_str("\"Escape\"").unwrap();
        assert_eq!(key, Key::Escape);
        let key: Key = serde_json::from_str("\"Tab\"").unwrap();
        assert_eq!(key, Key::Other("Tab".into()));
    }

    #[test]
    fn test_task_input_from_yaml() {
        let input: TaskInput =
            serde_yaml_ng::from_str("type: click\nmodifiers: { shift: true }").unwrap();
        assert_eq!(input, TaskInput::click(Modifiers::shift()));
    }
}
