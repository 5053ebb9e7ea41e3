//! Interaction events
//!
//! The host framework translates its native pointer, keyboard and input events
//! into [`InteractionEvent`]s. Components apply them synchronously, one at a
//! time, in dispatch order.

use crate::focus::FocusOrigin;

/// Keys the components react to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Backspace,
    Escape,
    Tab,
    /// Any printable character
    Char(char),
    /// A key no component handles
    Other,
}

impl Key {
    /// Parse a DOM-style key name (`"Enter"`, `"Backspace"`, `"a"`)
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            " " | "Space" | "Spacebar" => Key::Space,
            "Backspace" => Key::Backspace,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }

    /// Whether this key activates a focused pressable control
    pub fn activates(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// A single user interaction
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractionEvent {
    PointerEnter,
    PointerLeave,
    PointerDown,
    PointerUp,
    /// The control received focus
    Focus(FocusOrigin),
    /// The control lost focus
    Blur,
    KeyDown(Key),
    /// The control's text content changed to the given value
    Input(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("Enter"), Key::Enter);
        assert_eq!(Key::from_name("Backspace"), Key::Backspace);
        assert_eq!(Key::from_name(" "), Key::Space);
        assert_eq!(Key::from_name("7"), Key::Char('7'));
        assert_eq!(Key::from_name("ArrowLeft"), Key::Other);
    }

    #[test]
    fn test_activation_keys() {
        assert!(Key::Enter.activates());
        assert!(Key::Space.activates());
        assert!(!Key::Backspace.activates());
        assert!(!Key::Char('a').activates());
    }
}
