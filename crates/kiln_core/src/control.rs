//! Pressable controls
//!
//! [`PressState`] is the hover/press state machine shared by every clickable
//! control. [`Pressable`] wires it to activation: a pointer release on a
//! pressed control, or Enter/Space on a focused one, activates the control
//! unless it is disabled.
//!
//! ```text
//!            POINTER_ENTER              POINTER_DOWN
//!     Idle ────────────────► Hovered ────────────────► Pressed
//!       ▲  ◄──────────────      ▲  ◄───── POINTER_UP ────┘ │
//!       │    POINTER_LEAVE      │        (activates)       │
//!       └──────────────────────────────── POINTER_LEAVE ───┘
//! ```

use crate::events::InteractionEvent;

/// Interaction states of a pressable control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PressState {
    #[default]
    Idle,
    Hovered,
    Pressed,
    Disabled,
}

impl PressState {
    /// Next state for an event, or `None` if the event causes no transition
    pub fn on_event(&self, event: &InteractionEvent) -> Option<Self> {
        match (self, event) {
            (PressState::Idle, InteractionEvent::PointerEnter) => Some(PressState::Hovered),
            (PressState::Hovered, InteractionEvent::PointerLeave) => Some(PressState::Idle),

            (PressState::Hovered, InteractionEvent::PointerDown) => Some(PressState::Pressed),
            // Touch: no hover first
            (PressState::Idle, InteractionEvent::PointerDown) => Some(PressState::Pressed),

            (PressState::Pressed, InteractionEvent::PointerUp) => Some(PressState::Hovered),
            (PressState::Pressed, InteractionEvent::PointerLeave) => Some(PressState::Idle),

            (PressState::Disabled, _) => None,
            _ => None,
        }
    }

    pub fn is_hovered(&self) -> bool {
        matches!(self, PressState::Hovered)
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self, PressState::Pressed)
    }
}

/// A control that can be activated by pointer or keyboard
pub trait Pressable {
    /// Whether activation is currently blocked
    fn is_disabled(&self) -> bool;

    fn press_state(&self) -> PressState;

    fn set_press_state(&mut self, state: PressState);

    /// Run the control's action
    fn activate(&mut self);

    /// Feed an interaction into the control
    ///
    /// Returns `true` when the event activated the control.
    fn handle_press(&mut self, event: &InteractionEvent) -> bool {
        if self.is_disabled() {
            self.set_press_state(PressState::Disabled);
            return false;
        }

        let current = match self.press_state() {
            // Re-enabled since the last event
            PressState::Disabled => PressState::Idle,
            state => state,
        };

        let activates = match event {
            InteractionEvent::PointerUp => current.is_pressed(),
            InteractionEvent::KeyDown(key) => key.activates(),
            _ => false,
        };

        self.set_press_state(current.on_event(event).unwrap_or(current));

        if activates {
            self.activate();
        }
        activates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Key;

    #[derive(Default)]
    struct Probe {
        state: PressState,
        disabled: bool,
        activations: usize,
    }

    impl Pressable for Probe {
        fn is_disabled(&self) -> bool {
            self.disabled
        }

        fn press_state(&self) -> PressState {
            self.state
        }

        fn set_press_state(&mut self, state: PressState) {
            self.state = state;
        }

        fn activate(&mut self) {
            self.activations += 1;
        }
    }

    #[test]
    fn test_pointer_cycle_activates_once() {
        let mut probe = Probe::default();

        assert!(!probe.handle_press(&InteractionEvent::PointerEnter));
        assert_eq!(probe.state, PressState::Hovered);
        assert!(!probe.handle_press(&InteractionEvent::PointerDown));
        assert_eq!(probe.state, PressState::Pressed);
        assert!(probe.handle_press(&InteractionEvent::PointerUp));
        assert_eq!(probe.state, PressState::Hovered);
        assert_eq!(probe.activations, 1);
    }

    #[test]
    fn test_release_outside_does_not_activate() {
        let mut probe = Probe::default();
        probe.handle_press(&InteractionEvent::PointerDown);
        probe.handle_press(&InteractionEvent::PointerLeave);
        assert!(!probe.handle_press(&InteractionEvent::PointerUp));
        assert_eq!(probe.activations, 0);
    }

    #[test]
    fn test_keyboard_activation() {
        let mut probe = Probe::default();
        assert!(probe.handle_press(&InteractionEvent::KeyDown(Key::Enter)));
        assert!(probe.handle_press(&InteractionEvent::KeyDown(Key::Space)));
        assert!(!probe.handle_press(&InteractionEvent::KeyDown(Key::Char('x'))));
        assert_eq!(probe.activations, 2);
    }

    #[test]
    fn test_disabled_ignores_everything() {
        let mut probe = Probe {
            disabled: true,
            ..Default::default()
        };
        probe.handle_press(&InteractionEvent::PointerDown);
        assert!(!probe.handle_press(&InteractionEvent::PointerUp));
        assert!(!probe.handle_press(&InteractionEvent::KeyDown(Key::Enter)));
        assert_eq!(probe.state, PressState::Disabled);
        assert_eq!(probe.activations, 0);

        probe.disabled = false;
        probe.handle_press(&InteractionEvent::PointerEnter);
        assert_eq!(probe.state, PressState::Hovered);
    }
}
