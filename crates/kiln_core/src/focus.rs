//! Focus arena
//!
//! Focusable controls are registered in a [`FocusArena`] and addressed by
//! opaque [`FocusHandle`] keys rather than references to the controls. A
//! multi-cell widget allocates one handle per cell and moves focus between
//! handles; the arena is the single owner of "who has focus".
//!
//! The arena does not decide whether a focus ring is visible. The host reports
//! a [`FocusOrigin`] with every focus change and the arena only records it.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Opaque identifier for a focusable control
    pub struct FocusHandle;
}

/// How focus arrived at a control, as reported by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusOrigin {
    /// Tab navigation or another keyboard action
    Keyboard,
    /// Mouse or touch
    Pointer,
    /// Moved by a component (auto-focus, focus advance)
    #[default]
    Programmatic,
}

impl FocusOrigin {
    /// Whether the host reported keyboard-driven focus
    pub fn is_keyboard(&self) -> bool {
        matches!(self, FocusOrigin::Keyboard)
    }
}

#[derive(Debug)]
struct FocusNode {
    label: String,
    disabled: bool,
}

/// Registry of focusable controls and the current focus owner
#[derive(Debug)]
pub struct FocusArena {
    nodes: SlotMap<FocusHandle, FocusNode>,
    /// Registration order (tab order)
    order: SmallVec<[FocusHandle; 8]>,
    focused: Option<(FocusHandle, FocusOrigin)>,
}

impl Default for FocusArena {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            order: SmallVec::new(),
            focused: None,
        }
    }

    /// Register a focusable control
    pub fn insert(&mut self, label: impl Into<String>) -> FocusHandle {
        let handle = self.nodes.insert(FocusNode {
            label: label.into(),
            disabled: false,
        });
        self.order.push(handle);
        handle
    }

    /// Unregister a control, blurring it if it had focus
    pub fn remove(&mut self, handle: FocusHandle) -> bool {
        if self.nodes.remove(handle).is_none() {
            return false;
        }
        self.order.retain(|h| *h != handle);
        if self.focused() == Some(handle) {
            self.focused = None;
        }
        true
    }

    /// Enable or disable a control. Disabling the focused control blurs it.
    pub fn set_disabled(&mut self, handle: FocusHandle, disabled: bool) {
        if let Some(node) = self.nodes.get_mut(handle) {
            node.disabled = disabled;
        }
        if disabled && self.focused() == Some(handle) {
            self.focused = None;
        }
    }

    /// Whether the control is disabled (stale handles count as disabled)
    pub fn is_disabled(&self, handle: FocusHandle) -> bool {
        self.nodes.get(handle).map_or(true, |node| node.disabled)
    }

    /// Move focus to a control
    ///
    /// Returns `false` and leaves focus unchanged when the handle is stale or
    /// the control is disabled.
    pub fn focus(&mut self, handle: FocusHandle, origin: FocusOrigin) -> bool {
        match self.nodes.get(handle) {
            Some(node) if !node.disabled => {
                tracing::trace!(label = %node.label, ?origin, "focus");
                self.focused = Some((handle, origin));
                true
            }
            _ => false,
        }
    }

    /// Clear focus
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// The focused control, if any
    pub fn focused(&self) -> Option<FocusHandle> {
        self.focused.map(|(handle, _)| handle)
    }

    /// How the focused control received focus
    pub fn focus_origin(&self) -> Option<FocusOrigin> {
        self.focused.map(|(_, origin)| origin)
    }

    /// Whether the given control has focus
    pub fn is_focused(&self, handle: FocusHandle) -> bool {
        self.focused() == Some(handle)
    }

    /// Whether any control in the arena has focus
    pub fn has_focus(&self) -> bool {
        self.focused.is_some()
    }

    /// Accessible label of a control
    pub fn label(&self, handle: FocusHandle) -> Option<&str> {
        self.nodes.get(handle).map(|node| node.label.as_str())
    }

    /// Handles in registration order
    pub fn handles(&self) -> &[FocusHandle] {
        &self.order
    }

    /// Position of a handle in registration order
    pub fn position(&self, handle: FocusHandle) -> Option<usize> {
        self.order.iter().position(|h| *h == handle)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_and_blur() {
        let mut arena = FocusArena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");

        assert!(!arena.has_focus());
        assert!(arena.focus(a, FocusOrigin::Pointer));
        assert!(arena.is_focused(a));
        assert_eq!(arena.focus_origin(), Some(FocusOrigin::Pointer));

        assert!(arena.focus(b, FocusOrigin::Keyboard));
        assert!(!arena.is_focused(a));
        assert!(arena.focus_origin().unwrap().is_keyboard());

        arena.blur();
        assert_eq!(arena.focused(), None);
    }

    #[test]
    fn test_disabled_controls_refuse_focus() {
        let mut arena = FocusArena::new();
        let a = arena.insert("a");
        arena.focus(a, FocusOrigin::Keyboard);

        arena.set_disabled(a, true);
        assert!(!arena.has_focus());
        assert!(!arena.focus(a, FocusOrigin::Keyboard));

        arena.set_disabled(a, false);
        assert!(arena.focus(a, FocusOrigin::Keyboard));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut arena = FocusArena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");
        let c = arena.insert("c");
        arena.focus(b, FocusOrigin::Programmatic);

        assert!(arena.remove(b));
        assert!(!arena.remove(b));
        assert_eq!(arena.handles(), &[a, c]);
        assert_eq!(arena.position(c), Some(1));
        assert!(!arena.has_focus());

        // Stale handles cannot be focused
        assert!(!arena.focus(b, FocusOrigin::Programmatic));
        assert!(arena.is_disabled(b));
    }

    #[test]
    fn test_labels() {
        let mut arena = FocusArena::new();
        let a = arena.insert("Verification code digit 1");
        assert_eq!(arena.label(a), Some("Verification code digit 1"));
        assert_eq!(arena.len(), 1);
        assert!(!arena.is_empty());
    }
}
