//! Kiln Core
//!
//! Framework-agnostic primitives shared by the Kiln components:
//!
//! - **Focus Arena**: focusable controls addressed by opaque handles
//! - **Press States**: hover/press state machine for pressable controls
//! - **Interaction Events**: the events a host framework feeds into components
//! - **Value Ownership**: controlled vs. uncontrolled component values
//!
//! # Example
//!
//! ```rust
//! use kiln_core::focus::{FocusArena, FocusOrigin};
//!
//! let mut arena = FocusArena::new();
//! let first = arena.insert("digit 1");
//! let second = arena.insert("digit 2");
//!
//! arena.focus(first, FocusOrigin::Keyboard);
//! assert!(arena.is_focused(first));
//!
//! arena.focus(second, FocusOrigin::Programmatic);
//! assert_eq!(arena.focused(), Some(second));
//! ```

pub mod control;
pub mod events;
pub mod focus;
pub mod value;

pub use control::{PressState, Pressable};
pub use events::{InteractionEvent, Key};
pub use focus::{FocusArena, FocusHandle, FocusOrigin};
pub use value::{Callback, ValueSource};
