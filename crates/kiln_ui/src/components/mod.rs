//! Kiln components
//!
//! Each component is a builder that produces a live, headless instance. The
//! instance takes interaction calls and renders a serializable view.

pub mod button;
pub mod icon;
pub mod input;
pub mod label;

pub use button::{button, Button, ButtonBuilder, ButtonLayout, ButtonSize, ButtonType, ButtonVariant, ButtonView};
pub use icon::{IconPosition, IconSlot};
pub use input::{input, Field, FieldDescriptor, FieldKind, FieldSize, FieldState, FieldView, InputBuilder};
pub use label::{label, Label, LabelPosition, LabelView};
