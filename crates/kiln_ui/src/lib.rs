//! # Kiln Component Library (kiln_ui)
//!
//! Headless design-system components: buttons, labels and form fields.
//!
//! Components never draw anything. They take interactions from a host UI
//! framework and describe what to render: symbolic class tags for an external
//! stylesheet, native attributes, icon slots and messages.
//!
//! - **Primitives**: `kiln_core` provides focus handles, press states and
//!   value ownership
//! - **Icons**: `kiln_icons` provides the SVG icon set
//! - **Components**: `kiln_ui` composes them into design-system components
//!
//! ## Example
//!
//! ```
//! use kiln_ui::prelude::*;
//!
//! let mut code = ui::input(FieldKind::Verification).length(4).build().unwrap();
//! code.mount();
//! for digit in ["1", "2", "3", "4"] {
//!     code.input(digit);
//! }
//! assert_eq!(code.current_value(), "1234");
//!
//! let submit = ui::button("Verify").variant(ButtonVariant::Primary).build();
//! assert_eq!(submit.render().label.as_deref(), Some("Verify"));
//! ```

pub mod classes;
pub mod components;
pub mod config;
pub mod error;

pub use classes::ClassList;
pub use components::*;
pub use config::KilnConfig;
pub use error::{KilnError, Result};

/// Convenience module for accessing components with `ui::` prefix
pub mod ui {
    pub use crate::components::button::button;
    pub use crate::components::input::input;
    pub use crate::components::label::label;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classes::ClassList;
    pub use crate::components::button::{button, Button, ButtonSize, ButtonType, ButtonVariant};
    pub use crate::components::icon::{IconPosition, IconSlot};
    pub use crate::components::input::{
        classify, input, resolve_state, CardIssuer, Family, Field, FieldKind, FieldSize, FieldState,
        FocusPolicy, InputBuilder, NativeInputType, Resize,
    };
    pub use crate::components::label::{label, LabelPosition};
    pub use crate::config::KilnConfig;
    pub use crate::error::KilnError;
    pub use crate::ui;
    // Re-export the interaction primitives hosts feed into components
    pub use kiln_core::{FocusOrigin, InteractionEvent, Key};
}
