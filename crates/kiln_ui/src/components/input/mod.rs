//! Input component - headless form field with design-system variants
//!
//! A field is built from a [`FieldKind`] and a set of options, then driven by
//! the host with interaction calls (`focus`, `input`, `key_down`, ...). Each
//! call updates the field synchronously and fires the matching callbacks;
//! [`Field::render`] describes what to draw as a [`FieldView`].
//!
//! # Example
//!
//! ```
//! use kiln_ui::prelude::*;
//!
//! let mut card = input(FieldKind::CreditCard)
//!     .id("card")
//!     .label("Card number")
//!     .build()
//!     .unwrap();
//!
//! card.focus(FocusOrigin::Keyboard);
//! card.input("4111111111111111");
//! assert_eq!(card.current_value(), "4111 1111 1111 1111");
//!
//! let view = card.render();
//! assert_eq!(view.state, FieldState::Focus);
//! assert_eq!(view.trailing_icon.unwrap().name, "card-visa");
//! ```
//!
//! Controlled fields never write their own value. They report changes and
//! wait for the caller to hand the value back with [`Field::sync_value`]:
//!
//! ```
//! use kiln_ui::prelude::*;
//!
//! let mut email = input(FieldKind::Email).value("a@b.c").build().unwrap();
//! email.input("x@y.z");
//! assert_eq!(email.current_value(), "a@b.c");
//! email.sync_value("x@y.z");
//! assert_eq!(email.current_value(), "x@y.z");
//! ```

pub mod card;
pub mod kind;
pub mod search;
pub mod state;
pub mod verification;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use kiln_core::{Callback, FocusArena, FocusHandle, FocusOrigin, InteractionEvent, Key, ValueSource};

use crate::classes::ClassList;
use crate::components::icon::{IconPosition, IconSlot};
use crate::components::label::{Label, LabelPosition, LabelView};
use crate::error::{KilnError, Result};

pub use card::{format_card, CardIssuer, CardNumber, CardOptions, FormattedCard, IssuerTracker};
pub use kind::{classify, Classification, ControlLayout, Family, FieldKind, NativeInputType};
pub use search::{PasswordOptions, PasswordVisibility, SearchOptions};
pub use state::{resolve_state, resolve_state_with, FieldState, FocusPolicy};
pub use verification::{CellUpdate, VerificationBuffer, VerificationCode, VerificationOptions};

const ICON_STROKE: &str = "currentColor";

/// Password toggle icons are drawn at a fixed size
const TOGGLE_ICON_PX: u32 = 20;

/// Field size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldSize {
    Md,
    #[default]
    Lg,
}

impl FieldSize {
    fn class_tag(&self) -> &'static str {
        match self {
            FieldSize::Md => "inputMd",
            FieldSize::Lg => "inputLg",
        }
    }

    /// Pixel size of the field's icons
    pub fn icon_px(&self) -> u32 {
        match self {
            FieldSize::Md => 16,
            FieldSize::Lg => 20,
        }
    }
}

/// Textarea resize handle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resize {
    None,
    Both,
    Horizontal,
    #[default]
    Vertical,
}

/// Everything the caller declares about a field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub kind: FieldKind,
    pub size: FieldSize,
    /// Declared state; `None` behaves as [`FieldState::Default`]
    pub state: Option<FieldState>,
    pub focus_policy: FocusPolicy,
    pub disabled: bool,
    pub required: bool,
    pub id: Option<String>,
    pub name: Option<String>,
    pub aria_label: Option<String>,
    pub placeholder: Option<String>,
    pub icon: Option<String>,
    pub icon_position: IconPosition,
    pub label: Option<String>,
    pub label_position: LabelPosition,
    pub helper_text: Option<String>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub max_length: Option<usize>,
    pub min_length: Option<usize>,
    pub pattern: Option<String>,
    pub rows: u32,
    pub cols: Option<u32>,
    pub resize: Resize,
    pub show_character_count: bool,
    pub verification: VerificationOptions,
    pub card: CardOptions,
    pub search: SearchOptions,
    pub password: PasswordOptions,
}

impl Default for FieldDescriptor {
    fn default() -> Self {
        Self {
            kind: FieldKind::default(),
            size: FieldSize::default(),
            state: None,
            focus_policy: FocusPolicy::default(),
            disabled: false,
            required: false,
            id: None,
            name: None,
            aria_label: None,
            placeholder: None,
            icon: None,
            icon_position: IconPosition::default(),
            label: None,
            label_position: LabelPosition::default(),
            helper_text: None,
            error_message: None,
            success_message: None,
            max_length: None,
            min_length: None,
            pattern: None,
            rows: 4,
            cols: None,
            resize: Resize::default(),
            show_character_count: false,
            verification: VerificationOptions::default(),
            card: CardOptions::default(),
            search: SearchOptions::default(),
            password: PasswordOptions::default(),
        }
    }
}

impl FieldDescriptor {
    /// Base id for derived element ids
    fn base_id(&self) -> &str {
        self.id
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_else(|| self.kind.as_str())
    }
}

/// Notification hooks of a field
#[derive(Clone, Default)]
pub struct FieldCallbacks {
    /// Every value change, with the value as displayed
    pub on_change: Option<Callback<str>>,
    /// Verification code became full
    pub on_complete: Option<Callback<str>>,
    /// Enter pressed in a search field
    pub on_search: Option<Callback<str>>,
    /// Card issuer hint changed
    pub on_issuer_change: Option<Callback<CardIssuer>>,
    /// Password visibility requested
    pub on_password_toggle: Option<Callback<bool>>,
    pub on_focus: Option<Callback<FocusOrigin>>,
    /// Focus left the field, with its current value
    pub on_blur: Option<Callback<str>>,
}

impl std::fmt::Debug for FieldCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldCallbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .field("on_search", &self.on_search.is_some())
            .field("on_issuer_change", &self.on_issuer_change.is_some())
            .field("on_password_toggle", &self.on_password_toggle.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .finish()
    }
}

fn emit<T: ?Sized>(callback: &Option<Callback<T>>, value: &T) {
    if let Some(callback) = callback {
        callback(value);
    }
}

/// Create a field builder for the given kind
pub fn input(kind: FieldKind) -> InputBuilder {
    InputBuilder::new(kind)
}

/// Builder for a [`Field`]
#[derive(Clone, Debug, Default)]
pub struct InputBuilder {
    descriptor: FieldDescriptor,
    /// Controlled value
    value: Option<String>,
    default_value: String,
    callbacks: FieldCallbacks,
}

impl InputBuilder {
    pub fn new(kind: FieldKind) -> Self {
        Self::from_descriptor(FieldDescriptor {
            kind,
            ..Default::default()
        })
    }

    /// Start from a complete descriptor
    pub fn from_descriptor(descriptor: FieldDescriptor) -> Self {
        Self {
            descriptor,
            ..Default::default()
        }
    }

    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    pub fn size(mut self, size: FieldSize) -> Self {
        self.descriptor.size = size;
        self
    }

    pub fn state(mut self, state: FieldState) -> Self {
        self.descriptor.state = Some(state);
        self
    }

    pub fn focus_policy(mut self, policy: FocusPolicy) -> Self {
        self.descriptor.focus_policy = policy;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.descriptor.disabled = disabled;
        self
    }

    pub fn required(mut self) -> Self {
        self.descriptor.required = true;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.descriptor.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.descriptor.name = Some(name.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.descriptor.aria_label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.descriptor.placeholder = Some(placeholder.into());
        self
    }

    /// Set an icon by registry name
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.descriptor.icon = Some(icon.into());
        self
    }

    pub fn icon_position(mut self, position: IconPosition) -> Self {
        self.descriptor.icon_position = position;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.descriptor.label = Some(label.into());
        self
    }

    pub fn label_position(mut self, position: LabelPosition) -> Self {
        self.descriptor.label_position = position;
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.descriptor.helper_text = Some(text.into());
        self
    }

    pub fn error_message(mut self, text: impl Into<String>) -> Self {
        self.descriptor.error_message = Some(text.into());
        self
    }

    pub fn success_message(mut self, text: impl Into<String>) -> Self {
        self.descriptor.success_message = Some(text.into());
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.descriptor.max_length = Some(max);
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.descriptor.min_length = Some(min);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.descriptor.pattern = Some(pattern.into());
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.descriptor.rows = rows;
        self
    }

    pub fn cols(mut self, cols: u32) -> Self {
        self.descriptor.cols = Some(cols);
        self
    }

    pub fn resize(mut self, resize: Resize) -> Self {
        self.descriptor.resize = resize;
        self
    }

    pub fn show_character_count(mut self) -> Self {
        self.descriptor.show_character_count = true;
        self
    }

    pub fn verification(mut self, options: VerificationOptions) -> Self {
        self.descriptor.verification = options;
        self
    }

    /// Number of verification cells
    pub fn length(mut self, length: usize) -> Self {
        self.descriptor.verification.length = length;
        self
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.descriptor.verification.auto_focus = auto_focus;
        self
    }

    /// Mask verification cells
    pub fn secure(mut self) -> Self {
        self.descriptor.verification.secure = true;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.descriptor.verification.separator = Some(separator.into());
        self
    }

    pub fn card(mut self, options: CardOptions) -> Self {
        self.descriptor.card = options;
        self
    }

    pub fn format_spaces(mut self, format_spaces: bool) -> Self {
        self.descriptor.card.format_spaces = format_spaces;
        self
    }

    pub fn show_card_icon(mut self, show: bool) -> Self {
        self.descriptor.card.show_card_icon = show;
        self
    }

    pub fn accepted_cards(mut self, accepted: impl IntoIterator<Item = CardIssuer>) -> Self {
        self.descriptor.card.accepted = accepted.into_iter().collect();
        self
    }

    pub fn search(mut self, options: SearchOptions) -> Self {
        self.descriptor.search = options;
        self
    }

    pub fn show_clear_button(mut self, show: bool) -> Self {
        self.descriptor.search.show_clear_button = show;
        self
    }

    pub fn search_icon(mut self, icon: impl Into<String>) -> Self {
        self.descriptor.search.search_icon = icon.into();
        self
    }

    pub fn password(mut self, options: PasswordOptions) -> Self {
        self.descriptor.password = options;
        self
    }

    pub fn show_toggle(mut self, show: bool) -> Self {
        self.descriptor.password.show_toggle = show;
        self
    }

    /// Control password visibility from the caller
    pub fn show_password(mut self, visible: bool) -> Self {
        self.descriptor.password.show_password = Some(visible);
        self
    }

    /// Make the field controlled with the given value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Seed an uncontrolled field
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.callbacks.on_change = Some(Arc::new(handler));
        self
    }

    pub fn on_complete<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.callbacks.on_complete = Some(Arc::new(handler));
        self
    }

    pub fn on_search<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.callbacks.on_search = Some(Arc::new(handler));
        self
    }

    pub fn on_issuer_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&CardIssuer) + Send + Sync + 'static,
    {
        self.callbacks.on_issuer_change = Some(Arc::new(handler));
        self
    }

    pub fn on_password_toggle<F>(mut self, handler: F) -> Self
    where
        F: Fn(&bool) + Send + Sync + 'static,
    {
        self.callbacks.on_password_toggle = Some(Arc::new(handler));
        self
    }

    pub fn on_focus<F>(mut self, handler: F) -> Self
    where
        F: Fn(&FocusOrigin) + Send + Sync + 'static,
    {
        self.callbacks.on_focus = Some(Arc::new(handler));
        self
    }

    pub fn on_blur<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.callbacks.on_blur = Some(Arc::new(handler));
        self
    }

    /// Build the field
    ///
    /// Fails only for a verification field with zero cells.
    pub fn build(self) -> Result<Field> {
        Field::new(self.descriptor, self.value, self.default_value, self.callbacks)
    }
}

/// Family-specific state of a field
#[derive(Debug)]
enum FieldBody {
    Plain,
    Search,
    Password(PasswordVisibility),
    CreditCard {
        number: CardNumber,
        tracker: IssuerTracker,
    },
    Verification(VerificationCode),
}

/// A live form field
#[derive(Debug)]
pub struct Field {
    descriptor: FieldDescriptor,
    classification: Classification,
    value: ValueSource<String>,
    callbacks: FieldCallbacks,
    focus: FocusArena,
    control: FocusHandle,
    body: FieldBody,
}

impl Field {
    fn new(
        descriptor: FieldDescriptor,
        controlled: Option<String>,
        default_value: String,
        callbacks: FieldCallbacks,
    ) -> Result<Self> {
        let kind = descriptor.kind;
        let classification = classify(kind);
        if kind.is_fallback() {
            tracing::warn!("Input variant {kind} is not fully implemented yet. Using text input as fallback.");
        }

        let is_controlled = controlled.is_some();
        let initial = controlled.unwrap_or(default_value);

        let (body, initial) = match classification.family {
            Family::Plain => (FieldBody::Plain, initial),
            Family::Search => (FieldBody::Search, initial),
            Family::Password => (
                FieldBody::Password(PasswordVisibility::new(&descriptor.password)),
                initial,
            ),
            Family::CreditCard => {
                let number = CardNumber::parse(&initial);
                let mut tracker = IssuerTracker::default();
                if !number.is_empty() {
                    tracker.reset_to(number.issuer());
                }
                let display = number.display(descriptor.card.format_spaces);
                (FieldBody::CreditCard { number, tracker }, display)
            }
            Family::Verification => {
                let options = descriptor.verification.clone();
                let mut code = if is_controlled {
                    VerificationCode::controlled(options, &initial)?
                } else {
                    VerificationCode::new(options, &initial)?
                };
                code.set_disabled(
                    descriptor.disabled || descriptor.state == Some(FieldState::Disabled),
                );
                let joined = code.value();
                (FieldBody::Verification(code), joined)
            }
        };

        let value = if is_controlled {
            ValueSource::controlled(initial)
        } else {
            ValueSource::uncontrolled(initial)
        };

        let mut focus = FocusArena::new();
        let control = focus.insert(descriptor.base_id().to_string());
        focus.set_disabled(control, descriptor.disabled);

        Ok(Self {
            descriptor,
            classification,
            value,
            callbacks,
            focus,
            control,
            body,
        })
    }

    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    pub fn kind(&self) -> FieldKind {
        self.descriptor.kind
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn is_controlled(&self) -> bool {
        self.value.is_controlled()
    }

    pub fn is_disabled(&self) -> bool {
        self.descriptor.disabled || self.descriptor.state == Some(FieldState::Disabled)
    }

    /// The value as displayed
    pub fn current_value(&self) -> String {
        self.value.get().clone()
    }

    /// Card digits without grouping
    pub fn raw(&self) -> Option<&str> {
        match &self.body {
            FieldBody::CreditCard { number, .. } => Some(number.raw()),
            _ => None,
        }
    }

    /// Card issuer hint
    pub fn issuer(&self) -> Option<CardIssuer> {
        match &self.body {
            FieldBody::CreditCard { number, .. } => Some(number.issuer()),
            _ => None,
        }
    }

    pub fn password_visible(&self) -> Option<bool> {
        match &self.body {
            FieldBody::Password(visibility) => Some(visibility.is_visible()),
            _ => None,
        }
    }

    /// Index of the focused verification cell
    pub fn focused_cell(&self) -> Option<usize> {
        match &self.body {
            FieldBody::Verification(code) => code.focused_index(),
            _ => None,
        }
    }

    pub fn is_focused(&self) -> bool {
        match &self.body {
            FieldBody::Verification(code) => code.has_focus(),
            _ => self.focus.has_focus(),
        }
    }

    /// Effective state for this render
    pub fn effective_state(&self) -> FieldState {
        resolve_state_with(
            self.descriptor.state,
            self.descriptor.disabled,
            self.is_focused(),
            self.descriptor.focus_policy,
        )
    }

    /// Mount-time effects: auto-focus of the first verification cell
    pub fn mount(&mut self) {
        if self.is_disabled() {
            return;
        }
        if let FieldBody::Verification(code) = &mut self.body {
            code.mount();
            if let Some(origin) = code.focus_origin() {
                emit(&self.callbacks.on_focus, &origin);
            }
        }
    }

    /// Focus the field; verification fields focus their first cell
    pub fn focus(&mut self, origin: FocusOrigin) -> bool {
        if self.is_disabled() {
            return false;
        }
        let focused = match &mut self.body {
            FieldBody::Verification(code) => code.focus_cell(0, origin),
            _ => self.focus.focus(self.control, origin),
        };
        if focused {
            emit(&self.callbacks.on_focus, &origin);
        }
        focused
    }

    /// Focus a specific verification cell
    pub fn focus_cell(&mut self, index: usize, origin: FocusOrigin) -> Result<bool> {
        let kind = self.kind();
        let disabled = self.is_disabled();
        let FieldBody::Verification(code) = &mut self.body else {
            return Err(KilnError::Unsupported {
                operation: "focus_cell",
                kind,
            });
        };
        let length = code.len();
        if index >= length {
            return Err(KilnError::CellOutOfRange { index, length });
        }
        if disabled {
            return Ok(false);
        }
        let was_focused = code.has_focus();
        let focused = code.focus_cell(index, origin);
        if focused && !was_focused {
            emit(&self.callbacks.on_focus, &origin);
        }
        Ok(focused)
    }

    pub fn blur(&mut self) {
        let had_focus = self.is_focused();
        self.focus.blur();
        if let FieldBody::Verification(code) = &mut self.body {
            code.blur();
        }
        if had_focus {
            emit(&self.callbacks.on_blur, self.value.get().as_str());
        }
    }

    /// The user changed the control's text
    ///
    /// Verification fields route the text to the focused cell.
    pub fn input(&mut self, text: &str) {
        if self.is_disabled() {
            tracing::trace!(kind = %self.kind(), "input ignored on disabled field");
            return;
        }

        let format_spaces = self.descriptor.card.format_spaces;
        let controlled = self.value.is_controlled();
        let next = match &mut self.body {
            FieldBody::Verification(code) => {
                let index = code.focused_index().unwrap_or(0);
                if let Err(err) = self.set_cell(index, text) {
                    tracing::warn!("verification input dropped: {err}");
                }
                return;
            }
            FieldBody::CreditCard { number, tracker } => {
                let parsed = CardNumber::parse(text);
                if let Some(issuer) = tracker.observe(parsed.issuer()) {
                    tracing::debug!(issuer = issuer.as_str(), "card issuer changed");
                    emit(&self.callbacks.on_issuer_change, &issuer);
                }
                let display = parsed.display(format_spaces);
                if !controlled {
                    *number = parsed;
                }
                display
            }
            FieldBody::Plain | FieldBody::Search | FieldBody::Password(_) => {
                match self.descriptor.max_length {
                    Some(max) => text.chars().take(max).collect(),
                    None => text.to_string(),
                }
            }
        };

        self.commit(next);
    }

    fn commit(&mut self, next: String) {
        emit(&self.callbacks.on_change, next.as_str());
        self.value.request(next);
    }

    /// Write into a verification cell
    pub fn set_cell(&mut self, index: usize, text: &str) -> Result<()> {
        let kind = self.kind();
        let disabled = self.is_disabled();
        let FieldBody::Verification(code) = &mut self.body else {
            return Err(KilnError::Unsupported {
                operation: "set_cell",
                kind,
            });
        };
        if disabled {
            let length = code.len();
            if index >= length {
                return Err(KilnError::CellOutOfRange { index, length });
            }
            return Ok(());
        }

        let update = code.set_cell(index, text)?;
        emit(&self.callbacks.on_change, update.value.as_str());
        if let Some(full) = &update.completed {
            emit(&self.callbacks.on_complete, full.as_str());
        }
        self.value.request(update.value);
        Ok(())
    }

    /// Backspace in a verification cell; returns the cell that received focus
    ///
    /// Only moves focus within a field that already has it.
    pub fn backspace(&mut self, index: usize) -> Result<Option<usize>> {
        let kind = self.kind();
        let disabled = self.is_disabled();
        let FieldBody::Verification(code) = &mut self.body else {
            return Err(KilnError::Unsupported {
                operation: "backspace",
                kind,
            });
        };
        let length = code.len();
        if index >= length {
            return Err(KilnError::CellOutOfRange { index, length });
        }
        if disabled || !code.has_focus() {
            return Ok(None);
        }
        code.backspace(index)
    }

    /// A key went down while the field had focus; returns whether it was handled
    pub fn key_down(&mut self, key: Key) -> bool {
        if self.is_disabled() {
            return false;
        }
        match (&mut self.body, key) {
            (FieldBody::Search, Key::Enter) => {
                emit(&self.callbacks.on_search, self.value.get().as_str());
                true
            }
            (FieldBody::Verification(code), Key::Backspace) => {
                let Some(index) = code.focused_index() else {
                    return false;
                };
                matches!(code.backspace(index), Ok(Some(_)))
            }
            _ => false,
        }
    }

    /// Flip password visibility; returns the requested visibility
    pub fn toggle_password(&mut self) -> Result<bool> {
        let kind = self.kind();
        let disabled = self.is_disabled();
        let FieldBody::Password(visibility) = &mut self.body else {
            return Err(KilnError::Unsupported {
                operation: "toggle_password",
                kind,
            });
        };
        if disabled {
            return Ok(visibility.is_visible());
        }
        let next = visibility.toggle();
        emit(&self.callbacks.on_password_toggle, &next);
        Ok(next)
    }

    /// Refresh caller-controlled password visibility
    pub fn sync_password_visible(&mut self, visible: bool) {
        if let FieldBody::Password(visibility) = &mut self.body {
            visibility.sync(visible);
        }
    }

    /// Reset the value through the normal change path
    pub fn clear(&mut self) {
        if self.is_disabled() {
            return;
        }
        if let FieldBody::Verification(code) = &mut self.body {
            if let Err(err) = code.reset() {
                tracing::warn!("clear failed: {err}");
                return;
            }
            self.commit(String::new());
            return;
        }
        self.input("");
    }

    /// Refresh a controlled value; ignored for uncontrolled fields
    pub fn sync_value(&mut self, value: impl Into<String>) {
        if !self.value.is_controlled() {
            tracing::debug!(kind = %self.kind(), "sync_value ignored on uncontrolled field");
            return;
        }
        let value = value.into();
        let format_spaces = self.descriptor.card.format_spaces;
        let value = match &mut self.body {
            FieldBody::CreditCard { number, tracker } => {
                *number = CardNumber::parse(&value);
                if !number.is_empty() {
                    tracker.reset_to(number.issuer());
                }
                number.display(format_spaces)
            }
            FieldBody::Verification(code) => {
                if let Err(err) = code.sync(&value) {
                    tracing::warn!("verification sync failed: {err}");
                }
                code.value()
            }
            _ => value,
        };
        self.value.sync(value);
    }

    /// Apply a host interaction event; returns whether the field reacted
    pub fn dispatch(&mut self, event: &InteractionEvent) -> bool {
        match event {
            InteractionEvent::Focus(origin) => self.focus(*origin),
            InteractionEvent::Blur => {
                self.blur();
                true
            }
            InteractionEvent::KeyDown(key) => self.key_down(*key),
            InteractionEvent::Input(text) => {
                if self.is_disabled() {
                    return false;
                }
                self.input(text);
                true
            }
            InteractionEvent::PointerEnter
            | InteractionEvent::PointerLeave
            | InteractionEvent::PointerDown
            | InteractionEvent::PointerUp => false,
        }
    }

    /// Kind used for the control's variant class
    fn display_kind(&self) -> FieldKind {
        match &self.body {
            FieldBody::Password(visibility) if visibility.is_visible() => FieldKind::Text,
            _ => self.kind(),
        }
    }

    fn native_type(&self) -> NativeInputType {
        match &self.body {
            FieldBody::Password(visibility) if visibility.is_visible() => NativeInputType::Text,
            FieldBody::Verification(code) if code.options().secure => NativeInputType::Password,
            _ => self.classification.native_type,
        }
    }

    fn control_classes(&self, kind: FieldKind, state: FieldState) -> ClassList {
        let mut classes = ClassList::new()
            .with("input")
            .with(kind.class_tag())
            .with(self.descriptor.size.class_tag())
            .with(state.as_str());
        if let Some(tag) = self.kind().layout().class_tag() {
            classes.push(tag);
        }
        classes
    }

    fn icon_slots(&self) -> (Option<IconSlot>, Option<IconSlot>) {
        let px = self.descriptor.size.icon_px();
        let declared = || {
            self.descriptor.icon.as_deref().and_then(|name| {
                IconSlot::resolve(name, px, self.descriptor.icon_position, ICON_STROKE)
            })
        };
        let split = |slot: Option<IconSlot>| match slot {
            Some(slot) if slot.position == IconPosition::Right => (None, Some(slot)),
            slot => (slot, None),
        };

        match &self.body {
            FieldBody::Plain => split(declared()),
            FieldBody::Search => (
                IconSlot::resolve(
                    &self.descriptor.search.search_icon,
                    px,
                    IconPosition::Left,
                    ICON_STROKE,
                ),
                None,
            ),
            FieldBody::Password(_) if self.descriptor.password.show_toggle => (None, None),
            FieldBody::Password(_) => split(declared()),
            FieldBody::CreditCard { number, .. } => {
                let name = self.descriptor.card.icon_for(number.issuer());
                (None, IconSlot::resolve(name, px, IconPosition::Right, ICON_STROKE))
            }
            FieldBody::Verification(_) => (None, None),
        }
    }

    fn action(&self) -> Option<ActionView> {
        match &self.body {
            FieldBody::Password(visibility) if self.descriptor.password.show_toggle => {
                Some(ActionView {
                    action: FieldAction::TogglePassword,
                    aria_label: visibility.toggle_label(),
                    class: "passwordToggle",
                    icon: IconSlot::resolve(
                        visibility.toggle_icon(),
                        TOGGLE_ICON_PX,
                        IconPosition::Right,
                        ICON_STROKE,
                    ),
                })
            }
            FieldBody::Search
                if self.descriptor.search.show_clear_button
                    && !self.is_disabled()
                    && !self.value.get().is_empty() =>
            {
                Some(ActionView {
                    action: FieldAction::Clear,
                    aria_label: "Clear search",
                    class: "clearButton",
                    icon: IconSlot::resolve(
                        "x",
                        self.descriptor.size.icon_px(),
                        IconPosition::Right,
                        ICON_STROKE,
                    ),
                })
            }
            _ => None,
        }
    }

    fn message(&self) -> Option<MessageView> {
        let d = &self.descriptor;
        let (kind, text, class) = match d.state {
            Some(FieldState::Error) => (MessageKind::Error, d.error_message.as_ref()?, "errorMessage"),
            Some(FieldState::Success) => {
                (MessageKind::Success, d.success_message.as_ref()?, "successMessage")
            }
            _ => (MessageKind::Helper, d.helper_text.as_ref()?, "helperText"),
        };
        Some(MessageView {
            id: format!("{}-message", d.base_id()),
            kind,
            text: text.clone(),
            class,
        })
    }

    fn cells(&self, size_tag: &'static str) -> Vec<CellView> {
        let FieldBody::Verification(code) = &self.body else {
            return Vec::new();
        };
        let focused = code.focused_index();
        (0..code.len())
            .map(|index| {
                let cell_focused = focused == Some(index);
                let state = resolve_state_with(
                    self.descriptor.state,
                    self.descriptor.disabled,
                    cell_focused,
                    self.descriptor.focus_policy,
                );
                let classes = ClassList::new()
                    .with("input")
                    .with(FieldKind::Verification.class_tag())
                    .with(size_tag)
                    .with(state.as_str())
                    .with("verification");
                CellView {
                    index,
                    display: code.display(index),
                    focused: cell_focused,
                    state,
                    aria_label: format!("Verification code digit {}", index + 1),
                    classes,
                }
            })
            .collect()
    }

    /// Describe the field for this render
    pub fn render(&self) -> FieldView {
        let d = &self.descriptor;
        let state = self.effective_state();
        let (leading_icon, trailing_icon) = self.icon_slots();
        let action = self.action();
        let message = self.message();
        let value = self.current_value();

        let mut container_classes = ClassList::new()
            .with("container")
            .with(d.kind.container_tag())
            .with(state.container_tag());
        container_classes.push_if(
            leading_icon.is_some() || trailing_icon.is_some() || action.is_some(),
            "containerWithIcon",
        );
        container_classes.push_if(d.label.is_some(), "containerWithLabel");

        let label = d.label.as_ref().map(|text| {
            let mut label = Label::new(text.clone())
                .position(d.label_position)
                .disabled(state == FieldState::Disabled);
            if d.required {
                label = label.required();
            }
            if let Some(id) = &d.id {
                label = label.html_for(id.clone());
            }
            label.render()
        });

        let layout = d.kind.layout();
        let is_textarea = layout == ControlLayout::Textarea;
        let max_length = match &self.body {
            FieldBody::CreditCard { .. } => Some(d.card.max_length()),
            FieldBody::Verification(_) => Some(1),
            _ => d.max_length,
        };

        let attributes = FieldAttributes {
            id: d.id.clone(),
            name: d.name.clone(),
            disabled: state == FieldState::Disabled,
            required: d.required,
            aria_invalid: state == FieldState::Error,
            aria_busy: false,
            aria_label: d.aria_label.clone().or_else(|| d.label.clone()),
            aria_describedby: message.as_ref().map(|m| m.id.clone()),
            placeholder: d.placeholder.clone(),
            max_length,
            min_length: d.min_length,
            pattern: d.pattern.clone(),
            rows: is_textarea.then_some(d.rows),
            cols: d.cols.filter(|_| is_textarea),
            resize: is_textarea.then_some(d.resize),
        };

        let character_count = match d.max_length {
            Some(max) if is_textarea && d.show_character_count => {
                Some(format!("{}/{}", value.chars().count(), max))
            }
            _ => None,
        };

        let separator = match &self.body {
            FieldBody::Verification(code) => code.options().separator.clone().filter(|s| !s.is_empty()),
            _ => None,
        };

        FieldView {
            kind: d.kind,
            family: self.classification.family,
            state,
            layout,
            native_type: self.native_type(),
            container_classes,
            control_classes: self.control_classes(self.display_kind(), state),
            value,
            attributes,
            label,
            leading_icon,
            trailing_icon,
            action,
            message,
            cells: self.cells(d.size.class_tag()),
            separator,
            character_count,
        }
    }
}

/// Built-in action button of a field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldAction {
    /// [`Field::toggle_password`]
    TogglePassword,
    /// [`Field::clear`]
    Clear,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActionView {
    pub action: FieldAction,
    pub aria_label: &'static str,
    pub class: &'static str,
    pub icon: Option<IconSlot>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Error,
    Success,
    Helper,
}

/// Message shown under the control
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MessageView {
    /// Element id, referenced by `aria-describedby`
    pub id: String,
    pub kind: MessageKind,
    pub text: String,
    pub class: &'static str,
}

/// Attributes of the native control
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FieldAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub disabled: bool,
    pub required: bool,
    pub aria_invalid: bool,
    /// No field state is busy, so this stays false
    pub aria_busy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_describedby: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cols: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize: Option<Resize>,
}

/// One verification cell
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub index: usize,
    /// Cell text, masked for secure codes
    pub display: String,
    pub focused: bool,
    pub state: FieldState,
    pub aria_label: String,
    pub classes: ClassList,
}

/// Render description of a field
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub kind: FieldKind,
    pub family: Family,
    pub state: FieldState,
    pub layout: ControlLayout,
    pub native_type: NativeInputType,
    pub container_classes: ClassList,
    pub control_classes: ClassList,
    pub value: String,
    pub attributes: FieldAttributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading_icon: Option<IconSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_icon: Option<IconSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cells: Vec<CellView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_count: Option<String>,
}
