//! Button component with design-system variants
//!
//! Eleven visual variants split into text buttons and icon-only buttons. The
//! button tracks hover/press through [`PressState`] and ignores activation
//! while disabled or loading.
//!
//! # Example
//!
//! ```
//! use kiln_ui::prelude::*;
//!
//! let save = button("Save")
//!     .variant(ButtonVariant::Primary)
//!     .icon("check")
//!     .build();
//!
//! let view = save.render();
//! assert!(view.classes.contains("textButtonLg"));
//! assert_eq!(view.leading_icon.unwrap().size, 20);
//!
//! let close = button("")
//!     .variant(ButtonVariant::IconOutline)
//!     .icon("x")
//!     .aria_label("Close")
//!     .size(ButtonSize::Md)
//!     .build();
//! assert!(close.render().classes.contains("iconButtonOutlineMd"));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use kiln_core::{InteractionEvent, PressState, Pressable};

use crate::classes::ClassList;
use crate::components::icon::{IconPosition, IconSlot};
use crate::error::KilnError;

/// Stroke for every variant while disabled
pub const DISABLED_STROKE: &str = "#A4A7AE";

/// Button visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Transparent,
    Neutral,
    Semantic,
    DangerTransparent,
    EllipseTransparent,
    IconNeutral,
    IconOutline,
    IconTransparent,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 11] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Transparent,
        ButtonVariant::Neutral,
        ButtonVariant::Semantic,
        ButtonVariant::DangerTransparent,
        ButtonVariant::EllipseTransparent,
        ButtonVariant::IconNeutral,
        ButtonVariant::IconOutline,
        ButtonVariant::IconTransparent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Transparent => "transparent",
            ButtonVariant::Neutral => "neutral",
            ButtonVariant::Semantic => "semantic",
            ButtonVariant::DangerTransparent => "danger-transparent",
            ButtonVariant::EllipseTransparent => "ellipse-transparent",
            ButtonVariant::IconNeutral => "icon-neutral",
            ButtonVariant::IconOutline => "icon-outline",
            ButtonVariant::IconTransparent => "icon-transparent",
        }
    }

    /// Variant class tag (name without dashes)
    pub fn class_tag(&self) -> &'static str {
        match self {
            ButtonVariant::DangerTransparent => "dangertransparent",
            ButtonVariant::EllipseTransparent => "ellipsetransparent",
            ButtonVariant::IconNeutral => "iconneutral",
            ButtonVariant::IconOutline => "iconoutline",
            ButtonVariant::IconTransparent => "icontransparent",
            other => other.as_str(),
        }
    }

    /// Medium-size variant class tag
    fn md_tag(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primaryMd",
            ButtonVariant::Secondary => "secondaryMd",
            ButtonVariant::Outline => "outlineMd",
            ButtonVariant::Transparent => "transparentMd",
            ButtonVariant::Neutral => "neutralMd",
            ButtonVariant::Semantic => "semanticMd",
            ButtonVariant::DangerTransparent => "dangertransparentMd",
            ButtonVariant::EllipseTransparent => "ellipsetransparentMd",
            ButtonVariant::IconNeutral => "iconneutralMd",
            ButtonVariant::IconOutline => "iconoutlineMd",
            ButtonVariant::IconTransparent => "icontransparentMd",
        }
    }

    pub fn layout(&self) -> ButtonLayout {
        match self {
            ButtonVariant::Primary
            | ButtonVariant::Secondary
            | ButtonVariant::Outline
            | ButtonVariant::Transparent
            | ButtonVariant::Neutral
            | ButtonVariant::Semantic
            | ButtonVariant::DangerTransparent
            | ButtonVariant::EllipseTransparent => ButtonLayout::Text,
            ButtonVariant::IconNeutral | ButtonVariant::IconOutline | ButtonVariant::IconTransparent => {
                ButtonLayout::Icon
            }
        }
    }

    /// Icon stroke color for this variant
    pub fn icon_stroke(&self, disabled: bool) -> &'static str {
        if disabled {
            return DISABLED_STROKE;
        }
        match self {
            ButtonVariant::Primary
            | ButtonVariant::Secondary
            | ButtonVariant::Neutral
            | ButtonVariant::Semantic
            | ButtonVariant::IconNeutral => "#FFF",
            ButtonVariant::Outline
            | ButtonVariant::Transparent
            | ButtonVariant::EllipseTransparent
            | ButtonVariant::IconOutline
            | ButtonVariant::IconTransparent => "#101828",
            ButtonVariant::DangerTransparent => "var(--button-Danger-Default-text)",
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonVariant {
    type Err = KilnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ButtonVariant::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| KilnError::UnknownName {
                what: "button variant",
                name: s.to_string(),
            })
    }
}

/// Text-with-optional-icon or icon-only
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonLayout {
    Text,
    Icon,
}

/// Button size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Md,
    #[default]
    Lg,
}

impl ButtonSize {
    /// Size class tag for a layout
    fn class_tag(&self, variant: ButtonVariant) -> &'static str {
        match (variant.layout(), variant, self) {
            (ButtonLayout::Icon, ButtonVariant::IconOutline, ButtonSize::Lg) => "iconButtonOutlineLg",
            (ButtonLayout::Icon, ButtonVariant::IconOutline, ButtonSize::Md) => "iconButtonOutlineMd",
            (ButtonLayout::Icon, _, ButtonSize::Lg) => "iconButtonLg",
            (ButtonLayout::Icon, _, ButtonSize::Md) => "iconButtonMd",
            (ButtonLayout::Text, _, ButtonSize::Lg) => "textButtonLg",
            (ButtonLayout::Text, _, ButtonSize::Md) => "textButtonMd",
        }
    }

    /// Default icon pixel size for a layout
    pub fn icon_px(&self, layout: ButtonLayout) -> u32 {
        match (layout, self) {
            (_, ButtonSize::Md) => 16,
            (ButtonLayout::Text, ButtonSize::Lg) => 20,
            (ButtonLayout::Icon, ButtonSize::Lg) => 24,
        }
    }
}

impl FromStr for ButtonSize {
    type Err = KilnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md" => Ok(ButtonSize::Md),
            "lg" => Ok(ButtonSize::Lg),
            _ => Err(KilnError::UnknownName {
                what: "button size",
                name: s.to_string(),
            }),
        }
    }
}

/// Native button type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

/// Create a button with a label
pub fn button(label: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder {
        config: ButtonConfig {
            label: label.into(),
            ..Default::default()
        },
    }
}

#[derive(Clone, Default)]
struct ButtonConfig {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    loading: bool,
    icon: Option<String>,
    icon_position: IconPosition,
    icon_size: Option<u32>,
    icon_stroke: Option<String>,
    button_type: ButtonType,
    aria_label: Option<String>,
    on_click: Option<Arc<dyn Fn() + Send + Sync>>,
}

/// Button configuration for building buttons
#[derive(Clone)]
pub struct ButtonBuilder {
    config: ButtonConfig,
}

impl ButtonBuilder {
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.config.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.config.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Show the loading spinner and block activation
    pub fn loading(mut self, loading: bool) -> Self {
        self.config.loading = loading;
        self
    }

    /// Set an icon by registry name
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.config.icon = Some(icon.into());
        self
    }

    /// Icon side for text buttons
    pub fn icon_position(mut self, position: IconPosition) -> Self {
        self.config.icon_position = position;
        self
    }

    /// Override the icon size of an icon button
    pub fn icon_size(mut self, px: u32) -> Self {
        self.config.icon_size = Some(px);
        self
    }

    /// Override the icon stroke of an icon button
    pub fn icon_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.config.icon_stroke = Some(stroke.into());
        self
    }

    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.config.button_type = button_type;
        self
    }

    /// Accessible name; required for icon buttons
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.config.aria_label = Some(label.into());
        self
    }

    /// Set the click handler
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.config.on_click = Some(Arc::new(handler));
        self
    }

    pub fn build(self) -> Button {
        let config = self.config;
        if config.variant.layout() == ButtonLayout::Icon && config.aria_label.is_none() {
            tracing::warn!(
                variant = config.variant.as_str(),
                "icon button without aria-label; falling back to its label"
            );
        }
        let press = if config.disabled {
            PressState::Disabled
        } else {
            PressState::Idle
        };
        Button { config, press }
    }
}

/// A live button
pub struct Button {
    config: ButtonConfig,
    press: PressState,
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.config.label)
            .field("variant", &self.config.variant)
            .field("size", &self.config.size)
            .field("disabled", &self.config.disabled)
            .field("loading", &self.config.loading)
            .field("press", &self.press)
            .finish()
    }
}

impl Button {
    pub fn variant(&self) -> ButtonVariant {
        self.config.variant
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.config.loading = loading;
    }

    /// Programmatic click; returns whether the handler ran
    pub fn click(&mut self) -> bool {
        if Pressable::is_disabled(self) {
            return false;
        }
        self.activate();
        true
    }

    /// Feed a host interaction; returns whether it activated the button
    pub fn handle(&mut self, event: &InteractionEvent) -> bool {
        self.handle_press(event)
    }

    fn classes(&self) -> ClassList {
        let c = &self.config;
        let layout = c.variant.layout();
        let mut classes = ClassList::new().with("button").with(match layout {
            ButtonLayout::Icon => "iconButton",
            ButtonLayout::Text => "textButton",
        });
        classes.push(c.size.class_tag(c.variant));
        classes.push(c.variant.class_tag());
        classes.push_if(c.size == ButtonSize::Md, c.variant.md_tag());
        classes.push_if(c.disabled, "disabled");
        classes.push_if(c.loading, "loading");
        classes
    }

    pub fn render(&self) -> ButtonView {
        let c = &self.config;
        let layout = c.variant.layout();
        let stroke = c.variant.icon_stroke(c.disabled);

        let (px, icon_stroke) = match layout {
            ButtonLayout::Icon => (
                c.icon_size.unwrap_or_else(|| c.size.icon_px(layout)),
                c.icon_stroke.as_deref().unwrap_or(stroke),
            ),
            ButtonLayout::Text => (c.size.icon_px(layout), stroke),
        };

        let spinner = c
            .loading
            .then(|| IconSlot::resolve("loading", px, IconPosition::Left, stroke))
            .flatten();

        let icon = if c.loading {
            None
        } else {
            let position = match layout {
                ButtonLayout::Icon => IconPosition::Left,
                ButtonLayout::Text => c.icon_position,
            };
            c.icon
                .as_deref()
                .and_then(|name| IconSlot::resolve(name, px, position, icon_stroke))
        };
        let (leading_icon, trailing_icon) = match icon {
            Some(slot) if slot.position == IconPosition::Right => (None, Some(slot)),
            slot => (slot, None),
        };

        let label = match layout {
            ButtonLayout::Text if !c.loading => Some(c.label.clone()),
            _ => None,
        };

        let aria_label = match (&c.aria_label, layout) {
            (Some(label), _) => Some(label.clone()),
            (None, ButtonLayout::Icon) if !c.label.is_empty() => Some(c.label.clone()),
            (None, _) => None,
        };

        let icon_container = match (layout, px) {
            (ButtonLayout::Icon, 16) | (ButtonLayout::Text, _) => "iconContainer16",
            (ButtonLayout::Icon, _) => "iconContainer24",
        };

        ButtonView {
            variant: c.variant,
            layout,
            classes: self.classes(),
            button_type: c.button_type,
            disabled: c.disabled || c.loading,
            aria_label,
            aria_busy: c.loading,
            label,
            icon_container,
            leading_icon,
            trailing_icon,
            spinner,
            hovered: self.press.is_hovered(),
            pressed: self.press.is_pressed(),
        }
    }
}

impl Pressable for Button {
    fn is_disabled(&self) -> bool {
        self.config.disabled || self.config.loading
    }

    fn press_state(&self) -> PressState {
        self.press
    }

    fn set_press_state(&mut self, state: PressState) {
        self.press = state;
    }

    fn activate(&mut self) {
        if let Some(handler) = &self.config.on_click {
            handler();
        }
    }
}

/// Render description of a button
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    pub variant: ButtonVariant,
    pub layout: ButtonLayout,
    pub classes: ClassList,
    #[serde(rename = "type")]
    pub button_type: ButtonType,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    pub aria_busy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Wrapper class around icons
    pub icon_container: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading_icon: Option<IconSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_icon: Option<IconSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spinner: Option<IconSlot>,
    pub hovered: bool,
    pub pressed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::Key;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counted(builder: ButtonBuilder) -> (Button, Arc<AtomicUsize>) {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let button = builder
            .on_click(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build();
        (button, clicks)
    }

    #[test]
    fn test_layout_by_variant() {
        for variant in ButtonVariant::ALL {
            let expected = if variant.as_str().starts_with("icon-") {
                ButtonLayout::Icon
            } else {
                ButtonLayout::Text
            };
            assert_eq!(variant.layout(), expected, "{variant}");
        }
    }

    #[test]
    fn test_strokes() {
        assert_eq!(ButtonVariant::Primary.icon_stroke(false), "#FFF");
        assert_eq!(ButtonVariant::IconNeutral.icon_stroke(false), "#FFF");
        assert_eq!(ButtonVariant::Outline.icon_stroke(false), "#101828");
        assert_eq!(ButtonVariant::IconTransparent.icon_stroke(false), "#101828");
        assert_eq!(
            ButtonVariant::DangerTransparent.icon_stroke(false),
            "var(--button-Danger-Default-text)"
        );
        for variant in ButtonVariant::ALL {
            assert_eq!(variant.icon_stroke(true), DISABLED_STROKE);
        }
    }

    #[test]
    fn test_text_button_classes() {
        let view = button("Go")
            .variant(ButtonVariant::DangerTransparent)
            .size(ButtonSize::Md)
            .build()
            .render();
        assert_eq!(
            view.classes.to_string(),
            "button textButton textButtonMd dangertransparent dangertransparentMd"
        );
        assert_eq!(view.label.as_deref(), Some("Go"));
    }

    #[test]
    fn test_icon_button_classes_and_sizes() {
        let view = button("")
            .variant(ButtonVariant::IconOutline)
            .icon("plus")
            .aria_label("Add")
            .build()
            .render();
        assert_eq!(
            view.classes.to_string(),
            "button iconButton iconButtonOutlineLg iconoutline"
        );
        assert_eq!(view.leading_icon.as_ref().unwrap().size, 24);
        assert_eq!(view.icon_container, "iconContainer24");
        assert_eq!(view.label, None);
        assert_eq!(view.aria_label.as_deref(), Some("Add"));

        let view = button("")
            .variant(ButtonVariant::IconNeutral)
            .icon("plus")
            .size(ButtonSize::Md)
            .build()
            .render();
        assert!(view.classes.contains("iconButtonMd"));
        assert!(view.classes.contains("iconneutralMd"));
        assert_eq!(view.leading_icon.unwrap().size, 16);
        assert_eq!(view.icon_container, "iconContainer16");

        let view = button("")
            .variant(ButtonVariant::IconTransparent)
            .icon("plus")
            .icon_size(20)
            .icon_stroke("#000")
            .build()
            .render();
        let icon = view.leading_icon.unwrap();
        assert_eq!(icon.size, 20);
        assert!(icon.svg.contains(r##"stroke="#000""##));
    }

    #[test]
    fn test_text_button_icon_position() {
        let view = button("Next")
            .variant(ButtonVariant::Outline)
            .icon("chevron-right")
            .icon_position(IconPosition::Right)
            .build()
            .render();
        assert!(view.leading_icon.is_none());
        let icon = view.trailing_icon.unwrap();
        assert_eq!(icon.size, 20);
        assert!(icon.svg.contains(r##"stroke="#101828""##));
    }

    #[test]
    fn test_loading_replaces_content() {
        let (mut button, clicks) = counted(button("Save").icon("check").loading(true));
        let view = button.render();
        assert!(view.classes.contains("loading"));
        assert!(view.aria_busy);
        assert!(view.disabled);
        assert!(view.label.is_none());
        assert!(view.leading_icon.is_none());
        assert_eq!(view.spinner.unwrap().name, "loading");

        assert!(!button.click());
        assert!(!button.handle(&InteractionEvent::KeyDown(Key::Enter)));
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_disabled_ignores_activation() {
        let (mut button, clicks) = counted(button("Delete").disabled(true));
        assert!(!button.click());
        button.handle(&InteractionEvent::PointerDown);
        assert!(!button.handle(&InteractionEvent::PointerUp));
        assert_eq!(clicks.load(Ordering::SeqCst), 0);

        let view = button.render();
        assert!(view.classes.contains("disabled"));
        assert!(!view.pressed);

        button.set_disabled(false);
        assert!(button.click());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_pointer_and_keyboard_activation() {
        let (mut button, clicks) = counted(button("OK"));
        button.handle(&InteractionEvent::PointerEnter);
        assert!(button.render().hovered);
        button.handle(&InteractionEvent::PointerDown);
        assert!(button.render().pressed);
        assert!(button.handle(&InteractionEvent::PointerUp));
        assert!(button.handle(&InteractionEvent::KeyDown(Key::Space)));
        assert_eq!(clicks.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(
            "ellipse-transparent".parse::<ButtonVariant>().unwrap(),
            ButtonVariant::EllipseTransparent
        );
        assert!("ghost".parse::<ButtonVariant>().is_err());
        assert_eq!("MD".parse::<ButtonSize>().unwrap(), ButtonSize::Md);
        assert_eq!(ButtonVariant::IconOutline.class_tag(), "iconoutline");
    }
}
