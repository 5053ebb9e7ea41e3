//! Icon slots
//!
//! Components name their icons; the slot resolves the name against the icon
//! registry and carries the rendered SVG. A missing name logs a warning and
//! yields no slot.

use serde::{Deserialize, Serialize};

use kiln_icons::IconSize;

/// Which side of the control an icon sits on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    #[default]
    Left,
    Right,
}

impl IconPosition {
    /// Wrapper class tag (`iconLeft` / `iconRight`)
    pub fn class_tag(&self) -> &'static str {
        match self {
            IconPosition::Left => "iconLeft",
            IconPosition::Right => "iconRight",
        }
    }
}

/// A resolved icon ready to render
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IconSlot {
    pub name: String,
    /// Width and height in pixels
    pub size: u32,
    pub position: IconPosition,
    pub class: &'static str,
    pub svg: String,
}

impl IconSlot {
    /// Resolve `name` at `size` pixels, or `None` if the registry lacks it
    pub fn resolve(name: &str, size: u32, position: IconPosition, stroke: &str) -> Option<Self> {
        let Some(icon) = kiln_icons::lookup(name) else {
            tracing::warn!("Icon name {name:?} not found in registry.");
            return None;
        };

        let svg = match IconSize::from_px(size) {
            Some(standard) => icon.to_svg(standard, stroke),
            None => kiln_icons::to_svg_px(icon.body, size, stroke, "none"),
        };

        Some(Self {
            name: name.to_string(),
            size,
            position,
            class: position.class_tag(),
            svg,
        })
    }
}
