//! # Kiln Icons
//!
//! The icon set of the Kiln design system as static SVG data.
//!
//! Every icon is registered under a kebab-case name in [`REGISTRY`]; components
//! resolve names with [`lookup`] and render them with [`Icon::to_svg`].
//!
//! ```rust
//! use kiln_icons::{lookup, IconSize};
//!
//! let search = lookup("search").unwrap();
//! let svg = search.to_svg(IconSize::S20, "currentColor");
//! assert!(svg.starts_with("<svg"));
//! assert!(lookup("does-not-exist").is_none());
//! ```

mod icons;

pub use icons::*;

/// Pixel sizes the design system draws icons at
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconSize {
    S16,
    S20,
    #[default]
    S24,
}

impl IconSize {
    /// Width and height in pixels
    pub fn px(self) -> u32 {
        match self {
            IconSize::S16 => 16,
            IconSize::S20 => 20,
            IconSize::S24 => 24,
        }
    }

    /// Match a pixel size to a supported icon size
    pub fn from_px(px: u32) -> Option<Self> {
        match px {
            16 => Some(IconSize::S16),
            20 => Some(IconSize::S20),
            24 => Some(IconSize::S24),
            _ => None,
        }
    }
}

/// A named vector icon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Icon {
    /// Registry key
    pub name: &'static str,
    /// SVG inner elements
    pub body: &'static str,
}

impl Icon {
    /// Render as a complete SVG element
    pub fn to_svg(&self, size: IconSize, stroke: &str) -> String {
        to_svg_with(self.body, size, stroke, "none")
    }
}

/// Icons by name, sorted for binary search
pub const REGISTRY: &[Icon] = &[
    Icon { name: "attachment", body: ATTACHMENT },
    Icon { name: "card-amex", body: CARD_AMEX },
    Icon { name: "card-discover", body: CARD_DISCOVER },
    Icon { name: "card-mastercard", body: CARD_MASTERCARD },
    Icon { name: "card-visa", body: CARD_VISA },
    Icon { name: "check", body: CHECK },
    Icon { name: "chevron-down", body: CHEVRON_DOWN },
    Icon { name: "chevron-left", body: CHEVRON_LEFT },
    Icon { name: "chevron-right", body: CHEVRON_RIGHT },
    Icon { name: "chevron-up", body: CHEVRON_UP },
    Icon { name: "credit-card", body: CREDIT_CARD },
    Icon { name: "delete", body: DELETE },
    Icon { name: "download", body: DOWNLOAD },
    Icon { name: "edit", body: EDIT },
    Icon { name: "error", body: ERROR },
    Icon { name: "eye", body: EYE },
    Icon { name: "eye-off", body: EYE_OFF },
    Icon { name: "heart", body: HEART },
    Icon { name: "info", body: INFO },
    Icon { name: "loading", body: LOADING },
    Icon { name: "plus", body: PLUS },
    Icon { name: "refresh", body: REFRESH },
    Icon { name: "search", body: SEARCH },
    Icon { name: "settings", body: SETTINGS },
    Icon { name: "upload", body: UPLOAD },
    Icon { name: "warning", body: WARNING },
    Icon { name: "x", body: X },
];

/// Find an icon by name
pub fn lookup(name: &str) -> Option<Icon> {
    REGISTRY
        .binary_search_by(|icon| icon.name.cmp(name))
        .ok()
        .map(|index| REGISTRY[index])
}

/// Whether an icon with this name exists
pub fn contains(name: &str) -> bool {
    lookup(name).is_some()
}

/// All registered icon names in sorted order
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|icon| icon.name)
}

/// Wrap icon body in an SVG tag at 24px with `currentColor` stroke
pub fn to_svg(body: &str) -> String {
    to_svg_with(body, IconSize::S24, "currentColor", "none")
}

/// Wrap icon body in an SVG tag with explicit size, stroke and fill
pub fn to_svg_with(body: &str, size: IconSize, stroke: &str, fill: &str) -> String {
    to_svg_px(body, size.px(), stroke, fill)
}

/// Wrap icon body in an SVG tag at an arbitrary pixel size
pub fn to_svg_px(body: &str, px: u32, stroke: &str, fill: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{px}" height="{px}" viewBox="0 0 24 24" fill="{fill}" stroke="{stroke}" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" role="img">{body}</svg>"#
    )
}
