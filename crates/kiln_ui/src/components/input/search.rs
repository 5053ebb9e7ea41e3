//! Search and password field behavior

use serde::{Deserialize, Serialize};

use kiln_core::ValueSource;

/// Search field options
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Offer a clear action while the field has a value
    pub show_clear_button: bool,
    /// Icon for the leading slot
    pub search_icon: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            show_clear_button: true,
            search_icon: "search".to_string(),
        }
    }
}

/// Password field options
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    /// Render the visibility toggle
    pub show_toggle: bool,
    /// Caller-controlled visibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_password: Option<bool>,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            show_toggle: true,
            show_password: None,
        }
    }
}

/// Visibility of a password field's content
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordVisibility {
    visible: ValueSource<bool>,
}

impl PasswordVisibility {
    pub fn new(options: &PasswordOptions) -> Self {
        let visible = match options.show_password {
            Some(shown) => ValueSource::controlled(shown),
            None => ValueSource::uncontrolled(false),
        };
        Self { visible }
    }

    pub fn is_visible(&self) -> bool {
        *self.visible.get()
    }

    /// Flip visibility; returns the requested state
    ///
    /// Controlled visibility only changes through [`sync`](Self::sync).
    pub fn toggle(&mut self) -> bool {
        let next = !self.is_visible();
        self.visible.request(next);
        next
    }

    pub fn sync(&mut self, visible: bool) {
        self.visible.sync(visible);
    }

    /// Icon for the toggle: the action it performs
    pub fn toggle_icon(&self) -> &'static str {
        if self.is_visible() {
            "eye-off"
        } else {
            "eye"
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_visible() {
            "Hide password"
        } else {
            "Show password"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_visibility_toggles() {
        let mut visibility = PasswordVisibility::new(&PasswordOptions::default());
        assert!(!visibility.is_visible());
        assert_eq!(visibility.toggle_icon(), "eye");
        assert_eq!(visibility.toggle_label(), "Show password");

        assert!(visibility.toggle());
        assert!(visibility.is_visible());
        assert_eq!(visibility.toggle_icon(), "eye-off");
        assert_eq!(visibility.toggle_label(), "Hide password");
    }

    #[test]
    fn test_controlled_visibility_waits_for_sync() {
        let options = PasswordOptions {
            show_password: Some(false),
            ..Default::default()
        };
        let mut visibility = PasswordVisibility::new(&options);
        assert!(visibility.toggle());
        assert!(!visibility.is_visible());

        visibility.sync(true);
        assert!(visibility.is_visible());
    }

    #[test]
    fn test_search_defaults() {
        let options = SearchOptions::default();
        assert!(options.show_clear_button);
        assert_eq!(options.search_icon, "search");
        assert!(PasswordOptions::default().show_toggle);
    }
}
