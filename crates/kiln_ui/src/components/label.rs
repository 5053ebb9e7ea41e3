//! Label component - text label for form fields
//!
//! # Example
//!
//! ```
//! use kiln_ui::prelude::*;
//!
//! let view = label("Password").required().html_for("pw").render();
//! assert_eq!(view.class, "label");
//! assert_eq!(view.marker, Some("*"));
//! ```

use serde::{Deserialize, Serialize};

use crate::classes::ClassList;

/// Where a field label is placed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    /// Above the control
    #[default]
    Top,
    /// Inside the control's wrapper, over the text
    Floating,
    /// Beside the control
    Inline,
}

impl LabelPosition {
    fn class_tag(&self) -> &'static str {
        match self {
            LabelPosition::Top => "label",
            LabelPosition::Floating => "floatingLabel",
            LabelPosition::Inline => "inlineLabel",
        }
    }
}

/// Field label
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Label {
    text: String,
    position: LabelPosition,
    required: bool,
    disabled: bool,
    html_for: Option<String>,
}

impl Label {
    /// Create a new label with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn position(mut self, position: LabelPosition) -> Self {
        self.position = position;
        self
    }

    /// Mark the label as required (shows asterisk)
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Id of the control this label names
    pub fn html_for(mut self, id: impl Into<String>) -> Self {
        self.html_for = Some(id.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn render(&self) -> LabelView {
        let mut classes = ClassList::new().with(self.position.class_tag());
        classes.push_if(self.disabled, "labelDisabled");

        LabelView {
            text: self.text.clone(),
            class: self.position.class_tag(),
            classes,
            position: self.position,
            html_for: self.html_for.clone(),
            marker: self.required.then_some("*"),
        }
    }
}

/// Render description of a label
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LabelView {
    pub text: String,
    /// Position class tag
    pub class: &'static str,
    pub classes: ClassList,
    pub position: LabelPosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_for: Option<String>,
    /// Required marker, rendered with the `required` class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<&'static str>,
}

/// Create a label
pub fn label(text: impl Into<String>) -> Label {
    Label::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_builder() {
        let label = Label::new("Username").required().position(LabelPosition::Floating);

        assert!(label.required);
        assert_eq!(label.position, LabelPosition::Floating);
    }

    #[test]
    fn test_render_classes() {
        let view = label("Email").render();
        assert_eq!(view.class, "label");
        assert_eq!(view.marker, None);

        let view = label("Email")
            .position(LabelPosition::Floating)
            .disabled(true)
            .render();
        assert_eq!(view.class, "floatingLabel");
        assert!(view.classes.contains("labelDisabled"));
    }
}
