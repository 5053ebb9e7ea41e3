//! Field kinds and the variant classifier
//!
//! A [`FieldKind`] is the caller-facing, mostly cosmetic variant of a field.
//! [`classify`] maps it onto the behavioral [`Family`] that governs
//! interaction, plus the native input type the host control should use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KilnError;

/// Every field variant of the design system
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    // Basic inputs
    #[default]
    Text,
    Email,
    Search,
    Password,
    CreditCard,
    MultiText,
    Number,
    // Label variants
    Label,
    Phone,
    Currency,
    // Selection inputs
    Select,
    MultiSelect,
    DatePicker,
    // Extended text
    Textarea,
    // Verification
    Verification,
}

impl FieldKind {
    pub const ALL: [FieldKind; 15] = [
        FieldKind::Text,
        FieldKind::Email,
        FieldKind::Search,
        FieldKind::Password,
        FieldKind::CreditCard,
        FieldKind::MultiText,
        FieldKind::Number,
        FieldKind::Label,
        FieldKind::Phone,
        FieldKind::Currency,
        FieldKind::Select,
        FieldKind::MultiSelect,
        FieldKind::DatePicker,
        FieldKind::Textarea,
        FieldKind::Verification,
    ];

    /// Kebab-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Search => "search",
            FieldKind::Password => "password",
            FieldKind::CreditCard => "credit-card",
            FieldKind::MultiText => "multi-text",
            FieldKind::Number => "number",
            FieldKind::Label => "label",
            FieldKind::Phone => "phone",
            FieldKind::Currency => "currency",
            FieldKind::Select => "select",
            FieldKind::MultiSelect => "multi-select",
            FieldKind::DatePicker => "date-picker",
            FieldKind::Textarea => "textarea",
            FieldKind::Verification => "verification",
        }
    }

    /// Class tag for the control (`creditcard`, `multiselect`, ...)
    pub fn class_tag(&self) -> &'static str {
        match self {
            FieldKind::CreditCard => "creditcard",
            FieldKind::MultiText => "multitext",
            FieldKind::MultiSelect => "multiselect",
            FieldKind::DatePicker => "datepicker",
            other => other.as_str(),
        }
    }

    /// Class tag for the field container (`creditcardContainer`, ...)
    pub fn container_tag(&self) -> &'static str {
        match self {
            FieldKind::Text => "textContainer",
            FieldKind::Email => "emailContainer",
            FieldKind::Search => "searchContainer",
            FieldKind::Password => "passwordContainer",
            FieldKind::CreditCard => "creditcardContainer",
            FieldKind::MultiText => "multitextContainer",
            FieldKind::Number => "numberContainer",
            FieldKind::Label => "labelContainer",
            FieldKind::Phone => "phoneContainer",
            FieldKind::Currency => "currencyContainer",
            FieldKind::Select => "selectContainer",
            FieldKind::MultiSelect => "multiselectContainer",
            FieldKind::DatePicker => "datepickerContainer",
            FieldKind::Textarea => "textareaContainer",
            FieldKind::Verification => "verificationContainer",
        }
    }

    /// Kinds without dedicated behavior yet; they render as plain text
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            FieldKind::Number
                | FieldKind::Phone
                | FieldKind::Currency
                | FieldKind::Select
                | FieldKind::MultiSelect
                | FieldKind::DatePicker
        )
    }

    /// Element layout of the control
    pub fn layout(&self) -> ControlLayout {
        match self {
            FieldKind::Textarea => ControlLayout::Textarea,
            FieldKind::Select | FieldKind::MultiSelect => ControlLayout::Select,
            FieldKind::Verification => ControlLayout::Cells,
            _ => ControlLayout::SingleLine,
        }
    }

    /// Parse a kind name, falling back to [`FieldKind::Text`] with a warning
    pub fn from_name_or_text(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!("Field kind {name:?} is not recognised. Using text input as fallback.");
            FieldKind::Text
        })
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = KilnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| KilnError::UnknownName {
                what: "field kind",
                name: s.to_string(),
            })
    }
}

/// Behavioral family governing interaction logic
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    #[default]
    Plain,
    Search,
    Password,
    CreditCard,
    Verification,
}

/// Native input type of the host control
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NativeInputType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Search,
}

impl NativeInputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NativeInputType::Text => "text",
            NativeInputType::Email => "email",
            NativeInputType::Password => "password",
            NativeInputType::Number => "number",
            NativeInputType::Tel => "tel",
            NativeInputType::Search => "search",
        }
    }
}

/// Which element the control renders as
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlLayout {
    #[default]
    SingleLine,
    Textarea,
    Select,
    /// One single-character input per cell
    Cells,
}

impl ControlLayout {
    /// Extra class tag applied to the control for non-default layouts
    pub fn class_tag(&self) -> Option<&'static str> {
        match self {
            ControlLayout::SingleLine => None,
            ControlLayout::Textarea => Some("textarea"),
            ControlLayout::Select => Some("select"),
            ControlLayout::Cells => Some("verification"),
        }
    }
}

/// Result of [`classify`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub family: Family,
    pub native_type: NativeInputType,
}

/// Decide the behavioral family and native input type of a kind
pub fn classify(kind: FieldKind) -> Classification {
    let family = match kind {
        FieldKind::Search => Family::Search,
        FieldKind::Password => Family::Password,
        FieldKind::CreditCard => Family::CreditCard,
        FieldKind::Verification => Family::Verification,
        _ => Family::Plain,
    };

    let native_type = match kind {
        FieldKind::Email => NativeInputType::Email,
        FieldKind::Password => NativeInputType::Password,
        FieldKind::Number => NativeInputType::Number,
        FieldKind::Phone => NativeInputType::Tel,
        FieldKind::Search => NativeInputType::Search,
        _ => NativeInputType::Text,
    };

    Classification {
        family,
        native_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_families() {
        assert_eq!(classify(FieldKind::Search).family, Family::Search);
        assert_eq!(classify(FieldKind::Password).family, Family::Password);
        assert_eq!(classify(FieldKind::CreditCard).family, Family::CreditCard);
        assert_eq!(
            classify(FieldKind::Verification).family,
            Family::Verification
        );
    }

    #[test]
    fn test_everything_else_is_plain() {
        let special = [
            FieldKind::Search,
            FieldKind::Password,
            FieldKind::CreditCard,
            FieldKind::Verification,
        ];
        for kind in FieldKind::ALL {
            if !special.contains(&kind) {
                assert_eq!(classify(kind).family, Family::Plain, "{kind}");
            }
        }
    }

    #[test]
    fn test_native_input_types() {
        assert_eq!(classify(FieldKind::Email).native_type, NativeInputType::Email);
        assert_eq!(
            classify(FieldKind::Password).native_type,
            NativeInputType::Password
        );
        assert_eq!(
            classify(FieldKind::Number).native_type,
            NativeInputType::Number
        );
        assert_eq!(classify(FieldKind::Phone).native_type, NativeInputType::Tel);
        assert_eq!(
            classify(FieldKind::Search).native_type,
            NativeInputType::Search
        );
        for kind in [
            FieldKind::Text,
            FieldKind::CreditCard,
            FieldKind::Currency,
            FieldKind::Textarea,
            FieldKind::Verification,
        ] {
            assert_eq!(classify(kind).native_type, NativeInputType::Text);
        }
    }

    #[test]
    fn test_names_round_trip() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.as_str().parse::<FieldKind>().unwrap(), kind);
        }
        assert_eq!("Credit-Card".parse::<FieldKind>().unwrap(), FieldKind::CreditCard);
        assert!("rich-text".parse::<FieldKind>().is_err());
        assert_eq!(FieldKind::from_name_or_text("rich-text"), FieldKind::Text);
    }

    #[test]
    fn test_class_tags() {
        assert_eq!(FieldKind::CreditCard.class_tag(), "creditcard");
        assert_eq!(FieldKind::DatePicker.class_tag(), "datepicker");
        assert_eq!(FieldKind::Email.class_tag(), "email");
        assert_eq!(FieldKind::MultiText.container_tag(), "multitextContainer");
        assert_eq!(FieldKind::Textarea.layout().class_tag(), Some("textarea"));
        assert_eq!(FieldKind::MultiSelect.layout(), ControlLayout::Select);
        assert_eq!(FieldKind::Text.layout().class_tag(), None);
    }

    #[test]
    fn test_fallback_kinds() {
        assert!(FieldKind::Currency.is_fallback());
        assert!(FieldKind::DatePicker.is_fallback());
        assert!(!FieldKind::Textarea.is_fallback());
        assert!(!FieldKind::Verification.is_fallback());
    }
}
