//! Kiln configuration file handling
//!
//! Project-wide component defaults live in `kiln.toml`:
//!
//! ```toml
//! [field]
//! size = "md"
//! focus_policy = "validation-wins"
//!
//! [verification]
//! length = 4
//! secure = true
//!
//! [card]
//! accepted = ["visa", "mastercard"]
//!
//! [button]
//! size = "lg"
//! ```
//!
//! Every key is optional; missing keys take the component defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::components::button::{button, ButtonBuilder, ButtonSize};
use crate::components::input::{
    input, CardOptions, FieldKind, FieldSize, FocusPolicy, InputBuilder, VerificationOptions,
};
use crate::error::{KilnError, Result};

/// File name looked up by [`KilnConfig::load_from_dir`]
pub const CONFIG_FILE: &str = "kiln.toml";

/// Component defaults for a project
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct KilnConfig {
    #[serde(default)]
    pub field: FieldDefaults,
    #[serde(default)]
    pub verification: VerificationOptions,
    #[serde(default)]
    pub card: CardOptions,
    #[serde(default)]
    pub button: ButtonDefaults,
}

/// Defaults applied to every field
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldDefaults {
    #[serde(default)]
    pub size: FieldSize,
    #[serde(default)]
    pub focus_policy: FocusPolicy,
}

/// Defaults applied to every button
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ButtonDefaults {
    #[serde(default)]
    pub size: ButtonSize,
}

impl KilnConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| KilnError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("loaded {}", path.display());
        Ok(config)
    }

    /// Load `kiln.toml` from a directory, or defaults if there is none
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Serialize as a TOML document
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Field builder seeded with these defaults
    pub fn field(&self, kind: FieldKind) -> InputBuilder {
        input(kind)
            .size(self.field.size)
            .focus_policy(self.field.focus_policy)
            .verification(self.verification.clone())
            .card(self.card.clone())
    }

    /// Button builder seeded with these defaults
    pub fn button(&self, label: impl Into<String>) -> ButtonBuilder {
        button(label).size(self.button.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::input::CardIssuer;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = KilnConfig::from_toml_str("").unwrap();
        assert_eq!(config, KilnConfig::default());
        assert_eq!(config.field.size, FieldSize::Lg);
        assert_eq!(config.verification.length, 6);
        assert!(config.verification.auto_focus);
        assert!(config.card.format_spaces);
        assert_eq!(config.card.accepted.len(), 4);
    }

    #[test]
    fn test_partial_document() {
        let config = KilnConfig::from_toml_str(
            r#"
            [field]
            size = "md"
            focus_policy = "validation-wins"

            [verification]
            length = 4
            secure = true

            [card]
            accepted = ["visa", "amex"]
            "#,
        )
        .unwrap();

        assert_eq!(config.field.size, FieldSize::Md);
        assert_eq!(config.field.focus_policy, FocusPolicy::ValidationWins);
        assert_eq!(config.verification.length, 4);
        assert!(config.verification.secure);
        assert!(config.verification.auto_focus);
        assert_eq!(config.card.accepted, vec![CardIssuer::Visa, CardIssuer::Amex]);
        assert!(config.card.show_card_icon);
        assert_eq!(config.button.size, ButtonSize::Lg);
    }

    #[test]
    fn test_round_trip() {
        let mut config = KilnConfig::default();
        config.verification.length = 8;
        config.button.size = ButtonSize::Md;

        let toml = config.to_toml().unwrap();
        assert_eq!(KilnConfig::from_toml_str(&toml).unwrap(), config);
    }

    #[test]
    fn test_invalid_document() {
        assert!(matches!(
            KilnConfig::from_toml_str("[field]\nsize = \"xl\""),
            Err(KilnError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = std::env::temp_dir().join("kiln-config-test-missing");
        assert_eq!(KilnConfig::load_from_dir(&dir).unwrap(), KilnConfig::default());
        assert!(matches!(
            KilnConfig::load(&dir.join(CONFIG_FILE)),
            Err(KilnError::ConfigRead { .. })
        ));
    }

    #[test]
    fn test_seeded_builders() {
        let config = KilnConfig::from_toml_str("[field]\nsize = \"md\"\n[verification]\nlength = 4").unwrap();
        let field = config.field(FieldKind::Verification).build().unwrap();
        let view = field.render();
        assert_eq!(view.cells.len(), 4);
        assert!(view.control_classes.contains("inputMd"));
    }
}
