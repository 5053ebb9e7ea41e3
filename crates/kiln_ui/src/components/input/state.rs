//! Field state resolution
//!
//! The effective state of a field is a single [`FieldState`] recomputed on
//! every render from the caller's declared state, the `disabled` flag and the
//! focus observed by the host. Precedence, first match wins:
//!
//! 1. disabled (flag or declared) → `Disabled`
//! 2. focused → `Focus`
//! 3. declared state other than `Default`/`Hover` → that state
//! 4. otherwise → `Default`
//!
//! [`FocusPolicy::ValidationWins`] swaps steps 2 and 3 for the validation
//! states (error, success, warning).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KilnError;

/// Visual/interaction state of a field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    #[default]
    Default,
    Warning,
    Focus,
    Hover,
    Disabled,
    Error,
    Success,
}

impl FieldState {
    pub const ALL: [FieldState; 7] = [
        FieldState::Default,
        FieldState::Warning,
        FieldState::Focus,
        FieldState::Hover,
        FieldState::Disabled,
        FieldState::Error,
        FieldState::Success,
    ];

    /// Name, also used as the control's state class tag
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldState::Default => "default",
            FieldState::Warning => "warning",
            FieldState::Focus => "focus",
            FieldState::Hover => "hover",
            FieldState::Disabled => "disabled",
            FieldState::Error => "error",
            FieldState::Success => "success",
        }
    }

    /// State class tag for the field container
    pub fn container_tag(&self) -> &'static str {
        match self {
            FieldState::Default => "containerDefault",
            FieldState::Warning => "containerWarning",
            FieldState::Focus => "containerFocus",
            FieldState::Hover => "containerHover",
            FieldState::Disabled => "containerDisabled",
            FieldState::Error => "containerError",
            FieldState::Success => "containerSuccess",
        }
    }

    /// Caller-declared validation outcome
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FieldState::Error | FieldState::Success | FieldState::Warning
        )
    }
}

impl fmt::Display for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldState {
    type Err = KilnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldState::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| KilnError::UnknownName {
                what: "field state",
                name: s.to_string(),
            })
    }
}

/// Whether focus may mask a declared validation state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusPolicy {
    /// Focus shows while the user edits, even over error/success/warning
    #[default]
    FocusWins,
    /// Declared error/success/warning stays visible while focused
    ValidationWins,
}

/// Resolve the effective state with the default [`FocusPolicy`]
pub fn resolve_state(explicit: Option<FieldState>, disabled: bool, is_focused: bool) -> FieldState {
    resolve_state_with(explicit, disabled, is_focused, FocusPolicy::default())
}

/// Resolve the effective state under an explicit [`FocusPolicy`]
pub fn resolve_state_with(
    explicit: Option<FieldState>,
    disabled: bool,
    is_focused: bool,
    policy: FocusPolicy,
) -> FieldState {
    if disabled || explicit == Some(FieldState::Disabled) {
        return FieldState::Disabled;
    }

    // Hover is interaction-driven and never taken from the caller
    let declared = explicit.filter(|s| !matches!(s, FieldState::Default | FieldState::Hover));

    match declared {
        Some(state) if policy == FocusPolicy::ValidationWins && state.is_validation() => state,
        _ if is_focused => FieldState::Focus,
        Some(state) => state,
        None => FieldState::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_always_wins() {
        for explicit in FieldState::ALL.into_iter().map(Some).chain([None]) {
            for focused in [false, true] {
                for policy in [FocusPolicy::FocusWins, FocusPolicy::ValidationWins] {
                    assert_eq!(
                        resolve_state_with(explicit, true, focused, policy),
                        FieldState::Disabled
                    );
                }
            }
        }
        assert_eq!(
            resolve_state(Some(FieldState::Disabled), false, true),
            FieldState::Disabled
        );
    }

    #[test]
    fn test_focus_overrides_declared_states() {
        assert_eq!(resolve_state(None, false, true), FieldState::Focus);
        assert_eq!(
            resolve_state(Some(FieldState::Error), false, true),
            FieldState::Focus
        );
        assert_eq!(
            resolve_state(Some(FieldState::Hover), false, true),
            FieldState::Focus
        );
    }

    #[test]
    fn test_declared_states_without_focus() {
        assert_eq!(
            resolve_state(Some(FieldState::Error), false, false),
            FieldState::Error
        );
        assert_eq!(
            resolve_state(Some(FieldState::Success), false, false),
            FieldState::Success
        );
        assert_eq!(
            resolve_state(Some(FieldState::Warning), false, false),
            FieldState::Warning
        );
        assert_eq!(
            resolve_state(Some(FieldState::Focus), false, false),
            FieldState::Focus
        );
        assert_eq!(
            resolve_state(Some(FieldState::Hover), false, false),
            FieldState::Default
        );
        assert_eq!(resolve_state(None, false, false), FieldState::Default);
    }

    #[test]
    fn test_error_then_disabled() {
        let explicit = Some(FieldState::Error);
        assert_eq!(resolve_state(explicit, false, false), FieldState::Error);
        assert_eq!(resolve_state(explicit, true, false), FieldState::Disabled);
    }

    #[test]
    fn test_validation_wins_policy() {
        let policy = FocusPolicy::ValidationWins;
        assert_eq!(
            resolve_state_with(Some(FieldState::Error), false, true, policy),
            FieldState::Error
        );
        assert_eq!(
            resolve_state_with(Some(FieldState::Success), false, true, policy),
            FieldState::Success
        );
        // Non-validation declarations still yield to focus
        assert_eq!(
            resolve_state_with(Some(FieldState::Default), false, true, policy),
            FieldState::Focus
        );
        assert_eq!(resolve_state_with(None, false, true, policy), FieldState::Focus);
    }

    #[test]
    fn test_container_tags() {
        assert_eq!(FieldState::Error.container_tag(), "containerError");
        assert_eq!(FieldState::Default.as_str(), "default");
        assert_eq!("SUCCESS".parse::<FieldState>().unwrap(), FieldState::Success);
        assert!("pending".parse::<FieldState>().is_err());
    }
}
