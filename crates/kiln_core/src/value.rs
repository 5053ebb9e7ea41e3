//! Controlled and uncontrolled values
//!
//! A component value is owned by exactly one party:
//!
//! - [`ValueSource::Owned`]: the component keeps a local copy (uncontrolled),
//!   seeded from a default value and updated on every change.
//! - [`ValueSource::Delegated`]: the caller owns the value (controlled). The
//!   component only *requests* changes through its change callback and shows
//!   whatever the caller hands back via [`ValueSource::sync`].
//!
//! Switching modes during a component's lifetime is unsupported; `sync` on an
//! owned value is ignored.

use std::sync::Arc;

/// Shared callback receiving a borrowed value
pub type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Who owns a component value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueSource<T> {
    /// Uncontrolled: the component owns the value
    Owned(T),
    /// Controlled: the caller owns the value
    Delegated(T),
}

impl<T: Default> Default for ValueSource<T> {
    fn default() -> Self {
        ValueSource::Owned(T::default())
    }
}

impl<T> ValueSource<T> {
    /// Uncontrolled value seeded from a default
    pub fn uncontrolled(default: T) -> Self {
        ValueSource::Owned(default)
    }

    /// Controlled value supplied by the caller
    pub fn controlled(value: T) -> Self {
        ValueSource::Delegated(value)
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, ValueSource::Delegated(_))
    }

    /// The value to display
    pub fn get(&self) -> &T {
        match self {
            ValueSource::Owned(value) | ValueSource::Delegated(value) => value,
        }
    }

    /// Apply a change requested by user interaction
    ///
    /// Owned values are replaced. Delegated values are left untouched; the
    /// caller decides through its change callback. Returns whether the local
    /// value was written.
    pub fn request(&mut self, next: T) -> bool {
        match self {
            ValueSource::Owned(value) => {
                *value = next;
                true
            }
            ValueSource::Delegated(_) => false,
        }
    }

    /// Refresh a caller-owned value
    pub fn sync(&mut self, value: T) {
        match self {
            ValueSource::Delegated(current) => *current = value,
            ValueSource::Owned(_) => {
                tracing::debug!("sync ignored: value is owned by the component");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_value_accepts_requests() {
        let mut value = ValueSource::uncontrolled(String::from("seed"));
        assert!(!value.is_controlled());
        assert!(value.request("next".to_string()));
        assert_eq!(value.get(), "next");

        value.sync("ignored".to_string());
        assert_eq!(value.get(), "next");
    }

    #[test]
    fn test_delegated_value_waits_for_caller() {
        let mut value = ValueSource::controlled(String::from("caller"));
        assert!(value.is_controlled());
        assert!(!value.request("typed".to_string()));
        assert_eq!(value.get(), "caller");

        value.sync("typed".to_string());
        assert_eq!(value.get(), "typed");
    }

    #[test]
    fn test_default_is_uncontrolled() {
        let value: ValueSource<bool> = ValueSource::default();
        assert_eq!(value, ValueSource::Owned(false));
    }
}
