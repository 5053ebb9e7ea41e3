//! Symbolic class tags
//!
//! Components never compute colors or pixel values. They emit class tags that
//! an external stylesheet maps onto design tokens; a [`ClassList`] is the
//! ordered, duplicate-free set of tags for one element.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// Ordered set of class tags for one element
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassList(SmallVec<[Cow<'static, str>; 8]>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag; empty and repeated tags are dropped
    pub fn push(&mut self, tag: impl Into<Cow<'static, str>>) {
        let tag = tag.into();
        if tag.is_empty() || self.contains(&tag) {
            return;
        }
        self.0.push(tag);
    }

    /// Append a tag only when `condition` holds
    pub fn push_if(&mut self, condition: bool, tag: impl Into<Cow<'static, str>>) {
        if condition {
            self.push(tag);
        }
    }

    /// Builder-style [`push`](Self::push)
    pub fn with(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.push(tag);
        self
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|t| t.as_ref())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(tag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_skips_empty_and_duplicates() {
        let mut classes = ClassList::new().with("input").with("inputLg");
        classes.push("");
        classes.push("input");
        classes.push(format!("{}Container", "text"));
        classes.push_if(false, "disabled");

        assert_eq!(classes.len(), 3);
        assert!(classes.contains("textContainer"));
        assert!(!classes.contains("disabled"));
        assert_eq!(classes.to_string(), "input inputLg textContainer");
    }

    #[test]
    fn test_serializes_as_list() {
        let classes = ClassList::new().with("button").with("primary");
        let json = serde_json::to_string(&classes).unwrap();
        assert_eq!(json, r#"["button","primary"]"#);
    }
}
