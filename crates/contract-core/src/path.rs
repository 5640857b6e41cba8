//! # Field Paths
//!
//! Dot-joined locations inside a validated value. The root path is the
//! empty string; the first segment carries no leading dot. Array indices
//! and map keys are segments like any other (`items.0`, `prices.usd`).

use std::fmt;

/// Location of a value relative to the root of the document being validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    /// The root path (empty string).
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Returns true for the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw dot-joined path. Empty at the root.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extend the path by one segment.
    ///
    /// ```
    /// use contract_core::FieldPath;
    ///
    /// let user = FieldPath::root().push("user");
    /// assert_eq!(user.as_str(), "user");
    /// assert_eq!(user.push("tags").push(0).as_str(), "user.tags.0");
    /// ```
    pub fn push(&self, segment: impl fmt::Display) -> Self {
        if self.is_root() {
            Self(segment.to_string())
        } else {
            Self(format!("{}.{segment}", self.0))
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("(root)")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_empty() {
        let root = FieldPath::root();
        assert!(root.is_root());
        assert_eq!(root.as_str(), "");
        assert_eq!(root, FieldPath::default());
    }

    #[test]
    fn first_segment_has_no_leading_dot() {
        assert_eq!(FieldPath::root().push("name").as_str(), "name");
    }

    #[test]
    fn nested_segments_are_dot_joined() {
        let path = FieldPath::root().push("order").push("lines").push(3).push("sku");
        assert_eq!(path.as_str(), "order.lines.3.sku");
    }

    #[test]
    fn display_marks_root() {
        assert_eq!(FieldPath::root().to_string(), "(root)");
        assert_eq!(FieldPath::from("a.b").to_string(), "a.b");
    }
}
