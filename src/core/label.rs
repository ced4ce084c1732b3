//! Opaque identity labels.
//!
//! A `Label` names a game object. The engine compares labels for equality
//! and hashes them as map keys; it never interprets their contents.

use serde::{Deserialize, Serialize};

/// Unique, comparable name for a game object.
///
/// ## Example
///
/// ```
/// use rust_adventure::core::Label;
///
/// let apple = Label::new("apple");
/// assert_eq!(apple, Label::new("apple"));
/// assert_eq!(apple.as_str(), "apple");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label(String);

impl Label {
    /// Create a new label.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the raw name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
