//! Object definitions - static object data.
//!
//! `ObjectDefinition` holds the immutable properties of a game object: its
//! label and the commands it supports, each mapped to the outcome text a
//! successful step produces. Runtime state (remaining supply, what the
//! player holds) lives in `core::world` and `core::player`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Command, Label};

/// Static definition of a game object.
///
/// The outcome mapping may be empty (an object can support no commands);
/// map semantics guarantee at most one outcome per command.
///
/// ## Example
///
/// ```
/// use rust_adventure::catalog::ObjectDefinition;
/// use rust_adventure::core::Command;
///
/// let apple = ObjectDefinition::new("apple")
///     .with_outcome(Command::Eat, "mmm, delicious!")
///     .with_outcome(Command::Take, "you have an apple now");
///
/// assert!(apple.supports(Command::Eat));
/// assert!(!apple.supports(Command::Talk));
/// assert_eq!(apple.outcome(Command::Eat), Some("mmm, delicious!"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDefinition {
    /// The object's identity.
    pub label: Label,

    /// Outcome text per supported command.
    outcomes: FxHashMap<Command, String>,
}

impl ObjectDefinition {
    /// Create a definition that supports no commands.
    #[must_use]
    pub fn new(label: impl Into<Label>) -> Self {
        Self {
            label: label.into(),
            outcomes: FxHashMap::default(),
        }
    }

    /// Declare a supported command and its outcome text (builder pattern).
    #[must_use]
    pub fn with_outcome(mut self, command: Command, outcome: impl Into<String>) -> Self {
        self.outcomes.insert(command, outcome.into());
        self
    }

    /// Whether the object supports `command`.
    #[must_use]
    pub fn supports(&self, command: Command) -> bool {
        self.outcomes.contains_key(&command)
    }

    /// Outcome text for `command`, if supported.
    #[must_use]
    pub fn outcome(&self, command: Command) -> Option<&str> {
        self.outcomes.get(&command).map(String::as_str)
    }

    /// Iterate over the commands this object supports.
    pub fn supported_commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.outcomes.keys().copied()
    }
}
