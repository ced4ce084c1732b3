//! Step representation: command + object.
//!
//! A `Step` is one attempt within a playthrough. Whether it is legal is a
//! derived property (see `rules::validator`), never stored on the step.
//! `StepRecord` is the history entry kept for each step that succeeded.

use serde::{Deserialize, Serialize};

use super::command::Command;
use super::label::Label;

/// A single attempt: one command aimed at one object.
///
/// ## Example
///
/// ```
/// use rust_adventure::core::{Command, Step};
///
/// let step = Step::eat("apple");
/// assert_eq!(step, Step::new(Command::Eat, "apple"));
/// assert_eq!(format!("{}", step), "eat apple");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    /// The command being attempted.
    pub command: Command,

    /// Label of the object the command targets.
    pub object: Label,
}

impl Step {
    /// Create a step.
    #[must_use]
    pub fn new(command: Command, object: impl Into<Label>) -> Self {
        Self {
            command,
            object: object.into(),
        }
    }

    /// Create an eat step.
    #[must_use]
    pub fn eat(object: impl Into<Label>) -> Self {
        Self::new(Command::Eat, object)
    }

    /// Create a take step.
    #[must_use]
    pub fn take(object: impl Into<Label>) -> Self {
        Self::new(Command::Take, object)
    }

    /// Create a talk step.
    #[must_use]
    pub fn talk(object: impl Into<Label>) -> Self {
        Self::new(Command::Talk, object)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.command, self.object)
    }
}

/// A successfully applied step with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// The step that was applied.
    pub step: Step,

    /// Outcome text from the object's definition.
    pub outcome: String,

    /// 1-based position in the playthrough's success sequence.
    pub sequence: u32,
}

impl StepRecord {
    /// Create a new step record.
    #[must_use]
    pub fn new(step: Step, outcome: impl Into<String>, sequence: u32) -> Self {
        Self {
            step,
            outcome: outcome.into(),
            sequence,
        }
    }
}
