//! Failure taxonomy for step application.
//!
//! Every way a step can be rejected is one variant of [`RuleViolation`]. A
//! rejection is terminal for the playthrough: the engine wraps it in
//! [`GameOver`] together with the number of steps completed before it, and
//! processes no further steps. No variant is transient.

use thiserror::Error;

use super::command::Command;
use super::label::Label;

/// The classified reason a step was rejected.
///
/// The set is closed: consumers match exhaustively, and cases a given
/// consumer cannot receive are visible in its match rather than hidden
/// behind a runtime fallback.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// The object does not support the command at all.
    #[error("cannot {command} {object}")]
    IncompatibleStep {
        /// The attempted command.
        command: Command,
        /// The targeted object.
        object: Label,
    },

    /// The world has run out of the object.
    #[error("there are no {object}s left")]
    SupplyExhausted {
        /// The depleted object.
        object: Label,
    },

    /// The player has used the command as often as the rules allow.
    #[error("you have reached your {command} limit ({limit})")]
    CommandLimitExceeded {
        /// The over-used command.
        command: Command,
        /// The per-playthrough ceiling for the command.
        limit: u32,
    },

    /// The player already holds as many of the object as the rules allow.
    #[error("you already have a {object}")]
    ObjectLimitExceeded {
        /// The object the player tried to take again.
        object: Label,
        /// Maximum copies of one object the player may hold.
        limit: u32,
    },
}

/// Terminal failure of a playthrough.
///
/// Wraps the violation that ended the game together with the step count
/// reached before it. Displays as the underlying violation; the classified
/// cause stays extractable via [`GameOver::violation`] (or
/// `std::error::Error::source`) for programmatic inspection.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{violation}")]
pub struct GameOver {
    #[source]
    violation: RuleViolation,
    steps_completed: u32,
}

impl GameOver {
    /// Wrap a violation with the step count reached before it.
    #[must_use]
    pub fn new(violation: RuleViolation, steps_completed: u32) -> Self {
        Self {
            violation,
            steps_completed,
        }
    }

    /// The violation that ended the game.
    #[must_use]
    pub fn violation(&self) -> &RuleViolation {
        &self.violation
    }

    /// Steps successfully completed before the failure.
    #[must_use]
    pub fn steps_completed(&self) -> u32 {
        self.steps_completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display() {
        let incompatible = RuleViolation::IncompatibleStep {
            command: Command::Eat,
            object: Label::new("mirror"),
        };
        assert_eq!(format!("{}", incompatible), "cannot eat mirror");

        let exhausted = RuleViolation::SupplyExhausted {
            object: Label::new("apple"),
        };
        assert_eq!(format!("{}", exhausted), "there are no apples left");

        let command_limit = RuleViolation::CommandLimitExceeded {
            command: Command::Talk,
            limit: 1,
        };
        assert_eq!(
            format!("{}", command_limit),
            "you have reached your talk to limit (1)"
        );

        let object_limit = RuleViolation::ObjectLimitExceeded {
            object: Label::new("coin"),
            limit: 1,
        };
        assert_eq!(format!("{}", object_limit), "you already have a coin");
    }

    #[test]
    fn test_game_over_displays_as_violation() {
        let failure = GameOver::new(
            RuleViolation::SupplyExhausted {
                object: Label::new("mushroom"),
            },
            4,
        );
        assert_eq!(format!("{}", failure), "there are no mushrooms left");
        assert_eq!(failure.steps_completed(), 4);
    }

    #[test]
    fn test_game_over_cause_extraction() {
        let violation = RuleViolation::IncompatibleStep {
            command: Command::Talk,
            object: Label::new("coin"),
        };
        let failure = GameOver::new(violation.clone(), 0);

        assert_eq!(failure.violation(), &violation);

        // The cause is also reachable through the std error chain.
        let source = std::error::Error::source(&failure).unwrap();
        assert_eq!(format!("{}", source), "cannot talk to coin");
    }

    #[test]
    fn test_game_over_constructed_once_is_immutable() {
        let failure = GameOver::new(
            RuleViolation::CommandLimitExceeded {
                command: Command::Eat,
                limit: 2,
            },
            2,
        );
        let copy = failure.clone();
        assert_eq!(failure, copy);
    }
}
