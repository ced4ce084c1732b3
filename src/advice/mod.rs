//! Remediation advice for failed playthroughs.
//!
//! Advice is display-only: it is derived from the failure's classification
//! alone, never from its display text, and it never affects control flow.

use crate::core::{Command, GameOver, RuleViolation};

/// One-line remediation hint for `failure`.
///
/// Pure: the same failure always yields the same advice. The match is
/// exhaustive over the taxonomy; the one combination the engine cannot
/// produce (a take classified as a command limit, since repeated takes are
/// object limits) yields an empty string.
///
/// ## Example
///
/// ```
/// use rust_adventure::{advice, Adventure, Step};
///
/// let adventure = Adventure::new();
/// let mut game = adventure.start();
///
/// let failure = game.apply_step(&Step::eat("mirror")).unwrap_err();
/// assert_eq!(
///     advice::for_failure(&failure),
///     "performing `eat mirror` is never possible"
/// );
/// ```
#[must_use]
pub fn for_failure(failure: &GameOver) -> String {
    match failure.violation() {
        RuleViolation::IncompatibleStep { command, object } => {
            format!("performing `{} {}` is never possible", command, object)
        }
        RuleViolation::SupplyExhausted { object } => {
            format!("be careful — `{}` supply is scarce", object)
        }
        RuleViolation::CommandLimitExceeded {
            command: Command::Eat,
            ..
        } => "reduce how often you eat".to_string(),
        RuleViolation::CommandLimitExceeded {
            command: Command::Talk,
            ..
        } => "reduce how often you talk".to_string(),
        RuleViolation::CommandLimitExceeded {
            command: Command::Take,
            ..
        } => String::new(),
        RuleViolation::ObjectLimitExceeded { object, limit } => {
            format!("you already hold the maximum (`{}`) of `{}`", limit, object)
        }
    }
}
