//! Command kinds.
//!
//! The command set is closed: scenarios pick from these three kinds rather
//! than registering their own. `Eat` and `Take` are depleting (a successful
//! step consumes one unit of world inventory); `Talk` is not.

use serde::{Deserialize, Serialize};

/// A command the player can issue against an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Consume an object by eating it.
    Eat,
    /// Acquire an object into the player's possession.
    Take,
    /// Interact with an object by talking to it.
    Talk,
}

impl Command {
    /// All command kinds, in a fixed order.
    pub const ALL: [Command; 3] = [Command::Eat, Command::Take, Command::Talk];

    /// Whether a successful step with this command consumes one unit of
    /// world inventory.
    #[must_use]
    pub const fn is_depleting(self) -> bool {
        matches!(self, Command::Eat | Command::Take)
    }

    /// The verb used in display text.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Command::Eat => "eat",
            Command::Take => "take",
            Command::Talk => "talk to",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.verb())
    }
}
