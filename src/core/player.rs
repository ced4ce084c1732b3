//! Player state: usage counters and acquired objects.
//!
//! ## Limits
//!
//! Each command kind has a fixed per-playthrough ceiling, named here as a
//! constant rather than scattered as inline literals:
//!
//! - [`EAT_LIMIT`]: two eats succeed, the third is rejected
//! - [`TALK_LIMIT`]: one talk succeeds, the second is rejected
//! - [`TAKE_LIMIT_PER_OBJECT`]: one copy of each distinct object
//!
//! Mutation is commit-on-success only: a rejected operation leaves the
//! state exactly as it was.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use super::command::Command;
use super::error::RuleViolation;
use super::label::Label;

/// Maximum number of successful eats per playthrough.
pub const EAT_LIMIT: u32 = 2;

/// Maximum number of successful talks per playthrough.
pub const TALK_LIMIT: u32 = 1;

/// Maximum copies of one distinct object the player may hold.
pub const TAKE_LIMIT_PER_OBJECT: u32 = 1;

/// Per-playthrough player state.
///
/// Created empty at game start and mutated only through successful step
/// application; never reset mid-game.
///
/// Uses an `im` persistent set for the acquired objects, keeping the owning
/// `Game` cheap to clone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    eaten: u32,
    talked: u32,
    acquired: ImHashSet<Label>,
}

impl PlayerState {
    /// Create an empty player state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful eats so far.
    #[must_use]
    pub fn eaten(&self) -> u32 {
        self.eaten
    }

    /// Number of successful talks so far.
    #[must_use]
    pub fn talked(&self) -> u32 {
        self.talked
    }

    /// Whether the player holds `object`.
    #[must_use]
    pub fn holds(&self, object: &Label) -> bool {
        self.acquired.contains(object)
    }

    /// Number of distinct objects held.
    #[must_use]
    pub fn held_count(&self) -> usize {
        self.acquired.len()
    }

    /// Iterate over the objects held.
    pub fn held(&self) -> impl Iterator<Item = &Label> {
        self.acquired.iter()
    }

    /// Record one eat.
    ///
    /// Fails with [`RuleViolation::CommandLimitExceeded`] once [`EAT_LIMIT`]
    /// eats have already happened.
    pub fn eat(&mut self) -> Result<(), RuleViolation> {
        if self.eaten >= EAT_LIMIT {
            return Err(RuleViolation::CommandLimitExceeded {
                command: Command::Eat,
                limit: EAT_LIMIT,
            });
        }
        self.eaten += 1;
        Ok(())
    }

    /// Acquire `object`.
    ///
    /// Fails with [`RuleViolation::ObjectLimitExceeded`] when the player
    /// already holds it.
    pub fn take(&mut self, object: &Label) -> Result<(), RuleViolation> {
        if self.acquired.contains(object) {
            return Err(RuleViolation::ObjectLimitExceeded {
                object: object.clone(),
                limit: TAKE_LIMIT_PER_OBJECT,
            });
        }
        self.acquired.insert(object.clone());
        Ok(())
    }

    /// Record one talk.
    ///
    /// Fails with [`RuleViolation::CommandLimitExceeded`] once
    /// [`TALK_LIMIT`] talks have already happened.
    pub fn talk(&mut self) -> Result<(), RuleViolation> {
        if self.talked >= TALK_LIMIT {
            return Err(RuleViolation::CommandLimitExceeded {
                command: Command::Talk,
                limit: TALK_LIMIT,
            });
        }
        self.talked += 1;
        Ok(())
    }

    /// Route `command` to the matching operation.
    pub fn apply(&mut self, command: Command, object: &Label) -> Result<(), RuleViolation> {
        match command {
            Command::Eat => self.eat(),
            Command::Take => self.take(object),
            Command::Talk => self.talk(),
        }
    }
}
