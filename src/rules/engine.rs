//! Game engine: the per-playthrough state machine.
//!
//! A `Game` owns the player state and world inventory for one playthrough
//! and borrows the shared catalog. Steps are applied one at a time; the
//! first violation transitions the game to `Lost` with a classified
//! [`GameOver`], and the step counter freezes at the failing step.
//!
//! ## Check order
//!
//! 1. Structural compatibility (`rules::validator`).
//! 2. World supply, for depleting commands. A resourced depleting step
//!    spends its unit here, before the player-limit check, and the unit is
//!    not restored if that check rejects: the supply is consumed by the
//!    attempt.
//! 3. Player limits (`core::player`).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::core::{
    GameOver, Label, PlayerState, RuleViolation, Step, StepRecord, WorldInventory,
};

use super::validator;

/// Progress state of a playthrough.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Steps are still being accepted.
    #[default]
    InProgress,
    /// The caller ended the sequence without a violation.
    Won,
    /// A step was rejected; no further steps are processed.
    Lost,
}

/// Result of one successfully applied step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Outcome text from the object's definition.
    pub description: String,

    /// Steps completed, including this one.
    pub steps_completed: u32,
}

/// One playthrough: player state, world inventory, and step bookkeeping.
///
/// The catalog is borrowed: it is built once, outlives the game, and any
/// number of games can share it. Player state and world inventory are owned
/// exclusively for the game's lifetime.
///
/// ## Example
///
/// ```
/// use rust_adventure::{Adventure, GameStatus, Step};
///
/// let adventure = Adventure::new();
/// let mut game = adventure.start();
///
/// let outcome = game.apply_step(&Step::eat("apple")).unwrap();
/// assert_eq!(outcome.description, "mmm, delicious!");
/// assert_eq!(game.steps_completed(), 1);
/// assert_eq!(game.status(), GameStatus::InProgress);
/// ```
#[derive(Clone, Debug)]
pub struct Game<'a> {
    catalog: &'a Catalog,
    player: PlayerState,
    world: WorldInventory,
    status: GameStatus,
    steps_completed: u32,
    history: Vector<StepRecord>,
}

impl<'a> Game<'a> {
    /// Start a playthrough against `catalog` with the given initial world
    /// counts.
    ///
    /// Always succeeds: the player state starts empty and the step count at
    /// 0. Objects missing from `initial_counts` simply read as depleted.
    #[must_use]
    pub fn new(
        catalog: &'a Catalog,
        initial_counts: impl IntoIterator<Item = (Label, u32)>,
    ) -> Self {
        Self {
            catalog,
            player: PlayerState::new(),
            world: WorldInventory::new(initial_counts),
            status: GameStatus::InProgress,
            steps_completed: 0,
            history: Vector::new(),
        }
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Steps successfully completed so far.
    #[must_use]
    pub fn steps_completed(&self) -> u32 {
        self.steps_completed
    }

    /// The player's state.
    #[must_use]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// The world inventory.
    #[must_use]
    pub fn world(&self) -> &WorldInventory {
        &self.world
    }

    /// The shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Records of every successful step, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<StepRecord> {
        &self.history
    }

    /// Apply one step.
    ///
    /// On success the step counter advances by one and the object's outcome
    /// text is returned. On the first violation the game transitions to
    /// [`GameStatus::Lost`], no further mutation happens for that step, and
    /// the returned [`GameOver`] carries the step count reached before the
    /// failure.
    ///
    /// Calling this on a game that is no longer [`GameStatus::InProgress`]
    /// is a caller contract violation; it is debug-asserted, not enforced in
    /// release builds.
    pub fn apply_step(&mut self, step: &Step) -> Result<StepOutcome, GameOver> {
        debug_assert_eq!(
            self.status,
            GameStatus::InProgress,
            "step applied to a finished game"
        );

        if !validator::is_step_valid(self.catalog, step) {
            return Err(self.fail(RuleViolation::IncompatibleStep {
                command: step.command,
                object: step.object.clone(),
            }));
        }

        // Resolved up front; validity was just established.
        let description = self
            .catalog
            .get(&step.object)
            .and_then(|object| object.outcome(step.command))
            .unwrap_or_default()
            .to_string();

        // The unit is spent even if the player check below rejects.
        if step.command.is_depleting() {
            if let Err(violation) = self.world.consume_one(&step.object) {
                return Err(self.fail(violation));
            }
        }

        if let Err(violation) = self.player.apply(step.command, &step.object) {
            return Err(self.fail(violation));
        }

        self.steps_completed += 1;
        self.history.push_back(StepRecord::new(
            step.clone(),
            description.clone(),
            self.steps_completed,
        ));

        Ok(StepOutcome {
            description,
            steps_completed: self.steps_completed,
        })
    }

    /// Mark the playthrough won.
    ///
    /// The engine never decides victory itself: the caller invokes this when
    /// its step sequence is exhausted. A lost game stays lost.
    pub fn complete(&mut self) {
        if self.status == GameStatus::InProgress {
            self.status = GameStatus::Won;
        }
    }

    /// Apply a whole sequence, completing the game if every step succeeds.
    ///
    /// Returns the total steps completed, or the first failure.
    pub fn run<'s>(&mut self, steps: impl IntoIterator<Item = &'s Step>) -> Result<u32, GameOver> {
        for step in steps {
            self.apply_step(step)?;
        }
        self.complete();
        Ok(self.steps_completed)
    }

    fn fail(&mut self, violation: RuleViolation) -> GameOver {
        self.status = GameStatus::Lost;
        GameOver::new(violation, self.steps_completed)
    }
}
