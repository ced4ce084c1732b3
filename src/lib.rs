//! # rust-adventure
//!
//! A rule-validation engine for turn-based adventure commands.
//!
//! A player issues commands (eat, take, talk to) against objects drawn from
//! a shared, depleting world inventory. Every command/object pairing is
//! checked against static compatibility rules and dynamic usage limits; the
//! first violation ends the playthrough with a classified failure and a
//! remediation hint derived from the failure's kind alone.
//!
//! ## Design Principles
//!
//! 1. **Configuration Over Globals**: The object catalog and initial world
//!    counts are built once and passed into each `Game`. No process-wide
//!    mutable state.
//!
//! 2. **Closed Taxonomies**: Command kinds and failure kinds are fixed
//!    enums. Consumers match exhaustively; impossible cases are visible in
//!    the match instead of hiding behind a runtime fallback.
//!
//! 3. **First Failure Is Terminal**: A rejected step transitions the game to
//!    `Lost` and freezes the step counter. There is no retry inside the
//!    engine; advice is display-only and never affects control flow.
//!
//! ## Modules
//!
//! - `core`: Labels, commands, steps, player state, world inventory, failures
//! - `catalog`: Object definitions and the shared read-only catalog
//! - `rules`: Structural validation and the per-playthrough state machine
//! - `advice`: Failure-kind to remediation-hint mapping
//! - `games`: Ready-made scenarios built on the engine

pub mod advice;
pub mod catalog;
pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Command, GameOver, Label, PlayerState, RuleViolation, Step, StepRecord, WorldInventory,
    EAT_LIMIT, TAKE_LIMIT_PER_OBJECT, TALK_LIMIT,
};

pub use crate::catalog::{Catalog, ObjectDefinition};

pub use crate::rules::{Game, GameStatus, StepOutcome};

pub use crate::games::adventure::Adventure;
