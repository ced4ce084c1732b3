//! Core engine types: labels, commands, steps, player and world state, and
//! the failure taxonomy.
//!
//! Everything here is scenario-agnostic. The catalog supplies the concrete
//! objects, and `rules::engine` drives the state machine.

pub mod command;
pub mod error;
pub mod label;
pub mod player;
pub mod step;
pub mod world;

pub use command::Command;
pub use error::{GameOver, RuleViolation};
pub use label::Label;
pub use player::{PlayerState, EAT_LIMIT, TAKE_LIMIT_PER_OBJECT, TALK_LIMIT};
pub use step::{Step, StepRecord};
pub use world::WorldInventory;
