//! The standard adventure scenario.
//!
//! A small fixed world that exercises every rule in the engine:
//! - five objects: apple, bob, coin, mirror, mushroom
//! - every command kind supported somewhere, none supported everywhere
//! - scarce supply (one mirror, one mushroom)
//!
//! Useful as a ready-made game and as the reference scenario in tests.

mod game;

pub use game::Adventure;
