//! Ready-made scenarios built on the engine.

pub mod adventure;
