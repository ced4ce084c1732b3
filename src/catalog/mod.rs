//! Object catalog: definitions and the registry.
//!
//! ## Key Types
//!
//! - `ObjectDefinition`: Static object data (label + command outcomes)
//! - `Catalog`: Definition lookup, built once and shared read-only
//!
//! The catalog carries no runtime state: supply counts live in
//! `core::world`, and what the player holds lives in `core::player`.

pub mod definition;
pub mod registry;

pub use definition::ObjectDefinition;
pub use registry::Catalog;
