//! World inventory: the shared, depleting supply of objects.
//!
//! Counts are unsigned, so the supply can never go negative. Labels the
//! world never stocked read as 0 remaining (depleted), not as an error.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::RuleViolation;
use super::label::Label;

/// Remaining-count ledger for the game world.
///
/// Decremented only by successful depleting commands, one unit at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldInventory {
    counts: FxHashMap<Label, u32>,
}

impl WorldInventory {
    /// Create an inventory from initial counts.
    #[must_use]
    pub fn new(initial: impl IntoIterator<Item = (Label, u32)>) -> Self {
        Self {
            counts: initial.into_iter().collect(),
        }
    }

    /// Remaining supply of `object`.
    ///
    /// Returns 0 for labels the world never stocked.
    #[must_use]
    pub fn remaining(&self, object: &Label) -> u32 {
        self.counts.get(object).copied().unwrap_or(0)
    }

    /// Consume one unit of `object`.
    ///
    /// Fails with [`RuleViolation::SupplyExhausted`] when none remain;
    /// otherwise decrements by exactly 1.
    pub fn consume_one(&mut self, object: &Label) -> Result<(), RuleViolation> {
        match self.counts.get_mut(object) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(())
            }
            _ => Err(RuleViolation::SupplyExhausted {
                object: object.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_label_reads_as_depleted() {
        let world = WorldInventory::new([]);
        assert_eq!(world.remaining(&Label::new("apple")), 0);
    }

    #[test]
    fn test_consume_decrements_by_one() {
        let apple = Label::new("apple");
        let mut world = WorldInventory::new([(apple.clone(), 2)]);

        assert!(world.consume_one(&apple).is_ok());
        assert_eq!(world.remaining(&apple), 1);
        assert!(world.consume_one(&apple).is_ok());
        assert_eq!(world.remaining(&apple), 0);
    }

    #[test]
    fn test_consume_at_zero_fails_without_mutation() {
        let mirror = Label::new("mirror");
        let mut world = WorldInventory::new([(mirror.clone(), 1)]);

        assert!(world.consume_one(&mirror).is_ok());

        let violation = world.consume_one(&mirror).unwrap_err();
        assert_eq!(
            violation,
            RuleViolation::SupplyExhausted {
                object: mirror.clone(),
            }
        );
        assert_eq!(world.remaining(&mirror), 0);
    }

    #[test]
    fn test_consume_unknown_label_fails() {
        let mut world = WorldInventory::new([(Label::new("coin"), 3)]);
        assert!(world.consume_one(&Label::new("sword")).is_err());
        assert_eq!(world.remaining(&Label::new("coin")), 3);
    }

    #[test]
    fn test_zero_initial_count_is_exhausted() {
        let bob = Label::new("bob");
        let mut world = WorldInventory::new([(bob.clone(), 0)]);
        assert!(world.consume_one(&bob).is_err());
    }

    #[test]
    fn test_world_inventory_serialization() {
        let world = WorldInventory::new([(Label::new("apple"), 2), (Label::new("coin"), 3)]);
        let json = serde_json::to_string(&world).unwrap();
        let deserialized: WorldInventory = serde_json::from_str(&json).unwrap();
        assert_eq!(world, deserialized);
    }
}
