//! Structural step validation.
//!
//! A step is structurally valid when the catalog knows its object and that
//! object supports its command. The check reads nothing but the catalog:
//! supply and player limits are the engine's concern.

use crate::catalog::Catalog;
use crate::core::Step;

/// Whether `step` is structurally legal under `catalog`.
///
/// Pure membership test with no failure mode. An object the catalog does
/// not know supports nothing.
#[must_use]
pub fn is_step_valid(catalog: &Catalog, step: &Step) -> bool {
    catalog
        .get(&step.object)
        .map_or(false, |object| object.supports(step.command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ObjectDefinition;
    use crate::core::{Command, Step};

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.register(
            ObjectDefinition::new("apple")
                .with_outcome(Command::Eat, "ok")
                .with_outcome(Command::Take, "ok"),
        );
        catalog.register(ObjectDefinition::new("bob").with_outcome(Command::Talk, "hello"));
        catalog
    }

    #[test]
    fn test_supported_pairing_is_valid() {
        let catalog = catalog();
        assert!(is_step_valid(&catalog, &Step::eat("apple")));
        assert!(is_step_valid(&catalog, &Step::take("apple")));
        assert!(is_step_valid(&catalog, &Step::talk("bob")));
    }

    #[test]
    fn test_unsupported_pairing_is_invalid() {
        let catalog = catalog();
        assert!(!is_step_valid(&catalog, &Step::talk("apple")));
        assert!(!is_step_valid(&catalog, &Step::eat("bob")));
    }

    #[test]
    fn test_unknown_object_is_invalid() {
        let catalog = catalog();
        assert!(!is_step_valid(&catalog, &Step::take("sword")));
    }

    #[test]
    fn test_validation_is_pure() {
        let catalog = catalog();
        let step = Step::eat("apple");
        // Same inputs, same answer; nothing is consumed by asking.
        assert_eq!(
            is_step_valid(&catalog, &step),
            is_step_valid(&catalog, &step)
        );
    }
}
