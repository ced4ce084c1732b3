//! Standard adventure scenario implementation.

use crate::catalog::{Catalog, ObjectDefinition};
use crate::core::{Command, Label};
use crate::rules::Game;

/// The standard scenario: a fixed five-object catalog plus default world
/// counts.
///
/// Owns the catalog so that any number of playthroughs can borrow it; each
/// [`Adventure::start`] yields a fresh game with its own player state and
/// world inventory.
#[derive(Clone, Debug)]
pub struct Adventure {
    catalog: Catalog,
    initial_counts: Vec<(Label, u32)>,
}

impl Default for Adventure {
    fn default() -> Self {
        Self::new()
    }
}

impl Adventure {
    /// Build the standard catalog and counts.
    #[must_use]
    pub fn new() -> Self {
        let mut catalog = Catalog::new();

        catalog.register(
            ObjectDefinition::new("apple")
                .with_outcome(Command::Eat, "mmm, delicious!")
                .with_outcome(Command::Take, "you have an apple now"),
        );
        catalog.register(
            ObjectDefinition::new("bob").with_outcome(Command::Talk, "Bob says hello"),
        );
        catalog.register(
            ObjectDefinition::new("coin").with_outcome(Command::Take, "you have a coin now"),
        );
        catalog.register(
            ObjectDefinition::new("mirror")
                .with_outcome(Command::Take, "you have a mirror now")
                .with_outcome(Command::Talk, "mirror does not answer"),
        );
        catalog.register(
            ObjectDefinition::new("mushroom")
                .with_outcome(Command::Eat, "tastes funny")
                .with_outcome(Command::Take, "you have a mushroom now"),
        );

        // Bob carries no supply entry: talking is not depleting.
        let initial_counts = vec![
            (Label::new("apple"), 2),
            (Label::new("coin"), 3),
            (Label::new("mirror"), 1),
            (Label::new("mushroom"), 1),
        ];

        Self {
            catalog,
            initial_counts,
        }
    }

    /// The shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Initial world counts for a fresh playthrough.
    #[must_use]
    pub fn initial_counts(&self) -> &[(Label, u32)] {
        &self.initial_counts
    }

    /// Start a fresh playthrough of the standard scenario.
    #[must_use]
    pub fn start(&self) -> Game<'_> {
        Game::new(&self.catalog, self.initial_counts.iter().cloned())
    }
}
