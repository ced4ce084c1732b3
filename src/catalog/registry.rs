//! Catalog of object definitions.
//!
//! The `Catalog` stores every object a scenario can reference. It is built
//! once at startup and then shared read-only: it outlives any single game,
//! and games never mutate it.

use rustc_hash::FxHashMap;

use crate::core::{Command, Label};

use super::definition::ObjectDefinition;

/// Registry of object definitions.
///
/// ## Example
///
/// ```
/// use rust_adventure::catalog::{Catalog, ObjectDefinition};
/// use rust_adventure::core::{Command, Label};
///
/// let mut catalog = Catalog::new();
/// catalog.register(ObjectDefinition::new("bob").with_outcome(Command::Talk, "Bob says hello"));
///
/// let bob = catalog.get(&Label::new("bob")).unwrap();
/// assert!(bob.supports(Command::Talk));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    objects: FxHashMap<Label, ObjectDefinition>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object definition.
    ///
    /// Panics if an object with the same label already exists.
    pub fn register(&mut self, object: ObjectDefinition) {
        if self.objects.contains_key(&object.label) {
            panic!("Object with label {:?} already registered", object.label);
        }
        self.objects.insert(object.label.clone(), object);
    }

    /// Get an object definition by label.
    #[must_use]
    pub fn get(&self, label: &Label) -> Option<&ObjectDefinition> {
        self.objects.get(label)
    }

    /// Check if a label is registered.
    #[must_use]
    pub fn contains(&self, label: &Label) -> bool {
        self.objects.contains_key(label)
    }

    /// Get the number of registered objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over all object definitions.
    pub fn iter(&self) -> impl Iterator<Item = &ObjectDefinition> {
        self.objects.values()
    }

    /// Find objects supporting a command.
    pub fn supporting(&self, command: Command) -> impl Iterator<Item = &ObjectDefinition> {
        self.objects
            .values()
            .filter(move |object| object.supports(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut catalog = Catalog::new();
        catalog.register(ObjectDefinition::new("apple").with_outcome(Command::Eat, "ok"));

        let found = catalog.get(&Label::new("apple"));
        assert!(found.is_some());
        assert!(found.unwrap().supports(Command::Eat));

        assert!(catalog.get(&Label::new("sword")).is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_label_panics() {
        let mut catalog = Catalog::new();
        catalog.register(ObjectDefinition::new("coin"));
        catalog.register(ObjectDefinition::new("coin")); // Should panic
    }

    #[test]
    fn test_contains_and_len() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        catalog.register(ObjectDefinition::new("coin"));
        catalog.register(ObjectDefinition::new("mirror"));

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(&Label::new("coin")));
        assert!(!catalog.contains(&Label::new("bob")));
    }

    #[test]
    fn test_supporting() {
        let mut catalog = Catalog::new();
        catalog.register(ObjectDefinition::new("apple").with_outcome(Command::Eat, "ok"));
        catalog.register(ObjectDefinition::new("mushroom").with_outcome(Command::Eat, "ok"));
        catalog.register(ObjectDefinition::new("bob").with_outcome(Command::Talk, "hello"));

        assert_eq!(catalog.supporting(Command::Eat).count(), 2);
        assert_eq!(catalog.supporting(Command::Talk).count(), 1);
        assert_eq!(catalog.supporting(Command::Take).count(), 0);
    }

    #[test]
    fn test_iteration() {
        let mut catalog = Catalog::new();
        catalog.register(ObjectDefinition::new("apple"));
        catalog.register(ObjectDefinition::new("coin"));

        let labels: Vec<_> = catalog.iter().map(|object| object.label.clone()).collect();
        assert_eq!(labels.len(), 2);
        assert!(labels.contains(&Label::new("apple")));
        assert!(labels.contains(&Label::new("coin")));
    }
}
