//! One keyed table of entities.
//!
//! Tables are persistent maps: cloning is O(1) with structural sharing,
//! which is what makes the cascade engine's snapshot/rollback free. Keys
//! iterate in sorted order, so `list()` is deterministic.

use im::OrdMap;

/// A mapping from string key to one entity instance.
///
/// The table holds no integrity logic; it is the raw storage the
/// [`Datastore`](crate::Datastore) validates against before touching.
#[derive(Debug, Clone)]
pub struct EntityTable<T: Clone> {
    entries: OrdMap<String, T>,
}

impl<T: Clone> Default for EntityTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> EntityTable<T> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: OrdMap::new(),
        }
    }

    /// Returns the entity stored under `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts `entity` under `key`, returning the previous occupant if any.
    pub fn insert(&mut self, key: String, entity: T) -> Option<T> {
        self.entries.insert(key, entity)
    }

    /// Removes and returns the entity under `key`, if present.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.entries.remove(key)
    }

    /// Returns all keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Returns the number of stored entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(key, entity)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &T)> {
        self.entries.iter()
    }

    /// Iterates entities in key order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}
