//! Per-store sets of dependent entity keys.
//!
//! Dependency computations return a map from store to the keys involved in
//! that store. Values are sets, not lists: the same dependent may be reached
//! by several paths during a recursive traversal and must appear once.

use std::collections::{BTreeMap, BTreeSet};

use crate::store::StoreId;

/// A map from store to the set of entity keys implicated in a dependency
/// relation (either direction).
///
/// Backed by ordered collections so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependents(BTreeMap<StoreId, BTreeSet<String>>);

impl Dependents {
    /// Creates an empty dependent map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `key` as a dependent in `store`.
    pub fn insert(&mut self, store: StoreId, key: impl Into<String>) {
        self.0.entry(store).or_default().insert(key.into());
    }

    /// Unions another dependent map into this one, per-store.
    ///
    /// Duplicate keys collapse; this is a set union, not concatenation.
    pub fn merge(&mut self, other: Dependents) {
        for (store, keys) in other.0 {
            self.0.entry(store).or_default().extend(keys);
        }
    }

    /// Returns the dependent keys recorded for `store`, if any.
    #[must_use]
    pub fn get(&self, store: StoreId) -> Option<&BTreeSet<String>> {
        self.0.get(&store)
    }

    /// Returns true if `key` is recorded as a dependent in `store`.
    #[must_use]
    pub fn contains(&self, store: StoreId, key: &str) -> bool {
        self.0.get(&store).is_some_and(|keys| keys.contains(key))
    }

    /// Returns true if no dependents are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeSet::is_empty)
    }

    /// Returns the total number of recorded dependent keys across all stores.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }

    /// Iterates `(store, keys)` pairs in store order.
    pub fn iter(&self) -> impl Iterator<Item = (StoreId, &BTreeSet<String>)> {
        self.0.iter().map(|(store, keys)| (*store, keys))
    }

    /// Iterates every `(store, key)` pair in deterministic order.
    pub fn pairs(&self) -> impl Iterator<Item = (StoreId, &str)> {
        self.0
            .iter()
            .flat_map(|(store, keys)| keys.iter().map(|key| (*store, key.as_str())))
    }
}

impl FromIterator<(StoreId, String)> for Dependents {
    fn from_iter<I: IntoIterator<Item = (StoreId, String)>>(iter: I) -> Self {
        let mut deps = Dependents::new();
        for (store, key) in iter {
            deps.insert(store, key);
        }
        deps
    }
}
