//! Recursive dependency closure.
//!
//! A graph-reachability computation over the dependency relation, in either
//! direction. Editors call this before destructive edits to show the full
//! set of entities an operation would touch. The traversal keeps a visited
//! set of `(store, key)` pairs, so it terminates even if the stored data
//! were ever to form a cycle.

use std::collections::BTreeSet;

use gridloom_foundation::{Dependents, Keyed, Result, StoreId};

use crate::datastore::Datastore;
use crate::record::Record;

/// Which dependency relation to traverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Back,
    Forward,
}

impl Datastore {
    /// Computes the transitive closure of everything `entity` references,
    /// directly or through intermediate entities.
    ///
    /// # Errors
    ///
    /// `DependentNotFound` / `LevelNameMismatch` if any visited entity fails
    /// back-dependency resolution, or `KeyNotFound` if a referenced entity
    /// disappears mid-traversal.
    pub fn back_dependents_recursive<E: Record>(&self, entity: &E) -> Result<Dependents> {
        let first_hop = entity.back_dependents(self)?;
        self.closure((E::STORE, entity.key()), first_hop, Direction::Back)
    }

    /// Computes the transitive closure of everything referencing `entity`,
    /// directly or through intermediate entities.
    ///
    /// This is the "deleting X will also delete Y, Z..." preview: it returns
    /// exactly the set a cascading delete of `entity` would remove.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` if a discovered dependent disappears mid-traversal.
    pub fn forward_dependents_recursive<E: Record>(&self, entity: &E) -> Result<Dependents> {
        let first_hop = entity.forward_dependents(self);
        self.closure((E::STORE, entity.key()), first_hop, Direction::Forward)
    }

    /// Worklist traversal accumulating per-store key sets.
    ///
    /// Each discovered `(store, key)` pair is expanded at most once; maps
    /// from every hop are unioned per store, deduplicating dependents that
    /// are reachable along several paths.
    fn closure(
        &self,
        seed: (StoreId, String),
        first_hop: Dependents,
        direction: Direction,
    ) -> Result<Dependents> {
        let mut visited: BTreeSet<(StoreId, String)> = BTreeSet::new();
        visited.insert(seed);

        let mut worklist: Vec<(StoreId, String)> = Vec::new();
        for (store, key) in first_hop.pairs() {
            if visited.insert((store, key.to_string())) {
                worklist.push((store, key.to_string()));
            }
        }

        let mut accumulated = first_hop;
        while let Some((store, key)) = worklist.pop() {
            let hop = match direction {
                Direction::Back => self.back_dependents_in(store, &key)?,
                Direction::Forward => self.forward_dependents_in(store, &key)?,
            };
            for (next_store, next_key) in hop.pairs() {
                if visited.insert((next_store, next_key.to_string())) {
                    worklist.push((next_store, next_key.to_string()));
                }
            }
            accumulated.merge(hop);
        }

        Ok(accumulated)
    }
}
