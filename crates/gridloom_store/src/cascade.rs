//! Cascading deletion of forward dependents.
//!
//! Deleting an entity must never leave a dangling reference behind, so the
//! engine removes every forward dependent first, depth-first. Branches of a
//! cascade can race each other to the same entity; the step outcome makes
//! the "already gone is fine" policy explicit instead of hiding it in a
//! swallowed error.

use gridloom_foundation::{Result, StoreId};
use gridloom_model::{
    Agent, AvailableYear, Commodity, LevelName, Process, Region, Sector, Timeslice,
};

use crate::datastore::Datastore;
use crate::record::Record;

/// Outcome of one cascade step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The entity was present and has been removed.
    Deleted,
    /// The entity was already gone, removed by an earlier branch of the
    /// same cascade. Not an error: deletion is idempotent.
    AlreadyAbsent,
}

impl Datastore {
    /// Deletes the entity at `(store, key)` after recursively deleting all
    /// of its forward dependents.
    pub(crate) fn cascade_delete(&mut self, store: StoreId, key: &str) -> Result<DeleteOutcome> {
        match store {
            StoreId::Region => self.cascade_delete_typed::<Region>(key),
            StoreId::Sector => self.cascade_delete_typed::<Sector>(key),
            StoreId::LevelName => self.cascade_delete_typed::<LevelName>(key),
            StoreId::AvailableYear => self.cascade_delete_typed::<AvailableYear>(key),
            StoreId::Timeslice => self.cascade_delete_typed::<Timeslice>(key),
            StoreId::Commodity => self.cascade_delete_typed::<Commodity>(key),
            StoreId::Process => self.cascade_delete_typed::<Process>(key),
            StoreId::Agent => self.cascade_delete_typed::<Agent>(key),
        }
    }

    fn cascade_delete_typed<E: Record>(&mut self, key: &str) -> Result<DeleteOutcome> {
        let Some(entity) = E::table(self).get(key).cloned() else {
            return Ok(DeleteOutcome::AlreadyAbsent);
        };

        // The dependent scan is computed once, up front; dependents created
        // by the cascade itself are impossible since nothing is inserted
        // while it runs.
        let forward = entity.forward_dependents(self);
        let pairs: Vec<(StoreId, String)> = forward
            .pairs()
            .map(|(store, dep_key)| (store, dep_key.to_string()))
            .collect();

        for (dep_store, dep_key) in pairs {
            self.cascade_delete(dep_store, &dep_key)?;
        }

        E::table_mut(self).remove(key);
        Ok(DeleteOutcome::Deleted)
    }
}
