//! The root aggregate: one table per entity type, plus the CRUD surface.

use gridloom_foundation::{Dependents, Error, Keyed, Result, StoreId};
use gridloom_model::{
    Agent, AvailableYear, Commodity, LevelName, Process, Region, Sector, Timeslice,
};

use crate::record::Record;
use crate::table::EntityTable;

/// The in-memory datastore backing every editor view.
///
/// Owns one [`EntityTable`] per entity type and wires each type's resolver
/// to read from the sibling tables. All integrity enforcement happens here:
/// back-dependency validation before any write, cascading deletion of
/// forward dependents, and recursive dependency closure for impact previews.
///
/// Cloning is O(1) (persistent tables with structural sharing); `delete`
/// exploits this to snapshot the whole aggregate and roll back if a cascade
/// fails partway.
#[derive(Debug, Clone, Default)]
pub struct Datastore {
    pub(crate) regions: EntityTable<Region>,
    pub(crate) sectors: EntityTable<Sector>,
    pub(crate) level_names: EntityTable<LevelName>,
    pub(crate) years: EntityTable<AvailableYear>,
    pub(crate) timeslices: EntityTable<Timeslice>,
    pub(crate) commodities: EntityTable<Commodity>,
    pub(crate) agents: EntityTable<Agent>,
    pub(crate) processes: EntityTable<Process>,
}

impl Datastore {
    /// Creates an empty datastore.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a datastore from pre-validated entity collections, creating
    /// them in dependency order so references resolve as they are inserted.
    ///
    /// This is the loading path the importer uses after reading a settings
    /// tree.
    ///
    /// # Errors
    ///
    /// Fails with the first `KeyAlreadyExists`, `DependentNotFound`, or
    /// `LevelNameMismatch` encountered; nothing created earlier is undone.
    #[allow(clippy::too_many_arguments)]
    pub fn from_entities(
        regions: Vec<Region>,
        sectors: Vec<Sector>,
        level_names: Vec<LevelName>,
        years: Vec<AvailableYear>,
        timeslices: Vec<Timeslice>,
        commodities: Vec<Commodity>,
        agents: Vec<Agent>,
        processes: Vec<Process>,
    ) -> Result<Self> {
        let mut datastore = Self::new();
        for region in regions {
            datastore.create(region)?;
        }
        for sector in sectors {
            datastore.create(sector)?;
        }
        for level_name in level_names {
            datastore.create(level_name)?;
        }
        for year in years {
            datastore.create(year)?;
        }
        for timeslice in timeslices {
            datastore.create(timeslice)?;
        }
        for commodity in commodities {
            datastore.create(commodity)?;
        }
        for agent in agents {
            datastore.create(agent)?;
        }
        for process in processes {
            datastore.create(process)?;
        }
        Ok(datastore)
    }

    /// Creates an entity, projecting its key from the entity itself.
    ///
    /// # Errors
    ///
    /// - `KeyAlreadyExists` if the projected key is taken.
    /// - `DependentNotFound` / `LevelNameMismatch` if back-dependency
    ///   validation fails; nothing is written in that case.
    pub fn create<E: Record>(&mut self, entity: E) -> Result<E> {
        let key = entity.key();
        if E::table(self).contains(&key) {
            return Err(Error::key_already_exists(key, E::STORE));
        }
        entity.back_dependents(self)?;
        E::table_mut(self).insert(key, entity.clone());
        Ok(entity)
    }

    /// Reads the entity stored under `key`.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` if the key is absent.
    pub fn read<E: Record>(&self, key: &str) -> Result<E> {
        E::table(self)
            .get(key)
            .cloned()
            .ok_or_else(|| Error::key_not_found(key, E::STORE))
    }

    /// Replaces the entity under `existing_key` with `entity`.
    ///
    /// Back dependencies are re-validated for both the entity being replaced
    /// and the replacement. When the replacement projects a different key,
    /// the update is a rename: `create` under the new key followed by a
    /// cascading `delete` of the old one, so dependents of the old entity
    /// are removed along with it.
    ///
    /// # Errors
    ///
    /// - `KeyNotFound` if `existing_key` is absent.
    /// - `DependentNotFound` / `LevelNameMismatch` from validation.
    /// - `KeyAlreadyExists` if a rename targets a taken key.
    pub fn update<E: Record>(&mut self, existing_key: &str, entity: E) -> Result<E> {
        let Some(existing) = E::table(self).get(existing_key).cloned() else {
            return Err(Error::key_not_found(existing_key, E::STORE));
        };
        existing.back_dependents(self)?;
        entity.back_dependents(self)?;

        if entity.key() == existing_key {
            E::table_mut(self).insert(existing_key.to_string(), entity.clone());
            Ok(entity)
        } else {
            let created = self.create(entity)?;
            self.delete::<E>(existing_key)?;
            Ok(created)
        }
    }

    /// Deletes the entity under `key`, cascading to every forward dependent
    /// first (transitively, depth-first).
    ///
    /// The aggregate is snapshotted before the cascade starts; if any step
    /// fails for a reason other than a dependent already being gone, the
    /// snapshot is restored and the error surfaces with no partial deletion
    /// observable.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` if `key` is absent, or any error propagated out of the
    /// cascade.
    pub fn delete<E: Record>(&mut self, key: &str) -> Result<()> {
        if !E::table(self).contains(key) {
            return Err(Error::key_not_found(key, E::STORE));
        }
        let snapshot = self.clone();
        match self.cascade_delete(E::STORE, key) {
            Ok(_) => Ok(()),
            Err(err) => {
                *self = snapshot;
                Err(err)
            }
        }
    }

    /// Lists all keys in the store for `E`, in sorted order.
    #[must_use]
    pub fn list<E: Record>(&self) -> Vec<String> {
        E::table(self).keys()
    }

    /// Returns true if `key` is present in the store for `E`.
    #[must_use]
    pub fn contains<E: Record>(&self, key: &str) -> bool {
        E::table(self).contains(key)
    }

    /// Returns the number of entities in the store for `E`.
    #[must_use]
    pub fn len<E: Record>(&self) -> usize {
        E::table(self).len()
    }

    /// Resolves and returns every reference `entity` embeds.
    ///
    /// # Errors
    ///
    /// `DependentNotFound` / `LevelNameMismatch` on the first reference that
    /// fails to resolve.
    pub fn back_dependents<E: Record>(&self, entity: &E) -> Result<Dependents> {
        entity.back_dependents(self)
    }

    /// Scans sibling stores for entities referencing `entity`.
    #[must_use]
    pub fn forward_dependents<E: Record>(&self, entity: &E) -> Dependents {
        entity.forward_dependents(self)
    }

    /// One-hop back dependencies of the stored entity at `(store, key)`.
    pub(crate) fn back_dependents_in(&self, store: StoreId, key: &str) -> Result<Dependents> {
        match store {
            StoreId::Region => self.read::<Region>(key)?.back_dependents(self),
            StoreId::Sector => self.read::<Sector>(key)?.back_dependents(self),
            StoreId::LevelName => self.read::<LevelName>(key)?.back_dependents(self),
            StoreId::AvailableYear => self.read::<AvailableYear>(key)?.back_dependents(self),
            StoreId::Timeslice => self.read::<Timeslice>(key)?.back_dependents(self),
            StoreId::Commodity => self.read::<Commodity>(key)?.back_dependents(self),
            StoreId::Process => self.read::<Process>(key)?.back_dependents(self),
            StoreId::Agent => self.read::<Agent>(key)?.back_dependents(self),
        }
    }

    /// One-hop forward dependents of the stored entity at `(store, key)`.
    pub(crate) fn forward_dependents_in(&self, store: StoreId, key: &str) -> Result<Dependents> {
        Ok(match store {
            StoreId::Region => self.read::<Region>(key)?.forward_dependents(self),
            StoreId::Sector => self.read::<Sector>(key)?.forward_dependents(self),
            StoreId::LevelName => self.read::<LevelName>(key)?.forward_dependents(self),
            StoreId::AvailableYear => self.read::<AvailableYear>(key)?.forward_dependents(self),
            StoreId::Timeslice => self.read::<Timeslice>(key)?.forward_dependents(self),
            StoreId::Commodity => self.read::<Commodity>(key)?.forward_dependents(self),
            StoreId::Process => self.read::<Process>(key)?.forward_dependents(self),
            StoreId::Agent => self.read::<Agent>(key)?.forward_dependents(self),
        })
    }
}
