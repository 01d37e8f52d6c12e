//! The contract between an entity type and the root aggregate.

use gridloom_foundation::{Dependents, Keyed, Result, StoreId};

use crate::datastore::Datastore;
use crate::table::EntityTable;

/// An entity type stored in one of the aggregate's tables.
///
/// Implementations declare where the type's table lives and supply the two
/// resolver functions the integrity machinery is built from. Both resolver
/// functions are pure: they read sibling stores through the aggregate and
/// never mutate.
pub trait Record: Keyed + Clone {
    /// The store this entity type lives in.
    const STORE: StoreId;

    /// Borrows this type's table out of the aggregate.
    fn table(datastore: &Datastore) -> &EntityTable<Self>;

    /// Mutably borrows this type's table out of the aggregate.
    fn table_mut(datastore: &mut Datastore) -> &mut EntityTable<Self>;

    /// Resolves every reference this entity embeds.
    ///
    /// Called on every create and update, before any mutation commits.
    ///
    /// # Errors
    ///
    /// Fails with `DependentNotFound` on the first reference that does not
    /// resolve (or `LevelNameMismatch` for timeslice depth violations); the
    /// whole operation is then abandoned with no partial write.
    fn back_dependents(&self, datastore: &Datastore) -> Result<Dependents>;

    /// Scans sibling stores for entities referencing this one.
    ///
    /// No reverse index is maintained; the scan is recomputed on demand.
    /// Called on delete (to cascade) and by callers previewing the impact
    /// of a destructive edit.
    fn forward_dependents(&self, datastore: &Datastore) -> Dependents;
}
