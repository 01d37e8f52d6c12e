//! Typed identifiers for the entity stores.
//!
//! Every cross-store reference is addressed by a `(StoreId, key)` pair.
//! Using an enum rather than store names keeps dispatch exhaustive: adding
//! a store is a compile error everywhere a match forgets it.

use std::fmt;

/// Identifies one of the entity stores owned by the root aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StoreId {
    /// Geographic regions.
    Region,
    /// Economic sectors (standard or preset).
    Sector,
    /// Timeslice hierarchy level names.
    LevelName,
    /// Years the model may reference.
    AvailableYear,
    /// Hierarchical timeslices, keyed by dotted name.
    Timeslice,
    /// Traded commodities.
    Commodity,
    /// Processes (technologies).
    Process,
    /// Investment agents.
    Agent,
}

impl StoreId {
    /// All store identifiers, in creation-dependency order: entities earlier
    /// in this list never reference entities later in it.
    pub const ALL: [StoreId; 8] = [
        StoreId::Region,
        StoreId::Sector,
        StoreId::LevelName,
        StoreId::AvailableYear,
        StoreId::Timeslice,
        StoreId::Commodity,
        StoreId::Agent,
        StoreId::Process,
    ];

    /// Returns the snake_case store name used in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            StoreId::Region => "region",
            StoreId::Sector => "sector",
            StoreId::LevelName => "level_name",
            StoreId::AvailableYear => "available_year",
            StoreId::Timeslice => "timeslice",
            StoreId::Commodity => "commodity",
            StoreId::Process => "process",
            StoreId::Agent => "agent",
        }
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
