//! Geographic regions.

use gridloom_foundation::Keyed;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A geographic region of the modelled system.
///
/// Regions are pure names; everything else (prices, capacities, agent data)
/// hangs off other entities keyed by region name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    /// Unique region name, e.g. `"R1"` or `"UK"`.
    pub name: String,
}

impl Region {
    /// Creates a region with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Keyed for Region {
    fn key(&self) -> String {
        self.name.clone()
    }
}
