//! Timeslices, hierarchy level names, and available years.

use gridloom_foundation::Keyed;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One leaf of the timeslice hierarchy, keyed by its dotted path.
///
/// The name must have exactly one segment per registered [`LevelName`];
/// the store enforces this on create/update.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timeslice {
    /// Dotted-path name, e.g. `"winter.weekday.morning"`.
    pub name: String,
    /// Weight of this slice, typically hours.
    pub value: f64,
}

impl Timeslice {
    /// Creates a timeslice from a dotted name and weight.
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Returns the segments of the dotted name, in hierarchy order.
    #[must_use]
    pub fn segments(&self) -> Vec<String> {
        self.name.split('.').map(str::to_string).collect()
    }
}

impl Keyed for Timeslice {
    fn key(&self) -> String {
        self.name.clone()
    }
}

/// A named level of the timeslice hierarchy, e.g. `"Season"`.
///
/// The number of registered level names fixes the depth every timeslice
/// name must have.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LevelName {
    /// The level's name (the storage key).
    pub level: String,
}

impl LevelName {
    /// Creates a level name.
    #[must_use]
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
        }
    }
}

impl Keyed for LevelName {
    fn key(&self) -> String {
        self.level.clone()
    }
}

/// A year entities may reference, e.g. in prices or capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AvailableYear {
    /// The year itself.
    pub year: i32,
}

impl AvailableYear {
    /// Creates an available year.
    #[must_use]
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Keyed for AvailableYear {
    fn key(&self) -> String {
        self.year.to_string()
    }
}
