//! Economic sectors.
//!
//! A sector is either *standard* (optimised: carries production and subsector
//! configuration) or *preset* (demand read from consumption files). The two
//! variants have disjoint fields, so the type is a tagged union rather than a
//! single struct with a discriminator field.

use gridloom_foundation::Keyed;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interpolation mode used when a standard sector resamples between years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Interpolation {
    /// Nearest-neighbour interpolation.
    Nearest,
    /// Linear interpolation.
    Linear,
    /// Cubic interpolation.
    Cubic,
}

/// An optimised sector with production and subsector configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StandardSector {
    /// Unique sector name (the storage key).
    pub name: String,
    /// Solve priority; lower runs earlier.
    pub priority: i32,
    /// Year interpolation mode.
    pub interpolation: Interpolation,
    /// Production method used when dispatching existing capacity.
    pub dispatch_production: String,
    /// Production method used when weighing investments.
    pub investment_production: String,
    /// How demand is shared between new and retrofit capacity.
    pub demand_share: String,
}

impl StandardSector {
    /// Creates a standard sector with the conventional defaults
    /// (`share` production, `new_and_retro` demand share, linear
    /// interpolation, priority 100).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: 100,
            interpolation: Interpolation::Linear,
            dispatch_production: "share".to_string(),
            investment_production: "share".to_string(),
            demand_share: "new_and_retro".to_string(),
        }
    }
}

/// A sector whose consumption is preset rather than optimised.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PresetSector {
    /// Unique sector name (the storage key).
    pub name: String,
    /// Solve priority; lower runs earlier.
    pub priority: i32,
    /// Glob-style paths to the consumption files.
    pub consumption_paths: Vec<String>,
}

impl PresetSector {
    /// Creates a preset sector with priority 100 and no consumption paths.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: 100,
            consumption_paths: Vec::new(),
        }
    }
}

/// A sector of the modelled economy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Sector {
    /// An optimised sector.
    Standard(StandardSector),
    /// A preset (demand-driven) sector.
    Preset(PresetSector),
}

impl Sector {
    /// Returns the sector's name regardless of variant.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Sector::Standard(sector) => &sector.name,
            Sector::Preset(sector) => &sector.name,
        }
    }

    /// Returns the sector's solve priority regardless of variant.
    #[must_use]
    pub fn priority(&self) -> i32 {
        match self {
            Sector::Standard(sector) => sector.priority,
            Sector::Preset(sector) => sector.priority,
        }
    }
}

impl Keyed for Sector {
    fn key(&self) -> String {
        self.name().to_string()
    }
}
