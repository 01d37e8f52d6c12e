//! Processes (technologies) and their per-region, per-year data.
//!
//! A process is the densest entity in the model: it references its sector,
//! the commodities it consumes and produces, the regions and years its
//! technodata rows cover, and the agents holding shares of its capacity.

use gridloom_foundation::Keyed;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::agent::AgentType;

/// A commodity flow into or out of a process.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommodityFlow {
    /// Referenced commodity key.
    pub commodity: String,
    /// Referenced region name.
    pub region: String,
    /// Timeslice label the flow applies to (not store-validated).
    pub timeslice: String,
    /// Commodity level, `"fixed"` or `"flexible"`.
    pub level: String,
    /// Flow magnitude.
    pub value: f64,
}

/// One preset demand entry for a commodity in a region and timeslice.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DemandFlow {
    /// Referenced commodity key.
    pub commodity: String,
    /// Referenced region name.
    pub region: String,
    /// Timeslice label the demand applies to (not store-validated).
    pub timeslice: String,
    /// Demand magnitude.
    pub value: f64,
}

/// Cost parameters of a technodata row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cost {
    /// Capital cost coefficient.
    pub cap_par: f64,
    /// Capital cost exponent.
    pub cap_exp: f64,
    /// Fixed cost coefficient.
    pub fix_par: f64,
    /// Fixed cost exponent.
    pub fix_exp: f64,
    /// Variable cost coefficient.
    pub var_par: f64,
    /// Variable cost exponent.
    pub var_exp: f64,
    /// Interest rate applied to investments.
    pub interest_rate: f64,
}

impl Default for Cost {
    fn default() -> Self {
        Self {
            cap_par: 0.0,
            cap_exp: 1.0,
            fix_par: 0.0,
            fix_exp: 1.0,
            var_par: 0.0,
            var_exp: 1.0,
            interest_rate: 0.0,
        }
    }
}

/// Utilisation parameters of a technodata row.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Utilisation {
    /// Utilisation factor in `[0, 1]`.
    pub utilization_factor: f64,
    /// Conversion efficiency in percent.
    pub efficiency: f64,
}

/// Capacity limits of a technodata row.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapacityLimits {
    /// Maximum capacity that can be added in one period.
    pub max_capacity_addition: f64,
    /// Maximum capacity growth in percent.
    pub max_capacity_growth: f64,
    /// Total capacity limit.
    pub total_capacity_limit: f64,
    /// Technical lifetime in years.
    pub technical_life: u32,
    /// Scaling size of one unit.
    pub scaling_size: f64,
}

/// An agent's share of a process's capacity in a region.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapacityShare {
    /// Referenced agent name.
    pub agent_name: String,
    /// Whether the share covers new or retrofit capacity.
    pub agent_type: AgentType,
    /// Referenced region name.
    pub region: String,
    /// Share of capacity, in `(0, 1]`.
    pub share: f64,
}

/// Techno-economic data for a process in one region and year.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Technodata {
    /// Referenced region name.
    pub region: String,
    /// Referenced year.
    pub year: i32,
    /// Commodity level, `"fixed"` or `"flexible"`.
    pub level: String,
    /// Cost parameters.
    pub cost: Cost,
    /// Utilisation parameters.
    pub utilisation: Utilisation,
    /// Capacity limits.
    pub capacity: CapacityLimits,
    /// Capacity shares per agent; references the agent store.
    pub agents: Vec<CapacityShare>,
}

/// Pre-existing capacity of a process in a region at a year.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExistingCapacity {
    /// Referenced region name.
    pub region: String,
    /// Referenced year.
    pub year: i32,
    /// Installed capacity.
    pub value: f64,
}

/// Preset demand served by a process in one year.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Demand {
    /// Referenced year.
    pub year: i32,
    /// Demand entries per (commodity, region, timeslice).
    pub flows: Vec<DemandFlow>,
}

/// A process (technology) converting input commodities into outputs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Process {
    /// Unique process name (the storage key).
    pub name: String,
    /// Referenced sector name.
    pub sector: String,
    /// Optional referenced preset sector.
    pub preset_sector: Option<String>,
    /// Referenced fuel commodity key.
    pub fuel: String,
    /// Referenced end-use commodity key.
    pub end_use: String,
    /// Unit existing capacities are measured in.
    pub capacity_unit: String,
    /// Techno-economic rows per (region, year).
    pub technodatas: Vec<Technodata>,
    /// Input commodity flows.
    pub comm_in: Vec<CommodityFlow>,
    /// Output commodity flows.
    pub comm_out: Vec<CommodityFlow>,
    /// Pre-existing capacities per (region, year).
    pub existing_capacities: Vec<ExistingCapacity>,
    /// Preset demands per year.
    pub demands: Vec<Demand>,
}

impl Keyed for Process {
    fn key(&self) -> String {
        self.name.clone()
    }
}
