//! Domain entity types and the hierarchical timeslice codec for Gridloom.
//!
//! This crate provides:
//! - The eight entity types the datastore holds ([`Region`], [`Commodity`],
//!   [`Sector`], [`Agent`], [`Process`], [`Timeslice`], [`LevelName`],
//!   [`AvailableYear`])
//! - The [`hierarchy`] module converting between nested timeslice trees and
//!   flat dotted-name maps
//!
//! Entity types carry no integrity logic; cross-store references are plain
//! strings resolved by the store layer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod agent;
mod commodity;
pub mod hierarchy;
mod process;
mod region;
mod sector;
mod timeslice;

pub use agent::{
    Agent, AgentData, AgentObjective, AgentType, DecisionMethod, ObjectiveKind, SearchRule,
};
pub use commodity::{Commodity, CommodityPrice, CommodityType};
pub use process::{
    CapacityLimits, CapacityShare, CommodityFlow, Cost, Demand, DemandFlow, ExistingCapacity,
    Process, Technodata, Utilisation,
};
pub use region::Region;
pub use sector::{Interpolation, PresetSector, Sector, StandardSector};
pub use timeslice::{AvailableYear, LevelName, Timeslice};
