//! Traded commodities and their regional price projections.

use gridloom_foundation::Keyed;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a commodity is an energy carrier or an environmental flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CommodityType {
    /// An energy carrier (gas, electricity, heat, ...).
    Energy,
    /// An environmental flow such as an emission.
    Environmental,
}

/// One price point for a commodity in a region at a year.
///
/// `region_name` and `year` are references into the region and
/// available-year stores, validated on create/update.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommodityPrice {
    /// Referenced region name.
    pub region_name: String,
    /// Referenced year.
    pub year: i32,
    /// Price value, in `price_unit`.
    pub value: f64,
}

/// A commodity traded between processes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Commodity {
    /// Unique commodity identifier (the storage key), e.g. `"gas"`.
    pub commodity: String,
    /// Energy carrier or environmental flow.
    pub commodity_type: CommodityType,
    /// Human-readable display name.
    pub commodity_name: String,
    /// CO2 emission factor.
    pub emission_factor: f64,
    /// Heat rate.
    pub heat_rate: f64,
    /// Physical unit, e.g. `"PJ"`.
    pub unit: String,
    /// Unit the prices are quoted in.
    pub price_unit: String,
    /// Price projections per (region, year).
    pub prices: Vec<CommodityPrice>,
}

impl Keyed for Commodity {
    fn key(&self) -> String {
        self.commodity.clone()
    }
}
