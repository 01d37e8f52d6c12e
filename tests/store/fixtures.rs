//! Shared entity builders for the store tests.

use gridloom_model::{
    Agent, AgentData, AvailableYear, Commodity, CommodityPrice, CommodityType, Process, Region,
    Sector, StandardSector, Technodata,
};
use gridloom_store::Datastore;

pub fn region(name: &str) -> Region {
    Region::new(name)
}

pub fn standard_sector(name: &str) -> Sector {
    Sector::Standard(StandardSector::new(name))
}

pub fn commodity(key: &str, region: &str, year: i32) -> Commodity {
    Commodity {
        commodity: key.to_string(),
        commodity_type: CommodityType::Energy,
        commodity_name: key.to_string(),
        emission_factor: 0.0,
        heat_rate: 1.0,
        unit: "PJ".to_string(),
        price_unit: "MUS$/PJ".to_string(),
        prices: vec![CommodityPrice {
            region_name: region.to_string(),
            year,
            value: 17.0,
        }],
    }
}

pub fn agent(name: &str, sector: &str, region: &str) -> Agent {
    let mut agent = Agent::new(name);
    agent.sectors.push(sector.to_string());
    agent
        .new
        .insert(region.to_string(), AgentData::new("Agent1"));
    agent
}

pub fn process(
    name: &str,
    sector: &str,
    fuel: &str,
    end_use: &str,
    region: &str,
    year: i32,
) -> Process {
    Process {
        name: name.to_string(),
        sector: sector.to_string(),
        preset_sector: None,
        fuel: fuel.to_string(),
        end_use: end_use.to_string(),
        capacity_unit: "PJ/y".to_string(),
        technodatas: vec![Technodata {
            region: region.to_string(),
            year,
            level: "fixed".to_string(),
            cost: Default::default(),
            utilisation: Default::default(),
            capacity: Default::default(),
            agents: Vec::new(),
        }],
        comm_in: Vec::new(),
        comm_out: Vec::new(),
        existing_capacities: Vec::new(),
        demands: Vec::new(),
    }
}

/// A datastore with the entities most tests reference: regions `R1` and
/// `R2`, year 2020, sector `power`, and commodities `gas` and `electricity`
/// priced in `R1`.
pub fn base_store() -> Datastore {
    let mut datastore = Datastore::new();
    datastore.create(region("R1")).unwrap();
    datastore.create(region("R2")).unwrap();
    datastore.create(AvailableYear::new(2020)).unwrap();
    datastore.create(standard_sector("power")).unwrap();
    datastore.create(commodity("gas", "R1", 2020)).unwrap();
    datastore
        .create(commodity("electricity", "R1", 2020))
        .unwrap();
    datastore
}
