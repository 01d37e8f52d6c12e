//! Per-entity-type dependency declarations.
//!
//! Each [`Record`] impl states which sibling entities a type references
//! (back dependents, validated on create/update) and scans for the entities
//! referencing it (forward dependents, driving cascade deletion).
//!
//! The reference surface mirrors the data model: region names, commodity
//! keys, sector names, agent names, and years resolve against their stores.
//! Timeslice *labels* inside flows are free-form and deliberately not
//! validated here.

use gridloom_foundation::{Dependents, Error, Keyed, Result, StoreId};
use gridloom_model::{
    Agent, AvailableYear, Commodity, LevelName, Process, Region, Sector, Timeslice,
};

use crate::datastore::Datastore;
use crate::record::Record;
use crate::table::EntityTable;

/// Resolves one embedded reference, recording it on success.
fn resolve<E: Record>(
    datastore: &Datastore,
    referencing: &str,
    key: &str,
    deps: &mut Dependents,
) -> Result<()> {
    if E::table(datastore).contains(key) {
        deps.insert(E::STORE, key);
        Ok(())
    } else {
        Err(Error::dependent_not_found(referencing, key, E::STORE))
    }
}

impl Record for Region {
    const STORE: StoreId = StoreId::Region;

    fn table(datastore: &Datastore) -> &EntityTable<Self> {
        &datastore.regions
    }

    fn table_mut(datastore: &mut Datastore) -> &mut EntityTable<Self> {
        &mut datastore.regions
    }

    fn back_dependents(&self, _datastore: &Datastore) -> Result<Dependents> {
        Ok(Dependents::new())
    }

    fn forward_dependents(&self, datastore: &Datastore) -> Dependents {
        let mut deps = Dependents::new();

        for (key, commodity) in datastore.commodities.iter() {
            if commodity
                .prices
                .iter()
                .any(|price| price.region_name == self.name)
            {
                deps.insert(StoreId::Commodity, key.clone());
            }
        }

        for (key, agent) in datastore.agents.iter() {
            if agent.regions().any(|region| region == self.name) {
                deps.insert(StoreId::Agent, key.clone());
            }
        }

        for (key, process) in datastore.processes.iter() {
            if process_references_region(process, &self.name) {
                deps.insert(StoreId::Process, key.clone());
            }
        }

        deps
    }
}

fn process_references_region(process: &Process, region: &str) -> bool {
    process.technodatas.iter().any(|technodata| {
        technodata.region == region
            || technodata.agents.iter().any(|share| share.region == region)
    }) || process
        .comm_in
        .iter()
        .chain(&process.comm_out)
        .any(|flow| flow.region == region)
        || process
            .existing_capacities
            .iter()
            .any(|capacity| capacity.region == region)
        || process
            .demands
            .iter()
            .flat_map(|demand| &demand.flows)
            .any(|flow| flow.region == region)
}

impl Record for AvailableYear {
    const STORE: StoreId = StoreId::AvailableYear;

    fn table(datastore: &Datastore) -> &EntityTable<Self> {
        &datastore.years
    }

    fn table_mut(datastore: &mut Datastore) -> &mut EntityTable<Self> {
        &mut datastore.years
    }

    fn back_dependents(&self, _datastore: &Datastore) -> Result<Dependents> {
        Ok(Dependents::new())
    }

    fn forward_dependents(&self, datastore: &Datastore) -> Dependents {
        let mut deps = Dependents::new();

        for (key, commodity) in datastore.commodities.iter() {
            if commodity.prices.iter().any(|price| price.year == self.year) {
                deps.insert(StoreId::Commodity, key.clone());
            }
        }

        for (key, process) in datastore.processes.iter() {
            if process_references_year(process, self.year) {
                deps.insert(StoreId::Process, key.clone());
            }
        }

        deps
    }
}

fn process_references_year(process: &Process, year: i32) -> bool {
    process
        .technodatas
        .iter()
        .any(|technodata| technodata.year == year)
        || process
            .existing_capacities
            .iter()
            .any(|capacity| capacity.year == year)
        || process.demands.iter().any(|demand| demand.year == year)
}

impl Record for Sector {
    const STORE: StoreId = StoreId::Sector;

    fn table(datastore: &Datastore) -> &EntityTable<Self> {
        &datastore.sectors
    }

    fn table_mut(datastore: &mut Datastore) -> &mut EntityTable<Self> {
        &mut datastore.sectors
    }

    fn back_dependents(&self, _datastore: &Datastore) -> Result<Dependents> {
        Ok(Dependents::new())
    }

    fn forward_dependents(&self, datastore: &Datastore) -> Dependents {
        let mut deps = Dependents::new();
        let name = self.name();

        for (key, agent) in datastore.agents.iter() {
            if agent.sectors.iter().any(|sector| sector == name) {
                deps.insert(StoreId::Agent, key.clone());
            }
        }

        for (key, process) in datastore.processes.iter() {
            if process.sector == name || process.preset_sector.as_deref() == Some(name) {
                deps.insert(StoreId::Process, key.clone());
            }
        }

        deps
    }
}

impl Record for LevelName {
    const STORE: StoreId = StoreId::LevelName;

    fn table(datastore: &Datastore) -> &EntityTable<Self> {
        &datastore.level_names
    }

    fn table_mut(datastore: &mut Datastore) -> &mut EntityTable<Self> {
        &mut datastore.level_names
    }

    fn back_dependents(&self, _datastore: &Datastore) -> Result<Dependents> {
        Ok(Dependents::new())
    }

    /// Every timeslice depends on every level name: removing a level changes
    /// the depth all dotted names must have.
    fn forward_dependents(&self, datastore: &Datastore) -> Dependents {
        let mut deps = Dependents::new();
        for key in datastore.timeslices.keys() {
            deps.insert(StoreId::Timeslice, key);
        }
        deps
    }
}

impl Record for Timeslice {
    const STORE: StoreId = StoreId::Timeslice;

    fn table(datastore: &Datastore) -> &EntityTable<Self> {
        &datastore.timeslices
    }

    fn table_mut(datastore: &mut Datastore) -> &mut EntityTable<Self> {
        &mut datastore.timeslices
    }

    /// A timeslice's dotted name must be exactly as deep as the registered
    /// level hierarchy. Only the count is checked; the `LevelNameMismatch`
    /// error lists the registered levels in sorted key order, not
    /// registration order.
    fn back_dependents(&self, datastore: &Datastore) -> Result<Dependents> {
        let level_names = datastore.level_names.keys();
        let segments = self.segments();
        if segments.len() != level_names.len() {
            return Err(Error::level_name_mismatch(level_names, segments));
        }

        let mut deps = Dependents::new();
        for level in level_names {
            deps.insert(StoreId::LevelName, level);
        }
        Ok(deps)
    }

    fn forward_dependents(&self, _datastore: &Datastore) -> Dependents {
        Dependents::new()
    }
}

impl Record for Commodity {
    const STORE: StoreId = StoreId::Commodity;

    fn table(datastore: &Datastore) -> &EntityTable<Self> {
        &datastore.commodities
    }

    fn table_mut(datastore: &mut Datastore) -> &mut EntityTable<Self> {
        &mut datastore.commodities
    }

    fn back_dependents(&self, datastore: &Datastore) -> Result<Dependents> {
        let mut deps = Dependents::new();
        let key = self.key();

        for price in &self.prices {
            resolve::<Region>(datastore, &key, &price.region_name, &mut deps)?;
            resolve::<AvailableYear>(datastore, &key, &price.year.to_string(), &mut deps)?;
        }

        Ok(deps)
    }

    fn forward_dependents(&self, datastore: &Datastore) -> Dependents {
        let mut deps = Dependents::new();
        let key = self.key();

        for (name, process) in datastore.processes.iter() {
            if process_references_commodity(process, &key) {
                deps.insert(StoreId::Process, name.clone());
            }
        }

        deps
    }
}

fn process_references_commodity(process: &Process, commodity: &str) -> bool {
    process.fuel == commodity
        || process.end_use == commodity
        || process
            .comm_in
            .iter()
            .chain(&process.comm_out)
            .any(|flow| flow.commodity == commodity)
        || process
            .demands
            .iter()
            .flat_map(|demand| &demand.flows)
            .any(|flow| flow.commodity == commodity)
}

impl Record for Agent {
    const STORE: StoreId = StoreId::Agent;

    fn table(datastore: &Datastore) -> &EntityTable<Self> {
        &datastore.agents
    }

    fn table_mut(datastore: &mut Datastore) -> &mut EntityTable<Self> {
        &mut datastore.agents
    }

    fn back_dependents(&self, datastore: &Datastore) -> Result<Dependents> {
        let mut deps = Dependents::new();
        let key = self.key();

        for sector in &self.sectors {
            resolve::<Sector>(datastore, &key, sector, &mut deps)?;
        }
        let regions: Vec<String> = self.regions().map(str::to_string).collect();
        for region in regions {
            resolve::<Region>(datastore, &key, &region, &mut deps)?;
        }

        Ok(deps)
    }

    fn forward_dependents(&self, datastore: &Datastore) -> Dependents {
        let mut deps = Dependents::new();

        for (key, process) in datastore.processes.iter() {
            let referenced = process.technodatas.iter().any(|technodata| {
                technodata
                    .agents
                    .iter()
                    .any(|share| share.agent_name == self.name)
            });
            if referenced {
                deps.insert(StoreId::Process, key.clone());
            }
        }

        deps
    }
}

impl Record for Process {
    const STORE: StoreId = StoreId::Process;

    fn table(datastore: &Datastore) -> &EntityTable<Self> {
        &datastore.processes
    }

    fn table_mut(datastore: &mut Datastore) -> &mut EntityTable<Self> {
        &mut datastore.processes
    }

    fn back_dependents(&self, datastore: &Datastore) -> Result<Dependents> {
        let mut deps = Dependents::new();
        let key = self.key();

        resolve::<Sector>(datastore, &key, &self.sector, &mut deps)?;
        if let Some(preset) = &self.preset_sector {
            resolve::<Sector>(datastore, &key, preset, &mut deps)?;
        }
        resolve::<Commodity>(datastore, &key, &self.fuel, &mut deps)?;
        resolve::<Commodity>(datastore, &key, &self.end_use, &mut deps)?;

        for technodata in &self.technodatas {
            resolve::<Region>(datastore, &key, &technodata.region, &mut deps)?;
            resolve::<AvailableYear>(datastore, &key, &technodata.year.to_string(), &mut deps)?;
            for share in &technodata.agents {
                resolve::<Agent>(datastore, &key, &share.agent_name, &mut deps)?;
                resolve::<Region>(datastore, &key, &share.region, &mut deps)?;
            }
        }
        for flow in self.comm_in.iter().chain(&self.comm_out) {
            resolve::<Commodity>(datastore, &key, &flow.commodity, &mut deps)?;
            resolve::<Region>(datastore, &key, &flow.region, &mut deps)?;
        }
        for capacity in &self.existing_capacities {
            resolve::<Region>(datastore, &key, &capacity.region, &mut deps)?;
            resolve::<AvailableYear>(datastore, &key, &capacity.year.to_string(), &mut deps)?;
        }
        for demand in &self.demands {
            resolve::<AvailableYear>(datastore, &key, &demand.year.to_string(), &mut deps)?;
            for flow in &demand.flows {
                resolve::<Commodity>(datastore, &key, &flow.commodity, &mut deps)?;
                resolve::<Region>(datastore, &key, &flow.region, &mut deps)?;
            }
        }

        Ok(deps)
    }

    fn forward_dependents(&self, _datastore: &Datastore) -> Dependents {
        Dependents::new()
    }
}
