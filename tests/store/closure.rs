//! Recursive dependency closure.

use gridloom_foundation::StoreId;
use gridloom_model::{Commodity, Process, Region};

use crate::fixtures::{base_store, process};

#[test]
fn forward_closure_previews_the_cascade() {
    let mut datastore = base_store();
    datastore
        .create(process("boiler", "power", "gas", "electricity", "R2", 2020))
        .unwrap();

    let r1: Region = datastore.read("R1").unwrap();
    let closure = datastore.forward_dependents_recursive(&r1).unwrap();

    // boiler is only reachable through the commodities, yet the closure
    // reports it, exactly matching what a delete of R1 would remove.
    assert!(closure.contains(StoreId::Commodity, "gas"));
    assert!(closure.contains(StoreId::Commodity, "electricity"));
    assert!(closure.contains(StoreId::Process, "boiler"));
    assert!(!closure.contains(StoreId::Region, "R2"));

    datastore.delete::<Region>("R1").unwrap();
    assert!(!datastore.contains::<Process>("boiler"));
}

#[test]
fn forward_closure_deduplicates_across_paths() {
    let mut datastore = base_store();
    // boiler is reachable from R1 directly and through both commodities.
    datastore
        .create(process("boiler", "power", "gas", "electricity", "R1", 2020))
        .unwrap();

    let r1: Region = datastore.read("R1").unwrap();
    let closure = datastore.forward_dependents_recursive(&r1).unwrap();

    let processes = closure.get(StoreId::Process).unwrap();
    assert_eq!(processes.len(), 1);
}

#[test]
fn back_closure_reaches_through_intermediates() {
    let mut datastore = base_store();
    let boiler = datastore
        .create(process("boiler", "power", "gas", "electricity", "R2", 2020))
        .unwrap();

    let closure = datastore.back_dependents_recursive(&boiler).unwrap();

    // R1 is only referenced by the commodity prices, not by the process
    // itself, and still shows up in the transitive closure.
    assert!(closure.contains(StoreId::Region, "R1"));
    assert!(closure.contains(StoreId::Region, "R2"));
    assert!(closure.contains(StoreId::Commodity, "gas"));
    assert!(closure.contains(StoreId::Sector, "power"));
    assert!(closure.contains(StoreId::AvailableYear, "2020"));
}

#[test]
fn closures_of_unreferenced_entities_are_empty() {
    let datastore = base_store();

    let r2: Region = datastore.read("R2").unwrap();
    let forward = datastore.forward_dependents_recursive(&r2).unwrap();
    assert!(forward.is_empty());

    let back = datastore.back_dependents_recursive(&r2).unwrap();
    assert!(back.is_empty());
}

#[test]
fn one_hop_and_recursive_views_differ() {
    let mut datastore = base_store();
    datastore
        .create(process("boiler", "power", "gas", "electricity", "R2", 2020))
        .unwrap();

    let r1: Region = datastore.read("R1").unwrap();
    let one_hop = datastore.forward_dependents(&r1);
    let recursive = datastore.forward_dependents_recursive(&r1).unwrap();

    assert!(!one_hop.contains(StoreId::Process, "boiler"));
    assert!(recursive.contains(StoreId::Process, "boiler"));
}

#[test]
fn back_closure_of_a_commodity_stops_at_its_roots() {
    let datastore = base_store();

    let gas: Commodity = datastore.read("gas").unwrap();
    let closure = datastore.back_dependents_recursive(&gas).unwrap();

    assert!(closure.contains(StoreId::Region, "R1"));
    assert!(closure.contains(StoreId::AvailableYear, "2020"));
    assert!(closure.get(StoreId::Process).is_none());
    assert!(closure.get(StoreId::Sector).is_none());
}
