//! The generic CRUD surface.

use gridloom_foundation::Error;
use gridloom_model::{AvailableYear, Commodity, Region, Sector};
use gridloom_store::Datastore;

use crate::fixtures::{base_store, commodity, region, standard_sector};

#[test]
fn create_then_read_round_trips() {
    let mut datastore = Datastore::new();
    datastore.create(region("R1")).unwrap();

    let read: Region = datastore.read("R1").unwrap();
    assert_eq!(read, region("R1"));
}

#[test]
fn create_returns_the_created_entity() {
    let mut datastore = Datastore::new();
    let created = datastore.create(region("R1")).unwrap();
    assert_eq!(created, region("R1"));
}

#[test]
fn create_rejects_duplicate_keys() {
    let mut datastore = Datastore::new();
    datastore.create(region("R1")).unwrap();

    let err = datastore.create(region("R1")).unwrap_err();
    assert!(matches!(err, Error::KeyAlreadyExists { .. }));
    assert_eq!(datastore.len::<Region>(), 1);
}

#[test]
fn read_of_missing_key_fails() {
    let datastore = Datastore::new();
    let err = datastore.read::<Region>("ghost").unwrap_err();
    assert!(matches!(err, Error::KeyNotFound { .. }));
}

#[test]
fn update_of_missing_key_fails() {
    let mut datastore = Datastore::new();
    let err = datastore.update("ghost", region("ghost")).unwrap_err();
    assert!(matches!(err, Error::KeyNotFound { .. }));
}

#[test]
fn delete_of_missing_key_fails() {
    let mut datastore = Datastore::new();
    let err = datastore.delete::<Region>("ghost").unwrap_err();
    assert!(matches!(err, Error::KeyNotFound { .. }));
}

#[test]
fn update_with_same_key_replaces_in_place() {
    let mut datastore = base_store();

    let mut updated = commodity("gas", "R1", 2020);
    updated.emission_factor = 56.1;
    datastore.update("gas", updated.clone()).unwrap();

    let read: Commodity = datastore.read("gas").unwrap();
    assert_eq!(read, updated);
    assert_eq!(datastore.len::<Commodity>(), 2);
}

#[test]
fn update_with_new_key_is_a_rename() {
    let mut datastore = Datastore::new();
    datastore.create(standard_sector("power")).unwrap();

    datastore
        .update("power", standard_sector("electricity"))
        .unwrap();

    assert!(!datastore.contains::<Sector>("power"));
    assert!(datastore.contains::<Sector>("electricity"));
    assert_eq!(datastore.len::<Sector>(), 1);
}

#[test]
fn rename_cascades_away_dependents_of_the_old_key() {
    let mut datastore = base_store();

    // The gas and electricity commodities are priced in R1; renaming R1
    // removes them along with the old region.
    datastore.update("R1", region("R9")).unwrap();

    assert!(datastore.contains::<Region>("R9"));
    assert!(!datastore.contains::<Region>("R1"));
    assert!(!datastore.contains::<Commodity>("gas"));
    assert!(!datastore.contains::<Commodity>("electricity"));
}

#[test]
fn rename_onto_a_taken_key_fails() {
    let mut datastore = Datastore::new();
    datastore.create(region("R1")).unwrap();
    datastore.create(region("R2")).unwrap();

    let err = datastore.update("R1", region("R2")).unwrap_err();
    assert!(matches!(err, Error::KeyAlreadyExists { .. }));
    assert!(datastore.contains::<Region>("R1"));
    assert!(datastore.contains::<Region>("R2"));
}

#[test]
fn list_returns_keys_sorted() {
    let mut datastore = Datastore::new();
    datastore.create(region("delta")).unwrap();
    datastore.create(region("alpha")).unwrap();
    datastore.create(region("charlie")).unwrap();

    assert_eq!(datastore.list::<Region>(), vec!["alpha", "charlie", "delta"]);
}

#[test]
fn list_of_empty_store_is_empty() {
    let datastore = Datastore::new();
    assert!(datastore.list::<AvailableYear>().is_empty());
    assert_eq!(datastore.len::<AvailableYear>(), 0);
}

#[test]
fn stores_are_independent_per_type() {
    let mut datastore = Datastore::new();
    datastore.create(region("power")).unwrap();
    datastore.create(standard_sector("power")).unwrap();

    // Same key in two stores is two distinct entities.
    assert!(datastore.contains::<Region>("power"));
    assert!(datastore.contains::<Sector>("power"));
    datastore.delete::<Sector>("power").unwrap();
    assert!(datastore.contains::<Region>("power"));
}
