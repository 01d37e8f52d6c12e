//! Error taxonomy behavior.

use gridloom_foundation::{Error, StoreId};

#[test]
fn key_already_exists_names_key_and_store() {
    let err = Error::key_already_exists("R1", StoreId::Region);
    let msg = format!("{err}");
    assert!(msg.contains("R1"));
    assert!(msg.contains("region"));
    assert!(msg.contains("already exists"));
}

#[test]
fn key_not_found_names_key_and_store() {
    let err = Error::key_not_found("gas", StoreId::Commodity);
    let msg = format!("{err}");
    assert!(msg.contains("gas"));
    assert!(msg.contains("commodity"));
    assert!(msg.contains("not found"));
}

#[test]
fn dependent_not_found_names_all_three_parties() {
    let err = Error::dependent_not_found("oil", "R2", StoreId::Region);
    let msg = format!("{err}");
    assert!(msg.contains("oil"));
    assert!(msg.contains("R2"));
    assert!(msg.contains("region"));
}

#[test]
fn errors_are_comparable_values() {
    assert_eq!(
        Error::key_not_found("x", StoreId::Agent),
        Error::key_not_found("x", StoreId::Agent)
    );
    assert_ne!(
        Error::key_not_found("x", StoreId::Agent),
        Error::key_not_found("x", StoreId::Process)
    );
}

#[test]
fn is_not_found_distinguishes_swallowable_errors() {
    assert!(Error::key_not_found("x", StoreId::Region).is_not_found());
    assert!(!Error::path_conflict("a.b").is_not_found());
    assert!(
        !Error::level_name_mismatch(vec!["Hour".to_string()], vec!["a".to_string()])
            .is_not_found()
    );
}
