//! The nested-to-flat timeslice codec.

use std::collections::BTreeMap;

use gridloom_foundation::Error;
use gridloom_model::hierarchy::{pack, unpack, TimesliceInfo, TimesliceTree};

fn three_level_tree() -> BTreeMap<String, TimesliceTree> {
    let mut tree = BTreeMap::new();
    tree.insert(
        "winter".to_string(),
        TimesliceTree::branch([
            (
                "weekday",
                TimesliceTree::branch([
                    ("morning", TimesliceTree::Value(60.0)),
                    ("evening", TimesliceTree::Value(90.0)),
                ]),
            ),
            (
                "weekend",
                TimesliceTree::branch([("morning", TimesliceTree::Value(24.0))]),
            ),
        ]),
    );
    tree.insert(
        "summer".to_string(),
        TimesliceTree::branch([(
            "weekday",
            TimesliceTree::branch([("morning", TimesliceTree::Value(45.0))]),
        )]),
    );
    tree
}

fn three_levels() -> Vec<String> {
    vec![
        "Season".to_string(),
        "Daytype".to_string(),
        "Daypart".to_string(),
    ]
}

#[test]
fn unpack_flattens_every_leaf() {
    let info = unpack(&three_level_tree(), three_levels());

    assert_eq!(info.slices.len(), 4);
    assert_eq!(info.slices["winter.weekday.morning"], 60.0);
    assert_eq!(info.slices["winter.weekday.evening"], 90.0);
    assert_eq!(info.slices["winter.weekend.morning"], 24.0);
    assert_eq!(info.slices["summer.weekday.morning"], 45.0);
    assert_eq!(info.level_names, three_levels());
}

#[test]
fn unpack_of_empty_tree_is_empty() {
    let info = unpack(&BTreeMap::new(), vec!["Season".to_string()]);
    assert!(info.slices.is_empty());
    assert_eq!(info.level_names, vec!["Season".to_string()]);
}

#[test]
fn pack_inverts_unpack() {
    let tree = three_level_tree();
    let info = unpack(&tree, three_levels());
    assert_eq!(pack(&info).unwrap(), tree);
}

#[test]
fn pack_builds_intermediate_branches() {
    let mut info = TimesliceInfo::default();
    info.slices.insert("a.b.c".to_string(), 1.0);

    let tree = pack(&info).unwrap();
    let TimesliceTree::Branch(level_b) = &tree["a"] else {
        panic!("expected a branch under `a`");
    };
    let TimesliceTree::Branch(level_c) = &level_b["b"] else {
        panic!("expected a branch under `a.b`");
    };
    assert_eq!(level_c["c"], TimesliceTree::Value(1.0));
}

#[test]
fn pack_reports_the_conflicting_path() {
    let mut info = TimesliceInfo::default();
    info.slices.insert("winter".to_string(), 100.0);
    info.slices.insert("winter.morning".to_string(), 50.0);

    match pack(&info).unwrap_err() {
        Error::PathConflict { path } => {
            assert!(path.starts_with("winter"));
        }
        other => panic!("expected a path conflict, got {other:?}"),
    }
}

#[test]
fn deserializing_accepts_numbers_and_nested_mappings() {
    let tree: BTreeMap<String, TimesliceTree> = serde_json::from_str(
        r#"{"winter": {"morning": 120.0, "evening": 180.0}, "allyear": 8760.0}"#,
    )
    .unwrap();

    assert_eq!(tree["allyear"], TimesliceTree::Value(8760.0));
    let TimesliceTree::Branch(winter) = &tree["winter"] else {
        panic!("expected a branch under `winter`");
    };
    assert_eq!(winter["morning"], TimesliceTree::Value(120.0));
}

#[test]
fn deserializing_rejects_a_node_that_is_neither() {
    // A leaf must be a number and anything else must be a mapping; a string
    // node fits neither variant and is rejected wholesale.
    let result: Result<BTreeMap<String, TimesliceTree>, _> =
        serde_json::from_str(r#"{"winter": {"morning": "not-a-number"}}"#);
    assert!(result.is_err());

    let result: Result<BTreeMap<String, TimesliceTree>, _> =
        serde_json::from_str(r#"{"winter": [120.0, 180.0]}"#);
    assert!(result.is_err());
}

#[test]
fn pack_never_merges_a_leaf_into_a_branch() {
    // "x" wants to be both a leaf and a branch; whichever is inserted
    // second must fail, so packing can never silently drop a weight.
    let mut info = TimesliceInfo::default();
    info.slices.insert("x".to_string(), 1.0);
    info.slices.insert("x.y".to_string(), 2.0);
    info.slices.insert("x.z".to_string(), 3.0);

    assert!(pack(&info).is_err());
}
