//! Conversion between nested timeslice trees and flat dotted-name maps.
//!
//! Settings files describe the timeslice hierarchy as a nested mapping of
//! name to either a weight or a deeper mapping. Internally the datastore
//! works with the flat form: one entry per leaf, keyed by the dotted path
//! down the tree. [`unpack`] flattens, [`pack`] rebuilds.

use std::collections::BTreeMap;

use gridloom_foundation::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One node of a nested timeslice hierarchy.
///
/// A node is either a leaf weight or a deeper mapping; any other shape is
/// rejected at deserialization time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum TimesliceTree {
    /// A leaf weight, typically hours.
    Value(f64),
    /// A nested level of the hierarchy.
    Branch(BTreeMap<String, TimesliceTree>),
}

impl TimesliceTree {
    /// Builds a branch node from an iterator of named children.
    #[must_use]
    pub fn branch<I, S>(children: I) -> Self
    where
        I: IntoIterator<Item = (S, TimesliceTree)>,
        S: Into<String>,
    {
        TimesliceTree::Branch(
            children
                .into_iter()
                .map(|(name, child)| (name.into(), child))
                .collect(),
        )
    }
}

/// The flat timeslice representation: dotted leaf names with their weights,
/// plus the ordered hierarchy level names.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimesliceInfo {
    /// Leaf weights keyed by dotted path, e.g. `"winter.morning" -> 120.0`.
    pub slices: BTreeMap<String, f64>,
    /// Hierarchy level names, outermost first.
    pub level_names: Vec<String>,
}

/// Flattens a nested timeslice tree into dotted-name form.
///
/// Walks the tree depth-first; each leaf's path segments are joined with
/// `.` to form its flat key.
#[must_use]
pub fn unpack(tree: &BTreeMap<String, TimesliceTree>, level_names: Vec<String>) -> TimesliceInfo {
    fn walk(prefix: &str, node: &TimesliceTree, out: &mut BTreeMap<String, f64>) {
        match node {
            TimesliceTree::Value(value) => {
                out.insert(prefix.to_string(), *value);
            }
            TimesliceTree::Branch(children) => {
                for (name, child) in children {
                    walk(&format!("{prefix}.{name}"), child, out);
                }
            }
        }
    }

    let mut slices = BTreeMap::new();
    for (name, node) in tree {
        walk(name, node, &mut slices);
    }
    TimesliceInfo {
        slices,
        level_names,
    }
}

/// Rebuilds the nested tree from the flat dotted-name form.
///
/// # Errors
///
/// Returns [`Error::PathConflict`] when a dotted name's prefix already holds
/// a leaf, or the full name already holds a subtree. Conflicts are never
/// resolved by overwriting.
pub fn pack(info: &TimesliceInfo) -> Result<BTreeMap<String, TimesliceTree>> {
    let mut root: BTreeMap<String, TimesliceTree> = BTreeMap::new();

    for (name, value) in &info.slices {
        let segments: Vec<&str> = name.split('.').collect();
        insert(&mut root, name, &segments, *value)?;
    }

    Ok(root)
}

fn insert(
    level: &mut BTreeMap<String, TimesliceTree>,
    full_name: &str,
    segments: &[&str],
    value: f64,
) -> Result<()> {
    let (head, rest) = segments
        .split_first()
        .ok_or_else(|| Error::path_conflict(full_name))?;

    match level.get_mut(*head) {
        None => {
            if rest.is_empty() {
                level.insert((*head).to_string(), TimesliceTree::Value(value));
                Ok(())
            } else {
                let mut child = BTreeMap::new();
                insert(&mut child, full_name, rest, value)?;
                level.insert((*head).to_string(), TimesliceTree::Branch(child));
                Ok(())
            }
        }
        // A full path landing on an existing node, or a partial path landing
        // on a leaf, is a conflict: packing never overwrites.
        Some(TimesliceTree::Branch(child)) => {
            if rest.is_empty() {
                Err(Error::path_conflict(full_name))
            } else {
                insert(child, full_name, rest, value)
            }
        }
        Some(TimesliceTree::Value(_)) => Err(Error::path_conflict(full_name)),
    }
}
