//! Gridloom - Relational datastore core for an energy-system model editor
//!
//! This crate re-exports all layers of the Gridloom system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: gridloom_store      — Keyed tables, integrity resolver, cascade delete
//! Layer 1: gridloom_model      — Domain entity types, timeslice codec
//! Layer 0: gridloom_foundation — Store identifiers, dependent maps, errors
//! ```

pub use gridloom_foundation as foundation;
pub use gridloom_model as model;
pub use gridloom_store as store;
