//! Keyed entity tables, integrity resolution, and cascading deletion.
//!
//! This crate provides:
//! - [`EntityTable`] - One persistent map from key to entity
//! - [`Record`] - Key projection plus the per-type dependency resolver
//! - [`Datastore`] - The root aggregate owning one table per entity type,
//!   with create/read/update/delete/list, cascading deletion, and recursive
//!   dependency closure
//!
//! All operations run synchronously on the caller's thread. The aggregate
//! takes `&mut self` for mutation, so concurrent writers are ruled out at
//! compile time; wrap it in a mutex if multiple threads must share it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cascade;
mod closure;
mod datastore;
mod record;
mod resolver;
mod table;

pub use cascade::DeleteOutcome;
pub use datastore::Datastore;
pub use record::Record;
pub use table::EntityTable;
