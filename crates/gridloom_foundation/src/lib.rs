//! Store identifiers, dependent maps, and error types for Gridloom.
//!
//! This crate provides:
//! - [`StoreId`] - Typed identifiers for the entity stores
//! - [`Keyed`] - Compile-time key projection for entity types
//! - [`Dependents`] - Per-store sets of dependent entity keys
//! - [`Error`] - The error taxonomy shared by all layers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod dependents;
mod error;
mod keyed;
mod store;

pub use dependents::Dependents;
pub use error::{Error, Result};
pub use keyed::Keyed;
pub use store::StoreId;
