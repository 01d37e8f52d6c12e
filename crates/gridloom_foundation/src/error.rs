//! Error types for the Gridloom system.
//!
//! Uses `thiserror` for ergonomic error definition. Every failure the core
//! can produce is a value of [`Error`]; the store performs no logging and no
//! retries, so errors surface synchronously to the caller.

use thiserror::Error;

use crate::store::StoreId;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The error taxonomy for store and codec operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Attempted to create an entity under a key that is already taken.
    #[error("key '{key}' already exists in {store} store")]
    KeyAlreadyExists {
        /// The contested key.
        key: String,
        /// The store the create was attempted on.
        store: StoreId,
    },

    /// Attempted to read, update, or delete an absent key.
    #[error("key '{key}' not found in {store} store")]
    KeyNotFound {
        /// The key that was looked up.
        key: String,
        /// The store the lookup was performed on.
        store: StoreId,
    },

    /// An embedded reference does not resolve in the target store.
    ///
    /// Raised during back-dependency validation, before any mutation commits.
    #[error("{entity} references missing key '{missing_key}' in {store} store")]
    DependentNotFound {
        /// Key of the referencing entity.
        entity: String,
        /// The reference that failed to resolve.
        missing_key: String,
        /// The store the reference points into.
        store: StoreId,
    },

    /// A timeslice name's segment count does not match the level hierarchy.
    #[error(
        "timeslice segments {provided:?} do not match registered level names {level_names:?}"
    )]
    LevelNameMismatch {
        /// The registered hierarchy levels, in sorted key order.
        level_names: Vec<String>,
        /// The segments of the offending dotted name.
        provided: Vec<String>,
    },

    /// A dotted timeslice path collides with an existing leaf or subtree.
    #[error("timeslice path '{path}' conflicts with an existing entry")]
    PathConflict {
        /// The dotted path that could not be inserted.
        path: String,
    },
}

impl Error {
    /// Creates a key-already-exists error.
    #[must_use]
    pub fn key_already_exists(key: impl Into<String>, store: StoreId) -> Self {
        Self::KeyAlreadyExists {
            key: key.into(),
            store,
        }
    }

    /// Creates a key-not-found error.
    #[must_use]
    pub fn key_not_found(key: impl Into<String>, store: StoreId) -> Self {
        Self::KeyNotFound {
            key: key.into(),
            store,
        }
    }

    /// Creates a dependent-not-found error for a reference that failed to
    /// resolve in `store`.
    #[must_use]
    pub fn dependent_not_found(
        entity: impl Into<String>,
        missing_key: impl Into<String>,
        store: StoreId,
    ) -> Self {
        Self::DependentNotFound {
            entity: entity.into(),
            missing_key: missing_key.into(),
            store,
        }
    }

    /// Creates a level-name mismatch error.
    #[must_use]
    pub fn level_name_mismatch(level_names: Vec<String>, provided: Vec<String>) -> Self {
        Self::LevelNameMismatch {
            level_names,
            provided,
        }
    }

    /// Creates a path-conflict error for the timeslice codec.
    #[must_use]
    pub fn path_conflict(path: impl Into<String>) -> Self {
        Self::PathConflict { path: path.into() }
    }

    /// Returns true if this is a key-not-found error.
    ///
    /// Callers treating deletion as idempotent use this to tell "already
    /// gone" apart from failures that must surface.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }
}
