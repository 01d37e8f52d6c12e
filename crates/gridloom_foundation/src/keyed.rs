//! Compile-time key projection for entity types.

/// Projects the storage key out of an entity.
///
/// Each entity type owns its key derivation, so callers never pass a key to
/// `create`; the store asks the entity. Keys are plain strings because every
/// store is keyed by a human-readable name (years stringify their number).
pub trait Keyed {
    /// Returns the key this entity is stored under.
    fn key(&self) -> String;
}
