//! # Storage Module
//!
//! Persists planner state in a local key/value table.
//!
//! Two slots are used: one holds the JSON-serialized destination list, the
//! other the planner settings. Both are read once at startup and rewritten
//! in full after every mutation. The domain layer only sees the
//! [`DestinationStorage`] and [`SettingsStorage`] traits.

pub mod connection;
pub mod repositories;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use connection::DbConnection;
pub use repositories::{DestinationRepository, SettingsRepository};
pub use traits::{DestinationStorage, SettingsStorage};
