//! # Storage Traits
//!
//! The domain layer persists through these traits so the key/value backend
//! can be swapped without touching services.

use anyhow::Result;
use async_trait::async_trait;

use crate::backend::domain::models::destination::Destination;
use crate::backend::domain::models::settings::PlannerSettings;

/// Mirror of the full destination list
#[async_trait]
pub trait DestinationStorage: Send + Sync {
    /// Load the saved list; missing or unreadable data yields an empty list
    async fn load_destinations(&self) -> Result<Vec<Destination>>;

    /// Overwrite the saved list with `destinations`
    async fn save_destinations(&self, destinations: &[Destination]) -> Result<()>;
}

/// Planner-wide settings, stored separately from destinations
#[async_trait]
pub trait SettingsStorage: Send + Sync {
    /// Load saved settings; missing or unreadable data yields the defaults
    async fn load_settings(&self) -> Result<PlannerSettings>;

    async fn save_settings(&self, settings: &PlannerSettings) -> Result<()>;
}
