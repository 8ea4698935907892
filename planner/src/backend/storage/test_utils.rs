//! Test utilities shared by storage and domain tests.
//!
//! Each [`TestEnvironment`] owns a private in-memory database, so tests never
//! see each other's data and nothing is left on disk.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

use super::connection::DbConnection;
use super::repositories::{DestinationRepository, SettingsRepository};
use super::traits::DestinationStorage;
use crate::backend::domain::destination_service::DestinationService;
use crate::backend::domain::models::destination::Destination;
use crate::backend::domain::settings_service::SettingsService;

pub struct TestEnvironment {
    pub db: DbConnection,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        Ok(Self {
            db: DbConnection::in_memory().await?,
        })
    }

    pub fn destination_repository(&self) -> DestinationRepository {
        DestinationRepository::new(self.db.clone())
    }

    pub fn settings_repository(&self) -> SettingsRepository {
        SettingsRepository::new(self.db.clone())
    }

    /// Service hydrated from whatever this environment's database holds
    pub async fn destination_service(&self) -> Result<DestinationService> {
        DestinationService::load(Arc::new(self.destination_repository())).await
    }

    pub async fn settings_service(&self) -> Result<SettingsService> {
        SettingsService::load(Arc::new(self.settings_repository())).await
    }
}

/// Storage whose writes always fail, for exercising the no-rollback path
pub struct FailingDestinationStorage;

#[async_trait]
impl DestinationStorage for FailingDestinationStorage {
    async fn load_destinations(&self) -> Result<Vec<Destination>> {
        Ok(Vec::new())
    }

    async fn save_destinations(&self, _destinations: &[Destination]) -> Result<()> {
        Err(anyhow!("disk full"))
    }
}

/// In-memory storage whose saves each wait for a permit from [`release`].
///
/// [`release`]: GatedDestinationStorage::release
pub struct GatedDestinationStorage {
    saved: Mutex<Vec<Destination>>,
    gate: Semaphore,
}

impl GatedDestinationStorage {
    pub fn new() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            gate: Semaphore::new(0),
        }
    }

    /// Let `saves` more writes through
    pub fn release(&self, saves: usize) {
        self.gate.add_permits(saves);
    }

    pub fn last_saved(&self) -> Vec<Destination> {
        self.saved.lock().map(|saved| saved.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl DestinationStorage for GatedDestinationStorage {
    async fn load_destinations(&self) -> Result<Vec<Destination>> {
        Ok(self.last_saved())
    }

    async fn save_destinations(&self, destinations: &[Destination]) -> Result<()> {
        self.gate.acquire().await?.forget();
        let mut saved = self.saved.lock().map_err(|_| anyhow!("saved list poisoned"))?;
        *saved = destinations.to_vec();
        Ok(())
    }
}
