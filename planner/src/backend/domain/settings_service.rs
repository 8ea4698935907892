use anyhow::Result;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::backend::domain::commands::settings::{SettingsResult, UpdateSettingsCommand};
use crate::backend::domain::models::settings::PlannerSettings;
use crate::backend::storage::SettingsStorage;

/// Holds the planner-wide budget and headcount.
///
/// Settings are passed explicitly into budget computations; nothing reads
/// them from global state.
#[derive(Clone)]
pub struct SettingsService {
    current: Arc<RwLock<PlannerSettings>>,
    storage: Arc<dyn SettingsStorage>,
}

impl SettingsService {
    pub async fn load(storage: Arc<dyn SettingsStorage>) -> Result<Self> {
        let settings = storage.load_settings().await?;
        info!(
            "Loaded settings: budget {:.2}, {} people",
            settings.total_budget, settings.people_count
        );

        Ok(Self {
            current: Arc::new(RwLock::new(settings)),
            storage,
        })
    }

    pub async fn get_settings(&self) -> PlannerSettings {
        *self.current.read().await
    }

    /// Validate, apply, then persist. A failed write keeps the new settings in memory.
    pub async fn update_settings(&self, command: UpdateSettingsCommand) -> Result<SettingsResult> {
        info!(
            "Updating settings: budget {:.2}, {} people",
            command.total_budget, command.people_count
        );

        let settings = PlannerSettings::build(command.total_budget, command.people_count)?;

        let mut current = self.current.write().await;
        *current = settings;

        let persisted = match self.storage.save_settings(&settings).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to persist settings: {}", e);
                false
            }
        };

        Ok(SettingsResult { settings, persisted })
    }
}
