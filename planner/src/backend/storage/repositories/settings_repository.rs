use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::backend::domain::models::settings::PlannerSettings;
use crate::backend::storage::connection::DbConnection;
use crate::backend::storage::traits::SettingsStorage;

/// Key holding the JSON-serialized settings object
pub const SETTINGS_KEY: &str = "trip-planner-settings";

#[derive(Clone)]
pub struct SettingsRepository {
    db: DbConnection,
}

impl SettingsRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsStorage for SettingsRepository {
    async fn load_settings(&self) -> Result<PlannerSettings> {
        let Some(raw) = self.db.get_value(SETTINGS_KEY).await? else {
            debug!("No saved settings, using defaults");
            return Ok(PlannerSettings::default());
        };

        // Settings written by hand or by an older build may be invalid
        let parsed = serde_json::from_str::<PlannerSettings>(&raw)
            .map_err(|e| e.to_string())
            .and_then(|s| {
                PlannerSettings::build(s.total_budget, s.people_count).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!("Saved settings are unusable ({}), using defaults", e);
                Ok(PlannerSettings::default())
            }
        }
    }

    async fn save_settings(&self, settings: &PlannerSettings) -> Result<()> {
        let json = serde_json::to_string(settings)?;
        self.db.put_value(SETTINGS_KEY, &json).await?;
        debug!("Saved settings: {:?}", settings);
        Ok(())
    }
}
