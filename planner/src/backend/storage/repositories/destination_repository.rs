use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::backend::domain::models::destination::Destination;
use crate::backend::storage::connection::DbConnection;
use crate::backend::storage::traits::DestinationStorage;

/// Key holding the JSON-serialized destination list
pub const DESTINATIONS_KEY: &str = "trip-planner-destinations";

#[derive(Clone)]
pub struct DestinationRepository {
    db: DbConnection,
}

impl DestinationRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DestinationStorage for DestinationRepository {
    async fn load_destinations(&self) -> Result<Vec<Destination>> {
        let Some(raw) = self.db.get_value(DESTINATIONS_KEY).await? else {
            info!("No saved destinations found, starting with an empty list");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Destination>>(&raw) {
            Ok(destinations) => {
                debug!("Loaded {} destinations", destinations.len());
                Ok(destinations)
            }
            Err(e) => {
                warn!("Saved destinations could not be parsed ({}), starting with an empty list", e);
                Ok(Vec::new())
            }
        }
    }

    async fn save_destinations(&self, destinations: &[Destination]) -> Result<()> {
        let json = serde_json::to_string(destinations)?;
        self.db.put_value(DESTINATIONS_KEY, &json).await?;
        debug!("Saved {} destinations", destinations.len());
        Ok(())
    }
}
