use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::backend::domain::commands::destination::{
    CreateDestinationCommand, DestinationListResult, DestinationResult, RemoveDestinationResult,
    ReplaceDestinationsResult, UpdateDestinationCommand,
};
use crate::backend::domain::commands::options::{AccommodationCommand, FlightCommand};
use crate::backend::domain::destination_store::{DestinationError, DestinationStore};
use crate::backend::domain::models::destination::{
    generate_id, validate_coordinates, validate_name, Accommodation, Destination, Flight,
};
use crate::backend::storage::DestinationStorage;

/// Service owning the destination store.
///
/// Every mutation is applied to the in-memory store first, then the whole
/// destination list is written to storage. A failed write is logged and
/// reported through `persisted: false`; the in-memory change stays.
#[derive(Clone)]
pub struct DestinationService {
    store: Arc<Mutex<DestinationStore>>,
    storage: Arc<dyn DestinationStorage>,
}

impl DestinationService {
    /// Hydrate the store from storage
    pub async fn load(storage: Arc<dyn DestinationStorage>) -> Result<Self> {
        let destinations = storage.load_destinations().await?;
        info!("Loaded {} destinations from storage", destinations.len());

        Ok(Self {
            store: Arc::new(Mutex::new(DestinationStore::from_persisted(destinations))),
            storage,
        })
    }

    pub async fn list_destinations(&self) -> DestinationListResult {
        let store = self.store.lock().await;
        DestinationListResult {
            destinations: store.destinations().to_vec(),
            active_destination_id: store.active_id().map(str::to_string),
        }
    }

    pub async fn get_destination(&self, destination_id: &str) -> Option<Destination> {
        self.store.lock().await.get(destination_id).cloned()
    }

    pub async fn create_destination(&self, command: CreateDestinationCommand) -> Result<DestinationResult> {
        info!(
            "Creating destination: name={}, coordinates=({}, {})",
            command.name, command.latitude, command.longitude
        );

        let destination = Destination::build(generate_id(), &command.name, command.latitude, command.longitude)?;
        let destination_id = destination.id.clone();
        let (store, persisted) = self.apply(|store| store.add(destination)).await?;

        info!("Created destination with ID: {}", destination_id);
        Self::destination_result(&store, &destination_id, persisted)
    }

    /// Edit name and/or coordinates; flights and accommodations are untouched
    pub async fn update_destination(&self, command: UpdateDestinationCommand) -> Result<DestinationResult> {
        info!("Updating destination: {}", command.destination_id);

        // Read and write under one lock hold so concurrent option edits survive
        let (store, persisted) = self
            .apply(|store| -> Result<DestinationStore> {
                let mut destination = store
                    .get(&command.destination_id)
                    .cloned()
                    .ok_or_else(|| DestinationError::NotFound(command.destination_id.clone()))?;
                if let Some(name) = command.name.as_deref() {
                    destination.name = validate_name(name)?;
                }
                if let Some(latitude) = command.latitude {
                    destination.latitude = latitude;
                }
                if let Some(longitude) = command.longitude {
                    destination.longitude = longitude;
                }
                validate_coordinates(destination.latitude, destination.longitude)?;
                Ok(store.update(destination)?)
            })
            .await?;
        Self::destination_result(&store, &command.destination_id, persisted)
    }

    pub async fn remove_destination(&self, destination_id: &str) -> Result<RemoveDestinationResult> {
        info!("Removing destination: {}", destination_id);

        let (store, persisted) = self.apply(|store| store.remove(destination_id)).await?;

        info!(
            "Removed destination {}, active is now {:?}",
            destination_id,
            store.active_id()
        );
        Ok(RemoveDestinationResult {
            removed_id: destination_id.to_string(),
            active_destination_id: store.active_id().map(str::to_string),
            persisted,
        })
    }

    /// Change the active destination; the selection is session state and is not persisted
    pub async fn select_destination(&self, destination_id: &str) -> Result<Option<String>> {
        let mut store = self.store.lock().await;
        let next = store.select(destination_id)?;
        *store = next;
        info!("Active destination set to {}", destination_id);
        Ok(store.active_id().map(str::to_string))
    }

    pub async fn add_flight(&self, command: FlightCommand) -> Result<DestinationResult> {
        info!(
            "Adding flight to {}: {:.2}/person",
            command.destination_id, command.price_per_person
        );
        let flight = Self::flight_from_command(generate_id(), &command)?;
        let (store, persisted) = self
            .apply(|store| store.add_flight(&command.destination_id, flight))
            .await?;
        Self::destination_result(&store, &command.destination_id, persisted)
    }

    pub async fn update_flight(&self, flight_id: &str, command: FlightCommand) -> Result<DestinationResult> {
        info!("Updating flight {} in {}", flight_id, command.destination_id);
        let flight = Self::flight_from_command(flight_id.to_string(), &command)?;
        let (store, persisted) = self
            .apply(|store| store.update_flight(&command.destination_id, flight))
            .await?;
        Self::destination_result(&store, &command.destination_id, persisted)
    }

    pub async fn remove_flight(&self, destination_id: &str, flight_id: &str) -> Result<DestinationResult> {
        info!("Removing flight {} from {}", flight_id, destination_id);
        let (store, persisted) = self
            .apply(|store| store.remove_flight(destination_id, flight_id))
            .await?;
        Self::destination_result(&store, destination_id, persisted)
    }

    pub async fn add_accommodation(&self, command: AccommodationCommand) -> Result<DestinationResult> {
        info!(
            "Adding accommodation to {}: {:.2} total",
            command.destination_id, command.total_price
        );
        let accommodation = Self::accommodation_from_command(generate_id(), &command)?;
        let (store, persisted) = self
            .apply(|store| store.add_accommodation(&command.destination_id, accommodation))
            .await?;
        Self::destination_result(&store, &command.destination_id, persisted)
    }

    pub async fn update_accommodation(
        &self,
        accommodation_id: &str,
        command: AccommodationCommand,
    ) -> Result<DestinationResult> {
        info!("Updating accommodation {} in {}", accommodation_id, command.destination_id);
        let accommodation = Self::accommodation_from_command(accommodation_id.to_string(), &command)?;
        let (store, persisted) = self
            .apply(|store| store.update_accommodation(&command.destination_id, accommodation))
            .await?;
        Self::destination_result(&store, &command.destination_id, persisted)
    }

    pub async fn remove_accommodation(
        &self,
        destination_id: &str,
        accommodation_id: &str,
    ) -> Result<DestinationResult> {
        info!("Removing accommodation {} from {}", accommodation_id, destination_id);
        let (store, persisted) = self
            .apply(|store| store.remove_accommodation(destination_id, accommodation_id))
            .await?;
        Self::destination_result(&store, destination_id, persisted)
    }

    /// Wholesale replace of the destination list, no merge
    pub async fn replace_all(&self, destinations: Vec<Destination>) -> ReplaceDestinationsResult {
        let count = destinations.len();
        warn!("Replacing all destinations with {} imported records", count);

        let mut store = self.store.lock().await;
        let next = store.replace_all(destinations);
        *store = next;
        let persisted = self.persist(store.destinations()).await;

        ReplaceDestinationsResult {
            destination_count: count,
            active_destination_id: store.active_id().map(str::to_string),
            persisted,
        }
    }

    /// Apply a store mutation, then write the resulting list to storage.
    /// The lock is held across the write so saves land in mutation order.
    async fn apply<F, E>(&self, mutation: F) -> Result<(DestinationStore, bool)>
    where
        F: FnOnce(&DestinationStore) -> Result<DestinationStore, E>,
        E: Into<anyhow::Error>,
    {
        let mut store = self.store.lock().await;
        let next = mutation(&store).map_err(Into::into)?;
        *store = next.clone();
        let persisted = self.persist(next.destinations()).await;
        Ok((next, persisted))
    }

    async fn persist(&self, destinations: &[Destination]) -> bool {
        match self.storage.save_destinations(destinations).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to persist {} destinations: {}", destinations.len(), e);
                false
            }
        }
    }

    fn destination_result(
        store: &DestinationStore,
        destination_id: &str,
        persisted: bool,
    ) -> Result<DestinationResult> {
        let destination = store
            .get(destination_id)
            .cloned()
            .ok_or_else(|| DestinationError::NotFound(destination_id.to_string()))?;

        Ok(DestinationResult {
            destination,
            active_destination_id: store.active_id().map(str::to_string),
            persisted,
        })
    }

    fn flight_from_command(id: String, command: &FlightCommand) -> Result<Flight> {
        Ok(Flight::build(
            id,
            &command.link,
            command.description.as_deref(),
            &command.start_date,
            &command.end_date,
            command.price_per_person,
        )?)
    }

    fn accommodation_from_command(id: String, command: &AccommodationCommand) -> Result<Accommodation> {
        Ok(Accommodation::build(
            id,
            &command.link,
            &command.description,
            command.total_price,
            &command.start_date,
            &command.end_date,
        )?)
    }
}
