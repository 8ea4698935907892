pub mod destination_repository;
pub mod settings_repository;

pub use destination_repository::{DestinationRepository, DESTINATIONS_KEY};
pub use settings_repository::{SettingsRepository, SETTINGS_KEY};
