//! # Domain Module
//!
//! Business logic for the trip planner: destinations and their travel
//! options, the shared budget, and the portable export format.
//!
//! ## Module Organization
//!
//! - **destination_store**: Immutable-replace collection of destinations plus the active selection
//! - **destination_service**: Applies store mutations, then mirrors the list to storage
//! - **budget_service**: Pure cost aggregation and allocation checks
//! - **settings_service**: Global budget and headcount
//! - **transfer_service**: JSON export and destructive import
//! - **geocoding_service**: Place lookups with stale-result discarding
//! - **route_service**: Great-circle distance from the home base
//!
//! ## Business Rules
//!
//! - Every destination, flight and accommodation has a unique id within its parent
//! - Over budget and over allocation are reported as data, never rejected
//! - Removing the active destination moves the selection to the first remaining one
//! - An import either replaces everything or changes nothing

pub mod budget_service;
pub mod commands;
pub mod destination_service;
pub mod destination_store;
pub mod geocoding_service;
pub mod models;
pub mod route_service;
pub mod settings_service;
pub mod transfer_service;

pub use budget_service::{check_allocation, compute_budget, BudgetService};
pub use destination_service::DestinationService;
pub use destination_store::{DestinationError, DestinationStore};
pub use geocoding_service::{GeocodingError, GeocodingService, LookupOutcome, PlaceLookup};
pub use route_service::RouteService;
pub use settings_service::SettingsService;
pub use transfer_service::{export_to_file, import_from_file, ImportError, TransferService};
