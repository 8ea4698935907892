//! # Backend Module
//!
//! Contains all non-UI logic for the trip planner.
//!
//! ## Architecture
//!
//! ```text
//! View (any frontend on the allowed origin)
//!     ↓
//! IO Layer (REST API, mappers, geocoding client)
//!     ↓
//! Domain Layer (destination store, budget, transfer, lookups)
//!     ↓
//! Storage Layer (SQLite key/value table)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Open storage and hydrate the services from it
//! - Set up the REST API router with CORS restricted to the view's origin

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::backend::domain::{
    BudgetService, DestinationService, GeocodingService, PlaceLookup, RouteService, SettingsService,
    TransferService,
};
use crate::backend::domain::models::route::HomeBase;
use crate::backend::io::geocoding::NominatimClient;
use crate::backend::io::rest::{budget_apis, destination_apis, geocoding_apis, settings_apis, transfer_apis};
use crate::backend::storage::{DbConnection, DestinationRepository, SettingsRepository};
use crate::config::PlannerConfig;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub destination_service: DestinationService,
    pub settings_service: SettingsService,
    pub budget_service: BudgetService,
    pub transfer_service: TransferService,
    pub geocoding_service: GeocodingService,
    pub route_service: RouteService,
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &PlannerConfig) -> Result<AppState> {
    info!("Setting up database in {}", config.data_directory.display());
    let db_conn = DbConnection::open(&config.data_directory).await?;

    info!("Setting up geocoding client for {}", config.geocoding_endpoint);
    let lookup = NominatimClient::new(config.geocoding_endpoint.clone())?;

    initialize_with(db_conn, Arc::new(lookup), config.home_base.clone()).await
}

/// Wire services over an already opened store and lookup
pub async fn initialize_with(
    db_conn: DbConnection,
    lookup: Arc<dyn PlaceLookup>,
    home_base: HomeBase,
) -> Result<AppState> {
    info!("Setting up domain model");
    let destination_service =
        DestinationService::load(Arc::new(DestinationRepository::new(db_conn.clone()))).await?;
    let settings_service = SettingsService::load(Arc::new(SettingsRepository::new(db_conn))).await?;
    let budget_service = BudgetService::new(destination_service.clone(), settings_service.clone());
    let transfer_service = TransferService::new(destination_service.clone());
    let geocoding_service = GeocodingService::new(lookup);
    let route_service = RouteService::new(home_base, destination_service.clone());

    info!("Setting up application state");
    Ok(AppState {
        destination_service,
        settings_service,
        budget_service,
        transfer_service,
        geocoding_service,
        route_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, allowed_origin: &str) -> Result<Router> {
    let origin = allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid allowed origin '{}'", allowed_origin))?;

    // Only the view's own origin may call the API
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest(
            "/destinations",
            destination_apis::router().merge(budget_apis::router()),
        )
        .nest("/settings", settings_apis::router())
        .nest("/geocode", geocoding_apis::router())
        .merge(transfer_apis::router());

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state))
}
