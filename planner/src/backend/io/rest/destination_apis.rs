//! # REST API for Destinations
//!
//! Endpoints for managing destinations and the flight and accommodation
//! options nested under them.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post, put},
    Router,
};
use shared::{
    AccommodationRequest, CreateDestinationRequest, FlightRequest, SelectDestinationResponse,
    UpdateDestinationRequest,
};
use tracing::info;

use crate::backend::io::rest::error_response;
use crate::backend::io::rest::extractors::ApiJson;
use crate::backend::io::rest::mappers::DestinationMapper;
use crate::backend::AppState;

/// Create a router for destination related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_destinations).post(create_destination))
        .route("/:id", put(update_destination).delete(remove_destination))
        .route("/:id/select", post(select_destination))
        .route("/:id/flights", post(add_flight))
        .route("/:id/flights/:flight_id", put(update_flight).delete(remove_flight))
        .route("/:id/accommodations", post(add_accommodation))
        .route(
            "/:id/accommodations/:accommodation_id",
            put(update_accommodation).delete(remove_accommodation),
        )
}

/// List destinations with the active selection
pub async fn list_destinations(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/destinations");

    let result = state.destination_service.list_destinations().await;
    (StatusCode::OK, Json(DestinationMapper::to_list_response(result)))
}

/// Add a destination with a server-generated id
pub async fn create_destination(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateDestinationRequest>,
) -> impl IntoResponse {
    info!("POST /api/destinations - request: {:?}", request);

    let command = DestinationMapper::to_create_command(request);
    match state.destination_service.create_destination(command).await {
        Ok(result) => {
            let response = DestinationMapper::to_destination_response(result, "Destination added");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response("Failed to add destination", e),
    }
}

pub async fn update_destination(
    State(state): State<AppState>,
    Path(destination_id): Path<String>,
    ApiJson(request): ApiJson<UpdateDestinationRequest>,
) -> impl IntoResponse {
    info!("PUT /api/destinations/{} - request: {:?}", destination_id, request);

    let command = DestinationMapper::to_update_command(destination_id, request);
    match state.destination_service.update_destination(command).await {
        Ok(result) => {
            let response = DestinationMapper::to_destination_response(result, "Destination updated");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("Failed to update destination", e),
    }
}

pub async fn remove_destination(
    State(state): State<AppState>,
    Path(destination_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/destinations/{}", destination_id);

    match state.destination_service.remove_destination(&destination_id).await {
        Ok(result) => (StatusCode::OK, Json(DestinationMapper::to_remove_response(result))).into_response(),
        Err(e) => error_response("Failed to remove destination", e),
    }
}

pub async fn select_destination(
    State(state): State<AppState>,
    Path(destination_id): Path<String>,
) -> impl IntoResponse {
    info!("POST /api/destinations/{}/select", destination_id);

    match state.destination_service.select_destination(&destination_id).await {
        Ok(active_destination_id) => {
            (StatusCode::OK, Json(SelectDestinationResponse { active_destination_id })).into_response()
        }
        Err(e) => error_response("Failed to select destination", e),
    }
}

pub async fn add_flight(
    State(state): State<AppState>,
    Path(destination_id): Path<String>,
    ApiJson(request): ApiJson<FlightRequest>,
) -> impl IntoResponse {
    info!("POST /api/destinations/{}/flights - request: {:?}", destination_id, request);

    let command = DestinationMapper::to_flight_command(destination_id, request);
    match state.destination_service.add_flight(command).await {
        Ok(result) => {
            let response = DestinationMapper::to_destination_response(result, "Flight added");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response("Failed to add flight", e),
    }
}

pub async fn update_flight(
    State(state): State<AppState>,
    Path((destination_id, flight_id)): Path<(String, String)>,
    ApiJson(request): ApiJson<FlightRequest>,
) -> impl IntoResponse {
    info!("PUT /api/destinations/{}/flights/{}", destination_id, flight_id);

    let command = DestinationMapper::to_flight_command(destination_id, request);
    match state.destination_service.update_flight(&flight_id, command).await {
        Ok(result) => {
            let response = DestinationMapper::to_destination_response(result, "Flight updated");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("Failed to update flight", e),
    }
}

pub async fn remove_flight(
    State(state): State<AppState>,
    Path((destination_id, flight_id)): Path<(String, String)>,
) -> impl IntoResponse {
    info!("DELETE /api/destinations/{}/flights/{}", destination_id, flight_id);

    match state.destination_service.remove_flight(&destination_id, &flight_id).await {
        Ok(result) => {
            let response = DestinationMapper::to_destination_response(result, "Flight removed");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("Failed to remove flight", e),
    }
}

pub async fn add_accommodation(
    State(state): State<AppState>,
    Path(destination_id): Path<String>,
    ApiJson(request): ApiJson<AccommodationRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/destinations/{}/accommodations - request: {:?}",
        destination_id, request
    );

    let command = DestinationMapper::to_accommodation_command(destination_id, request);
    match state.destination_service.add_accommodation(command).await {
        Ok(result) => {
            let response = DestinationMapper::to_destination_response(result, "Accommodation added");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response("Failed to add accommodation", e),
    }
}

pub async fn update_accommodation(
    State(state): State<AppState>,
    Path((destination_id, accommodation_id)): Path<(String, String)>,
    ApiJson(request): ApiJson<AccommodationRequest>,
) -> impl IntoResponse {
    info!(
        "PUT /api/destinations/{}/accommodations/{}",
        destination_id, accommodation_id
    );

    let command = DestinationMapper::to_accommodation_command(destination_id, request);
    match state
        .destination_service
        .update_accommodation(&accommodation_id, command)
        .await
    {
        Ok(result) => {
            let response = DestinationMapper::to_destination_response(result, "Accommodation updated");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("Failed to update accommodation", e),
    }
}

pub async fn remove_accommodation(
    State(state): State<AppState>,
    Path((destination_id, accommodation_id)): Path<(String, String)>,
) -> impl IntoResponse {
    info!(
        "DELETE /api/destinations/{}/accommodations/{}",
        destination_id, accommodation_id
    );

    match state
        .destination_service
        .remove_accommodation(&destination_id, &accommodation_id)
        .await
    {
        Ok(result) => {
            let response = DestinationMapper::to_destination_response(result, "Accommodation removed");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("Failed to remove accommodation", e),
    }
}
