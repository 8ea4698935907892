//! # REST API for Place Lookup

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use shared::{GeocodeRequest, GeocodeResponse};
use tracing::info;

use crate::backend::domain::geocoding_service::LookupOutcome;
use crate::backend::io::rest::error_response;
use crate::backend::io::rest::extractors::ApiQuery;
use crate::backend::io::rest::mappers::BudgetMapper;
use crate::backend::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(geocode))
        .route("/dismiss", post(dismiss_lookup))
}

/// Look up a place name; a miss is a normal response with no coordinates
pub async fn geocode(
    State(state): State<AppState>,
    ApiQuery(request): ApiQuery<GeocodeRequest>,
) -> impl IntoResponse {
    info!("GET /api/geocode?q={}", request.q);

    match state.geocoding_service.lookup(&request.q).await {
        Ok(outcome) => {
            let (coordinates, discarded) = match outcome {
                LookupOutcome::Found(c) => (Some(BudgetMapper::coordinates_to_dto(c)), false),
                LookupOutcome::NotFound => (None, false),
                LookupOutcome::Discarded => (None, true),
            };
            let response = GeocodeResponse {
                query: request.q,
                coordinates,
                discarded,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("Error searching for location", e),
    }
}

/// The add-destination form was closed; replies still in flight are dropped
pub async fn dismiss_lookup(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/geocode/dismiss");

    state.geocoding_service.dismiss();
    StatusCode::NO_CONTENT
}
