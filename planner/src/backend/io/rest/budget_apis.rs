//! # REST API for Budget and Route
//!
//! Per-destination read-only views: pricing a selection against the shared
//! budget, and the distance from the home base.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use shared::BudgetSelectionRequest;
use tracing::info;

use crate::backend::domain::commands::budget::EvaluateBudgetCommand;
use crate::backend::io::rest::error_response;
use crate::backend::io::rest::extractors::ApiJson;
use crate::backend::io::rest::mappers::BudgetMapper;
use crate::backend::AppState;

/// Routes nested under `/api/destinations`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:id/budget", post(evaluate_budget))
        .route("/:id/route", get(get_route))
}

/// Price a selection; over budget is reported, not rejected
pub async fn evaluate_budget(
    State(state): State<AppState>,
    Path(destination_id): Path<String>,
    ApiJson(request): ApiJson<BudgetSelectionRequest>,
) -> impl IntoResponse {
    info!("POST /api/destinations/{}/budget - request: {:?}", destination_id, request);

    let command = EvaluateBudgetCommand {
        destination_id,
        selection: BudgetMapper::to_selection(request),
    };

    match state.budget_service.evaluate(command).await {
        Ok(report) => (StatusCode::OK, Json(BudgetMapper::to_budget_response(report))).into_response(),
        Err(e) => error_response("Failed to evaluate budget", e),
    }
}

pub async fn get_route(
    State(state): State<AppState>,
    Path(destination_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/destinations/{}/route", destination_id);

    match state.route_service.route_to(&destination_id).await {
        Ok(route) => (StatusCode::OK, Json(BudgetMapper::to_route_summary(route))).into_response(),
        Err(e) => error_response("Failed to compute route", e),
    }
}
