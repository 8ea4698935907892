//! # REST API for Planner Settings

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::{SettingsResponse, UpdateSettingsRequest};
use tracing::info;

use crate::backend::domain::commands::settings::UpdateSettingsCommand;
use crate::backend::io::rest::error_response;
use crate::backend::io::rest::extractors::ApiJson;
use crate::backend::io::rest::mappers::BudgetMapper;
use crate::backend::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_settings).put(update_settings))
}

pub async fn get_settings(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/settings");

    let settings = state.settings_service.get_settings().await;
    let response = SettingsResponse {
        settings: BudgetMapper::settings_to_dto(settings),
        persisted: true,
    };
    (StatusCode::OK, Json(response))
}

pub async fn update_settings(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<UpdateSettingsRequest>,
) -> impl IntoResponse {
    info!("PUT /api/settings - request: {:?}", request);

    let command = UpdateSettingsCommand {
        total_budget: request.total_budget,
        people_count: request.people_count,
    };

    match state.settings_service.update_settings(command).await {
        Ok(result) => (StatusCode::OK, Json(BudgetMapper::to_settings_response(result))).into_response(),
        Err(e) => error_response("Failed to update settings", e),
    }
}
