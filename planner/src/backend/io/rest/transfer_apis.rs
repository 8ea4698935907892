//! # REST API for Export and Import
//!
//! Export answers with the file itself as an attachment. Import takes the
//! raw file body so the JSON is validated by the domain layer, not by the
//! extractor, and every failure mode keeps its own error kind.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use shared::ImportResponse;
use tracing::info;

use crate::backend::io::rest::error_response;
use crate::backend::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/export", get(export_destinations))
        .route("/import", post(import_destinations))
}

pub async fn export_destinations(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/export");

    match state.transfer_service.export().await {
        Ok(file) => {
            let disposition = format!("attachment; filename=\"{}\"", file.filename);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/json".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                file.bytes,
            )
                .into_response()
        }
        Err(e) => error_response("Failed to export destinations", e),
    }
}

pub async fn import_destinations(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    info!("POST /api/import - {} bytes", body.len());

    match state.transfer_service.import(&body).await {
        Ok(result) => {
            let response = ImportResponse {
                imported_count: result.imported_count,
                active_destination_id: result.active_destination_id,
                persisted: result.persisted,
                success_message: format!("Imported {} destinations", result.imported_count),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("Failed to import destinations", e),
    }
}
