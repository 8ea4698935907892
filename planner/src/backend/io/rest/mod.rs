//! # REST API Interface Layer
//!
//! Loopback JSON API used by the trip planner view.
//!
//! Handlers translate shared DTOs into domain commands, call a service, and
//! map the result back. Domain errors are translated to status codes here
//! by downcasting, so services never deal in HTTP concepts:
//!
//! | Error | Status | `kind` |
//! |---|---|---|
//! | `ValidationError` | 400 | `validation` |
//! | `DestinationError` not found | 404 | `not_found` |
//! | `DestinationError` duplicate | 409 | `duplicate` |
//! | `ImportError` | 422 | one per variant |
//! | `GeocodingError` | 502 | `geocoding` |
//! | anything else | 500 | `internal` |
//!
//! Bodies and query strings that fail to decode are rejected by the
//! extractors in [`extractors`] with kinds `invalid_body` and `invalid_query`.

pub mod budget_apis;
pub mod destination_apis;
pub mod extractors;
pub mod geocoding_apis;
pub mod mappers;
pub mod settings_apis;
pub mod transfer_apis;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use tracing::error;

use crate::backend::domain::destination_store::DestinationError;
use crate::backend::domain::geocoding_service::GeocodingError;
use crate::backend::domain::models::ValidationError;
use crate::backend::domain::transfer_service::ImportError;

/// Status code and stable error kind for a service failure
pub fn classify_error(err: &anyhow::Error) -> (StatusCode, &'static str) {
    if err.downcast_ref::<ValidationError>().is_some() {
        return (StatusCode::BAD_REQUEST, "validation");
    }

    if let Some(e) = err.downcast_ref::<DestinationError>() {
        return match e {
            DestinationError::NotFound(_)
            | DestinationError::FlightNotFound { .. }
            | DestinationError::AccommodationNotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            DestinationError::Duplicate(_)
            | DestinationError::DuplicateFlight { .. }
            | DestinationError::DuplicateAccommodation { .. } => (StatusCode::CONFLICT, "duplicate"),
        };
    }

    if let Some(e) = err.downcast_ref::<ImportError>() {
        let kind = match e {
            ImportError::MalformedJson(_) => "malformed_json",
            ImportError::NotAnArray => "not_an_array",
            ImportError::MissingFields { .. } => "missing_fields",
            ImportError::InvalidRecord { .. } => "invalid_record",
            ImportError::DuplicateId { .. } => "duplicate_id",
            ImportError::DuplicateOptionId { .. } => "duplicate_option_id",
        };
        return (StatusCode::UNPROCESSABLE_ENTITY, kind);
    }

    if err.downcast_ref::<GeocodingError>().is_some() {
        return (StatusCode::BAD_GATEWAY, "geocoding");
    }

    (StatusCode::INTERNAL_SERVER_ERROR, "internal")
}

/// Log a failed operation and render it as an `ErrorResponse` body
pub fn error_response(context: &str, err: anyhow::Error) -> Response {
    let (status, kind) = classify_error(&err);
    error!("{}: {}", context, err);

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        context.to_string()
    } else {
        err.to_string()
    };

    (
        status,
        Json(ErrorResponse {
            kind: kind.to_string(),
            message,
        }),
    )
        .into_response()
}
