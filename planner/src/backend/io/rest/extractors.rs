//! Request extractors whose rejections use the same `ErrorResponse` body as
//! service failures, so the view only ever parses one error shape.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use tracing::warn;

/// `Json<T>` with an `invalid_body` error envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiRejection))]
pub struct ApiJson<T>(pub T);

/// `Query<T>` with an `invalid_query` error envelope
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiRejection))]
pub struct ApiQuery<T>(pub T);

#[derive(Debug)]
pub struct ApiRejection {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl From<JsonRejection> for ApiRejection {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            kind: "invalid_body",
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiRejection {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: rejection.status(),
            kind: "invalid_query",
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiRejection {
    fn into_response(self) -> Response {
        warn!("Rejected request ({}): {}", self.status, self.message);
        (
            self.status,
            Json(ErrorResponse {
                kind: self.kind.to_string(),
                message: self.message,
            }),
        )
            .into_response()
    }
}
