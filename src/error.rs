//! Request-level errors and their HTTP mapping.
//!
//! Every error body has the shape `{"detail": <message>}`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request named a device that is not in the registry.
    #[error("unknown device_id")]
    UnknownDevice,

    /// The request could not be parsed into the expected shape.
    #[error("{0}")]
    InvalidRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownDevice => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // ---
        let status = self.status();
        warn!("Request rejected ({}): {}", status, self);
        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}
