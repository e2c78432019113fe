use axum::{
    extract::rejection::QueryRejection, extract::Query, extract::State, routing::get, Json, Router,
};
use serde::Deserialize;
use tracing::debug;

use crate::{ApiError, AppState, TelemetryResponse};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/telemetry/latest", get(handler))
}

/// Query parameters for `GET /telemetry/latest`.
#[derive(Debug, Deserialize)]
struct LatestQuery {
    device_id: String,
}

/// Advance the device's simulated sensors by one step and return them.
async fn handler(
    State(state): State<AppState>,
    query: Result<Query<LatestQuery>, QueryRejection>,
) -> Result<Json<TelemetryResponse>, ApiError> {
    // ---
    let Query(params) = query?;

    if !state.registry.contains(&params.device_id) {
        return Err(ApiError::UnknownDevice);
    }

    let latest = state.store.next_reading(&params.device_id);
    debug!("GET /telemetry/latest - {}: {:?}", params.device_id, latest);

    Ok(Json(TelemetryResponse {
        latest,
        device_id: params.device_id,
    }))
}
