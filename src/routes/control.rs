use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use tracing::info;

use crate::{ApiError, AppState, SetpointsAck, SetpointsRequest};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/control/setpoints", post(handler))
}

/// Accept a setpoint change for a known device without applying it.
///
/// Telemetry state is neither read nor written; the body comes back verbatim
/// under `echo` with `applied: false`.
async fn handler(
    State(state): State<AppState>,
    body: Result<Json<SetpointsRequest>, JsonRejection>,
) -> Result<Json<SetpointsAck>, ApiError> {
    // ---
    let Json(request) = body?;

    if !state.registry.contains(&request.device_id) {
        return Err(ApiError::UnknownDevice);
    }

    info!(
        "POST /control/setpoints - {} ({} targets), not applied",
        request.device_id,
        request.target_count()
    );

    Ok(Json(SetpointsAck {
        status: "accepted",
        applied: false,
        echo: request,
    }))
}
