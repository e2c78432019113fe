use axum::{extract::State, routing::get, Json, Router};
use tracing::debug;

use crate::{AppState, DeviceEntry, DevicesResponse};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/devices", get(handler))
}

/// Handle `GET /devices`, listing the registry in configured order.
async fn handler(State(state): State<AppState>) -> Json<DevicesResponse> {
    // ---
    debug!("GET /devices - {} devices", state.registry.len());

    let devices = state
        .registry
        .ids()
        .iter()
        .map(|id| DeviceEntry { id: id.clone() })
        .collect();

    Json(DevicesResponse { devices })
}
