// src/routes/health.rs
//! Liveness endpoint for the mock plant backend.
//!
//! This module defines the `/health` route used by container orchestrators
//! and CI pipelines to verify that the service is running. It is a sibling
//! module in the `routes` directory and follows the Explicit Module Boundary
//! Pattern (EMBP):
//! - Internal to this file: endpoint handler
//! - Exports to the gateway (`mod.rs`): a subrouter containing the `/health` route

use axum::{extract::State, routing::get, Json, Router};

use crate::{AppState, HealthResponse};

/// Handle `GET /health`.
///
/// Always reports `ok: true` together with the full configured device list.
/// Telemetry state is never consulted, so prior requests do not affect it.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        devices: state.registry.ids().to_vec(),
    })
}

/// Create a subrouter containing the `/health` route.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
