use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{Config, DeviceRegistry, TelemetryStore};

mod control;
mod devices;
mod health;
mod telemetry;

// ---

/// Application context handed to every handler.
///
/// Built once at startup; tests build a fresh one per case.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<DeviceRegistry>,
    pub store: Arc<TelemetryStore>,
}

impl AppState {
    pub fn new(registry: DeviceRegistry, store: TelemetryStore) -> Self {
        Self {
            registry: Arc::new(registry),
            store: Arc::new(store),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        // ---
        let registry = DeviceRegistry::from_delimited(&config.device_ids);
        let store = match config.telemetry_seed {
            Some(seed) => TelemetryStore::with_seed(seed),
            None => TelemetryStore::new(),
        };
        Self::new(registry, store)
    }
}

pub fn router(state: AppState) -> Router {
    // ---
    Router::new()
        .merge(devices::router())
        .merge(telemetry::router())
        .merge(control::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
