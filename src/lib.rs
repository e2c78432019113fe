//! Mock telemetry and control backend for a small fleet of simulated
//! grow-room devices.
//!
//! Each registered device produces plausible pH, conductivity, temperature,
//! humidity, CO2 and light readings that evolve as a bounded random walk.
//! Setpoint requests are validated and echoed but never acted on.
//!
//! This crate follows the Explicit Module Boundary Pattern (EMBP): sibling
//! modules import shared types from here, not from each other's paths.

pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod routes;
pub mod telemetry;

pub use config::Config;
pub use error::ApiError;
pub use models::{
    DeviceEntry, DevicesResponse, HealthResponse, ReadingVector, Setpoint, SetpointsAck,
    SetpointsRequest, TelemetryResponse,
};
pub use registry::DeviceRegistry;
pub use routes::{router, AppState};
pub use telemetry::TelemetryStore;
