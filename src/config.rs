//! Configuration loader for the `mock-plant-backend` service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). Everything is read once at startup; handlers never
//! touch `env::var` directly.
//!
use std::env;

use anyhow::{anyhow, Result};

/// Device list used when `DEVICE_IDS` is not set.
pub const DEFAULT_DEVICE_IDS: &str = "container-001,container-002,container-003";

/// Parse an optional numeric variable with a default value.
macro_rules! parse_var {
    ($lookup:expr, $var_name:expr, $ty:ty, $default:expr) => {
        parse_var_opt!($lookup, $var_name, $ty).unwrap_or($default)
    };
}

/// Parse an optional numeric variable with no default.
macro_rules! parse_var_opt {
    ($lookup:expr, $var_name:expr, $ty:ty) => {
        $lookup($var_name)
            .map(|v| v.trim().parse::<$ty>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Raw comma-delimited device list, parsed by the registry.
    pub device_ids: String,

    /// TCP port the HTTP server listens on.
    pub listen_port: u16,

    /// Fixed seed for the telemetry RNG, if reproducible runs are wanted.
    pub telemetry_seed: Option<u64>,
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `DEVICE_IDS` – comma-delimited device identifiers (default: three `container-00N` ids)
/// - `LISTEN_PORT` – HTTP listen port (default: 8080)
/// - `TELEMETRY_SEED` – u64 seed for the telemetry RNG (default: OS entropy)
///
/// Returns an error if a numeric variable is present but invalid.
pub fn load_from_env() -> Result<Config> {
    load_from(|name| env::var(name).ok())
}

/// Build a [`Config`] from any variable source.
///
/// `load_from_env` passes the process environment; tests pass a fixed map.
pub fn load_from<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    // ---
    let device_ids = lookup("DEVICE_IDS").unwrap_or_else(|| DEFAULT_DEVICE_IDS.to_string());
    let listen_port = parse_var!(lookup, "LISTEN_PORT", u16, 8080);
    let telemetry_seed = parse_var_opt!(lookup, "TELEMETRY_SEED", u64);

    Ok(Config {
        device_ids,
        listen_port,
        telemetry_seed,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        let seed = match self.telemetry_seed {
            Some(seed) => seed.to_string(),
            None => "<entropy>".to_string(),
        };

        tracing::info!("Configuration loaded:");
        tracing::info!("  DEVICE_IDS     : {}", self.device_ids);
        tracing::info!("  LISTEN_PORT    : {}", self.listen_port);
        tracing::info!("  TELEMETRY_SEED : {}", seed);
    }
}
