//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::error::{ServiceError, ServiceResult};

/// Install a fmt subscriber. `RUST_LOG` overrides `default_level`.
pub fn init_tracing(default_level: &str) -> ServiceResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| ServiceError::Telemetry(e.to_string()))
}
