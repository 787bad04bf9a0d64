//! HTTP boundary: a single lookup route over [`resolve_company`](crate::resolve_company).
//!
//! Everything here is an adapter; the lookup logic lives in the core modules.

pub mod config;
mod routes;
pub mod telemetry;

use thiserror::Error;
use tracing::info;

use crate::core::ChError;
use config::{AppConfig, ConfigError};
use telemetry::TelemetryError;

pub use routes::router;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("client error: {0}")]
    Client(#[from] ChError),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Bind and serve until the process is stopped.
///
/// # Errors
///
/// Returns `AppError` if the client cannot be built or the listener fails.
pub async fn serve(config: AppConfig) -> Result<(), AppError> {
    let client = config.upstream.client()?;
    let app = router(client);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, upstream = %config.upstream.base_url, "company lookup API ready");

    axum::serve(listener, app).await?;
    Ok(())
}
