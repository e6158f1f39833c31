//! icsnet-srv: HTTP shell for the analytics suite.
//!
//! A thin request-routing layer over the report engine:
//!
//! - `GET /health` - liveness plus record counts and uptime
//! - `POST /scan` - run the scan provider for a target, refresh the alert
//!   window, ingest both, rebuild the report
//! - `GET /report` - the latest report (computed on demand if no scan has
//!   happened yet)
//!
//! All analytics state lives in [`state::AppState`]; the shell itself holds
//! nothing but the listening socket.

pub mod config;
pub mod error;
mod routes;
pub mod state;

use std::sync::Arc;

use tracing::info;

pub use config::ServerConfig;
pub use error::{ApiError, SrvError};

use state::AppState;

/// Result type for icsnet-srv operations.
pub type Result<T> = std::result::Result<T, SrvError>;

/// Build the axum router (exposed so tests can drive it without a socket).
pub fn build_router(state: Arc<AppState>) -> axum::Router {
    routes::build_router(state)
}

/// Start the API server and block until shutdown (ctrl-c).
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let state = Arc::new(AppState::new(&config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    info!(listen = %config.listen, "analytics API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SrvError::Server(e.to_string()))?;

    info!("API server shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    info!("shutdown signal received");
}
