//! Application state for the icsnet HTTP shell.

use std::sync::Arc;
use std::time::Instant;

use icsnet_core::{EventSource, ScanProvider};
use icsnet_report::ReportEngine;
use icsnet_sim::{MockEventSource, SimulatedScanner};

use crate::config::ServerConfig;

/// Global application state shared by all request handlers.
///
/// The engine owns every record; the providers sit behind trait objects so
/// tests (or a real deployment) can substitute their own implementations.
pub struct AppState {
    /// Aggregation and reporting engine.
    pub engine: ReportEngine,
    /// Scan-finding producer for `POST /scan`.
    pub scanner: Arc<dyn ScanProvider>,
    /// Alert-window producer, re-queried on every scan.
    pub events: Arc<dyn EventSource>,
    /// Server start time for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Build state with the simulated providers described by `config`.
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_providers(
            Arc::new(SimulatedScanner::with_config(config.scanner.to_config())),
            Arc::new(MockEventSource::with_config(config.events.to_config())),
        )
    }

    /// Build state around explicit provider implementations (used by tests).
    #[must_use]
    pub fn with_providers(scanner: Arc<dyn ScanProvider>, events: Arc<dyn EventSource>) -> Self {
        Self {
            engine: ReportEngine::new(),
            scanner,
            events,
            started_at: Instant::now(),
        }
    }
}
