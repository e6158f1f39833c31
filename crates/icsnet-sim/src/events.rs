//! Mock SIEM log source.
//!
//! Fabricates a window of IDS-style alerts spaced a fixed interval apart,
//! walking backwards from the current time. Each fetch produces a complete
//! replacement window, mirroring how the suite re-queries its log backend on
//! every scan rather than tailing it incrementally.

use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use icsnet_core::{EventSource, LogEvent, Result, Severity};

/// Alert signatures the mock feed draws from.
const SIGNATURES: [&str; 4] = [
    "SCAN_SYN_FLOOD",
    "MODBUS_ANOMALY",
    "HTTP_DIR_TRAVERSAL",
    "MQTT_BRUTE",
];

/// Possible alert severities.
const SEVERITIES: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

/// Mock event feed configuration.
#[derive(Debug, Clone)]
pub struct EventSourceConfig {
    /// Events fabricated per fetch
    pub events_per_fetch: usize,
    /// Seconds between consecutive event timestamps
    pub interval_secs: i64,
}

impl Default for EventSourceConfig {
    fn default() -> Self {
        Self {
            events_per_fetch: 30,
            interval_secs: 60,
        }
    }
}

/// Pseudo log-search backend implementing the ingestion-boundary trait.
#[derive(Debug, Default)]
pub struct MockEventSource {
    config: EventSourceConfig,
}

impl MockEventSource {
    /// Create a source with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source with custom configuration.
    #[must_use]
    pub const fn with_config(config: EventSourceConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl EventSource for MockEventSource {
    async fn fetch_recent(&self) -> Result<Vec<LogEvent>> {
        let now = Utc::now().timestamp();
        let mut rng = rand::thread_rng();

        let mut events = Vec::with_capacity(self.config.events_per_fetch);
        for i in 0..self.config.events_per_fetch {
            // Clamp at the epoch so the non-negative timestamp invariant
            // holds even with absurd interval configurations.
            let timestamp = (now - (i as i64) * self.config.interval_secs).max(0);
            events.push(LogEvent {
                timestamp,
                source: format!("10.0.0.{}", rng.gen_range(10..=30)),
                signature: (*SIGNATURES.choose(&mut rng).unwrap_or(&SIGNATURES[0])).to_string(),
                severity: *SEVERITIES.choose(&mut rng).unwrap_or(&SEVERITIES[0]),
            });
        }

        debug!(events = events.len(), "fetched mock alert window");
        Ok(events)
    }
}
