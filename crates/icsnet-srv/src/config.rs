//! Server configuration for the icsnet HTTP shell.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use icsnet_sim::{EventSourceConfig, ScannerConfig};

/// Configuration for an icsnet analytics server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen address (default: 0.0.0.0:8080).
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,

    /// Simulated scanner knobs.
    #[serde(default)]
    pub scanner: ScannerSection,

    /// Mock alert feed knobs.
    #[serde(default)]
    pub events: EventsSection,
}

/// `[scanner]` section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerSection {
    /// Findings fabricated per scan (default: 15).
    #[serde(default = "default_hosts_per_scan")]
    pub hosts_per_scan: usize,
}

/// `[events]` section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsSection {
    /// Events fabricated per fetch (default: 30).
    #[serde(default = "default_events_per_fetch")]
    pub events_per_fetch: usize,

    /// Seconds between consecutive event timestamps (default: 60).
    #[serde(default = "default_event_interval")]
    pub interval_secs: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            scanner: ScannerSection::default(),
            events: EventsSection::default(),
        }
    }
}

impl Default for ScannerSection {
    fn default() -> Self {
        Self {
            hosts_per_scan: default_hosts_per_scan(),
        }
    }
}

impl Default for EventsSection {
    fn default() -> Self {
        Self {
            events_per_fetch: default_events_per_fetch(),
            interval_secs: default_event_interval(),
        }
    }
}

impl ServerConfig {
    /// Load config from a TOML file, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::SrvError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }
}

impl ScannerSection {
    /// Materialize the simulator config for this section.
    #[must_use]
    pub fn to_config(&self) -> ScannerConfig {
        ScannerConfig {
            hosts_per_scan: self.hosts_per_scan,
            ..ScannerConfig::default()
        }
    }
}

impl EventsSection {
    /// Materialize the simulator config for this section.
    #[must_use]
    pub const fn to_config(&self) -> EventSourceConfig {
        EventSourceConfig {
            events_per_fetch: self.events_per_fetch,
            interval_secs: self.interval_secs,
        }
    }
}

// Default value functions for serde.
fn default_listen() -> SocketAddr {
    "0.0.0.0:8080".parse().expect("valid default addr")
}

const fn default_hosts_per_scan() -> usize {
    15
}

const fn default_events_per_fetch() -> usize {
    30
}

const fn default_event_interval() -> i64 {
    60
}
