//! Trait seams for the telemetry ingestion boundary.
//!
//! The analytics core never talks to a scanner or SIEM directly; it consumes
//! records produced behind these traits. This repository ships simulated
//! implementations (see `icsnet-sim`); a real deployment would implement the
//! same traits against an actual scanner and a log-search backend.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{LogEvent, ScanFinding};

/// Produces scan findings for a target scope.
///
/// Implementations are responsible for record validity: every returned
/// finding must carry the requested `target` and `tags` and a `cvss` within
/// [0.0, 10.0].
#[async_trait]
pub trait ScanProvider: Send + Sync {
    /// Scan `target` and return the resulting findings.
    async fn scan(&self, target: &str, tags: &[String]) -> Result<Vec<ScanFinding>>;
}

/// Produces the current set of IDS-style log events.
///
/// The returned set is a full replacement for whatever was previously
/// ingested, not an increment.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch the current window of alert events.
    async fn fetch_recent(&self) -> Result<Vec<LogEvent>>;
}
