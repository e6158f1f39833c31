//! Report engine: orchestrates aggregation, time-series bucketing, and chart
//! rendering into one report, and caches the latest result.

use tokio::sync::Mutex;
use tracing::debug;

use icsnet_core::{LogEvent, Report, ScanFinding};

use crate::store::{RecordStore, StoreSnapshot};
use crate::{aggregate, chart, timeseries, Result};

/// Owns the record store and the cached latest report.
///
/// All mutation and recomputation are serialized behind a single mutex, so a
/// rebuild always sees a consistent snapshot of both record sets and the
/// cached report is replaced wholesale, never partially updated. Rebuilds are
/// cheap enough to run synchronously while the lock is held; chart rendering
/// is the most expensive step and would be the first candidate for offloading
/// if that ever changes.
#[derive(Debug, Default)]
pub struct ReportEngine {
    inner: Mutex<EngineState>,
}

#[derive(Debug, Default)]
struct EngineState {
    store: RecordStore,
    latest: Option<Report>,
}

impl ReportEngine {
    /// Create an engine with empty record sets and no cached report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one scan's worth of telemetry and rebuild the report.
    ///
    /// Findings are appended to the accumulated set; the log-event set is
    /// REPLACED with `events` as a documented side effect of the same
    /// operation ("refresh alerts on every scan"). The two mutations and the
    /// rebuild happen under one lock, and the rebuilt report both replaces
    /// the cache and is returned to the caller.
    pub async fn ingest(&self, findings: Vec<ScanFinding>, events: Vec<LogEvent>) -> Result<Report> {
        let mut state = self.inner.lock().await;
        debug!(
            findings = findings.len(),
            events = events.len(),
            "ingesting telemetry"
        );

        state.store.append_findings(findings);
        state.store.replace_events(events);

        let report = build_report(&state.store.snapshot())?;
        state.latest = Some(report.clone());
        Ok(report)
    }

    /// Return the latest report, computing one on demand if none is cached.
    ///
    /// The on-demand path makes "read before any write" work without callers
    /// special-casing it: an empty store simply produces an empty summary
    /// with no chart.
    pub async fn latest_report(&self) -> Result<Report> {
        let mut state = self.inner.lock().await;
        if let Some(report) = &state.latest {
            return Ok(report.clone());
        }

        debug!("no cached report, computing from current store contents");
        let report = build_report(&state.store.snapshot())?;
        state.latest = Some(report.clone());
        Ok(report)
    }

    /// Current record counts as (findings, events).
    pub async fn record_counts(&self) -> (usize, usize) {
        let state = self.inner.lock().await;
        (state.store.finding_count(), state.store.event_count())
    }

    /// Full reset: drop all records and the cached report.
    ///
    /// This is the only way records leave the store; individual deletion is
    /// deliberately not supported.
    pub async fn reset(&self) {
        let mut state = self.inner.lock().await;
        state.store.clear();
        state.latest = None;
    }
}

/// Build a report from a consistent snapshot of both record sets.
fn build_report(snapshot: &StoreSnapshot) -> Result<Report> {
    let summary = aggregate::summarize(&snapshot.findings, &snapshot.events);
    let series = timeseries::alert_volume(&snapshot.events);
    let chart = chart::render_alert_volume(&series)?;
    Ok(Report { summary, chart })
}

#[cfg(test)]
mod tests {
    use super::*;
    use icsnet_core::{PortState, Severity};

    fn finding(host: &str, cvss: f64) -> ScanFinding {
        ScanFinding {
            host: host.into(),
            port: 502,
            service: "modbus".into(),
            state: PortState::Open,
            cvss,
            target: "10.0.0.0/24".into(),
            tags: vec!["ics".into()],
        }
    }

    fn event(timestamp: i64, signature: &str) -> LogEvent {
        LogEvent {
            timestamp,
            source: "10.0.0.21".into(),
            signature: signature.into(),
            severity: Severity::Medium,
        }
    }

    #[tokio::test]
    async fn test_read_before_any_write_yields_empty_report() {
        let engine = ReportEngine::new();
        let report = engine.latest_report().await.unwrap();
        assert!(report.summary.is_empty());
        assert!(report.chart.is_none());
    }

    #[tokio::test]
    async fn test_latest_report_is_idempotent_without_ingestion() {
        let engine = ReportEngine::new();
        engine
            .ingest(vec![finding("10.0.0.10", 8.0)], vec![event(100, "A")])
            .await
            .unwrap();

        let first = engine.latest_report().await.unwrap();
        let second = engine.latest_report().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_ingest_returns_the_report_it_caches() {
        let engine = ReportEngine::new();
        let returned = engine
            .ingest(vec![finding("10.0.0.10", 8.0)], vec![event(100, "A")])
            .await
            .unwrap();
        let cached = engine.latest_report().await.unwrap();
        assert_eq!(returned, cached);
    }

    #[tokio::test]
    async fn test_findings_accumulate_while_events_are_replaced() {
        let engine = ReportEngine::new();
        engine
            .ingest(
                vec![finding("10.0.0.10", 8.0)],
                vec![event(100, "FIRST"), event(160, "FIRST")],
            )
            .await
            .unwrap();
        let report = engine
            .ingest(vec![finding("10.0.0.11", 7.5)], vec![event(200, "SECOND")])
            .await
            .unwrap();

        // Findings: union of both calls, in order.
        let (findings, events) = engine.record_counts().await;
        assert_eq!(findings, 2);
        assert_eq!(events, 1);

        let ranking = report.summary.high_risk_hosts.unwrap();
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].host, "10.0.0.10");

        // Events: only the second call's set remains.
        let alerts = report.summary.alert_counts.unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts["SECOND"], 1);
    }

    #[tokio::test]
    async fn test_chart_present_only_with_events() {
        let engine = ReportEngine::new();
        let no_events = engine
            .ingest(vec![finding("10.0.0.10", 5.0)], Vec::new())
            .await
            .unwrap();
        assert!(no_events.chart.is_none());
        assert!(no_events.summary.alert_counts.is_none());
        assert!(no_events.summary.severity_counts.is_none());

        let with_events = engine
            .ingest(Vec::new(), vec![event(100, "A")])
            .await
            .unwrap();
        assert!(with_events.chart.is_some());
    }

    #[tokio::test]
    async fn test_reset_drops_records_and_cache() {
        let engine = ReportEngine::new();
        engine
            .ingest(vec![finding("10.0.0.10", 8.0)], vec![event(100, "A")])
            .await
            .unwrap();

        engine.reset().await;
        assert_eq!(engine.record_counts().await, (0, 0));

        let report = engine.latest_report().await.unwrap();
        assert!(report.summary.is_empty());
        assert!(report.chart.is_none());
    }
}
