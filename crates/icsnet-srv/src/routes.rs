//! Route registration and request handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use icsnet_core::{Report, ScanReceipt, ScanRequest};

use crate::error::ApiError;
use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/scan", post(run_scan))
        .route("/report", get(get_report))
        .with_state(state)
}

/// Liveness response with a little operational context.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    uptime_secs: u64,
    findings: usize,
    events: usize,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (findings, events) = state.engine.record_counts().await;
    Json(HealthResponse {
        status: "ok",
        uptime_secs: state.started_at.elapsed().as_secs(),
        findings,
        events,
    })
}

/// Run a scan of the requested target and ingest the results.
///
/// One call performs the whole refresh: scan findings are appended, the
/// alert window is re-fetched and replaces the previous one, and the report
/// is rebuilt. Callers never trigger the pieces separately.
async fn run_scan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScanRequest>,
) -> Result<Json<ScanReceipt>, ApiError> {
    if req.target.trim().is_empty() {
        return Err(ApiError::BadRequest("target must not be empty".into()));
    }

    let findings = state
        .scanner
        .scan(&req.target, &req.tags)
        .await
        .map_err(|e| ApiError::Internal(format!("scan provider: {e}")))?;
    let events = state
        .events
        .fetch_recent()
        .await
        .map_err(|e| ApiError::Internal(format!("event source: {e}")))?;

    let inserted = findings.len();
    state
        .engine
        .ingest(findings, events)
        .await
        .map_err(|e| ApiError::Internal(format!("report rebuild: {e}")))?;

    info!(target = %req.target, inserted, "scan ingested");
    Ok(Json(ScanReceipt {
        inserted,
        target: req.target,
    }))
}

/// Latest analytics report (computed on demand before the first scan).
async fn get_report(State(state): State<Arc<AppState>>) -> Result<Json<Report>, ApiError> {
    let report = state
        .engine
        .latest_report()
        .await
        .map_err(|e| ApiError::Internal(format!("report build: {e}")))?;
    Ok(Json(report))
}
