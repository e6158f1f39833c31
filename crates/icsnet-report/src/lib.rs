//! icsnet-report: the aggregation and reporting engine.
//!
//! Takes raw, already-collected scan findings and IDS log events and turns
//! them into summary statistics plus a renderable alert-volume time series.
//!
//! # Architecture
//!
//! - [`store`] - in-memory record store owning the two record sets
//! - [`aggregate`] - independent reductions over each set (service frequency,
//!   high-risk host ranking, alert/severity frequency)
//! - [`timeseries`] - buckets log events by raw timestamp into an ordered
//!   count series
//! - [`chart`] - renders the series as an SVG line chart, base64-encoded for
//!   JSON transport
//! - [`engine`] - orchestrates the above into one [`Report`] and caches the
//!   latest result
//!
//! All store mutation and report recomputation happen behind a single mutex
//! inside [`ReportEngine`], so a recomputation always sees a consistent
//! snapshot of both record sets.
//!
//! [`Report`]: icsnet_core::Report

pub mod aggregate;
pub mod chart;
pub mod engine;
mod error;
pub mod store;
pub mod timeseries;

pub use engine::ReportEngine;
pub use error::ReportError;

/// Result type for icsnet-report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
