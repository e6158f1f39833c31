//! Core types and trait seams for the icsnet telemetry analytics suite.
//!
//! This crate provides the foundational pieces shared across the workspace:
//!
//! - **Types**: Strongly-typed scan findings, IDS log events, and the derived
//!   analytics report
//! - **Providers**: The [`ScanProvider`] and [`EventSource`] traits that mark
//!   the ingestion boundary (simulated in this repository, swappable for real
//!   scanner/SIEM integrations)
//! - **Errors**: Error handling with [`CoreError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use icsnet_core::{Report, ScanFinding, Result};
//!
//! fn count_high_risk(findings: &[ScanFinding]) -> usize {
//!     findings.iter().filter(|f| f.is_high_risk()).count()
//! }
//! ```

mod error;
pub mod provider;
pub mod types;

pub use error::{CoreError, Result};
pub use provider::{EventSource, ScanProvider};
pub use types::*;
