//! icsnet-sim: simulated data acquisition.
//!
//! Stand-ins for the real scanner and SIEM integrations, implementing the
//! `icsnet-core` provider traits with fabricated but plausible telemetry:
//!
//! - [`SimulatedScanner`] - pseudo network scan, deterministic per target
//! - [`MockEventSource`] - IDS-style alert feed walking back from "now"
//!
//! Swap these for real implementations of [`ScanProvider`] and
//! [`EventSource`] to point the suite at live infrastructure.
//!
//! [`ScanProvider`]: icsnet_core::ScanProvider
//! [`EventSource`]: icsnet_core::EventSource

pub mod events;
pub mod scanner;

pub use events::{EventSourceConfig, MockEventSource};
pub use scanner::{ScannerConfig, SimulatedScanner};
