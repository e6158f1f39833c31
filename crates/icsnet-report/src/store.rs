//! In-memory record store for the current process lifetime.
//!
//! The store exclusively owns the two record sets. Findings accumulate in
//! insertion order; the event set is replaced wholesale on every ingestion.
//! Nothing here is persisted - restart loses all records.

use icsnet_core::{LogEvent, ScanFinding};

/// Accumulated scan findings and log events.
///
/// Pure in-memory mutations with no validation; record invariants are the
/// producer's responsibility. Callers needing concurrent access must wrap
/// the store in their own synchronization (the report engine serializes all
/// access behind one mutex).
#[derive(Debug, Default)]
pub struct RecordStore {
    findings: Vec<ScanFinding>,
    events: Vec<LogEvent>,
}

/// A consistent point-in-time copy of both record sets.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    /// Scan findings in ingestion order
    pub findings: Vec<ScanFinding>,
    /// The current (most recently installed) event set
    pub events: Vec<LogEvent>,
}

impl RecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append findings to the end of the existing sequence.
    ///
    /// Insertion order is preserved and duplicates are kept; the aggregator
    /// counts occurrences, so deduplication here would skew the statistics.
    pub fn append_findings(&mut self, records: Vec<ScanFinding>) {
        self.findings.extend(records);
    }

    /// Discard the previous event set entirely and install `records`.
    pub fn replace_events(&mut self, records: Vec<LogEvent>) {
        self.events = records;
    }

    /// Copy out both record sets as one consistent view.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            findings: self.findings.clone(),
            events: self.events.clone(),
        }
    }

    /// Number of stored scan findings.
    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.findings.len()
    }

    /// Number of stored log events.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Full reset: drop every record from both sets.
    pub fn clear(&mut self) {
        self.findings.clear();
        self.events.clear();
    }
}
