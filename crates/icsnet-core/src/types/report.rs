use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::log::Severity;

/// Derived analytics report: summary statistics plus an optional chart.
///
/// A report is a pure function of the record sets at the moment it was
/// computed. The chart is absent whenever there were no log events to
/// visualize; callers must not treat that as a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Named summary statistics over the current record sets
    pub summary: ReportSummary,

    /// Rendered alert-volume chart, base64-encoded for JSON transport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartPayload>,
}

/// Summary statistics over the current record sets.
///
/// Each statistic is present only if its source record set was non-empty at
/// computation time; absent statistics are omitted from the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Occurrence count per distinct service label, over all scan findings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_services: Option<HashMap<String, u64>>,

    /// Top 5 hosts by count of findings with `cvss >= 7.0`, ranked
    /// descending; ties rank the earlier-encountered host first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_risk_hosts: Option<Vec<HostRisk>>,

    /// Occurrence count per alert signature, over all log events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_counts: Option<HashMap<String, u64>>,

    /// Occurrence count per severity level, over all log events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity_counts: Option<HashMap<Severity, u64>>,
}

impl ReportSummary {
    /// Returns true if no statistic is present (both record sets were empty)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.top_services.is_none()
            && self.high_risk_hosts.is_none()
            && self.alert_counts.is_none()
            && self.severity_counts.is_none()
    }
}

/// One entry in the high-risk host ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRisk {
    /// Host identifier
    pub host: String,

    /// Number of findings at or above the high-risk CVSS threshold
    pub count: u64,
}

/// A rendered chart, encoded for embedding in a JSON response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPayload {
    /// IANA media type of the decoded bytes (e.g. `image/svg+xml`)
    pub media_type: String,

    /// Base64-encoded chart bytes
    pub data: String,
}
