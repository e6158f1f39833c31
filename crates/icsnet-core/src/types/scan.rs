use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// CVSS score at or above which a finding counts toward host risk ranking
pub const HIGH_RISK_CVSS: f64 = 7.0;

/// Request to scan a target scope (an IP or CIDR label)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    /// IP address or CIDR identifying the scan scope
    pub target: String,

    /// Caller-supplied labels attached to every resulting finding
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Acknowledgement returned after a scan has been ingested
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReceipt {
    /// Number of findings appended to the record store
    pub inserted: usize,

    /// The scope label the scan was requested for
    pub target: String,
}

/// One observed (host, port, service) tuple from a network scan.
///
/// Findings are created by the ingestion boundary and are immutable once
/// stored. The producer is responsible for keeping `cvss` within
/// [0.0, 10.0]; the core does not re-validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanFinding {
    /// Host identifier (IP address in the reference deployment)
    pub host: String,

    /// Port the service was observed on
    pub port: u16,

    /// Service label (e.g. `modbus`, `http`)
    pub service: String,

    /// Observed port state
    pub state: PortState,

    /// CVSS severity score, 0.0-10.0
    pub cvss: f64,

    /// The scan request's input scope this finding belongs to
    pub target: String,

    /// Caller-supplied labels, in the order they were supplied
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ScanFinding {
    /// Returns true if this finding counts toward the high-risk host ranking
    #[must_use]
    pub fn is_high_risk(&self) -> bool {
        self.cvss >= HIGH_RISK_CVSS
    }
}

/// Observed state of a scanned port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortState {
    /// Port accepted the probe
    Open,
    /// No response to the probe
    Filtered,
    /// Port actively refused the probe
    Closed,
}

impl PortState {
    /// Returns true if the port accepted the probe
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Lowercase label as used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Filtered => "filtered",
            Self::Closed => "closed",
        }
    }
}

impl std::fmt::Display for PortState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PortState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "filtered" => Ok(Self::Filtered),
            "closed" => Ok(Self::Closed),
            other => Err(CoreError::InvalidPortState(other.to_string())),
        }
    }
}
