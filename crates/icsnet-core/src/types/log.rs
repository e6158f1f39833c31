use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One IDS-style alert from the log/event backend.
///
/// Events are immutable once stored. The entire event set is replaced (never
/// appended to) on each ingestion; see the report engine for the rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Seconds since the UNIX epoch; producers only emit non-negative values
    pub timestamp: i64,

    /// Originating host
    pub source: String,

    /// Alert rule identifier (e.g. `MODBUS_ANOMALY`)
    pub signature: String,

    /// Alert severity
    pub severity: Severity,
}

/// Alert severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational or low-impact alert
    Low,
    /// Needs attention
    Medium,
    /// Likely active threat
    High,
}

impl Severity {
    /// Lowercase label as used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(CoreError::InvalidSeverity(other.to_string())),
        }
    }
}
