//! Alert-volume time series: log events bucketed by raw timestamp.

use std::collections::BTreeMap;

use icsnet_core::LogEvent;

/// One point in the alert-volume series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePoint {
    /// Seconds since the UNIX epoch
    pub timestamp: i64,
    /// Number of events observed at exactly this timestamp
    pub count: u64,
}

/// Bucket `events` by timestamp into an ordered count series.
///
/// Bucket granularity equals the raw timestamp resolution - no rounding or
/// binning. The result is sorted ascending with one entry per distinct
/// timestamp; an empty input yields an empty series, which the chart
/// renderer treats as "nothing to draw".
#[must_use]
pub fn alert_volume(events: &[LogEvent]) -> Vec<TimePoint> {
    let mut buckets: BTreeMap<i64, u64> = BTreeMap::new();
    for event in events {
        *buckets.entry(event.timestamp).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(timestamp, count)| TimePoint { timestamp, count })
        .collect()
}
