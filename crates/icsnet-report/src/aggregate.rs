//! Summary statistics over the current record sets.
//!
//! Each statistic is an independent O(N) reduction over one record set; scan
//! findings and log events are never cross-referenced. A statistic is only
//! emitted when its source set is non-empty, so an empty deployment yields an
//! empty summary rather than a sea of zeroes.

use std::collections::HashMap;

use icsnet_core::{HostRisk, LogEvent, ReportSummary, ScanFinding, Severity};

/// Maximum number of entries in the high-risk host ranking.
pub const TOP_HOST_LIMIT: usize = 5;

/// Occurrence count per distinct service label, exhaustive over `findings`.
#[must_use]
pub fn service_counts(findings: &[ScanFinding]) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    for finding in findings {
        *counts.entry(finding.service.clone()).or_insert(0) += 1;
    }
    counts
}

/// Rank hosts by their number of high-risk findings (`cvss >= 7.0`).
///
/// Returns at most [`TOP_HOST_LIMIT`] entries, sorted by count descending.
/// The sort is stable over first-encounter order, so when two hosts tie the
/// one whose high-risk finding was ingested earlier ranks first.
#[must_use]
pub fn high_risk_hosts(findings: &[ScanFinding]) -> Vec<HostRisk> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut ranking: Vec<HostRisk> = Vec::new();

    for finding in findings.iter().filter(|f| f.is_high_risk()) {
        if let Some(&slot) = index.get(finding.host.as_str()) {
            ranking[slot].count += 1;
        } else {
            index.insert(finding.host.as_str(), ranking.len());
            ranking.push(HostRisk {
                host: finding.host.clone(),
                count: 1,
            });
        }
    }

    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking.truncate(TOP_HOST_LIMIT);
    ranking
}

/// Occurrence count per alert signature over `events`.
#[must_use]
pub fn alert_counts(events: &[LogEvent]) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    for event in events {
        *counts.entry(event.signature.clone()).or_insert(0) += 1;
    }
    counts
}

/// Occurrence count per severity level over `events`.
#[must_use]
pub fn severity_counts(events: &[LogEvent]) -> HashMap<Severity, u64> {
    let mut counts = HashMap::new();
    for event in events {
        *counts.entry(event.severity).or_insert(0) += 1;
    }
    counts
}

/// Compute the full summary, leaving statistics absent when their source set
/// is empty.
#[must_use]
pub fn summarize(findings: &[ScanFinding], events: &[LogEvent]) -> ReportSummary {
    let mut summary = ReportSummary::default();

    if !findings.is_empty() {
        summary.top_services = Some(service_counts(findings));
        summary.high_risk_hosts = Some(high_risk_hosts(findings));
    }

    if !events.is_empty() {
        summary.alert_counts = Some(alert_counts(events));
        summary.severity_counts = Some(severity_counts(events));
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use icsnet_core::PortState;

    fn finding(host: &str, service: &str, cvss: f64) -> ScanFinding {
        ScanFinding {
            host: host.into(),
            port: 502,
            service: service.into(),
            state: PortState::Open,
            cvss,
            target: "10.0.0.0/24".into(),
            tags: Vec::new(),
        }
    }

    fn event(signature: &str, severity: Severity) -> LogEvent {
        LogEvent {
            timestamp: 100,
            source: "10.0.0.20".into(),
            signature: signature.into(),
            severity,
        }
    }

    #[test]
    fn test_service_counts_sum_to_total_findings() {
        let findings = vec![
            finding("a", "ssh", 3.5),
            finding("b", "http", 4.0),
            finding("c", "ssh", 9.0),
            finding("d", "modbus", 8.2),
        ];
        let counts = service_counts(&findings);
        assert_eq!(counts["ssh"], 2);
        assert_eq!(counts.values().sum::<u64>(), findings.len() as u64);
    }

    #[test]
    fn test_high_risk_counts_only_threshold_findings() {
        // Three findings for one host, cvss [8.0, 7.5, 6.0]: only the two
        // at or above 7.0 count.
        let findings = vec![
            finding("10.0.0.10", "modbus", 8.0),
            finding("10.0.0.10", "http", 7.5),
            finding("10.0.0.10", "ssh", 6.0),
        ];
        let ranking = high_risk_hosts(&findings);
        assert_eq!(
            ranking,
            vec![HostRisk {
                host: "10.0.0.10".into(),
                count: 2
            }]
        );
    }

    #[test]
    fn test_high_risk_hosts_caps_at_five() {
        let mut findings = Vec::new();
        for i in 0..8 {
            // host-0 gets 1 high-risk finding, host-1 gets 2, and so on.
            for _ in 0..=i {
                findings.push(finding(&format!("host-{i}"), "modbus", 9.0));
            }
        }
        let ranking = high_risk_hosts(&findings);
        assert_eq!(ranking.len(), TOP_HOST_LIMIT);
        assert_eq!(ranking[0].host, "host-7");
        assert_eq!(ranking[0].count, 8);
        assert_eq!(ranking[4].host, "host-3");
    }

    #[test]
    fn test_high_risk_ties_rank_earlier_host_first() {
        let findings = vec![
            finding("late-but-big", "modbus", 9.0),
            finding("early", "ssh", 7.0),
            finding("late-but-big", "modbus", 9.0),
            finding("middle", "http", 8.0),
        ];
        let ranking = high_risk_hosts(&findings);
        assert_eq!(ranking[0].host, "late-but-big");
        // "early" and "middle" tie at 1; "early" was encountered first.
        assert_eq!(ranking[1].host, "early");
        assert_eq!(ranking[2].host, "middle");
    }

    #[test]
    fn test_high_risk_excludes_sub_threshold_hosts() {
        let findings = vec![finding("quiet", "ssh", 6.9)];
        assert!(high_risk_hosts(&findings).is_empty());
    }

    #[test]
    fn test_event_reductions() {
        let events = vec![
            event("SCAN_SYN_FLOOD", Severity::High),
            event("SCAN_SYN_FLOOD", Severity::Low),
            event("MQTT_BRUTE", Severity::High),
        ];
        let alerts = alert_counts(&events);
        assert_eq!(alerts["SCAN_SYN_FLOOD"], 2);
        assert_eq!(alerts["MQTT_BRUTE"], 1);

        let severities = severity_counts(&events);
        assert_eq!(severities[&Severity::High], 2);
        assert_eq!(severities[&Severity::Low], 1);
        assert!(!severities.contains_key(&Severity::Medium));
    }

    #[test]
    fn test_summarize_omits_statistics_for_empty_sets() {
        let summary = summarize(&[], &[]);
        assert!(summary.is_empty());

        let summary = summarize(&[finding("a", "ssh", 5.0)], &[]);
        assert!(summary.top_services.is_some());
        assert!(summary.high_risk_hosts.is_some());
        assert!(summary.alert_counts.is_none());
        assert!(summary.severity_counts.is_none());
    }

    #[test]
    fn test_summarize_includes_empty_ranking_when_findings_exist() {
        // Findings present but none high-risk: the key is present (source
        // set was non-empty) with an empty ranking.
        let summary = summarize(&[finding("a", "ssh", 2.0)], &[]);
        assert_eq!(summary.high_risk_hosts, Some(Vec::new()));
    }
}
