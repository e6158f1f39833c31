//! Simulated network scanner.
//!
//! Fabricates a fixed number of findings per scan from ICS-flavoured
//! service/port tables. The RNG is seeded from a hash of the target string,
//! so scanning the same scope twice yields the same findings - repeat scans
//! accumulate duplicate records on purpose, which is what a real scheduled
//! rescan of an unchanged segment would do.

use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use icsnet_core::{PortState, Result, ScanFinding, ScanProvider};

/// Services a simulated scan can observe.
const SERVICES: [&str; 6] = ["ssh", "http", "https", "modbus", "http-alt", "mqtt"];

/// Ports a simulated scan can observe (chosen independently of the service).
const PORTS: [u16; 6] = [22, 80, 443, 502, 8080, 1883];

/// Possible observed port states.
const STATES: [PortState; 3] = [PortState::Open, PortState::Filtered, PortState::Closed];

/// Simulated scanner configuration.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Findings fabricated per scan
    pub hosts_per_scan: usize,
    /// Lower bound of the CVSS range
    pub min_cvss: f64,
    /// Upper bound of the CVSS range
    pub max_cvss: f64,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            hosts_per_scan: 15,
            min_cvss: 3.5,
            max_cvss: 9.8,
        }
    }
}

/// Pseudo network scanner implementing the ingestion-boundary trait.
#[derive(Debug, Default)]
pub struct SimulatedScanner {
    config: ScannerConfig,
}

impl SimulatedScanner {
    /// Create a scanner with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner with custom configuration.
    #[must_use]
    pub const fn with_config(config: ScannerConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ScanProvider for SimulatedScanner {
    async fn scan(&self, target: &str, tags: &[String]) -> Result<Vec<ScanFinding>> {
        let mut rng = StdRng::seed_from_u64(seed_for(target));

        let mut findings = Vec::with_capacity(self.config.hosts_per_scan);
        for i in 0..self.config.hosts_per_scan {
            let cvss = round1(rng.gen_range(self.config.min_cvss..=self.config.max_cvss));
            findings.push(ScanFinding {
                host: format!("10.0.0.{}", i + 10),
                port: *PORTS.choose(&mut rng).unwrap_or(&PORTS[0]),
                service: (*SERVICES.choose(&mut rng).unwrap_or(&SERVICES[0])).to_string(),
                state: *STATES.choose(&mut rng).unwrap_or(&STATES[0]),
                cvss,
                target: target.to_string(),
                tags: tags.to_vec(),
            });
        }

        debug!(target, findings = findings.len(), "simulated scan complete");
        Ok(findings)
    }
}

/// Stable per-target seed so repeat scans of one scope are reproducible.
fn seed_for(target: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    target.hash(&mut hasher);
    hasher.finish()
}

/// Round to one decimal place, matching scanner-style score reporting.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scan_is_deterministic_per_target() {
        let scanner = SimulatedScanner::new();
        let first = scanner.scan("10.0.0.0/24", &[]).await.unwrap();
        let second = scanner.scan("10.0.0.0/24", &[]).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_scan_stamps_target_and_tags() {
        let scanner = SimulatedScanner::new();
        let tags = vec!["ics".to_string(), "demo".to_string()];
        let findings = scanner.scan("192.168.1.0/24", &tags).await.unwrap();

        assert_eq!(findings.len(), 15);
        for finding in &findings {
            assert_eq!(finding.target, "192.168.1.0/24");
            assert_eq!(finding.tags, tags);
        }
    }

    #[tokio::test]
    async fn test_cvss_within_range_and_one_decimal() {
        let scanner = SimulatedScanner::new();
        let findings = scanner.scan("10.1.0.0/16", &[]).await.unwrap();

        for finding in &findings {
            assert!(finding.cvss >= 3.5 && finding.cvss <= 9.8, "cvss {}", finding.cvss);
            let tenths = finding.cvss * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-9);
        }
    }

    #[tokio::test]
    async fn test_hosts_walk_the_segment() {
        let scanner = SimulatedScanner::with_config(ScannerConfig {
            hosts_per_scan: 3,
            ..ScannerConfig::default()
        });
        let findings = scanner.scan("10.0.0.0/24", &[]).await.unwrap();
        let hosts: Vec<_> = findings.iter().map(|f| f.host.as_str()).collect();
        assert_eq!(hosts, ["10.0.0.10", "10.0.0.11", "10.0.0.12"]);
    }
}
