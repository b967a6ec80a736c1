//! Severity tallying for the report summary.
//!
//! Counts distinct advisories per severity bucket. The bucket set is
//! configurable rather than hardcoded: the default mirrors the report's three
//! recognized levels (moderate, high, critical), and severities outside the
//! configured set simply contribute to no bucket. They still appear in the
//! detail listing, which is derived from the same findings.

use crate::types::{Finding, Severity};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Count of distinct advisories per severity bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityTally {
    buckets: Vec<(Severity, usize)>,
}

impl SeverityTally {
    /// The report's default buckets, in summary-table column order.
    pub fn default_buckets() -> Vec<Severity> {
        vec![Severity::Moderate, Severity::High, Severity::Critical]
    }

    /// Create an empty tally over the given buckets.
    pub fn new(buckets: &[Severity]) -> Self {
        Self {
            buckets: buckets.iter().map(|s| (s.clone(), 0)).collect(),
        }
    }

    /// Tally deduplicated findings into the given buckets.
    pub fn from_findings(findings: &[Finding], buckets: &[Severity]) -> Self {
        let mut tally = Self::new(buckets);
        for finding in findings {
            tally.record(&finding.severity);
        }
        tally
    }

    /// Record one advisory at the given severity.
    ///
    /// Severities outside the bucket set are ignored.
    pub fn record(&mut self, severity: &Severity) {
        if let Some((_, count)) = self.buckets.iter_mut().find(|(s, _)| s == severity) {
            *count += 1;
        }
    }

    /// Count for a single bucket; zero when the bucket is not configured.
    pub fn count(&self, severity: &Severity) -> usize {
        self.buckets
            .iter()
            .find(|(s, _)| s == severity)
            .map_or(0, |(_, count)| *count)
    }

    /// Buckets with their counts, in configured order.
    pub fn buckets(&self) -> impl Iterator<Item = (&Severity, usize)> {
        self.buckets.iter().map(|(s, count)| (s, *count))
    }

    /// Total advisories counted across all buckets.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, count)| count).sum()
    }
}

impl Serialize for SeverityTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (severity, count) in &self.buckets {
            map.serialize_entry(severity.label(), count)?;
        }
        map.end()
    }
}
