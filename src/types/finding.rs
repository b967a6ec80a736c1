//! Audit finding records.

use crate::types::Severity;
use serde::{Deserialize, Serialize};

/// One deduplicated audit finding.
///
/// Exactly one `Finding` exists per advisory id; when the audit stream
/// reports the same advisory through several dependency paths, the first
/// occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Advisory id, the deduplication key.
    pub id: u64,
    /// Name of the vulnerability (e.g. "Prototype Pollution").
    pub title: String,
    /// Name of the affected dependency.
    pub module_name: String,
    /// Installed version of the dependency.
    pub version: String,
    /// Version range affected by the advisory.
    pub vulnerable_versions: String,
    /// Version range containing the fix.
    pub patched_versions: String,
    /// Recommended remediation.
    pub recommendation: String,
    /// Severity of the advisory.
    pub severity: Severity,
    /// Dependency path through which the module is pulled in.
    pub dependency_path: String,
    /// Whether the module is a development dependency.
    pub dev: bool,
    /// URL for additional information.
    pub url: String,
}

impl Finding {
    /// Sort key for severity ordering; lower is more severe.
    pub fn rank(&self) -> u8 {
        self.severity.rank()
    }
}
