//! Audit stream parser.
//!
//! The audit subprocess emits newline-delimited JSON: one object per line,
//! each tagged with a `type` field. Advisory lines (`"auditAdvisory"`) carry
//! the finding payload; summary and any other metadata lines are recognized
//! by their tag and skipped, so the parser never depends on where in the
//! stream the summary happens to sit.
//!
//! The stream is decoded exactly once. Both the detail listing and the
//! severity tally are derived from the deduplicated findings this module
//! produces.

use crate::error::{ParseError, ParseResult};
use crate::types::{Finding, Severity};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;

/// Tag identifying a finding line in the audit stream.
const ADVISORY_TAG: &str = "auditAdvisory";

/// A single line of the audit stream, decoded far enough to classify it.
#[derive(Debug, Deserialize)]
struct RawLine {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// Payload of an advisory line.
#[derive(Debug, Deserialize)]
struct AdvisoryData {
    resolution: Resolution,
    advisory: Advisory,
}

/// The dependency-path instance through which the advisory applies.
#[derive(Debug, Deserialize)]
struct Resolution {
    id: u64,
    path: String,
    dev: bool,
}

/// The cataloged vulnerability entry.
#[derive(Debug, Deserialize)]
struct Advisory {
    title: String,
    module_name: String,
    vulnerable_versions: String,
    patched_versions: String,
    recommendation: String,
    severity: Severity,
    url: String,
    findings: Vec<AdvisoryFinding>,
}

/// One concrete occurrence of the advisory in the dependency tree.
#[derive(Debug, Deserialize)]
struct AdvisoryFinding {
    version: String,
}

/// Parse the raw audit stream into deduplicated findings.
///
/// Findings are deduplicated by advisory id (first occurrence wins) and
/// returned sorted ascending by severity rank. The sort is stable, so
/// findings of equal severity keep their encounter order.
///
/// Fails on the first line that is invalid JSON or an advisory line missing
/// an expected field; there is no per-line recovery.
pub fn parse_findings(raw: &str) -> ParseResult<Vec<Finding>> {
    let mut findings = Vec::new();
    let mut seen = HashSet::new();

    for (index, line) in raw.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let raw_line: RawLine =
            serde_json::from_str(line).map_err(|e| ParseError::InvalidJson {
                line: line_no,
                reason: e.to_string(),
            })?;

        if raw_line.kind != ADVISORY_TAG {
            debug!(line = line_no, kind = %raw_line.kind, "skipping non-advisory line");
            continue;
        }

        let data: AdvisoryData =
            serde_json::from_value(raw_line.data).map_err(|e| ParseError::MalformedAdvisory {
                line: line_no,
                reason: e.to_string(),
            })?;

        // Skip duplicate advisories resolved through other dependency paths.
        if !seen.insert(data.resolution.id) {
            continue;
        }

        let version = data
            .advisory
            .findings
            .first()
            .map(|f| f.version.clone())
            .ok_or(ParseError::EmptyFindings {
                line: line_no,
                id: data.resolution.id,
            })?;

        findings.push(Finding {
            id: data.resolution.id,
            title: data.advisory.title,
            module_name: data.advisory.module_name,
            version,
            vulnerable_versions: data.advisory.vulnerable_versions,
            patched_versions: data.advisory.patched_versions,
            recommendation: data.advisory.recommendation,
            severity: data.advisory.severity,
            dependency_path: data.resolution.path,
            dev: data.resolution.dev,
            url: data.advisory.url,
        });
    }

    // Stable sort: equal ranks keep encounter order.
    findings.sort_by_key(Finding::rank);

    Ok(findings)
}
