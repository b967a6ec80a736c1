//! CSV report rendering.

use crate::error::{CliError, CliResult};
use crate::types::Finding;

/// Render findings as CSV with the same columns as the markdown detail table.
pub fn render(findings: &[Finding]) -> CliResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "id",
        "vulnerability",
        "module_name",
        "severity",
        "version",
        "vulnerable_versions",
        "patched_versions",
        "recommendation",
        "path",
        "dev",
        "url",
    ])
    .map_err(|e| CliError::Other(e.to_string()))?;

    for finding in findings {
        wtr.write_record([
            &finding.id.to_string(),
            &finding.title,
            &finding.module_name,
            &finding.severity.label().to_string(),
            &finding.version,
            &finding.vulnerable_versions,
            &finding.patched_versions,
            &finding.recommendation,
            &finding.dependency_path,
            &finding.dev.to_string(),
            &finding.url,
        ])
        .map_err(|e| CliError::Other(e.to_string()))?;
    }

    String::from_utf8(wtr.into_inner().map_err(|e| CliError::Other(e.to_string()))?)
        .map_err(|e| CliError::Other(e.to_string()))
}
