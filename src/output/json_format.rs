//! JSON report rendering.

use crate::error::{CliError, CliResult};
use crate::tally::SeverityTally;
use crate::types::Finding;
use chrono::NaiveDate;
use serde::Serialize;

/// The JSON report document.
#[derive(Serialize)]
struct ReportDocument<'a> {
    generated: NaiveDate,
    summary: &'a SeverityTally,
    findings: &'a [Finding],
}

/// Render findings as a pretty-printed JSON document.
pub fn render(date: NaiveDate, tally: &SeverityTally, findings: &[Finding]) -> CliResult<String> {
    let document = ReportDocument {
        generated: date,
        summary: tally,
        findings,
    };

    serde_json::to_string_pretty(&document).map_err(|e| CliError::Other(e.to_string()))
}
