//! Report rendering module.
//!
//! Provides renderers for markdown (the persisted report format), plain text,
//! JSON, and CSV output of audit findings.

pub mod csv_format;
pub mod json_format;
pub mod markdown;
mod plain;

pub use plain::{print_error, print_info, print_success, print_warning};

use crate::cli::ReportFormat;
use crate::error::CliResult;
use crate::tally::SeverityTally;
use crate::types::Finding;
use chrono::NaiveDate;

/// Render findings in the requested format.
pub fn render(
    format: ReportFormat,
    date: NaiveDate,
    tally: &SeverityTally,
    findings: &[Finding],
) -> CliResult<String> {
    match format {
        ReportFormat::Markdown => Ok(markdown::render_report(date, tally, findings)),
        ReportFormat::Plain => Ok(plain::render(tally, findings)),
        ReportFormat::Json => json_format::render(date, tally, findings),
        ReportFormat::Csv => csv_format::render(findings),
    }
}
