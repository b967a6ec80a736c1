//! Markdown table rendering for the persisted audit report.
//!
//! Pure formatting functions: every function returns a string and has no
//! side effects. The report layout is a date-stamped heading, a summary
//! table of per-severity counts, and a detail table with one row per
//! deduplicated finding.

use crate::tally::SeverityTally;
use crate::types::Finding;
use chrono::{Datelike, NaiveDate};

/// Column headers of the detail table, in order.
const DETAIL_COLUMNS: [&str; 10] = [
    "Security Vulnerability",
    "Module Name",
    "Severity",
    "Version",
    "Vulnerable Versions",
    "Patched Versions",
    "Recommendation",
    "Path",
    "Dev",
    "URL",
];

/// Render the summary table: one column per configured bucket, one data row
/// of counts.
pub fn summary_table(tally: &SeverityTally) -> String {
    let mut markdown = String::new();

    markdown.push('|');
    for (severity, _) in tally.buckets() {
        markdown.push_str(&format!(" {} |", severity.heading()));
    }
    markdown.push('\n');

    markdown.push('|');
    for _ in tally.buckets() {
        markdown.push_str(":---|");
    }
    markdown.push('\n');

    markdown.push('|');
    for (_, count) in tally.buckets() {
        markdown.push_str(&format!(" {} |", count));
    }
    markdown.push('\n');

    markdown
}

/// Render the detail table: one row per finding, in the order given.
///
/// The URL column is rendered as a markdown hyperlink with link text `Info`.
pub fn detail_table(findings: &[Finding]) -> String {
    let mut markdown = String::new();

    markdown.push('|');
    for column in DETAIL_COLUMNS {
        markdown.push_str(&format!(" {} |", column));
    }
    markdown.push('\n');

    markdown.push('|');
    for _ in DETAIL_COLUMNS {
        markdown.push_str(":---|");
    }
    markdown.push('\n');

    for finding in findings {
        markdown.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} | {} | [Info]({}) |\n",
            finding.title,
            finding.module_name,
            finding.severity,
            finding.version,
            finding.vulnerable_versions,
            finding.patched_versions,
            finding.recommendation,
            finding.dependency_path,
            finding.dev,
            finding.url,
        ));
    }

    markdown
}

/// Render the full report document.
///
/// The heading carries a `day / month / year` date stamp with a 1-based
/// month and no zero padding.
pub fn render_report(date: NaiveDate, tally: &SeverityTally, findings: &[Finding]) -> String {
    let date_str = format!("{} / {} / {}", date.day(), date.month(), date.year());

    let mut content = String::new();
    content.push_str(&format!("## Security Audit - {}\n---\n", date_str));
    content.push_str("\n### Scan Summary\n");
    content.push_str(&format!("\n{}\n", summary_table(tally)));
    content.push_str("\n### Scan Details\n");
    content.push_str(&format!("\n{}\n", detail_table(findings)));
    content
}
