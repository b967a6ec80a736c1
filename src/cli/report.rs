//! Report subcommand implementation.
//!
//! Handles `depaudit report`: re-renders a report from an existing raw audit
//! dump without re-running the scanner.

use crate::cli::ReportFormat;
use crate::config::AppSettings;
use crate::error::{CliResult, PipelineError};
use crate::output;
use crate::parser;
use crate::tally::SeverityTally;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Render a report from an existing audit dump.
#[derive(Parser, Debug)]
pub struct ReportCommand {
    /// Raw audit dump to read (defaults to the configured dump path)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown")]
    pub format: ReportFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output_file: Option<PathBuf>,
}

impl ReportCommand {
    /// Execute the report command.
    pub fn execute(&self, settings: &AppSettings, _verbose: bool, quiet: bool) -> CliResult<()> {
        let input = self
            .input
            .clone()
            .unwrap_or_else(|| settings.raw_output.clone());

        let raw = fs::read_to_string(&input).map_err(|e| PipelineError::ReadFailed {
            path: input.clone(),
            reason: e.to_string(),
        })?;

        let findings = parser::parse_findings(&raw)?;
        let tally = SeverityTally::from_findings(&findings, &SeverityTally::default_buckets());

        let content = output::render(
            self.format,
            chrono::Local::now().date_naive(),
            &tally,
            &findings,
        )?;

        if let Some(ref path) = self.output_file {
            fs::write(path, &content).map_err(|e| PipelineError::WriteFailed {
                path: path.clone(),
                reason: e.to_string(),
            })?;

            if !quiet {
                output::print_success(&format!(
                    "Rendered {} findings to {}",
                    findings.len(),
                    path.display()
                ));
            }
        } else {
            println!("{}", content);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADVISORY: &str = r#"{"type":"auditAdvisory","data":{"resolution":{"id":2,"path":"app>ms","dev":false},"advisory":{"title":"ReDoS","module_name":"ms","vulnerable_versions":"<2.0.0","patched_versions":">=2.0.0","recommendation":"Upgrade to 2.0.0","severity":"moderate","url":"https://npmjs.com/advisories/2","findings":[{"version":"1.0.0"}]}}}"#;

    #[test]
    fn test_report_from_dump_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("audit.jsonl");
        fs::write(&input, format!("{}\n", ADVISORY)).unwrap();
        let out = dir.path().join("report.md");

        let cmd = ReportCommand {
            input: Some(input),
            format: ReportFormat::Markdown,
            output_file: Some(out.clone()),
        };
        cmd.execute(&AppSettings::default(), false, true).unwrap();

        let report = fs::read_to_string(&out).unwrap();
        assert!(report.contains("| 1 | 0 | 0 |"));
        assert!(report.contains("| ReDoS | ms | moderate |"));
    }

    #[test]
    fn test_missing_dump_is_read_failure() {
        let cmd = ReportCommand {
            input: Some(PathBuf::from("/nonexistent/audit.jsonl")),
            format: ReportFormat::Json,
            output_file: None,
        };
        assert!(cmd.execute(&AppSettings::default(), false, true).is_err());
    }
}
