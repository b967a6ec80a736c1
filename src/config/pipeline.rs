//! Pipeline configuration.

use crate::tally::SeverityTally;
use crate::types::Severity;
use std::path::PathBuf;

/// Parameters for one audit pipeline run.
///
/// Output paths are used as given (relative paths resolve against the
/// current working directory); `project_dir` only selects the working
/// directory of the spawned subprocesses.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory of the application whose dependencies are audited.
    pub project_dir: PathBuf,
    /// Destination for the raw newline-delimited JSON audit dump.
    pub raw_output: PathBuf,
    /// Destination for the rendered markdown report.
    pub report_path: PathBuf,
    /// Package-manager program invoked for both the install and audit steps.
    pub program: String,
    /// Minimum severity requested from the audit subprocess.
    pub min_level: Severity,
    /// Severity buckets for the summary table, in column order.
    pub buckets: Vec<Severity>,
    /// Skip the install step before auditing.
    pub skip_install: bool,
}

impl PipelineConfig {
    /// Create a configuration with default paths and program.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            raw_output: PathBuf::from("output/audit.jsonl"),
            report_path: PathBuf::from("docs/README.md"),
            program: "yarn".to_string(),
            min_level: Severity::Moderate,
            buckets: SeverityTally::default_buckets(),
            skip_install: false,
        }
    }

    /// Set the raw audit dump path.
    pub fn with_raw_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.raw_output = path.into();
        self
    }

    /// Set the markdown report path.
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    /// Set the package-manager program.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the minimum severity requested from the audit subprocess.
    pub fn with_min_level(mut self, level: Severity) -> Self {
        self.min_level = level;
        self
    }

    /// Set the summary buckets.
    pub fn with_buckets(mut self, buckets: Vec<Severity>) -> Self {
        self.buckets = buckets;
        self
    }

    /// Skip the install step.
    pub fn without_install(mut self) -> Self {
        self.skip_install = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::new("app");
        assert_eq!(config.program, "yarn");
        assert_eq!(config.min_level, Severity::Moderate);
        assert_eq!(config.raw_output, PathBuf::from("output/audit.jsonl"));
        assert_eq!(config.report_path, PathBuf::from("docs/README.md"));
        assert!(!config.skip_install);
    }

    #[test]
    fn test_builder() {
        let config = PipelineConfig::new("app")
            .with_program("npm")
            .with_min_level(Severity::High)
            .with_raw_output("tmp/raw.jsonl")
            .with_report_path("tmp/report.md")
            .without_install();

        assert_eq!(config.program, "npm");
        assert_eq!(config.min_level, Severity::High);
        assert_eq!(config.raw_output, PathBuf::from("tmp/raw.jsonl"));
        assert_eq!(config.report_path, PathBuf::from("tmp/report.md"));
        assert!(config.skip_install);
    }
}
