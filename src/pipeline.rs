//! The audit pipeline driver.
//!
//! Runs the linear sequence: install, audit, persist the raw stream, parse,
//! tally, render, persist the report. Every step blocks to completion before
//! the next begins, and any failure aborts the run; there is no retry or
//! partial-failure recovery. The report file is only written after a
//! successful render, so an earlier failure leaves a previous report intact.

use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::output::markdown;
use crate::parser;
use crate::tally::SeverityTally;
use crate::types::Finding;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Result of a completed pipeline run.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// Deduplicated findings in severity order.
    pub findings: Vec<Finding>,
    /// Per-bucket advisory counts.
    pub tally: SeverityTally,
    /// Where the raw audit stream was written.
    pub raw_output: PathBuf,
    /// Where the markdown report was written.
    pub report_path: PathBuf,
}

/// The audit pipeline.
pub struct AuditPipeline {
    config: PipelineConfig,
}

impl AuditPipeline {
    /// Create a pipeline from its configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline.
    pub fn run(&self) -> PipelineResult<PipelineOutcome> {
        if self.config.skip_install {
            debug!("skipping install step");
        } else {
            self.install()?;
        }

        let raw = self.audit()?;
        persist(&self.config.raw_output, &raw)?;

        info!("Parsing audit stream");
        let findings = parser::parse_findings(&raw)?;
        let tally = SeverityTally::from_findings(&findings, &self.config.buckets);
        info!(
            findings = findings.len(),
            tallied = tally.total(),
            "Rendering report"
        );

        let report = markdown::render_report(Local::now().date_naive(), &tally, &findings);
        persist(&self.config.report_path, &report)?;

        Ok(PipelineOutcome {
            findings,
            tally,
            raw_output: self.config.raw_output.clone(),
            report_path: self.config.report_path.clone(),
        })
    }

    /// Install dependencies and refresh the lockfile. Non-zero exit is fatal.
    fn install(&self) -> PipelineResult<()> {
        info!(program = %self.config.program, "Installing dependencies");

        let output = Command::new(&self.config.program)
            .arg("install")
            .current_dir(&self.config.project_dir)
            .output()
            .map_err(|e| PipelineError::SpawnFailed {
                program: self.config.program.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(PipelineError::InstallFailed {
                program: self.config.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }

    /// Run the audit subprocess and capture its stdout.
    ///
    /// Audit tools conventionally exit non-zero when vulnerabilities are
    /// found, so the exit status is deliberately ignored; stdout is the sole
    /// data source.
    fn audit(&self) -> PipelineResult<String> {
        info!(
            program = %self.config.program,
            level = %self.config.min_level,
            "Scanning dependencies"
        );

        let output = Command::new(&self.config.program)
            .args(["audit", "--level"])
            .arg(self.config.min_level.label())
            .arg("--json")
            .current_dir(&self.config.project_dir)
            .output()
            .map_err(|e| PipelineError::SpawnFailed {
                program: self.config.program.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            debug!(status = %output.status, "audit exited non-zero (findings present)");
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Write content to a path, creating parent directories and truncating any
/// prior contents.
fn persist(path: &Path, content: &str) -> PipelineResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| PipelineError::WriteFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        }
    }

    fs::write(path, content).map_err(|e| PipelineError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;
    use std::path::PathBuf;

    #[cfg(unix)]
    fn fake_program(dir: &Path, script_body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("fake-pm");
        fs::write(&path, format!("#!/bin/sh\n{}\n", script_body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    fn audit_script() -> &'static str {
        // `install` succeeds quietly; `audit` emits an advisory stream and
        // exits non-zero, as real audit tools do when findings exist.
        concat!(
            "if [ \"$1\" = \"audit\" ]; then\n",
            "  echo '{\"type\":\"auditAdvisory\",\"data\":{\"resolution\":{\"id\":1,\"path\":\"app>lodash\",\"dev\":false},",
            "\"advisory\":{\"title\":\"Prototype Pollution\",\"module_name\":\"lodash\",",
            "\"vulnerable_versions\":\"<4.17.5\",\"patched_versions\":\">=4.17.5\",",
            "\"recommendation\":\"Upgrade to 4.17.5\",\"severity\":\"critical\",",
            "\"url\":\"https://npmjs.com/advisories/1\",\"findings\":[{\"version\":\"4.17.4\"}]}}}'\n",
            "  echo '{\"type\":\"auditSummary\",\"data\":{\"dependencies\":10}}'\n",
            "  exit 8\n",
            "fi\n",
            "exit 0",
        )
    }

    #[test]
    #[cfg(unix)]
    fn test_pipeline_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let program = fake_program(dir.path(), audit_script());

        let config = PipelineConfig::new(dir.path())
            .with_program(program.to_string_lossy())
            .with_raw_output(dir.path().join("output/audit.jsonl"))
            .with_report_path(dir.path().join("docs/README.md"));

        let outcome = AuditPipeline::new(config).run().unwrap();

        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.findings[0].module_name, "lodash");
        assert_eq!(outcome.tally.count(&Severity::Critical), 1);

        let raw = fs::read_to_string(&outcome.raw_output).unwrap();
        assert!(raw.contains("auditAdvisory"));
        assert!(raw.contains("auditSummary"));

        let report = fs::read_to_string(&outcome.report_path).unwrap();
        assert!(report.contains("### Scan Summary"));
        assert!(report.contains("| 0 | 0 | 1 |"));
        assert!(report.contains("| Prototype Pollution | lodash | critical |"));
    }

    #[test]
    #[cfg(unix)]
    fn test_audit_exit_code_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        // Audit exits 8 in the fake script; the run must still succeed.
        let program = fake_program(dir.path(), audit_script());

        let config = PipelineConfig::new(dir.path())
            .with_program(program.to_string_lossy())
            .with_raw_output(dir.path().join("raw.jsonl"))
            .with_report_path(dir.path().join("report.md"))
            .without_install();

        assert!(AuditPipeline::new(config).run().is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn test_install_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let program = fake_program(dir.path(), "echo 'lockfile conflict' >&2\nexit 1");

        let config = PipelineConfig::new(dir.path())
            .with_program(program.to_string_lossy())
            .with_raw_output(dir.path().join("raw.jsonl"))
            .with_report_path(dir.path().join("report.md"));

        let err = AuditPipeline::new(config).run().unwrap_err();
        match err {
            PipelineError::InstallFailed { stderr, .. } => {
                assert!(stderr.contains("lockfile conflict"));
            }
            other => panic!("expected InstallFailed, got {other:?}"),
        }
        // No output files on a failed run.
        assert!(!dir.path().join("raw.jsonl").exists());
        assert!(!dir.path().join("report.md").exists());
    }

    #[test]
    #[cfg(unix)]
    fn test_parse_failure_leaves_report_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let program = fake_program(
            dir.path(),
            "if [ \"$1\" = \"audit\" ]; then echo 'not json'; fi\nexit 0",
        );

        let report_path = dir.path().join("report.md");
        fs::write(&report_path, "previous report").unwrap();

        let config = PipelineConfig::new(dir.path())
            .with_program(program.to_string_lossy())
            .with_raw_output(dir.path().join("raw.jsonl"))
            .with_report_path(&report_path)
            .without_install();

        let err = AuditPipeline::new(config).run().unwrap_err();
        assert!(matches!(err, PipelineError::Parse(_)));

        // The raw dump is already overwritten, but the report survives.
        assert!(dir.path().join("raw.jsonl").exists());
        assert_eq!(fs::read_to_string(&report_path).unwrap(), "previous report");
    }

    #[test]
    fn test_missing_program_is_spawn_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig::new(dir.path())
            .with_program("depaudit-does-not-exist")
            .with_raw_output(dir.path().join("raw.jsonl"))
            .with_report_path(dir.path().join("report.md"));

        let err = AuditPipeline::new(config).run().unwrap_err();
        assert!(matches!(err, PipelineError::SpawnFailed { .. }));
    }
}
