//! Run subcommand implementation.
//!
//! Handles `depaudit run [PROJECT_DIR]`: the full install, audit, parse,
//! render, persist sequence.

use crate::config::{AppSettings, PipelineConfig};
use crate::error::CliResult;
use crate::output;
use crate::pipeline::AuditPipeline;
use crate::types::Severity;
use clap::Parser;
use std::path::PathBuf;

/// Run the full audit pipeline against a project.
#[derive(Parser, Debug)]
pub struct RunCommand {
    /// Directory of the application to audit
    #[arg(value_name = "PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Path for the raw newline-delimited JSON audit dump
    #[arg(long, value_name = "PATH")]
    pub raw_output: Option<PathBuf>,

    /// Path for the generated markdown report
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Package-manager program for the install and audit steps
    #[arg(long, value_name = "PROGRAM")]
    pub program: Option<String>,

    /// Minimum severity requested from the audit subprocess
    #[arg(short = 'l', long, value_name = "LEVEL")]
    pub level: Option<Severity>,

    /// Skip the install step before auditing
    #[arg(long)]
    pub skip_install: bool,
}

impl RunCommand {
    /// Execute the run command.
    pub fn execute(&self, settings: &AppSettings, _verbose: bool, quiet: bool) -> CliResult<()> {
        let config = self.to_pipeline_config(settings);
        let outcome = AuditPipeline::new(config).run()?;

        if !quiet {
            output::print_info(&format!(
                "Raw audit stream saved to {}",
                outcome.raw_output.display()
            ));

            let counts: Vec<String> = outcome
                .tally
                .buckets()
                .map(|(severity, count)| format!("{} {}", count, severity))
                .collect();
            output::print_info(&format!(
                "{} advisories ({})",
                outcome.findings.len(),
                counts.join(", ")
            ));

            output::print_success(&format!(
                "Report written to {}",
                outcome.report_path.display()
            ));
        }

        Ok(())
    }

    /// Merge CLI flags over persisted settings into a pipeline configuration.
    fn to_pipeline_config(&self, settings: &AppSettings) -> PipelineConfig {
        let mut config = PipelineConfig::new(&self.project_dir)
            .with_program(
                self.program
                    .clone()
                    .unwrap_or_else(|| settings.program.clone()),
            )
            .with_min_level(
                self.level
                    .clone()
                    .unwrap_or_else(|| Severity::from_label(&settings.min_level)),
            )
            .with_raw_output(
                self.raw_output
                    .clone()
                    .unwrap_or_else(|| settings.raw_output.clone()),
            )
            .with_report_path(
                self.report
                    .clone()
                    .unwrap_or_else(|| settings.report_path.clone()),
            );

        if self.skip_install || settings.skip_install {
            config = config.without_install();
        }

        config
    }
}
