//! # depaudit - Dependency Audit Report Generator
//!
//! depaudit turns a package manager's dependency-audit output into a static
//! markdown report. It shells out to the audit command, parses the
//! newline-delimited JSON advisory stream it emits, deduplicates findings by
//! advisory id, sorts them by severity, and renders a summary table and a
//! detail table into a documentation file. The raw audit stream is persisted
//! verbatim alongside the report.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use depaudit::config::PipelineConfig;
//! use depaudit::pipeline::AuditPipeline;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PipelineConfig::new("./my-application")
//!         .with_report_path("docs/security.md");
//!
//!     let outcome = AuditPipeline::new(config).run()?;
//!     println!("{} advisories found", outcome.findings.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`types`] - Severity classification and the `Finding` record
//! - [`parser`] - Newline-delimited JSON audit stream decoding
//! - [`tally`] - Per-severity advisory counting for the summary
//! - [`output`] - Markdown, plain text, JSON, and CSV renderers
//! - [`pipeline`] - The install/audit/parse/render/persist driver
//! - [`config`] - Settings and pipeline parameters
//! - [`error`] - Comprehensive error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod tally;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ParseError, PipelineError};
pub use pipeline::{AuditPipeline, PipelineOutcome};
pub use tally::SeverityTally;
pub use types::{Finding, Severity};
