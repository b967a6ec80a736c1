//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `depaudit run [PROJECT_DIR]` - Run the full audit pipeline
//! - `depaudit report` - Re-render a report from an existing audit dump

mod report;
mod run;

pub use report::ReportCommand;
pub use run::RunCommand;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// depaudit - a dependency-audit report generator.
///
/// depaudit shells out to a package manager's audit command, parses the
/// newline-delimited JSON advisory stream it emits, and renders a markdown
/// report with a severity summary and a per-advisory detail table.
#[derive(Parser, Debug)]
#[command(name = "depaudit")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generates markdown security reports from dependency audits", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full audit pipeline against a project
    #[command(alias = "r")]
    Run(RunCommand),

    /// Render a report from an existing audit dump
    Report(ReportCommand),
}

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Markdown tables (the persisted report format)
    Markdown,
    /// Human-readable plain text
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self::Markdown
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
