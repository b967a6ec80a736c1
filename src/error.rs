//! Error types for depaudit.
//!
//! Uses `thiserror` for ergonomic error definitions. Each pipeline stage has
//! its own error enum; `CliError` is the umbrella type returned by command
//! handlers.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while decoding the raw audit stream.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: invalid JSON: {reason}")]
    InvalidJson { line: usize, reason: String },

    #[error("line {line}: malformed advisory record: {reason}")]
    MalformedAdvisory { line: usize, reason: String },

    #[error("line {line}: advisory {id} has no findings")]
    EmptyFindings { line: usize, id: u64 },
}

/// Result type alias for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors produced by the audit pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to launch '{program}': {reason}")]
    SpawnFailed { program: String, reason: String },

    #[error("install step '{program}' exited with {status}: {stderr}")]
    InstallFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors related to configuration loading and saving.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    DirectoryNotFound,

    #[error("failed to read config {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write config {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid config format: {0}")]
    InvalidFormat(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error type for CLI command handlers.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
