//! Error types for the CLI.
//!
//! Each pipeline stage wraps its failures in a dedicated enum; `CliError`
//! collects them at the binary boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error loading configuration.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Error reading or parsing the datamodel document.
    #[error("Failed to read datamodel: {0}")]
    Datamodel(#[from] DatamodelError),

    /// Error during artifact generation.
    #[error("Failed to generate output: {0}")]
    Generate(#[from] tsgen::Error),

    /// Error writing output files.
    #[error("Failed to write output: {0}")]
    Write(#[from] WriteError),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid TOML syntax or unknown values.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// IO error reading config.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error reading the datamodel document.
#[derive(Debug, Error)]
pub enum DatamodelError {
    /// IO error reading the document.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid datamodel.
    #[error("Invalid datamodel in {path}: {message}")]
    Json { path: PathBuf, message: String },
}

/// Error writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create directory.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Refusing to overwrite an existing file.
    #[error("File already exists: {path} (pass --force to overwrite)")]
    AlreadyExists { path: PathBuf },
}
