//! # tsgen-cli
//!
//! CLI library for generating TypeScript declarations and Zod validation
//! schemas from an ORM datamodel document.
//!
//! The pipeline is thin by design: read the DMMF JSON, load `tsgen.toml`,
//! call into the `tsgen` library, write the artifacts.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`error`] - Error types and handling
//! - [`writer`] - File output and dry-run support

pub mod config;
pub mod error;
pub mod writer;

// Re-export main types for convenience
pub use config::{CliArgs, Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use writer::{FileWriter, WriteOutcome};
