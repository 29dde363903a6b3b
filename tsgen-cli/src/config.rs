//! Configuration management for the CLI.
//!
//! Loads `tsgen.toml`, merges command-line overrides on top, and hands the
//! `[generator]` table through to the library untouched. Generator keys use
//! the same camelCase names the generator block passes over JSON.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tsgen::GeneratorConfig;

use crate::error::{CliResult, ConfigError};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "tsgen.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where artifacts are written.
    pub output: OutputConfig,

    /// Rendering options passed to the library.
    pub generator: GeneratorConfig,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for generated files.
    pub dir: PathBuf,

    /// Filename of the declaration artifact.
    pub file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./generated"),
            file: "types.ts".to_string(),
        }
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::InvalidToml {
            path: config_path,
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref output) = args.output {
            config.output.dir = output.clone();
        }

        if let Some(ref file) = args.output_file {
            config.output.file = file.clone();
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# tsgen configuration file

[output]
# Output directory for generated TypeScript files
dir = "./generated"

# Filename of the declaration artifact
file = "types.ts"

[generator]
# Comment placed at the top of every artifact; empty disables it
headerComment = "This file was auto-generated. Any manual edits will be overwritten."

# Model shape: "interface" or "type"
modelType = "interface"

# Enum shape: "stringUnion", "enum", or "object"
enumType = "stringUnion"

# Representations for configurable scalars; a pipe-joined union of two
# forms is also accepted, e.g. "Date | string"
dateType = "Date"
bigIntType = "bigint"
decimalType = "Decimal"
bytesType = "Buffer"

# Name affixes
# modelPrefix = ""
# modelSuffix = ""
# enumPrefix = ""
# enumSuffix = ""
# typePrefix = ""
# typeSuffix = ""

# Relation and nullability policies
optionalRelations = true
omitRelations = false
optionalNullables = false

# Filename of the Zod validation artifact; unset disables it
# zodOutput = "schemas.ts"

# Fail on scalar tags the validation path has no mapping for instead of
# degrading to z.any()
strictValidationTypes = false
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Output directory override.
    pub output: Option<PathBuf>,

    /// Output filename override.
    pub output_file: Option<String>,
}
