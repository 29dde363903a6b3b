//! # tsgen-cli
//!
//! CLI tool for generating TypeScript declarations and Zod validation
//! schemas from an ORM datamodel document.
//!
//! ## Usage
//!
//! ```bash
//! # Generate artifacts from a datamodel document
//! tsgen generate --datamodel ./dmmf.json
//!
//! # Generate into a specific output directory
//! tsgen generate --datamodel ./dmmf.json --output ./generated
//!
//! # Dry run to preview changes
//! tsgen generate --datamodel ./dmmf.json --dry-run
//!
//! # Initialize configuration
//! tsgen init
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tsgen_cli::{
    config::{CliArgs, ConfigManager},
    error::{CliError, DatamodelError, WriteError},
    writer::{FileWriter, WriteOutcome},
};

#[derive(Parser)]
#[command(name = "tsgen")]
#[command(author, version, about = "Generate TypeScript declarations and Zod schemas from an ORM datamodel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript artifacts from a datamodel JSON document
    Generate {
        /// Path to the datamodel (DMMF) JSON document
        #[arg(short, long)]
        datamodel: PathBuf,

        /// Output directory for generated files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Filename of the declaration artifact
        #[arg(long)]
        output_file: Option<String>,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize a new tsgen configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = "tsgen.toml")]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Generate {
            datamodel,
            output,
            output_file,
            dry_run,
            config,
        } => cmd_generate(datamodel, output, output_file, dry_run, config),

        Commands::Init { output, force } => cmd_init(output, force),
    }
}

/// Generate command implementation.
fn cmd_generate(
    datamodel_path: PathBuf,
    output: Option<PathBuf>,
    output_file: Option<String>,
    dry_run: bool,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            output,
            output_file,
        },
    );

    println!(
        "{} {}",
        "Reading datamodel from".cyan(),
        datamodel_path.display()
    );
    let datamodel = read_datamodel(&datamodel_path)?;
    println!(
        "  Found {} model(s), {} enum(s), {} type(s)",
        datamodel.models.len().to_string().green(),
        datamodel.enums.len().to_string().green(),
        datamodel.types.len().to_string().green(),
    );

    let writer = FileWriter::new(dry_run);

    println!("{}", "Generating TypeScript declarations...".cyan());
    let declarations = tsgen::declaration_file(&datamodel, &config.generator)?;
    let declaration_path = config.output.dir.join(&config.output.file);
    report(writer.write(&declaration_path, &declarations)?);

    if let Some(zod_file) = &config.generator.zod_output {
        println!("{}", "Generating Zod validation schemas...".cyan());
        let validations = tsgen::validation_file(&datamodel, &config.generator)?;
        let validation_path = config.output.dir.join(zod_file);
        report(writer.write(&validation_path, &validations)?);
    }

    if config.generator.prettier {
        println!(
            "{}",
            "prettier is enabled in the config; run your formatter over the output".dimmed()
        );
    }

    Ok(())
}

/// Read and parse the datamodel document.
fn read_datamodel(path: &Path) -> Result<tsgen::Datamodel, CliError> {
    let content = std::fs::read_to_string(path).map_err(|e| DatamodelError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let datamodel = serde_json::from_str(&content).map_err(|e| DatamodelError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(datamodel)
}

/// Report one write outcome to the terminal.
fn report(outcome: WriteOutcome) {
    match outcome {
        WriteOutcome::Written { path, bytes } => {
            println!(
                "{} Written {} bytes to {}",
                "✓".green(),
                bytes,
                path.display()
            );
        }
        WriteOutcome::DryRun { path, content } => {
            println!(
                "{} Would write to {}:",
                "[dry-run]".yellow(),
                path.display()
            );
            println!("{}", "─".repeat(60).dimmed());
            println!("{}", content);
            println!("{}", "─".repeat(60).dimmed());
        }
    }
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        return Err(WriteError::AlreadyExists { path: output }.into());
    }

    std::fs::write(&output, ConfigManager::default_config_content()).map_err(|e| {
        WriteError::WriteFile {
            path: output.clone(),
            source: e,
        }
    })?;

    println!(
        "{} Created configuration file at {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}
