//! File writer for generated artifacts.
//!
//! Writes artifact text to disk, creating parent directories on demand. In
//! dry-run mode nothing touches the filesystem; the content is returned so
//! the caller can preview it.

use std::path::{Path, PathBuf};

use crate::error::{CliResult, WriteError};

/// Outcome of one write operation.
#[derive(Debug)]
pub enum WriteOutcome {
    /// File was written successfully.
    Written {
        /// Path to the written file.
        path: PathBuf,
        /// Number of bytes written.
        bytes: usize,
    },
    /// Dry run - content was not written.
    DryRun {
        /// Path where content would have been written.
        path: PathBuf,
        /// Content that would have been written.
        content: String,
    },
}

/// Artifact writer with dry-run support.
#[derive(Debug)]
pub struct FileWriter {
    dry_run: bool,
}

impl FileWriter {
    /// Create a new file writer.
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Write one artifact to `path`.
    pub fn write(&self, path: &Path, content: &str) -> CliResult<WriteOutcome> {
        if self.dry_run {
            return Ok(WriteOutcome::DryRun {
                path: path.to_path_buf(),
                content: content.to_string(),
            });
        }

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        std::fs::write(path, content).map_err(|e| WriteError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(WriteOutcome::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }
}
