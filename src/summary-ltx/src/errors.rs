//! Error types for llms.txt generation.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of a generation run. Unrecognized summary lines are never errors.
#[derive(Debug, Error)]
pub enum LlmsTxtError {
    /// The summary file does not exist.
    #[error("SUMMARY.md not found at: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The summary file exists but could not be read as UTF-8 text.
    #[error("Cannot read summary file {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The llms.txt destination could not be written.
    #[error("Cannot write llms.txt to {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for Result with LlmsTxtError
pub type Result<T> = std::result::Result<T, LlmsTxtError>;
