//! Reading SUMMARY.md and writing llms.txt.

use std::io::ErrorKind;
use std::path::Path;

use crate::errors::{LlmsTxtError, Result};

/// Reads the whole summary file.
///
/// A missing file is [`LlmsTxtError::InputNotFound`]; any other failure
/// (permissions, non-UTF-8 content) is [`LlmsTxtError::ReadFailure`].
pub fn load_summary(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LlmsTxtError::InputNotFound(path.to_path_buf()),
        _ => LlmsTxtError::ReadFailure {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Writes `content` as UTF-8, replacing any existing file. Parent directories are not created.
pub fn write_llms_txt(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| LlmsTxtError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}
