//! Error types for loading character data.

use std::path::PathBuf;

/// Errors that can occur while reading a character data file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid record of the expected shape.
    #[error("malformed record: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A data file that failed to load and was skipped.
#[derive(Debug)]
pub struct SkippedFile {
    /// Path of the offending file.
    pub path: PathBuf,
    /// Why it was skipped.
    pub error: LoadError,
}

impl std::fmt::Display for SkippedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}
