//! Error types and Result alias for PySh

use std::path::PathBuf;

/// Result type alias for PySh operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for PySh
///
/// Execution-level failures inside a batch (program not found, non-zero
/// exit) are reported through [`crate::executor::BatchResult`] rather
/// than through this type; these variants cover the operations that do
/// propagate errors to the caller (alias binding, directory changes,
/// argument normalization).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Alias name collides with a reserved operation name
    #[error("'{name}' is a reserved name and cannot be aliased")]
    ReservedAliasName { name: String },

    /// Command line was empty after normalization
    #[error("command cannot be empty")]
    EmptyCommand,

    /// Command line could not be tokenized (e.g. unbalanced quotes)
    #[error("invalid command line: {reason}")]
    BadCommandLine { reason: String },

    /// Home directory could not be determined for tilde expansion
    #[error("could not determine home directory")]
    HomeDirNotFound,

    /// Working directory change failed
    #[error("cannot change directory to '{path}': {reason}", path = .path.display())]
    ChangeDirFailed { path: PathBuf, reason: String },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<shell_words::ParseError> for Error {
    fn from(err: shell_words::ParseError) -> Self {
        Error::BadCommandLine {
            reason: err.to_string(),
        }
    }
}
