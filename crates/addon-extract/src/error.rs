//! Error types for addon-extract

use std::path::PathBuf;

/// Result type for addon-extract operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while unpacking archives.
///
/// Failures tied to one archive are counted in the extraction stats and
/// the run continues with the next archive.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a valid zip archive: {message}")]
    InvalidArchive { path: PathBuf, message: String },

    #[error("No pack folders found in {path}")]
    EmptyArchive { path: PathBuf },

    #[error("Prompt failed: {message}")]
    Prompt { message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
