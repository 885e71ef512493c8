//! Error types for addon-core

use std::path::PathBuf;

/// Result type for addon-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort the synchronization of one pack category
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The ledger file exists but could not be read
    #[error("Failed to read ledger {path}: {source}")]
    LedgerIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The ledger file exists but is not a valid pack list
    #[error("Ledger {path} is corrupt: {message}")]
    LedgerParse { path: PathBuf, message: String },

    /// The pack directory exists but could not be listed
    #[error("Failed to list pack directory {path}: {source}")]
    PackRootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem error from addon-fs (atomic write, lock file)
    #[error(transparent)]
    Fs(#[from] addon_fs::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Per-folder manifest failures.
///
/// Both variants are routine: the synchronizer reports the folder and
/// moves on to the next one.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("no manifest.json in {path}")]
    Missing { path: PathBuf },

    #[error("invalid manifest {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },
}

impl ManifestError {
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Short human-readable reason, without the path.
    pub fn reason(&self) -> String {
        match self {
            Self::Missing { .. } => "no manifest.json found".to_string(),
            Self::Malformed { reason, .. } => reason.clone(),
        }
    }
}
