//! Error types for addon-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from addon-core
    #[error(transparent)]
    Core(#[from] addon_core::Error),

    /// Error from addon-extract
    #[error(transparent)]
    Extract(#[from] addon_extract::Error),

    /// Error from addon-fs
    #[error(transparent)]
    Fs(#[from] addon_fs::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
