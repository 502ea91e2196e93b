//! Error types for pin-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from pin-manifest
    #[error(transparent)]
    Manifest(#[from] pin_manifest::Error),

    /// Error from pin-resolve
    #[error(transparent)]
    Resolve(#[from] pin_resolve::Error),

    /// Error from pin-fs
    #[error(transparent)]
    Fs(#[from] pin_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to encode JSON: {0}")]
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
