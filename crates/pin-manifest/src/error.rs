//! Error types for pin-manifest

/// Result type for manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or editing a manifest
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The manifest file could not be read or written.
    #[error(transparent)]
    Fs(#[from] pin_fs::Error),

    /// A package spec did not have the `repo [version]` shape.
    #[error("invalid package '{spec}': {reason}")]
    InvalidPackage { spec: String, reason: String },
}
