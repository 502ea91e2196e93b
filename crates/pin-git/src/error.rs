//! Error types for pin-git

use std::path::PathBuf;

/// Result type for pin-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying a checkout
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Failed to open git repository at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Tag '{tag}' is listed but does not resolve to a revision")]
    TagUnresolvable { tag: String },
}
