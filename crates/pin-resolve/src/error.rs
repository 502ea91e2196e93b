use std::io;

/// Result type for resolution
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a version constraint.
///
/// Each failure class has its own variant so callers can tell a bad
/// constraint from a broken checkout.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The process working directory could not be determined.
    #[error("cannot access the working directory: {source}")]
    WorkingDirectory {
        #[source]
        source: io::Error,
    },

    /// A version-control query failed for a reason other than "no such
    /// revision".
    #[error(transparent)]
    Vcs(#[from] pin_git::Error),

    /// The constraint is neither a revision nor a valid version range.
    #[error("invalid version constraint '{constraint}': {reason}")]
    ConstraintSyntax { constraint: String, reason: String },

    /// The constraint is valid but no tag satisfies it.
    #[error("unable to find a version matching constraint {constraint} for package {repo}")]
    NoMatchingVersion { constraint: String, repo: String },

    /// The executable search path for the vendor environment is invalid.
    #[error("invalid search path: {reason}")]
    SearchPath { reason: String },
}
