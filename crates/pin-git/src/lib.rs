//! Git revision lookups for pin
//!
//! The resolver only needs two questions answered by version control: "what
//! revision does this token name?" and "which tags exist?". [`Vcs`] is that
//! seam; [`GitVcs`] answers it with git2 against an explicit checkout path.

pub mod error;
pub mod git;
pub mod vcs;

pub use error::{Error, Result};
pub use git::GitVcs;
pub use vcs::Vcs;
