//! Shared test utilities for the pin workspace.
//!
//! Dev-dependency only. Never published.
//!
//! # Modules
//!
//! - [`git`]: git repository fixtures with commits, tags and branches
//! - [`project`]: [`TestProject`] with a manifest and a vendor tree

pub mod git;
pub mod project;

pub use project::TestProject;
