//! Format-preserving model of the `Pinfile` dependency manifest.
//!
//! The manifest is line oriented:
//!
//! ```text
//! # runtime dependencies
//! github.com/acme/widget   >=1.2,<2.0   # pinned by `pin update`
//! github.com/acme/gadget
//! ```
//!
//! Each line is kept as a [`Line`] record holding its literal text. Rewrites
//! touch only the version token of one line; blank lines, comments and
//! alignment survive a load/save cycle byte for byte.

pub mod error;
pub mod line;
pub mod manifest;
pub mod package;

pub use error::{Error, Result};
pub use line::Line;
pub use manifest::{Change, CommentPolicy, LineEnding, Manifest};
pub use package::Package;
