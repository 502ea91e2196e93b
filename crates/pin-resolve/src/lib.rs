//! Version constraint resolution for pin.
//!
//! [`Resolver::resolve`] turns a manifest version (a revision or a semver
//! range) into a commit id by asking the package's local checkout:
//!
//! 1. no checkout under the dependency root, or no git metadata in it: the
//!    constraint is returned unchanged;
//! 2. the constraint names a revision (tag, branch, commit): that revision;
//! 3. otherwise the highest tag whose version satisfies the range.
//!
//! ```rust,no_run
//! use pin_resolve::{Resolver, VendorEnv};
//!
//! let resolver = Resolver::new(VendorEnv::new("/work/app/.vendor"));
//! let revision = resolver.resolve("github.com/acme/widget", ">=1.0.0, <2.0.0")?;
//! # Ok::<(), pin_resolve::Error>(())
//! ```

pub mod error;
pub mod resolver;
pub mod tags;
pub mod vendor;
pub mod version;

pub use error::{Error, Result};
pub use resolver::{Resolution, Resolver, Source};
pub use tags::TagCandidates;
pub use vendor::VendorEnv;
pub use version::VersionConstraint;
