//! Version-control collaborator trait

use pin_fs::NormalizedPath;

use crate::Result;

/// Read-only queries against a local checkout.
///
/// Every call receives the checkout path, so implementations never depend on
/// the process working directory.
pub trait Vcs {
    /// Whether `checkout` carries metadata this backend understands.
    fn detect(&self, checkout: &NormalizedPath) -> bool;

    /// Resolve `revision` (tag, branch, commit id, revspec) to a concrete
    /// revision id.
    ///
    /// Returns `Ok(None)` when the token does not name a revision. Any other
    /// failure is an error.
    fn verify_revision(&self, checkout: &NormalizedPath, revision: &str) -> Result<Option<String>>;

    /// List every tag name in the checkout.
    fn list_tags(&self, checkout: &NormalizedPath) -> Result<Vec<String>>;
}

impl<T: Vcs + ?Sized> Vcs for &T {
    fn detect(&self, checkout: &NormalizedPath) -> bool {
        (**self).detect(checkout)
    }

    fn verify_revision(&self, checkout: &NormalizedPath, revision: &str) -> Result<Option<String>> {
        (**self).verify_revision(checkout, revision)
    }

    fn list_tags(&self, checkout: &NormalizedPath) -> Result<Vec<String>> {
        (**self).list_tags(checkout)
    }
}
