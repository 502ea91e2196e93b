//! Constraint-to-revision resolution.

use pin_fs::NormalizedPath;
use pin_git::{GitVcs, Vcs};

use crate::error::{Error, Result};
use crate::tags::TagCandidates;
use crate::vendor::VendorEnv;
use crate::version::VersionConstraint;

/// Which step of the resolution produced the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// No checkout under the dependency root; constraint passed through.
    NotFetched,
    /// The checkout has no git metadata; constraint passed through.
    NotVersioned,
    /// The constraint itself named a revision.
    Revision,
    /// The highest tag satisfying the constraint.
    Tag(String),
}

/// A resolved revision and how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub revision: String,
    pub source: Source,
}

impl Resolution {
    fn new(revision: impl Into<String>, source: Source) -> Self {
        Self {
            revision: revision.into(),
            source,
        }
    }

    /// Whether the constraint was returned without consulting git.
    pub fn is_pass_through(&self) -> bool {
        matches!(self.source, Source::NotFetched | Source::NotVersioned)
    }
}

/// Resolves manifest versions against checkouts under a dependency root.
#[derive(Debug, Clone)]
pub struct Resolver<V = GitVcs> {
    vendor: VendorEnv,
    vcs: V,
}

impl Resolver<GitVcs> {
    pub fn new(vendor: VendorEnv) -> Self {
        Self::with_vcs(vendor, GitVcs::new())
    }
}

impl<V: Vcs> Resolver<V> {
    pub fn with_vcs(vendor: VendorEnv, vcs: V) -> Self {
        Self { vendor, vcs }
    }

    pub fn vendor(&self) -> &VendorEnv {
        &self.vendor
    }

    /// Resolve `constraint` for `repo` to a revision id.
    ///
    /// Packages that are not checked out, or not under git, get the
    /// constraint back unchanged. A constraint naming a revision resolves to
    /// that revision; anything else must parse as a version range and
    /// resolves to the highest matching tag.
    pub fn resolve(&self, repo: &str, constraint: &str) -> Result<String> {
        self.resolve_with_source(repo, constraint)
            .map(|resolution| resolution.revision)
    }

    /// Like [`resolve`](Self::resolve), also reporting which step answered.
    pub fn resolve_with_source(&self, repo: &str, constraint: &str) -> Result<Resolution> {
        let span = tracing::debug_span!("resolve", repo, constraint);
        let _enter = span.enter();

        let checkout = self.vendor.package_path(repo);
        if !checkout.exists() {
            tracing::debug!(%checkout, "package not fetched, keeping constraint");
            return Ok(Resolution::new(constraint, Source::NotFetched));
        }
        if !self.vcs.detect(&checkout) {
            tracing::debug!(%checkout, "package not under version control, keeping constraint");
            return Ok(Resolution::new(constraint, Source::NotVersioned));
        }

        if let Some(revision) = self.vcs.verify_revision(&checkout, constraint)? {
            tracing::debug!(%revision, "constraint names a revision");
            return Ok(Resolution::new(revision, Source::Revision));
        }

        let parsed = VersionConstraint::parse(constraint)?;
        let (tag, revision) = self.highest_tag(repo, &checkout, &parsed)?;
        tracing::debug!(tag = %tag, %revision, "matched tag");
        Ok(Resolution::new(revision, Source::Tag(tag)))
    }

    fn highest_tag(
        &self,
        repo: &str,
        checkout: &NormalizedPath,
        constraint: &VersionConstraint,
    ) -> Result<(String, String)> {
        let candidates = TagCandidates::from_tags(self.vcs.list_tags(checkout)?);
        tracing::debug!(candidates = candidates.len(), "version tags");

        let Some((_, tag)) = candidates.highest_matching(constraint) else {
            return Err(Error::NoMatchingVersion {
                constraint: constraint.to_string(),
                repo: repo.to_string(),
            });
        };

        let revision = self
            .vcs
            .verify_revision(checkout, tag)?
            .ok_or_else(|| pin_git::Error::TagUnresolvable {
                tag: tag.to_string(),
            })?;
        Ok((tag.to_string(), revision))
    }
}
