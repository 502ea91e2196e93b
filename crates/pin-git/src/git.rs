//! git2-backed [`Vcs`] implementation

use git2::{ErrorCode, Repository};
use pin_fs::{NormalizedPath, PinPath};

use crate::{Error, Result, Vcs};

/// Answers revision and tag queries with libgit2.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitVcs;

impl GitVcs {
    pub fn new() -> Self {
        Self
    }

    fn open(checkout: &NormalizedPath) -> Result<Repository> {
        Repository::open(checkout.to_native()).map_err(|source| Error::Open {
            path: checkout.to_native(),
            source,
        })
    }
}

/// Error codes libgit2 uses when a revspec simply does not name anything.
fn is_unknown_revision(err: &git2::Error) -> bool {
    matches!(
        err.code(),
        ErrorCode::NotFound | ErrorCode::InvalidSpec | ErrorCode::Ambiguous | ErrorCode::Peel
    )
}

impl Vcs for GitVcs {
    fn detect(&self, checkout: &NormalizedPath) -> bool {
        checkout.join(PinPath::GitDir.as_str()).exists()
    }

    fn verify_revision(&self, checkout: &NormalizedPath, revision: &str) -> Result<Option<String>> {
        if revision.trim().is_empty() {
            return Ok(None);
        }

        let repo = Self::open(checkout)?;
        let object = match repo.revparse_single(revision) {
            Ok(object) => object,
            Err(e) if is_unknown_revision(&e) => {
                tracing::trace!(%checkout, revision, error = %e, "not a revision");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        // Annotated tags name a tag object; report the commit it points at.
        let id = match object.peel_to_commit() {
            Ok(commit) => commit.id(),
            Err(_) => object.id(),
        };

        tracing::debug!(%checkout, revision, %id, "verified revision");
        Ok(Some(id.to_string()))
    }

    fn list_tags(&self, checkout: &NormalizedPath) -> Result<Vec<String>> {
        let repo = Self::open(checkout)?;
        let names = repo.tag_names(None)?;
        let tags: Vec<String> = names.iter().flatten().map(str::to_string).collect();

        tracing::debug!(%checkout, count = tags.len(), "listed tags");
        Ok(tags)
    }
}
