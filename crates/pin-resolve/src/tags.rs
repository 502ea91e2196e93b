//! Tags that read as semantic versions.

use std::collections::BTreeMap;

use semver::Version;

use crate::version::{VersionConstraint, parse_version};

/// Conventional marker some projects put in front of version tags.
pub const VERSION_MARKER: char = 'v';

/// The semver-parsable subset of a repository's tags, ordered by version.
///
/// Tags that do not parse (`nightly`, `release-2020`) are left out and never
/// take part in matching. When two tags read as the same version (`1.0.0`
/// and `v1.0.0`) the first one listed is kept.
#[derive(Debug, Clone, Default)]
pub struct TagCandidates {
    by_version: BTreeMap<Version, String>,
}

impl TagCandidates {
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_version = BTreeMap::new();
        for tag in tags {
            let tag = tag.as_ref();
            match tag_version(tag) {
                Some(version) => {
                    by_version.entry(version).or_insert_with(|| tag.to_string());
                }
                None => tracing::trace!(tag, "ignoring non-version tag"),
            }
        }
        Self { by_version }
    }

    pub fn len(&self) -> usize {
        self.by_version.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_version.is_empty()
    }

    /// Parsed versions in ascending order.
    pub fn versions(&self) -> impl DoubleEndedIterator<Item = &Version> {
        self.by_version.keys()
    }

    /// The tag a version was read from.
    pub fn tag(&self, version: &Version) -> Option<&str> {
        self.by_version.get(version).map(String::as_str)
    }

    /// The highest version satisfying `constraint`, with its tag.
    pub fn highest_matching(&self, constraint: &VersionConstraint) -> Option<(&Version, &str)> {
        self.by_version
            .iter()
            .rev()
            .find(|(version, _)| constraint.matches(version))
            .map(|(version, tag)| (version, tag.as_str()))
    }
}

/// Read a tag as a version, ignoring one leading [`VERSION_MARKER`].
pub fn tag_version(tag: &str) -> Option<Version> {
    parse_version(tag.strip_prefix(VERSION_MARKER).unwrap_or(tag))
}
