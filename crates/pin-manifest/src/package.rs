//! The `repo version` pair shared by the manifest and the resolver.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::line::COMMENT;

/// A required package.
///
/// `repo` is an opaque identifier compared by exact match. `version` is a
/// constraint or a concrete revision, or empty when none was given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Package {
    pub repo: String,
    #[serde(default)]
    pub version: String,
}

impl Package {
    pub fn new(repo: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            version: version.into(),
        }
    }

    pub fn has_version(&self) -> bool {
        !self.version.is_empty()
    }
}

impl FromStr for Package {
    type Err = Error;

    /// Parse `repo[ version]`.
    fn from_str(spec: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidPackage {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        if spec.contains(COMMENT) {
            return Err(invalid("'#' starts a comment and cannot appear in a package"));
        }

        let mut fields = spec.split_whitespace();
        let repo = fields.next().ok_or_else(|| invalid("missing repository"))?;
        let version = fields.next().unwrap_or_default();
        if fields.next().is_some() {
            return Err(invalid(
                "expected `repo [version]`; a version cannot contain whitespace",
            ));
        }

        Ok(Self::new(repo, version))
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            f.write_str(&self.repo)
        } else {
            write!(f, "{} {}", self.repo, self.version)
        }
    }
}
