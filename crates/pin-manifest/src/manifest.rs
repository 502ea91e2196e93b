//! The `Pinfile` model: an ordered sequence of [`Line`] records.

use std::fmt;

use pin_fs::{NormalizedPath, io};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::line::Line;
use crate::package::Package;

/// What happens to the text after the version token when a line is
/// rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentPolicy {
    /// Keep trailing comments and any other trailing text verbatim.
    #[default]
    Preserve,
    /// Regenerate the line as `repo version`.
    Drop,
}

/// Outcome of [`Manifest::add_package`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// A new line was appended.
    Added,
    /// An existing line now names a different version.
    Updated { previous: String },
    /// The package already had this version; nothing was touched.
    Unchanged,
}

/// Line terminator used when the manifest is written back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// The terminator of the first line in `text`; `Lf` when there is none.
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(idx) if text[..idx].ends_with('\r') => Self::CrLf,
            _ => Self::Lf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// A dependency manifest loaded from disk.
///
/// The line records are the single source of truth. [`Manifest::raw_lines`]
/// and [`Manifest::packages`] are views over them, so the literal text and
/// the package list cannot drift apart.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: NormalizedPath,
    lines: Vec<Line>,
    policy: CommentPolicy,
    ending: LineEnding,
}

impl Manifest {
    /// An empty manifest that will be written to `path` on save.
    pub fn new(path: impl Into<NormalizedPath>) -> Self {
        Self {
            path: path.into(),
            lines: Vec::new(),
            policy: CommentPolicy::default(),
            ending: LineEnding::default(),
        }
    }

    /// Read and parse the manifest at `path`.
    pub fn load(path: impl Into<NormalizedPath>) -> Result<Self> {
        let path = path.into();
        let content = io::read_text(&path)?;
        let manifest = Self::parse(path, &content);
        tracing::debug!(
            path = %manifest.path,
            lines = manifest.lines.len(),
            packages = manifest.packages().count(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// Like [`Manifest::load`], but a missing file yields an empty manifest.
    pub fn load_or_new(path: impl Into<NormalizedPath>) -> Result<Self> {
        let path = path.into();
        match Self::load(path.clone()) {
            Err(crate::Error::Fs(e)) if e.is_not_found() => Ok(Self::new(path)),
            other => other,
        }
    }

    /// Parse manifest text.
    ///
    /// Surrounding whitespace of the whole text is trimmed; the lines
    /// themselves are kept exactly as written, minus their terminator. The
    /// terminator of the first line is used for every line on save.
    pub fn parse(path: impl Into<NormalizedPath>, content: &str) -> Self {
        let ending = LineEnding::detect(content);
        let trimmed = content.trim();
        let lines = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed
                .split('\n')
                .map(|line| match ending {
                    LineEnding::CrLf => line.strip_suffix('\r').unwrap_or(line),
                    LineEnding::Lf => line,
                })
                .map(Line::parse)
                .collect()
        };
        Self {
            path: path.into(),
            lines,
            policy: CommentPolicy::default(),
            ending,
        }
    }

    pub fn with_comment_policy(mut self, policy: CommentPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn comment_policy(&self) -> CommentPolicy {
        self.policy
    }

    pub fn line_ending(&self) -> LineEnding {
        self.ending
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The literal text of every line, in file order, without terminators.
    pub fn raw_lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(Line::text)
    }

    /// The packages named by the manifest, in file order.
    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.lines.iter().filter_map(Line::package)
    }

    pub fn get(&self, repo: &str) -> Option<&Package> {
        self.packages().find(|p| p.repo == repo)
    }

    /// Index of the first raw line whose first field is exactly `repo`.
    pub fn raw_index(&self, repo: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.first_field() == Some(repo))
    }

    /// Index into [`Manifest::packages`] of the first package named `repo`.
    pub fn package_index(&self, repo: &str) -> Option<usize> {
        self.packages().position(|p| p.repo == repo)
    }

    /// Add a package from a `repo[ version]` spec, or update the version of
    /// the line that already names it.
    pub fn add_package(&mut self, spec: &str) -> Result<Change> {
        let package: Package = spec.parse()?;
        Ok(self.set_package(package))
    }

    /// Structured form of [`Manifest::add_package`].
    pub fn set_package(&mut self, package: Package) -> Change {
        let existing = self
            .lines
            .iter()
            .position(|l| l.package().is_some_and(|p| p.repo == package.repo));

        let Some(idx) = existing else {
            tracing::debug!(repo = %package.repo, version = %package.version, "appending package");
            self.lines.push(Line::parse(package.to_string()));
            return Change::Added;
        };

        let line = &self.lines[idx];
        let previous = line.package().map(|p| p.version.clone()).unwrap_or_default();
        if previous == package.version {
            return Change::Unchanged;
        }

        tracing::debug!(
            repo = %package.repo,
            from = %previous,
            to = %package.version,
            line = idx + 1,
            "updating package"
        );
        let updated = line.with_version(&package.version, self.policy);
        self.lines[idx] = updated;
        Change::Updated { previous }
    }

    /// The manifest text as it will be written: every line followed by the
    /// detected terminator, including the last one.
    pub fn render(&self) -> String {
        let ending = self.ending.as_str();
        let mut out = self.raw_lines().collect::<Vec<_>>().join(ending);
        if !out.is_empty() {
            out.push_str(ending);
        }
        out
    }

    /// Overwrite the manifest file with the current text.
    pub fn save(&self) -> Result<()> {
        io::write_text(&self.path, &self.render())?;
        tracing::info!(path = %self.path, "saved manifest");
        Ok(())
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
