//! One manifest line: its literal text plus where the package tokens sit.

use std::ops::Range;

use crate::manifest::CommentPolicy;
use crate::package::Package;

/// Everything from the first `#` to the end of a line is a comment.
pub const COMMENT: char = '#';

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    package: Package,
    repo: Range<usize>,
    version: Option<Range<usize>>,
}

/// A manifest line.
///
/// `text` is exactly what was read from disk (or written by a rewrite). For
/// lines that name a package, the byte ranges of the repo and version tokens
/// are kept so a rewrite can splice in a new version without touching
/// anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    entry: Option<Entry>,
}

impl Line {
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let entry = {
            let content = match text.find(COMMENT) {
                Some(idx) => &text[..idx],
                None => text.as_str(),
            };
            let mut fields = field_spans(content);
            fields.next().map(|repo| {
                let version = fields.next();
                let package = Package::new(
                    &content[repo.clone()],
                    version.clone().map(|v| &content[v]).unwrap_or_default(),
                );
                Entry {
                    package,
                    repo,
                    version,
                }
            })
        };

        Self { text, entry }
    }

    /// The literal line text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The package this line names, if it is not blank or comment-only.
    pub fn package(&self) -> Option<&Package> {
        self.entry.as_ref().map(|e| &e.package)
    }

    /// The comment on this line, starting at `#`.
    pub fn comment(&self) -> Option<&str> {
        self.text.find(COMMENT).map(|idx| &self.text[idx..])
    }

    /// The first whitespace-delimited field of the raw text, comments
    /// included.
    pub fn first_field(&self) -> Option<&str> {
        self.text.split_whitespace().next()
    }

    /// A copy of this line naming `version` instead of the current one.
    ///
    /// The text up to the end of the repo token is kept. With
    /// [`CommentPolicy::Preserve`] so is everything after the old version
    /// token; with [`CommentPolicy::Drop`] it is discarded. Lines without a
    /// package are returned as-is.
    pub fn with_version(&self, version: &str, policy: CommentPolicy) -> Self {
        let Some(entry) = &self.entry else {
            return self.clone();
        };

        let tail_start = entry.version.as_ref().map_or(entry.repo.end, |v| v.end);
        let tail = &self.text[tail_start..];

        let mut text = String::with_capacity(self.text.len() + version.len());
        text.push_str(&self.text[..entry.repo.end]);
        if !version.is_empty() {
            text.push(' ');
            text.push_str(version);
        }
        if policy == CommentPolicy::Preserve {
            text.push_str(tail);
        }

        Self::parse(text)
    }
}

/// Byte ranges of the whitespace-delimited fields of `s`.
fn field_spans(s: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut chars = s.char_indices().peekable();
    std::iter::from_fn(move || {
        while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
        let (start, first) = chars.next()?;
        let mut end = start + first.len_utf8();
        while let Some((idx, c)) = chars.next_if(|(_, c)| !c.is_whitespace()) {
            end = idx + c.len_utf8();
        }
        Some(start..end)
    })
}
