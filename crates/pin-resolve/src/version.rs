//! Version constraint parsing and checking.
//!
//! A constraint is a comma-separated list of clauses that must all hold:
//!
//! | clause            | meaning                                     |
//! |-------------------|---------------------------------------------|
//! | `>=1.2`, `<2`     | ordinary comparisons (`>`, `>=`, `<`, `<=`) |
//! | `1.2.3`, `=1.2.3`, `==1.2.3` | exactly that version             |
//! | `!=1.3.0`         | anything but that version                   |
//! | `~> 1.2`          | `>=1.2.0, <2.0.0`                           |
//! | `~> 1.2.3`        | `>=1.2.3, <1.3.0`                           |
//! | `^1.2`, `~1.2`    | semver caret / tilde                        |
//! | `*`               | any release                                 |
//!
//! Missing minor and patch components default to 0. Pre-releases only match
//! when a clause names the same `major.minor.patch` with a pre-release.
//!
//! # Examples
//!
//! ```
//! use pin_resolve::version::VersionConstraint;
//!
//! let constraint = VersionConstraint::parse(">=1.0.0, <2.0.0").unwrap();
//! assert!(constraint.satisfies("1.2.0"));
//! assert!(!constraint.satisfies("2.0.0"));
//! assert!(!constraint.satisfies("1.5.0-beta"));
//!
//! let constraint = VersionConstraint::parse("~> 1.2").unwrap();
//! assert!(constraint.satisfies("1.9.4"));
//! ```

use semver::{Comparator, Op, Prerelease, Version, VersionReq};

use crate::error::{Error, Result};

/// A parsed version constraint that can be checked against concrete versions.
#[derive(Debug, Clone)]
pub struct VersionConstraint {
    req: VersionReq,
    excluded: Vec<Version>,
    /// The original constraint string for display.
    raw: String,
}

impl VersionConstraint {
    /// Parse a version constraint string.
    pub fn parse(constraint: &str) -> Result<Self> {
        let raw = constraint.to_string();
        let syntax = |reason: String| Error::ConstraintSyntax {
            constraint: raw.clone(),
            reason,
        };

        if constraint.trim().is_empty() {
            return Err(syntax("empty constraint".to_string()));
        }

        let mut comparators = Vec::new();
        let mut excluded = Vec::new();
        for clause in constraint.split(',').map(str::trim) {
            if clause.is_empty() {
                return Err(syntax("empty clause".to_string()));
            }
            match parse_clause(clause).map_err(syntax)? {
                Clause::Any => {}
                Clause::Require(mut cmps) => comparators.append(&mut cmps),
                Clause::Exclude(version) => excluded.push(version),
            }
        }

        Ok(Self {
            req: VersionReq { comparators },
            excluded,
            raw,
        })
    }

    /// Check if a version string satisfies this constraint.
    ///
    /// Returns `false` if the version string cannot be parsed.
    pub fn satisfies(&self, version: &str) -> bool {
        parse_version(version).is_some_and(|v| self.matches(&v))
    }

    /// Check if a `semver::Version` satisfies this constraint.
    pub fn matches(&self, version: &Version) -> bool {
        self.req.matches(version) && !self.excluded.iter().any(|e| e == version)
    }

    /// Return the original constraint string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

enum Clause {
    Any,
    Require(Vec<Comparator>),
    Exclude(Version),
}

fn parse_clause(clause: &str) -> std::result::Result<Clause, String> {
    if clause == "*" {
        return Ok(Clause::Any);
    }
    if let Some(rest) = clause.strip_prefix("~>") {
        return pessimistic(rest.trim()).map(Clause::Require);
    }
    if let Some(rest) = clause.strip_prefix("!=") {
        return exact_version(rest.trim()).map(Clause::Exclude);
    }
    if let Some(rest) = clause.strip_prefix("==") {
        return exact_version(rest.trim()).map(|v| Clause::Require(vec![exact(&v)]));
    }
    if let Some(rest) = clause.strip_prefix('=') {
        return exact_version(rest.trim()).map(|v| Clause::Require(vec![exact(&v)]));
    }
    if clause.starts_with(|c: char| c.is_ascii_digit() || c == 'v') {
        // Bare versions are exact; wildcards like `1.2.*` fall through to semver.
        if let Ok(version) = exact_version(clause) {
            return Ok(Clause::Require(vec![exact(&version)]));
        }
    }

    Comparator::parse(clause)
        .map(|c| Clause::Require(vec![c]))
        .map_err(|e| format!("'{clause}': {e}"))
}

fn exact_version(s: &str) -> std::result::Result<Version, String> {
    let s = s.strip_prefix('v').unwrap_or(s);
    parse_version(s).ok_or_else(|| format!("invalid version: '{s}'"))
}

fn comparator(op: Op, major: u64, minor: u64, patch: u64, pre: Prerelease) -> Comparator {
    Comparator {
        op,
        major,
        minor: Some(minor),
        patch: Some(patch),
        pre,
    }
}

fn exact(v: &Version) -> Comparator {
    comparator(Op::Exact, v.major, v.minor, v.patch, v.pre.clone())
}

/// `~> X.Y` allows the last given component to grow: at least the given
/// version, below the next bump of the component before it.
fn pessimistic(s: &str) -> std::result::Result<Vec<Comparator>, String> {
    let s = s.strip_prefix('v').unwrap_or(s);
    let lower = parse_version(s).ok_or_else(|| format!("invalid version after '~>': '{s}'"))?;
    let components = s
        .split(['-', '+'])
        .next()
        .unwrap_or_default()
        .split('.')
        .count();

    let mut cmps = vec![comparator(
        Op::GreaterEq,
        lower.major,
        lower.minor,
        lower.patch,
        lower.pre.clone(),
    )];
    let upper = match components {
        1 => None,
        2 => Some((lower.major + 1, 0)),
        _ => Some((lower.major, lower.minor + 1)),
    };
    if let Some((major, minor)) = upper {
        cmps.push(comparator(Op::Less, major, minor, 0, Prerelease::EMPTY));
    }
    Ok(cmps)
}

/// Parse a version leniently: `1` and `1.2` are read as `1.0.0` and
/// `1.2.0`, pre-release and build suffixes included.
pub fn parse_version(s: &str) -> Option<Version> {
    let s = s.trim();
    if let Ok(v) = Version::parse(s) {
        return Some(v);
    }

    let (core, suffix) = match s.find(['-', '+']) {
        Some(idx) => s.split_at(idx),
        None => (s, ""),
    };
    let components = core.split('.').count();
    if !(1..=2).contains(&components) {
        return None;
    }
    let padded = format!("{core}{}{suffix}", ".0".repeat(3 - components));
    Version::parse(&padded).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // --- VersionConstraint::parse ---

    #[test]
    fn test_parse_compound() {
        let c = VersionConstraint::parse(">=1.0.0, <2.0.0").unwrap();
        assert_eq!(c.req.comparators.len(), 2);
        assert_eq!(c.as_str(), ">=1.0.0, <2.0.0");
    }

    #[test]
    fn test_parse_pessimistic_expands_to_two_comparators() {
        let c = VersionConstraint::parse("~> 1.2").unwrap();
        assert_eq!(c.req.comparators.len(), 2);
    }

    #[test]
    fn test_parse_star_has_no_comparators() {
        let c = VersionConstraint::parse("*").unwrap();
        assert!(c.req.comparators.is_empty());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case(">=>1.0")]
    #[case(">=abc")]
    #[case("1.0,")]
    #[case("~>")]
    #[case("!=x")]
    #[case("main")]
    fn test_parse_rejects(#[case] input: &str) {
        let err = VersionConstraint::parse(input).unwrap_err();
        assert!(matches!(err, Error::ConstraintSyntax { .. }), "{input}: {err}");
    }

    // --- satisfies ---

    #[rstest]
    #[case(">=1.0.0, <2.0.0", "1.0.0", true)]
    #[case(">=1.0.0, <2.0.0", "1.9.9", true)]
    #[case(">=1.0.0, <2.0.0", "2.0.0", false)]
    #[case(">=1.0.0, <2.0.0", "1.5.0-beta", false)]
    #[case(">= 1.0, < 2.0", "1.4.0", true)]
    #[case("1.2.0", "1.2.0", true)]
    #[case("1.2.0", "1.2.1", false)]
    #[case("v1.2", "1.2.0", true)]
    #[case("=1.2.0", "1.2.0", true)]
    #[case("==1.2.0", "1.3.0", false)]
    #[case("!=1.3.0", "1.3.0", false)]
    #[case("!=1.3.0", "1.4.0", true)]
    #[case("~> 1.2", "1.2.0", true)]
    #[case("~> 1.2", "1.9.0", true)]
    #[case("~> 1.2", "2.0.0", false)]
    #[case("~> 1.2.3", "1.2.9", true)]
    #[case("~> 1.2.3", "1.3.0", false)]
    #[case("~> 1.2.3", "1.2.2", false)]
    #[case("~> 1", "7.0.0", true)]
    #[case("^1.2", "1.9.0", true)]
    #[case("^1.2", "2.0.0", false)]
    #[case("~1.2", "1.2.7", true)]
    #[case("~1.2", "1.3.0", false)]
    #[case("1.*", "1.7.0", true)]
    #[case("*", "3.0.0", true)]
    #[case("*", "3.0.0-rc.1", false)]
    #[case(">=1.5.0-beta", "1.5.0-beta", true)]
    #[case(">=1.5.0-beta", "1.5.0", true)]
    #[case(">=1.5.0-beta", "1.6.0-alpha", false)]
    fn test_satisfies(#[case] constraint: &str, #[case] version: &str, #[case] expected: bool) {
        let c = VersionConstraint::parse(constraint).unwrap();
        assert_eq!(c.satisfies(version), expected, "{constraint} vs {version}");
    }

    #[test]
    fn test_satisfies_invalid_version_returns_false() {
        let c = VersionConstraint::parse(">=1.0").unwrap();
        assert!(!c.satisfies("not-a-version"));
    }

    // --- parse_version ---

    #[rstest]
    #[case("1.2.3", Some("1.2.3"))]
    #[case("1.2", Some("1.2.0"))]
    #[case("1", Some("1.0.0"))]
    #[case("1.2-rc.1", Some("1.2.0-rc.1"))]
    #[case("1+build.5", Some("1.0.0+build.5"))]
    #[case("  3.12.0  ", Some("3.12.0"))]
    #[case("1.2.3.4", None)]
    #[case("release", None)]
    #[case("", None)]
    fn test_parse_version(#[case] input: &str, #[case] expected: Option<&str>) {
        let expected = expected.map(|s| Version::parse(s).unwrap());
        assert_eq!(parse_version(input), expected);
    }

    // --- Display ---

    #[test]
    fn test_display() {
        let c = VersionConstraint::parse(">=1.0,<1.3").unwrap();
        assert_eq!(format!("{c}"), ">=1.0,<1.3");
    }
}
