//! Well-known file and directory names used by pin.

use std::path::Path;

/// Standard project filesystem markers and paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinPath {
    /// The dependency manifest (`Pinfile`)
    Manifest,
    /// Optional project settings (`.pin.toml`)
    Config,
    /// The dependency root, relative to the project (`.vendor`)
    VendorDir,
    /// Checkouts live under `<root>/src/<repo>`
    SrcDir,
    /// Executables live under `<root>/bin`
    BinDir,
    /// Git metadata inside a checkout
    GitDir,
}

impl PinPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manifest => "Pinfile",
            Self::Config => ".pin.toml",
            Self::VendorDir => ".vendor",
            Self::SrcDir => "src",
            Self::BinDir => "bin",
            Self::GitDir => ".git",
        }
    }
}

impl AsRef<Path> for PinPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for PinPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for PinPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
