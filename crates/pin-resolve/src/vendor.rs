//! The isolated dependency root.
//!
//! Checkouts live under `<root>/src/<repo>` and executables under
//! `<root>/bin`. Instead of mutating the process environment, the variables
//! a child process needs are applied to its [`Command`] only.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use pin_fs::{NormalizedPath, PinPath};

use crate::error::{Error, Result};

/// Variable naming the dependency root for child processes.
pub const ROOT_VAR: &str = "PIN_ROOT";
/// Executable search path variable.
pub const PATH_VAR: &str = "PATH";

/// A project's dependency root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorEnv {
    root: NormalizedPath,
}

impl VendorEnv {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }

    /// The dependency root `dir` of a project. Relative `dir`s are taken
    /// from `project_root`; absolute ones are used as-is.
    pub fn for_project(project_root: &Path, dir: impl AsRef<Path>) -> Self {
        Self::new(project_root.join(dir))
    }

    /// The default dependency root of a project, `<project>/.vendor`.
    pub fn default_for(project_root: &Path) -> Self {
        Self::for_project(project_root, PinPath::VendorDir)
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn src_dir(&self) -> NormalizedPath {
        self.root.join(PinPath::SrcDir.as_str())
    }

    pub fn bin_dir(&self) -> NormalizedPath {
        self.root.join(PinPath::BinDir.as_str())
    }

    /// Where the checkout of `repo` is expected.
    pub fn package_path(&self, repo: &str) -> NormalizedPath {
        self.src_dir().join(repo)
    }

    /// `initial` with the vendor `bin` directory in front.
    pub fn search_path(&self, initial: Option<&OsStr>) -> Result<OsString> {
        let mut dirs = vec![self.bin_dir().to_native()];
        if let Some(initial) = initial {
            dirs.extend(std::env::split_paths(initial));
        }
        std::env::join_paths(dirs).map_err(|e| Error::SearchPath {
            reason: e.to_string(),
        })
    }

    /// The variables a child process needs, given the current `PATH`.
    pub fn vars(&self, initial_path: Option<&OsStr>) -> Result<Vec<(&'static str, OsString)>> {
        Ok(vec![
            (ROOT_VAR, self.root.to_native().into_os_string()),
            (PATH_VAR, self.search_path(initial_path)?),
        ])
    }

    /// Export the vendor environment to `cmd`, leaving this process alone.
    pub fn apply(&self, cmd: &mut Command) -> Result<()> {
        let current = std::env::var_os(PATH_VAR);
        for (key, value) in self.vars(current.as_deref())? {
            cmd.env(key, value);
        }
        Ok(())
    }
}

/// The process working directory, taken as the project root.
pub fn project_root() -> Result<PathBuf> {
    std::env::current_dir().map_err(|source| Error::WorkingDirectory { source })
}
