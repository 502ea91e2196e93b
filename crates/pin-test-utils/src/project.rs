//! [`TestProject`] builder for manifest and resolver scenarios.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::git;

/// A temporary project directory with a `Pinfile` and a `.vendor` tree.
///
/// # Example
///
/// ```rust,no_run
/// use pin_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_manifest("github.com/acme/widget >=1.0\n");
/// let ids = project.vendor_repo_with_tags("github.com/acme/widget", &["v1.0.0"]);
/// project.assert_manifest_contains("github.com/acme/widget");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the project root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.root().join("Pinfile")
    }

    /// Path of the default dependency root.
    pub fn vendor_root(&self) -> PathBuf {
        self.root().join(".vendor")
    }

    /// Where a package's checkout lives under the default dependency root.
    pub fn checkout_path(&self, repo: &str) -> PathBuf {
        self.vendor_root().join("src").join(repo)
    }

    pub fn write_manifest(&self, content: &str) {
        fs::write(self.manifest_path(), content).unwrap();
    }

    pub fn read_manifest(&self) -> String {
        fs::read_to_string(self.manifest_path()).unwrap()
    }

    /// Write `.pin.toml` in the project root.
    pub fn write_config(&self, content: &str) {
        fs::write(self.root().join(".pin.toml"), content).unwrap();
    }

    /// Create a plain directory checkout with no version control.
    pub fn vendor_plain_dir(&self, repo: &str) -> PathBuf {
        let path = self.checkout_path(repo);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Create a git checkout for `repo` with one tagged commit per tag.
    ///
    /// Returns a map from tag name to commit id.
    pub fn vendor_repo_with_tags(&self, repo: &str, tags: &[&str]) -> BTreeMap<String, String> {
        git::repo_with_tags(&self.checkout_path(repo), tags)
    }

    /// Open the git checkout for `repo`.
    pub fn open_checkout(&self, repo: &str) -> git2::Repository {
        git2::Repository::open(self.checkout_path(repo)).unwrap()
    }

    /// Assert that the manifest contains `content`.
    ///
    /// # Panics
    /// Panics if the manifest cannot be read or does not contain `content`.
    pub fn assert_manifest_contains(&self, content: &str) {
        let manifest = self.read_manifest();
        assert!(
            manifest.contains(content),
            "Pinfile does not contain expected content.\nExpected: {}\nActual: {}",
            content,
            manifest
        );
    }
}
