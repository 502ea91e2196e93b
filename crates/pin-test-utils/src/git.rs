//! Git repository fixtures.
//!
//! Everything goes through `git2`, so tests do not need a `git` binary or a
//! configured user identity.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use git2::{Oid, Repository, Signature};

fn signature() -> Signature<'static> {
    Signature::now("Test User", "test@test.com")
        .unwrap_or_else(|e| panic!("signature: failed to build test signature: {e}"))
}

/// Creates a `.git` directory that is **not** a repository.
///
/// Use for: tests that need the marker to be detected but the open to fail.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_git_dir(path: &Path) {
    fs::create_dir_all(path.join(".git"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create .git: {e}"));
}

/// Initialises an empty repository at `path`.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn init_repo(path: &Path) -> Repository {
    fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("init_repo: failed to create {}: {e}", path.display()));
    Repository::init(path)
        .unwrap_or_else(|e| panic!("init_repo: failed to init repository at {}: {e}", path.display()))
}

/// Writes `file` with `content`, stages it and commits on `HEAD`.
///
/// Returns the new commit id.
///
/// # Panics
/// Panics if any git operation fails.
pub fn commit_file(repo: &Repository, file: &str, content: &str, message: &str) -> Oid {
    let workdir = repo
        .workdir()
        .unwrap_or_else(|| panic!("commit_file: repository has no working directory"));
    fs::write(workdir.join(file), content)
        .unwrap_or_else(|e| panic!("commit_file: failed to write {file}: {e}"));

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(file)).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    let sig = signature();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap_or_else(|e| panic!("commit_file: commit failed: {e}"))
}

/// Creates a lightweight tag `name` pointing at `target`.
pub fn lightweight_tag(repo: &Repository, name: &str, target: Oid) {
    let object = repo.find_object(target, None).unwrap();
    repo.tag_lightweight(name, &object, false)
        .unwrap_or_else(|e| panic!("lightweight_tag: failed to create {name}: {e}"));
}

/// Creates an annotated tag `name` pointing at `target`.
///
/// Returns the id of the tag object (not the commit).
pub fn annotated_tag(repo: &Repository, name: &str, target: Oid) -> Oid {
    let object = repo.find_object(target, None).unwrap();
    repo.tag(name, &object, &signature(), &format!("release {name}"), false)
        .unwrap_or_else(|e| panic!("annotated_tag: failed to create {name}: {e}"))
}

/// Creates a local branch `name` at `target`.
pub fn create_branch(repo: &Repository, name: &str, target: Oid) {
    let commit = repo.find_commit(target).unwrap();
    repo.branch(name, &commit, false)
        .unwrap_or_else(|e| panic!("create_branch: failed to create {name}: {e}"));
}

/// Initialises a repository at `path` with one commit per tag, tagging each
/// commit in order with a lightweight tag.
///
/// Returns a map from tag name to the full hex id of its commit.
///
/// # Panics
/// Panics if any git operation fails.
pub fn repo_with_tags(path: &Path, tags: &[&str]) -> BTreeMap<String, String> {
    let repo = init_repo(path);
    let mut ids = BTreeMap::new();
    if tags.is_empty() {
        commit_file(&repo, "README.md", "# fixture\n", "Initial commit");
    }
    for (n, tag) in tags.iter().enumerate() {
        let oid = commit_file(&repo, "VERSION", &format!("{tag}\n"), &format!("Release {n}: {tag}"));
        lightweight_tag(&repo, tag, oid);
        ids.insert((*tag).to_string(), oid.to_string());
    }
    ids
}

/// Full hex id of the commit `HEAD` points at.
pub fn head_id(repo: &Repository) -> String {
    repo.head().unwrap().peel_to_commit().unwrap().id().to_string()
}
