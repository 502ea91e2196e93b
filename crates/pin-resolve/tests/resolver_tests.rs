use pin_resolve::{Error, Resolver, Source, VendorEnv};
use pin_test_utils::{TestProject, git};
use pretty_assertions::assert_eq;
use rstest::rstest;

const REPO: &str = "github.com/acme/widget";

fn resolver_for(project: &TestProject) -> Resolver {
    Resolver::new(VendorEnv::default_for(project.root()))
}

// --- semver tags ---

#[test]
fn test_resolves_highest_tag_in_range() {
    let project = TestProject::new();
    let ids = project.vendor_repo_with_tags(REPO, &["1.0.0", "1.2.0", "2.0.0", "v1.5.0-beta"]);

    let resolution = resolver_for(&project)
        .resolve_with_source(REPO, ">=1.0.0, <2.0.0")
        .unwrap();

    assert_eq!(resolution.revision, ids["1.2.0"]);
    assert_eq!(resolution.source, Source::Tag("1.2.0".to_string()));
}

#[rstest]
#[case("~> 1.0", "v1.4.0")]
#[case("^1.1", "v1.4.0")]
#[case("< 1.2", "v1.1.0")]
#[case("!= 2.0.0, >= 1.0", "v1.4.0")]
#[case("*", "2.0.0")]
fn test_resolves_constraint_forms(#[case] constraint: &str, #[case] expected_tag: &str) {
    let project = TestProject::new();
    let ids = project.vendor_repo_with_tags(REPO, &["v1.0.0", "v1.1.0", "v1.4.0", "2.0.0"]);

    let revision = resolver_for(&project).resolve(REPO, constraint).unwrap();
    assert_eq!(revision, ids[expected_tag]);
}

#[test]
fn test_non_version_tags_never_match() {
    let project = TestProject::new();
    let ids = project.vendor_repo_with_tags(REPO, &["1.0.0", "nightly", "release-9"]);

    let revision = resolver_for(&project).resolve(REPO, ">=0.1").unwrap();
    assert_eq!(revision, ids["1.0.0"]);
}

#[test]
fn test_no_matching_version() {
    let project = TestProject::new();
    project.vendor_repo_with_tags(REPO, &["1.0.0", "1.2.0"]);

    let err = resolver_for(&project).resolve(REPO, ">=2.0.0").unwrap_err();
    assert!(
        matches!(&err, Error::NoMatchingVersion { constraint, repo }
            if constraint == ">=2.0.0" && repo == REPO),
        "{err:?}"
    );
}

#[test]
fn test_invalid_constraint() {
    let project = TestProject::new();
    project.vendor_repo_with_tags(REPO, &["1.0.0"]);

    let err = resolver_for(&project).resolve(REPO, ">=>1.0").unwrap_err();
    assert!(matches!(err, Error::ConstraintSyntax { .. }), "{err:?}");
}

// --- revisions ---

#[test]
fn test_branch_resolves_to_its_commit() {
    let project = TestProject::new();
    project.vendor_repo_with_tags(REPO, &["1.0.0"]);
    let repo = project.open_checkout(REPO);
    let oid = git::commit_file(&repo, "feature.txt", "wip\n", "Feature work");
    git::create_branch(&repo, "feature", oid);

    let resolution = resolver_for(&project).resolve_with_source(REPO, "feature").unwrap();
    assert_eq!(resolution.revision, oid.to_string());
    assert_eq!(resolution.source, Source::Revision);
}

#[test]
fn test_commit_id_passes_through_verification() {
    let project = TestProject::new();
    let ids = project.vendor_repo_with_tags(REPO, &["1.0.0", "1.1.0"]);
    let commit = &ids["1.0.0"];

    assert_eq!(resolver_for(&project).resolve(REPO, commit).unwrap(), *commit);
    assert_eq!(resolver_for(&project).resolve(REPO, &commit[..10]).unwrap(), *commit);
}

#[test]
fn test_exact_tag_name_is_a_revision() {
    let project = TestProject::new();
    let ids = project.vendor_repo_with_tags(REPO, &["v1.0.0", "v1.1.0"]);

    let resolution = resolver_for(&project).resolve_with_source(REPO, "v1.0.0").unwrap();
    assert_eq!(resolution.revision, ids["v1.0.0"]);
    assert_eq!(resolution.source, Source::Revision);
}

// --- pass-through ---

#[test]
fn test_missing_checkout_keeps_constraint() {
    let project = TestProject::new();

    let resolution = resolver_for(&project).resolve_with_source(REPO, "^1.0").unwrap();
    assert_eq!(resolution.revision, "^1.0");
    assert_eq!(resolution.source, Source::NotFetched);
}

#[test]
fn test_plain_directory_keeps_constraint() {
    let project = TestProject::new();
    project.vendor_plain_dir(REPO);

    let resolution = resolver_for(&project).resolve_with_source(REPO, "^1.0").unwrap();
    assert_eq!(resolution.revision, "^1.0");
    assert_eq!(resolution.source, Source::NotVersioned);
}

#[test]
fn test_broken_git_metadata_is_a_vcs_error() {
    let project = TestProject::new();
    let checkout = project.vendor_plain_dir(REPO);
    git::fake_git_dir(&checkout);

    let err = resolver_for(&project).resolve(REPO, "^1.0").unwrap_err();
    assert!(matches!(err, Error::Vcs(pin_git::Error::Open { .. })), "{err:?}");
}

#[test]
fn test_working_directory_is_untouched() {
    let before = std::env::current_dir().unwrap();
    let project = TestProject::new();
    project.vendor_repo_with_tags(REPO, &["1.0.0"]);
    let resolver = resolver_for(&project);

    resolver.resolve(REPO, "^1").unwrap();
    resolver.resolve(REPO, ">=>1").unwrap_err();
    resolver.resolve(REPO, ">=5").unwrap_err();
    resolver.resolve("github.com/acme/absent", "^1").unwrap();

    assert_eq!(std::env::current_dir().unwrap(), before);
}
