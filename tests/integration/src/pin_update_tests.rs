//! End-to-end tests for the manifest update flow
//!
//! load manifest -> resolve every versioned package -> add "repo revision"
//! -> save -> reload, against real git checkouts in a temporary project.

use pin_manifest::{Change, CommentPolicy, Manifest};
use pin_resolve::{Error, Resolver, VendorEnv};
use pin_test_utils::{TestProject, git};
use pretty_assertions::assert_eq;

const WIDGET: &str = "github.com/acme/widget";
const GADGET: &str = "github.com/acme/gadget";
const LOCAL: &str = "example.org/local";

/// Resolve every package that has a version and write the revisions back.
fn update_all(project: &TestProject, policy: CommentPolicy) -> Result<Vec<Change>, Error> {
    let resolver = Resolver::new(VendorEnv::default_for(project.root()));
    let mut manifest = Manifest::load(project.manifest_path())
        .unwrap()
        .with_comment_policy(policy);

    let packages: Vec<_> = manifest.packages().filter(|p| p.has_version()).cloned().collect();
    let mut changes = Vec::new();
    for package in packages {
        let revision = resolver.resolve(&package.repo, &package.version)?;
        let change = manifest
            .add_package(&format!("{} {}", package.repo, revision))
            .unwrap();
        changes.push(change);
    }
    manifest.save().unwrap();
    Ok(changes)
}

fn sample_project() -> (TestProject, std::collections::BTreeMap<String, String>, String) {
    let project = TestProject::new();
    let widget = project.vendor_repo_with_tags(WIDGET, &["1.0.0", "1.2.0", "2.0.0", "v1.5.0-beta"]);

    project.vendor_repo_with_tags(GADGET, &["0.9.0"]);
    let repo = project.open_checkout(GADGET);
    let feature = git::commit_file(&repo, "feature.rs", "fn main() {}\n", "Feature");
    git::create_branch(&repo, "feature", feature);

    project.vendor_plain_dir(LOCAL);

    project.write_manifest(&format!(
        "# Runtime dependencies\n\
         \n\
         {WIDGET}\t>=1.0.0,<2.0.0   # stable line\n\
         {GADGET} feature\n\
         \n\
         # vendored by hand\n\
         {LOCAL} ^3\n\
         example.org/unfetched 1.x\n\
         example.org/bare\n"
    ));
    (project, widget, feature.to_string())
}

#[test]
fn test_update_pins_every_resolvable_package() {
    let (project, widget, feature) = sample_project();

    let changes = update_all(&project, CommentPolicy::Preserve).unwrap();

    assert_eq!(
        changes,
        vec![
            Change::Updated { previous: ">=1.0.0,<2.0.0".into() },
            Change::Updated { previous: "feature".into() },
            Change::Unchanged,
            Change::Unchanged,
        ]
    );
    assert_eq!(
        project.read_manifest(),
        format!(
            "# Runtime dependencies\n\
             \n\
             {WIDGET} {}   # stable line\n\
             {GADGET} {feature}\n\
             \n\
             # vendored by hand\n\
             {LOCAL} ^3\n\
             example.org/unfetched 1.x\n\
             example.org/bare\n",
            widget["1.2.0"]
        )
    );
}

#[test]
fn test_update_is_idempotent() {
    let (project, _, _) = sample_project();

    update_all(&project, CommentPolicy::Preserve).unwrap();
    let first = project.read_manifest();
    let changes = update_all(&project, CommentPolicy::Preserve).unwrap();

    assert!(changes.iter().all(|c| *c == Change::Unchanged), "{changes:?}");
    assert_eq!(project.read_manifest(), first);
}

#[test]
fn test_update_drop_policy_strips_trailing_comment() {
    let (project, widget, _) = sample_project();

    update_all(&project, CommentPolicy::Drop).unwrap();

    let text = project.read_manifest();
    assert!(text.contains(&format!("{WIDGET} {}\n", widget["1.2.0"])), "{text}");
    assert!(!text.contains("# stable line"));
    assert!(text.starts_with("# Runtime dependencies\n\n"));
    assert!(text.contains("# vendored by hand\n"));
}

#[test]
fn test_reloaded_manifest_keeps_package_order_and_indices() {
    let (project, _, _) = sample_project();
    let before = Manifest::load(project.manifest_path()).unwrap();

    update_all(&project, CommentPolicy::Preserve).unwrap();
    let after = Manifest::load(project.manifest_path()).unwrap();

    let repos = |m: &Manifest| m.packages().map(|p| p.repo.clone()).collect::<Vec<_>>();
    assert_eq!(repos(&before), repos(&after));
    for repo in repos(&after) {
        assert_eq!(after.raw_index(&repo), before.raw_index(&repo), "{repo}");
        assert_eq!(after.package_index(&repo), before.package_index(&repo), "{repo}");
    }
    assert_eq!(after.raw_index("example.org/absent"), None);
    assert_eq!(after.package_index("example.org/absent"), None);
}

#[test]
fn test_failed_resolution_leaves_file_untouched() {
    let project = TestProject::new();
    project.vendor_repo_with_tags(WIDGET, &["1.0.0"]);
    let content = format!("{WIDGET} >=4.0\n");
    project.write_manifest(&content);

    let err = update_all(&project, CommentPolicy::Preserve).unwrap_err();

    assert!(matches!(err, Error::NoMatchingVersion { .. }), "{err:?}");
    assert_eq!(project.read_manifest(), content);
}

#[test]
fn test_annotated_tags_pin_to_commits() {
    let project = TestProject::new();
    let checkout = project.checkout_path(WIDGET);
    let repo = git::init_repo(&checkout);
    let commit = git::commit_file(&repo, "VERSION", "1.0.0\n", "Release");
    git::annotated_tag(&repo, "v1.0.0", commit);
    project.write_manifest(&format!("{WIDGET} ~>1.0\n"));

    update_all(&project, CommentPolicy::Preserve).unwrap();

    assert_eq!(project.read_manifest(), format!("{WIDGET} {commit}\n"));
}
