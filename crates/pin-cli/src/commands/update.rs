//! The `update` command

use colored::Colorize;
use pin_manifest::{Change, Package};

use crate::commands::add::display_version;
use crate::context::ProjectContext;
use crate::error::{CliError, Result};

/// A package whose manifest version was replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Updated {
    pub repo: String,
    pub previous: String,
    pub revision: String,
}

/// Resolve package versions and write the revisions back to the manifest.
///
/// With no `repos`, every package with a version is resolved. Nothing is
/// written unless at least one line changes, and nothing is written if any
/// resolution fails.
pub fn run_update(ctx: &ProjectContext, repos: &[String]) -> Result<()> {
    let updated = update_manifest(ctx, repos)?;

    if updated.is_empty() {
        println!("{} All packages are up to date.", "OK".green().bold());
        return Ok(());
    }
    for u in &updated {
        println!(
            "{} {} {} -> {}",
            "updated".green().bold(),
            u.repo.cyan(),
            display_version(&u.previous).dimmed(),
            u.revision
        );
    }
    Ok(())
}

fn update_manifest(ctx: &ProjectContext, repos: &[String]) -> Result<Vec<Updated>> {
    let mut manifest = ctx.load_manifest()?;

    if let Some(missing) = repos.iter().find(|r| manifest.get(r).is_none()) {
        return Err(CliError::user(format!(
            "package '{missing}' is not in {}",
            manifest.path()
        )));
    }

    let targets: Vec<Package> = manifest
        .packages()
        .filter(|p| repos.is_empty() || repos.contains(&p.repo))
        .cloned()
        .collect();

    let resolver = ctx.resolver();
    let mut updated = Vec::new();
    for package in targets {
        if !package.has_version() {
            tracing::debug!(repo = %package.repo, "no version to resolve, skipping");
            continue;
        }

        let resolution = resolver.resolve_with_source(&package.repo, &package.version)?;
        if resolution.is_pass_through() {
            tracing::warn!(
                repo = %package.repo,
                "package is not a local git checkout; leaving '{}' as is",
                package.version
            );
            continue;
        }

        let pinned = Package::new(package.repo.clone(), resolution.revision.clone());
        if let Change::Updated { previous } = manifest.set_package(pinned) {
            updated.push(Updated {
                repo: package.repo,
                previous,
                revision: resolution.revision,
            });
        }
    }

    if !updated.is_empty() {
        manifest.save()?;
    }
    Ok(updated)
}
