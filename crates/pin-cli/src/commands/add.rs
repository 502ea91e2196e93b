//! The `add` command

use colored::Colorize;
use pin_manifest::Change;

use crate::context::ProjectContext;
use crate::error::Result;

/// Add `repo` to the manifest, or point its line at `version`.
pub fn run_add(ctx: &ProjectContext, repo: &str, version: Option<&str>) -> Result<()> {
    let mut manifest = ctx.load_or_new_manifest()?;
    let spec = match version {
        Some(version) => format!("{repo} {version}"),
        None => repo.to_string(),
    };

    match manifest.add_package(&spec)? {
        Change::Added => {
            manifest.save()?;
            println!("{} Added {}", "OK".green().bold(), spec.cyan());
        }
        Change::Updated { previous } => {
            manifest.save()?;
            println!(
                "{} Updated {} {} -> {}",
                "OK".green().bold(),
                repo.cyan(),
                display_version(&previous).dimmed(),
                display_version(version.unwrap_or_default())
            );
        }
        Change::Unchanged => {
            println!("{} {} is already in {}", "OK".green().bold(), spec.cyan(), manifest.path());
        }
    }
    Ok(())
}

pub(crate) fn display_version(version: &str) -> &str {
    if version.is_empty() { "(none)" } else { version }
}
