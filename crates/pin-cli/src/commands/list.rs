//! The `list` command

use pin_manifest::Package;

use crate::context::ProjectContext;
use crate::error::Result;

/// Print the manifest's packages, one per line or as a JSON array.
pub fn run_list(ctx: &ProjectContext, json: bool) -> Result<()> {
    let manifest = ctx.load_manifest()?;
    let packages: Vec<&Package> = manifest.packages().collect();
    let output = format_packages(&packages, json)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn format_packages(packages: &[&Package], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(packages)?);
    }

    let width = packages.iter().map(|p| p.repo.len()).max().unwrap_or(0);
    let lines: Vec<String> = packages
        .iter()
        .map(|p| format!("{:<width$}  {}", p.repo, p.version).trim_end().to_string())
        .collect();
    Ok(lines.join("\n"))
}
