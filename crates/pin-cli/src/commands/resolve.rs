//! The `resolve` command

use crate::context::ProjectContext;
use crate::error::Result;

/// Print the revision `constraint` resolves to for `repo`.
pub fn run_resolve(ctx: &ProjectContext, repo: &str, constraint: &str) -> Result<()> {
    let resolution = ctx.resolver().resolve_with_source(repo, constraint)?;
    tracing::debug!(source = ?resolution.source, "resolved");
    if resolution.is_pass_through() {
        tracing::warn!(repo, "package is not a local git checkout; constraint returned unchanged");
    }
    println!("{}", resolution.revision);
    Ok(())
}
