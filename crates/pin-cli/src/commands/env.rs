//! The `env` command

use pin_resolve::vendor::PATH_VAR;

use crate::context::ProjectContext;
use crate::error::Result;

/// Print the variables `exec` sets, as `NAME=value` lines.
pub fn run_env(ctx: &ProjectContext) -> Result<()> {
    let current = std::env::var_os(PATH_VAR);
    for (name, value) in ctx.vendor().vars(current.as_deref())? {
        println!("{name}={}", value.to_string_lossy());
    }
    Ok(())
}
