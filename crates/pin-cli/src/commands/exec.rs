//! The `exec` command

use std::process::Command;

use crate::context::ProjectContext;
use crate::error::{CliError, Result};

/// Run `command` from the project root with the dependency environment
/// applied. Returns the child's exit code.
pub fn run_exec(ctx: &ProjectContext, command: &[String]) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| CliError::user("no command given"))?;

    let mut cmd = Command::new(program);
    cmd.args(args).current_dir(ctx.root());
    ctx.vendor().apply(&mut cmd)?;

    tracing::debug!(program, ?args, "running");
    let status = cmd
        .status()
        .map_err(|e| CliError::user(format!("failed to run '{program}': {e}")))?;

    // Killed by a signal: no code to forward.
    Ok(status.code().unwrap_or(1))
}
