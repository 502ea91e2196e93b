//! pin command-line interface
//!
//! Records dependencies in a `Pinfile` and pins their versions against the
//! checkouts under the project's dependency root.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::ProjectContext;
use error::Result;

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            1
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let root = match cli.directory {
        Some(dir) => dir,
        None => pin_resolve::vendor::project_root()?,
    };
    tracing::debug!(root = %root.display(), "project root");
    let ctx = ProjectContext::load(&root)?;

    execute_command(&ctx, cli.command)
}

fn execute_command(ctx: &ProjectContext, cmd: Commands) -> Result<i32> {
    match cmd {
        Commands::Add { repo, version } => commands::run_add(ctx, &repo, version.as_deref())?,
        Commands::List { json } => commands::run_list(ctx, json)?,
        Commands::Resolve { repo, constraint } => commands::run_resolve(ctx, &repo, &constraint)?,
        Commands::Update { repos } => commands::run_update(ctx, &repos)?,
        Commands::Env => commands::run_env(ctx)?,
        Commands::Exec { command } => return commands::run_exec(ctx, &command),
    }
    Ok(0)
}
