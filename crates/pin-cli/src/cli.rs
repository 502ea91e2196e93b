//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pin - pin project dependencies to exact revisions
#[derive(Parser, Debug)]
#[command(name = "pin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run as if pin was started in DIR
    #[arg(short = 'C', long = "directory", value_name = "DIR", global = true)]
    pub directory: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add a package to the Pinfile, or change its version
    ///
    /// Creates the Pinfile when it does not exist yet.
    ///
    /// Examples:
    ///   pin add github.com/acme/widget
    ///   pin add github.com/acme/widget '>=1.2,<2'
    Add {
        /// Repository identifier
        repo: String,

        /// Version constraint or revision
        version: Option<String>,
    },

    /// List the packages in the Pinfile
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the revision a constraint resolves to
    Resolve {
        /// Repository identifier
        repo: String,

        /// Version constraint or revision
        constraint: String,
    },

    /// Resolve package versions and write the revisions back
    Update {
        /// Only update these packages (default: all)
        repos: Vec<String>,
    },

    /// Print the dependency environment variables
    Env,

    /// Run a command inside the dependency environment
    Exec {
        /// Command and its arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}
