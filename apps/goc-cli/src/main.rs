//! # goc-stage
//!
//! Command-line front end for goc workspace staging:
//! - `goc-stage stage` — mirror the project into its temp workspace
//! - `goc-stage install-dir` — print where built binaries would be installed
//! - `goc-stage name` — print the temp workspace name for a directory

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Stage Go projects into deterministic temporary build workspaces.
#[derive(Parser)]
#[command(name = "goc-stage", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy the project into its temp workspace and report the result.
    Stage {
        /// Build flags forwarded to `go list`.
        #[arg(long, default_value = "")]
        buildflags: String,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the directory built binaries are installed into.
    InstallDir {
        /// Build flags forwarded to `go list`.
        #[arg(long, default_value = "")]
        buildflags: String,
    },
    /// Print the temp workspace name for a directory.
    Name {
        /// Directory to name (defaults to the current directory).
        path: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("goc_workspace=info".parse()?)
                .add_directive("goc_stage=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Stage { buildflags, json } => commands::stage::execute(buildflags, *json),
        Commands::InstallDir { buildflags } => commands::install_dir::execute(buildflags),
        Commands::Name { path } => commands::name::execute(path.as_deref()),
    }
}
