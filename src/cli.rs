//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve `POST /productionplan` over HTTP.
    #[cfg(feature = "api")]
    Serve(ServeArgs),

    /// Plan a single request file and print the dispatch.
    Plan(PlanArgs),
}

#[derive(Debug, Parser)]
pub struct ServeArgs {
    /// Service configuration (TOML).
    #[clap(long, env = "POWERPLANT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Listen address, overrides `server.bind`.
    #[clap(long, env = "POWERPLANT_BIND")]
    pub bind: Option<String>,
}

#[derive(Debug, Parser)]
pub struct PlanArgs {
    /// Request body to plan (JSON).
    #[clap(long)]
    pub request: PathBuf,

    /// Service configuration (TOML).
    #[clap(long, env = "POWERPLANT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also write the dispatch to this CSV file.
    #[clap(long)]
    pub out: Option<PathBuf>,

    #[clap(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// How `plan` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per plant followed by a summary.
    Table,
    /// The HTTP response body.
    Json,
}
