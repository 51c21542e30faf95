use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "FFKit CLI - Inspect and validate force-field term tables."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a term table, run the cross-term consistency checks, and report a summary.
    Check(CheckArgs),
    /// List the terms of a table, optionally evaluating one term's potential.
    Dump(DumpArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the term table in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Path to the term table in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Canonical name of a single term to evaluate instead of listing.
    #[arg(long, value_name = "NAME", requires = "at")]
    pub eval: Option<String>,

    /// Observed value to evaluate the term at (distance, degrees, or radians
    /// depending on the term).
    #[arg(long, value_name = "FLOAT")]
    pub at: Option<f64>,
}
