mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::debug;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);
    debug!("Full CLI arguments parsed: {:?}", &cli);

    match cli.command {
        Commands::Check(args) => commands::check::run(&args),
        Commands::Dump(args) => commands::dump::run(&args),
    }
}
