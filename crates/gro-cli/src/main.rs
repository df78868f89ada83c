mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("grosub v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let result = commands::replace::run(&cli);
    match &result {
        Ok(()) => info!("Substitution completed successfully."),
        Err(e) => error!("Substitution failed: {}", e),
    }
    result
}
