mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::Cli;
use crate::error::Result;
use clap::{CommandFactory, Parser};
use tracing::{debug, error, info};

fn main() {
    let cli = Cli::parse();

    if cli.input.is_none() {
        eprintln!("{}", Cli::command().render_help());
        return;
    }

    if let Err(e) = run_app(cli) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app(cli: Cli) -> Result<()> {
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("rFUpred v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let app_config = config::builder::build_config(&cli)?;
    debug!("Resolved configuration: {:?}", &app_config);

    let result = commands::predict::run(&app_config);
    match &result {
        Ok(()) => info!("Prediction finished."),
        Err(e) => error!("Prediction failed: {}", e),
    }
    result
}
