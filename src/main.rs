use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod error;
mod sim;
mod units;

use cli::args::Cli;
use config::types::Verbosity;
use error::EtaError;

fn main() {
    let cli = Cli::parse();

    // Convert CLI flags to verbosity level
    let verbosity = Verbosity::from((cli.quiet, cli.verbose));

    // Set up tracing with verbosity-based filter
    // RUST_LOG env var overrides CLI flags
    let filter = verbosity.as_tracing_filter();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr) // Keep stdout clean for the progress sink
        .init();

    tracing::debug!("Verbosity level: {:?}", verbosity);

    if let Err(err) = cli::run(cli) {
        display_error(&err);
        std::process::exit(1);
    }
}

/// Display an EtaError with optional suggestion hint to stderr.
fn display_error(err: &EtaError) {
    eprintln!("error: {}", err);
    if let Some(suggestion) = err.suggestion() {
        eprintln!("  hint: {}", suggestion);
    }
}
