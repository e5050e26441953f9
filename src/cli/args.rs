use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "etasim",
    version,
    about = "Transfer time estimator with a live progress simulation",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Declared payload size (e.g. 500M, 2G, 10T, 1P; bare numbers are GB)
    pub size: Option<String>,

    /// Transfer rate (e.g. 512M, 2G; bare numbers use a unit scaled to the size)
    pub speed: Option<String>,

    /// Print the estimate and exit without the live progress loop
    #[arg(long)]
    pub summary_only: bool,

    /// Increase verbosity (-v for verbose, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode: suppress the banner and plan header
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `etasim completions` command.
#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
