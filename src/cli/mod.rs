pub mod args;
pub mod prompt;
pub mod terminal;

use std::io;

use clap::CommandFactory;

use crate::config::types::SimPolicy;
use crate::error::EtaError;
use crate::sim::engine::{CancelToken, ProgressEngine, SessionOutcome};
use crate::sim::plan::TransferPlan;
use crate::units::duration::format_duration;
use crate::units::{self, format_size, format_speed};

use self::args::{Cli, Commands};
use self::terminal::TerminalCapability;

/// Execute the parsed command line.
///
/// Gathers the two inputs (positionals first, interactive prompts for
/// whatever is missing), validates them, prints the plan header, and
/// either stops there (`--summary-only`) or drives the render loop to a
/// completion or cancellation summary. Cancellation is a normal exit.
pub fn run(cli: Cli) -> Result<(), EtaError> {
    if let Some(Commands::Completions(completions)) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(completions.shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let _capability = TerminalCapability::init();

    let interactive = cli.size.is_none() || cli.speed.is_none();
    if interactive && !cli.quiet {
        print_banner();
    }

    let size_input = match cli.size {
        Some(s) => s,
        None => prompt::ask_size()?,
    };
    let size_mb = units::parse_size(&size_input)?;

    let default_unit = units::default_speed_unit(size_mb);
    let speed_input = match cli.speed {
        Some(s) => s,
        None => prompt::ask_speed(default_unit)?,
    };
    let speed_mbps = units::parse_speed(&speed_input, default_unit)?;

    tracing::debug!(size_mb, speed_mbps, "inputs parsed");

    let plan = TransferPlan::new(size_mb, speed_mbps, SimPolicy::default());

    if !cli.quiet {
        print_plan_header(&plan);
    }

    if cli.summary_only {
        return Ok(());
    }

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .map_err(|e| EtaError::Terminal(e.to_string()))?;

    let stdout = io::stdout();
    let engine = ProgressEngine::new(plan, cancel, stdout.lock());
    match engine.run()? {
        SessionOutcome::Completed {
            total_seconds,
            finished,
        } => {
            tracing::info!(total_seconds, finished = %finished, "simulation finished");
        }
        SessionOutcome::Cancelled {
            elapsed_seconds,
            fraction,
        } => {
            tracing::info!(elapsed_seconds, fraction, "simulation cancelled by user");
        }
    }
    Ok(())
}

fn print_banner() {
    println!("etasim - transfer time estimator");
    println!("--------------------------------");
}

/// Plan header printed once before the loop (and the whole output of
/// `--summary-only`).
fn print_plan_header(plan: &TransferPlan) {
    println!();
    println!("Size:      {}", format_size(plan.size_mb));
    println!("Speed:     {}", format_speed(plan.speed_mbps));
    println!("Duration:  {}", format_duration(plan.total_seconds));
    println!(
        "Finish at: {}",
        plan.projected_finish().format("%Y-%m-%d %H:%M:%S")
    );
    println!();
}
