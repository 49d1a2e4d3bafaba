//! Command implementations for the shotmap CLI
//!
//! Each subcommand lives in its own module; `run` sets up logging, loads the
//! configuration and dataset once, then dispatches.

pub mod league;
pub mod report;
pub mod shared;
pub mod snapshot;

use crate::cli::args::{Args, Commands};
use anyhow::{Result, bail};
use tracing::debug;

/// Main command runner for the shotmap CLI
pub async fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args)?;
    debug!("Arguments: {:?}", args);

    let Some(command) = &args.command else {
        bail!("No command given");
    };
    let context = shared::load_context(&args).await?;

    match command {
        Commands::Report(report_args) => report::run_report(report_args, &context),
        Commands::League(league_args) => league::run_league(league_args, &context),
        Commands::Snapshot(snapshot_args) => snapshot::run_snapshot(snapshot_args, &context).await,
    }
}
