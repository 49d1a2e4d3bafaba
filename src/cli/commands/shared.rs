//! Shared components for CLI commands
//!
//! Logging setup, configuration and dataset loading, and JSON output used by
//! every subcommand.

use crate::cli::args::Args;
use crate::config::ShotMapConfig;
use crate::constants::SEASONS;
use crate::dataset::SnapshotStore;
use crate::models::{Dataset, SeasonKey};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Resolved inputs every command works from
#[derive(Debug)]
pub struct CommandContext {
    pub config: ShotMapConfig,
    pub dataset_path: PathBuf,
    pub store: SnapshotStore,
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shotmap={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialise logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialise logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Configuration from `--config` or defaults
pub fn load_config(args: &Args) -> Result<ShotMapConfig> {
    match &args.config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            ShotMapConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))
        }
        None => {
            debug!("No config file given, using defaults");
            Ok(ShotMapConfig::default())
        }
    }
}

/// Load config and dataset into a command context
pub async fn load_context(args: &Args) -> Result<CommandContext> {
    let config = load_config(args)?;
    let dataset_path = args.dataset_path();

    info!("Loading dataset from {}", dataset_path.display());
    let dataset = Dataset::load(&dataset_path)
        .await
        .with_context(|| format!("Failed to load dataset from {}", dataset_path.display()))?;

    Ok(CommandContext {
        config,
        dataset_path,
        store: SnapshotStore::new(dataset),
    })
}

/// Whether the fetch job covers `season`; warns when it does not
pub fn check_season(season: SeasonKey) -> bool {
    let known = SEASONS.contains(&season.to_string().as_str());
    if !known {
        warn!(
            "Season {} is not one the fetch job collects ({})",
            season,
            SEASONS.join(", ")
        );
    }
    known
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialise output")?;
    println!("{}", json);
    Ok(())
}
