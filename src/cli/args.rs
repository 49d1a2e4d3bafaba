//! Command-line argument definitions for the shot map
//!
//! Defines the CLI interface using the clap derive API.

use crate::constants::DEFAULT_SEASON;
use crate::dataset::default_dataset_path;
use crate::error::{Result, ShotMapError};
use crate::models::{GameType, SeasonKey};
use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the NHL shot map
///
/// Reads the dataset produced by the fetch job and reports where each team
/// shoots from, how it ranks, and what kind of attack it runs.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "shotmap",
    version,
    about = "NHL team shot-location reports: zone ranks, pool re-ranking and attack archetypes",
    long_about = "Reads the NHL shot-location dataset written by the fetch job and reports, per team, \
                  shots, goals and shooting percentage by zone with league or playoff-pool ranks, \
                  comparisons against the pool average, and a one-line attack archetype."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the dataset JSON file
    ///
    /// Defaults to the per-user data directory if a dataset is installed
    /// there, otherwise public/nhl-data.json.
    #[arg(
        long = "dataset",
        value_name = "FILE",
        global = true,
        help = "Path to the dataset JSON file"
    )]
    pub dataset: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Shot report for one team
    Report(ReportArgs),
    /// Archetype of every team with data for a selection
    League(LeagueArgs),
    /// Build today's rank snapshot for the history
    Snapshot(SnapshotArgs),
}

/// Season and game type selection shared by the query commands
#[derive(Debug, Clone, ClapArgs)]
pub struct SelectionArgs {
    /// Season as two consecutive years, e.g. 20252026
    #[arg(
        short = 's',
        long = "season",
        value_name = "SEASON",
        default_value = DEFAULT_SEASON,
        help = "Season key, e.g. 20252026"
    )]
    pub season: SeasonKey,

    /// Regular season or playoffs
    #[arg(
        short = 'g',
        long = "game-type",
        value_name = "TYPE",
        default_value = "regular",
        help = "Game type: regular (2) or playoffs (3)"
    )]
    pub game_type: GameType,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Team id, abbreviation or name
    #[arg(
        short = 't',
        long = "team",
        value_name = "TEAM",
        help = "Team id, abbreviation or name (e.g. 9, OTT, Senators)"
    )]
    pub team: String,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for the league command
#[derive(Debug, Clone, Parser)]
pub struct LeagueArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for the snapshot command
#[derive(Debug, Clone, Parser)]
pub struct SnapshotArgs {
    /// Season to snapshot (regular season only)
    #[arg(
        short = 's',
        long = "season",
        value_name = "SEASON",
        default_value = DEFAULT_SEASON,
        help = "Season key, e.g. 20252026"
    )]
    pub season: SeasonKey,

    /// Snapshot date; defaults to today (UTC)
    #[arg(
        long = "date",
        value_name = "YYYY-MM-DD",
        value_parser = parse_date,
        help = "Snapshot date (YYYY-MM-DD), defaults to today"
    )]
    pub date: Option<NaiveDate>,

    /// Append the snapshot to the dataset's history and save it
    #[arg(long = "write", help = "Append to the dataset history and write the file back")]
    pub write: bool,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the snapshot"
    )]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable coloured output
    Human,
    /// JSON for scripting
    Json,
}

impl Args {
    /// Log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Explicit dataset path or the default location
    pub fn dataset_path(&self) -> PathBuf {
        self.dataset.clone().unwrap_or_else(default_dataset_path)
    }
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|source| {
        ShotMapError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}
