//! Shotmap Library
//!
//! Team shot-location analysis for NHL teams, working from the dataset
//! document the fetch job writes (per-zone shots, goals and shooting
//! percentage with league ranks, skater leaders and daily rank history).
//!
//! This library provides tools for:
//! - Loading the dataset and looking up records by team, season and game type
//! - Re-ranking every metric over a sub-pool of teams, such as the playoff field
//! - Deriving zone ratios and classifying a team into a shot-profile archetype
//! - Building per-team reports and league-wide archetype tables
//! - Recording bounded daily rank snapshots for trend charts

pub mod archetype;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod history;
pub mod models;
pub mod query;
pub mod ranking;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod render;
}

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export commonly used types
pub use archetype::{Archetype, ArchetypeFamily, classify};
pub use config::ShotMapConfig;
pub use error::{Result, ShotMapError};
pub use models::{Dataset, GameType, Position, SeasonKey, Team, TeamShotRecord};
pub use query::{TeamReport, get_archetype, get_record};
pub use ranking::build_pool_ranks;
