//! Tests for the rank engine
//!
//! Covers single-selector re-ranking and full pool re-ranking of records.


// Test helper functions and fixtures
use crate::constants::zones;
use crate::fixtures::{self, TEAM_IDS, season};
use crate::models::{Dataset, GameType, PoolMember, Position, TeamId, TeamShotRecord};
use crate::ranking::{PoolRanks, build_pool_ranks, build_pool_ranks_with, rank_pool, rerank};
use std::collections::BTreeMap;

/// Records whose all-zones sog equals the given values, keyed by team id
pub fn create_sog_pool(values: &[(TeamId, u32)]) -> BTreeMap<TeamId, TeamShotRecord> {
    values
        .iter()
        .map(|&(id, sog)| (id, fixtures::record(&[(zones::LOW_SLOT, sog, sog / 10)], 0.7)))
        .collect()
}

/// Pool members over an ordered slice of (team id, record)
pub fn create_members(records: &[(TeamId, TeamShotRecord)]) -> Vec<PoolMember<'_>> {
    records
        .iter()
        .map(|(team_id, record)| PoolMember {
            team_id: *team_id,
            record,
        })
        .collect()
}

/// Sog selector over the all-zones, all-positions totals row
pub fn all_sog(record: &TeamShotRecord) -> Option<f64> {
    record.overall(Position::All).map(|row| f64::from(row.sog))
}

/// The full league fixture
pub fn create_league() -> Dataset {
    fixtures::league_dataset()
}
