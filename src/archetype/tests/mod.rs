//! Tests for the archetype classifier
//!
//! Ratio extraction, tier and band mapping, and the ordered rule cascade.

pub mod ratio_tests;

// Test helper functions and fixtures
use crate::archetype::{
    Archetype, ArchetypeFamily, BALANCED, RULES, RankBands, ShotSignals, Tier, ZoneRatios,
    classify, classify_with,
};
use crate::config::{BandFractions, RatioThreshold, ShotMapConfig, TierThresholds};
use crate::constants::zones;
use crate::fixtures::{ranked_totals, totals, zone};
use crate::models::{Position, TotalStat, ZoneStat};

/// Signals with every tier below mid and no rank band set
pub fn create_quiet_signals() -> ShotSignals {
    ShotSignals {
        high_danger: Tier::Below,
        crease: Tier::Below,
        low_slot: Tier::Below,
        point: Tier::Below,
        circle: Tier::Below,
        net_front: Tier::Below,
        corner: Tier::Below,
        defense_driven: false,
        forward_driven: false,
        sog: RankBands::default(),
        shooting: RankBands::default(),
        goals: RankBands::default(),
    }
}

/// Bands for a rank in a 32-team pool
pub fn bands_32(rank: u32) -> RankBands {
    RankBands::from_rank(rank, 32, &BandFractions::default())
}

/// Zone rows from (area, sog) pairs with one goal each where shots exist
pub fn create_zones(rows: &[(&str, u32)]) -> Vec<ZoneStat> {
    rows.iter()
        .map(|&(area, sog)| zone(area, sog, sog.min(1)))
        .collect()
}

/// Label of the first rule matching, or the balanced fallback
pub fn label_for(signals: &ShotSignals) -> &'static str {
    crate::archetype::rules::first_match(signals).label
}
