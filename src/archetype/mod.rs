//! Archetype Classifier.
//!
//! Turns one team's zone distribution and totals ranks into a single
//! offensive-identity label. Zone shares become tiers against calibrated
//! thresholds, ranks become bands scaled to the pool size, and an ordered
//! rule table picks the first matching archetype.

pub mod ratios;
pub mod rules;
pub mod signals;

#[cfg(test)]
mod tests;

pub use ratios::ZoneRatios;
pub use rules::{ArchetypeRule, BALANCED, RULES};
pub use signals::{RankBands, ShotSignals, Tier};

use crate::config::ShotMapConfig;
use crate::models::{TotalStat, ZoneStat};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Rule group an archetype belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArchetypeFamily {
    Elite,
    NetFront,
    LowSlot,
    HighDanger,
    Point,
    Circle,
    Corner,
    ForwardDefense,
    Volume,
    LowVolume,
    Efficiency,
    Balanced,
}

impl ArchetypeFamily {
    pub fn name(&self) -> &'static str {
        match self {
            ArchetypeFamily::Elite => "elite",
            ArchetypeFamily::NetFront => "net front",
            ArchetypeFamily::LowSlot => "low slot",
            ArchetypeFamily::HighDanger => "high danger",
            ArchetypeFamily::Point => "point",
            ArchetypeFamily::Circle => "circle",
            ArchetypeFamily::Corner => "corner",
            ArchetypeFamily::ForwardDefense => "forward/defense",
            ArchetypeFamily::Volume => "volume",
            ArchetypeFamily::LowVolume => "low volume",
            ArchetypeFamily::Efficiency => "efficiency",
            ArchetypeFamily::Balanced => "balanced",
        }
    }
}

/// A team's offensive identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Archetype {
    pub family: ArchetypeFamily,
    pub label: &'static str,
    pub tagline: &'static str,
    pub explanation: &'static str,
    /// Display glyph only
    pub icon: &'static str,
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} · {}", self.icon, self.label, self.tagline)
    }
}

/// Classify with the default thresholds and band fractions.
///
/// Returns `None` when there are no zone rows, no all-positions totals row
/// or an empty pool.
pub fn classify(
    zone_rows: &[ZoneStat],
    totals_all: Option<&TotalStat>,
    totals_forwards: Option<&TotalStat>,
    totals_defense: Option<&TotalStat>,
    pool_size: usize,
) -> Option<Archetype> {
    classify_with(
        &ShotMapConfig::default(),
        zone_rows,
        totals_all,
        totals_forwards,
        totals_defense,
        pool_size,
    )
}

/// Classify using the thresholds and band fractions of `config`
pub fn classify_with(
    config: &ShotMapConfig,
    zone_rows: &[ZoneStat],
    totals_all: Option<&TotalStat>,
    totals_forwards: Option<&TotalStat>,
    totals_defense: Option<&TotalStat>,
    pool_size: usize,
) -> Option<Archetype> {
    let totals_all = totals_all?;
    if zone_rows.is_empty() || pool_size == 0 {
        return None;
    }

    let ratios = ZoneRatios::compute(zone_rows, totals_all, totals_forwards, totals_defense);
    let signals = ShotSignals::evaluate(&ratios, totals_all, pool_size, config);
    let archetype = *rules::first_match(&signals);

    debug!(
        "Classified as '{}' ({}) from {:?}",
        archetype.label,
        archetype.family.name(),
        signals
    );
    Some(archetype)
}
