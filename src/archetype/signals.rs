//! Ratio tiers, rank bands and the composite flags the rules read

use super::ratios::ZoneRatios;
use crate::config::{BandFractions, RatioThreshold, ShotMapConfig};
use crate::models::TotalStat;
use serde::Serialize;

/// How far a ratio sits above the league calibration points
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Tier {
    Below,
    Mid,
    High,
}

impl Tier {
    /// Value strictly above a cut point reaches that tier
    pub fn of(value: f64, threshold: &RatioThreshold) -> Self {
        if value > threshold.high {
            Tier::High
        } else if value > threshold.mid {
            Tier::Mid
        } else {
            Tier::Below
        }
    }

    /// Mid tier or better
    pub fn is_mid(&self) -> bool {
        *self >= Tier::Mid
    }

    pub fn is_high(&self) -> bool {
        *self == Tier::High
    }
}

/// Position of a rank relative to the pool size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RankBands {
    pub top_10: bool,
    pub top_25: bool,
    pub bottom_25: bool,
    pub bottom_10: bool,
}

impl RankBands {
    /// Bands for a 1-based rank in a pool. Rank 0 means unranked and falls
    /// in no band.
    pub fn from_rank(rank: u32, pool_size: usize, fractions: &BandFractions) -> Self {
        if rank == 0 || pool_size == 0 {
            return Self::default();
        }

        let n = pool_size as f64;
        let rank = f64::from(rank);
        Self {
            top_10: rank <= (n * fractions.top_10).ceil(),
            top_25: rank <= (n * fractions.top_25).ceil(),
            bottom_25: rank >= (n * fractions.bottom_25).floor(),
            bottom_10: rank >= (n * fractions.bottom_10).floor(),
        }
    }
}

/// Everything the archetype rules are allowed to look at
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShotSignals {
    pub high_danger: Tier,
    pub crease: Tier,
    pub low_slot: Tier,
    pub point: Tier,
    pub circle: Tier,
    pub net_front: Tier,
    pub corner: Tier,
    pub defense_driven: bool,
    pub forward_driven: bool,
    pub sog: RankBands,
    pub shooting: RankBands,
    pub goals: RankBands,
}

impl ShotSignals {
    pub fn evaluate(
        ratios: &ZoneRatios,
        totals_all: &TotalStat,
        pool_size: usize,
        config: &ShotMapConfig,
    ) -> Self {
        let t = &config.thresholds;
        let bands = |rank| RankBands::from_rank(rank, pool_size, &config.bands);

        Self {
            high_danger: Tier::of(ratios.high_danger, &t.high_danger),
            crease: Tier::of(ratios.crease_rate, &t.crease),
            low_slot: Tier::of(ratios.low_slot_rate, &t.low_slot),
            point: Tier::of(ratios.point_share, &t.point),
            circle: Tier::of(ratios.circle_share, &t.circle),
            net_front: Tier::of(ratios.net_front, &t.net_front),
            corner: Tier::of(ratios.corner_share, &t.corner),
            defense_driven: ratios.def_ratio.is_some_and(|r| r > t.defense_driven),
            forward_driven: ratios.def_ratio.is_some_and(|r| r < t.forward_driven),
            sog: bands(totals_all.sog_rank),
            shooting: bands(totals_all.shooting_pctg_rank),
            goals: bands(totals_all.goals_rank),
        }
    }

    /// Top-10% volume and top-10% finishing
    pub fn elite(&self) -> bool {
        self.sog.top_10 && self.shooting.top_10
    }

    pub fn high_volume(&self) -> bool {
        self.sog.top_25
    }

    pub fn low_volume(&self) -> bool {
        self.sog.bottom_25
    }

    pub fn clinical(&self) -> bool {
        self.shooting.top_25
    }

    pub fn very_clinical(&self) -> bool {
        self.shooting.top_10
    }

    pub fn wild(&self) -> bool {
        self.shooting.bottom_25
    }

    pub fn very_wild(&self) -> bool {
        self.shooting.bottom_10
    }

    pub fn prolific(&self) -> bool {
        self.goals.top_25
    }

    pub fn starved(&self) -> bool {
        self.goals.bottom_25
    }
}
