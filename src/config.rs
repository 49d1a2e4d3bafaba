//! Configuration management and validation.
//!
//! Provides the tunable parameters of ranking and classification:
//! league size, rank band fractions, ratio tier thresholds and the
//! depth of the rank history.

use crate::constants::{
    BOTTOM_10_FRACTION, BOTTOM_25_FRACTION, DEFAULT_LEAGUE_SIZE, DEFAULT_MAX_HISTORY_DAYS,
    DEFAULT_VS_AVERAGE_MARGIN_PCT, TOP_10_FRACTION, TOP_25_FRACTION, thresholds,
};
use crate::error::{Result, ShotMapError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Mid/high cut points for one zone ratio (value > cut point => tier set)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioThreshold {
    pub mid: f64,
    pub high: f64,
}

impl RatioThreshold {
    pub const fn new(mid: f64, high: f64) -> Self {
        Self { mid, high }
    }
}

/// Threshold table for every derived zone ratio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub high_danger: RatioThreshold,
    pub crease: RatioThreshold,
    pub low_slot: RatioThreshold,
    pub point: RatioThreshold,
    pub circle: RatioThreshold,
    pub net_front: RatioThreshold,
    pub corner: RatioThreshold,
    /// Defense share of F+D shots above which the attack counts as D-driven
    pub defense_driven: f64,
    /// Defense share of F+D shots below which the attack counts as F-driven
    pub forward_driven: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        use thresholds::*;
        Self {
            high_danger: RatioThreshold::new(HIGH_DANGER_MID, HIGH_DANGER_HIGH),
            crease: RatioThreshold::new(CREASE_MID, CREASE_HIGH),
            low_slot: RatioThreshold::new(LOW_SLOT_MID, LOW_SLOT_HIGH),
            point: RatioThreshold::new(POINT_MID, POINT_HIGH),
            circle: RatioThreshold::new(CIRCLE_MID, CIRCLE_HIGH),
            net_front: RatioThreshold::new(NET_FRONT_MID, NET_FRONT_HIGH),
            corner: RatioThreshold::new(CORNER_MID, CORNER_HIGH),
            defense_driven: DEFENSE_DRIVEN,
            forward_driven: FORWARD_DRIVEN,
        }
    }
}

impl TierThresholds {
    fn named(&self) -> [(&'static str, RatioThreshold); 7] {
        [
            ("high_danger", self.high_danger),
            ("crease", self.crease),
            ("low_slot", self.low_slot),
            ("point", self.point),
            ("circle", self.circle),
            ("net_front", self.net_front),
            ("corner", self.corner),
        ]
    }
}

/// Fractions of the pool size marking the rank bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandFractions {
    pub top_10: f64,
    pub top_25: f64,
    pub bottom_25: f64,
    pub bottom_10: f64,
}

impl Default for BandFractions {
    fn default() -> Self {
        Self {
            top_10: TOP_10_FRACTION,
            top_25: TOP_25_FRACTION,
            bottom_25: BOTTOM_25_FRACTION,
            bottom_10: BOTTOM_10_FRACTION,
        }
    }
}

/// Global configuration for the shot map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotMapConfig {
    /// Pool size of the pre-ranked regular-season data
    pub league_size: usize,

    /// Zone ratio tier thresholds
    pub thresholds: TierThresholds,

    /// Rank band fractions
    pub bands: BandFractions,

    /// Rank snapshots kept in the dataset history
    pub max_history_days: usize,

    /// Percentage band around the pool average reported as "even"
    pub vs_average_margin_pct: f64,
}

impl Default for ShotMapConfig {
    fn default() -> Self {
        Self {
            league_size: DEFAULT_LEAGUE_SIZE,
            thresholds: TierThresholds::default(),
            bands: BandFractions::default(),
            max_history_days: DEFAULT_MAX_HISTORY_DAYS,
            vs_average_margin_pct: DEFAULT_VS_AVERAGE_MARGIN_PCT,
        }
    }
}

impl ShotMapConfig {
    /// Load configuration from a JSON file; missing fields take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ShotMapConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Create configuration with a custom league size
    pub fn with_league_size(mut self, league_size: usize) -> Self {
        self.league_size = league_size;
        self
    }

    /// Create configuration with custom tier thresholds
    pub fn with_thresholds(mut self, thresholds: TierThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Create configuration with custom rank band fractions
    pub fn with_bands(mut self, bands: BandFractions) -> Self {
        self.bands = bands;
        self
    }

    /// Create configuration with a custom history depth
    pub fn with_max_history_days(mut self, days: usize) -> Self {
        self.max_history_days = days;
        self
    }

    /// Check the configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.league_size == 0 {
            return Err(ShotMapError::configuration(
                "League size must be greater than 0",
            ));
        }

        let b = &self.bands;
        let ordered = 0.0 < b.top_10
            && b.top_10 <= b.top_25
            && b.top_25 < b.bottom_25
            && b.bottom_25 <= b.bottom_10
            && b.bottom_10 <= 1.0;
        if !ordered {
            return Err(ShotMapError::configuration(format!(
                "Rank band fractions must satisfy 0 < top_10 <= top_25 < bottom_25 <= bottom_10 <= 1, got {:?}",
                b
            )));
        }

        for (name, threshold) in self.thresholds.named() {
            if threshold.mid > threshold.high {
                return Err(ShotMapError::configuration(format!(
                    "Threshold '{}' has mid {} above high {}",
                    name, threshold.mid, threshold.high
                )));
            }
        }

        if self.thresholds.forward_driven > self.thresholds.defense_driven {
            return Err(ShotMapError::configuration(
                "Forward-driven cut point must not exceed the defense-driven cut point",
            ));
        }

        if self.vs_average_margin_pct < 0.0 {
            return Err(ShotMapError::configuration(
                "Average comparison margin must be non-negative",
            ));
        }

        Ok(())
    }
}
