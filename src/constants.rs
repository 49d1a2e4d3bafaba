//! Application constants for the shot map
//!
//! Zone names, record-key vocabulary, rank band fractions and the
//! calibrated ratio thresholds used throughout the crate.

// =============================================================================
// Shot Zones
// =============================================================================

/// Named shot zones as reported by the NHL Edge shot-location endpoint
pub mod zones {
    pub const LOW_SLOT: &str = "Low Slot";
    pub const HIGH_SLOT: &str = "High Slot";
    pub const CREASE: &str = "Crease";
    pub const L_CIRCLE: &str = "L Circle";
    pub const R_CIRCLE: &str = "R Circle";
    pub const L_NET_SIDE: &str = "L Net Side";
    pub const R_NET_SIDE: &str = "R Net Side";
    pub const L_POINT: &str = "L Point";
    pub const R_POINT: &str = "R Point";
    pub const CENTER_POINT: &str = "Center Point";
    pub const OUTSIDE_L: &str = "Outside L";
    pub const OUTSIDE_R: &str = "Outside R";
    pub const BEYOND_RED_LINE: &str = "Beyond Red Line";
    pub const OFFENSIVE_NEUTRAL_ZONE: &str = "Offensive Neutral Zone";
    pub const BEHIND_THE_NET: &str = "Behind the Net";
    pub const L_CORNER: &str = "L Corner";
    pub const R_CORNER: &str = "R Corner";

    /// All 17 named zones
    pub const ALL: &[&str] = &[
        LOW_SLOT,
        HIGH_SLOT,
        CREASE,
        L_CIRCLE,
        R_CIRCLE,
        L_NET_SIDE,
        R_NET_SIDE,
        L_POINT,
        R_POINT,
        CENTER_POINT,
        OUTSIDE_L,
        OUTSIDE_R,
        BEYOND_RED_LINE,
        OFFENSIVE_NEUTRAL_ZONE,
        BEHIND_THE_NET,
        L_CORNER,
        R_CORNER,
    ];

    /// Home-plate area: slot below the dots plus the crease and both net sides
    pub const HIGH_DANGER: &[&str] = &[LOW_SLOT, CREASE, L_NET_SIDE, R_NET_SIDE];

    pub const POINTS: &[&str] = &[L_POINT, R_POINT, CENTER_POINT];

    pub const CIRCLES: &[&str] = &[L_CIRCLE, R_CIRCLE];

    pub const NET_FRONT: &[&str] = &[CREASE, L_NET_SIDE, R_NET_SIDE];

    pub const CORNERS: &[&str] = &[L_CORNER, R_CORNER, BEHIND_THE_NET];

    pub const SLOT: &[&str] = &[LOW_SLOT, HIGH_SLOT];

    pub const PERIMETER: &[&str] = &[OUTSIDE_L, OUTSIDE_R, BEYOND_RED_LINE, OFFENSIVE_NEUTRAL_ZONE];
}

// =============================================================================
// Record Keys
// =============================================================================

/// Location code of the aggregate (all zones) totals rows
pub const LOCATION_ALL: &str = "all";

/// Game type code for the regular season
pub const GAME_TYPE_REGULAR: u8 = 2;

/// Game type code for the playoffs
pub const GAME_TYPE_PLAYOFFS: u8 = 3;

/// Seasons published by the upstream fetch job, most recent first
pub const SEASONS: &[&str] = &["20252026", "20242025"];

/// Default season when none is requested
pub const DEFAULT_SEASON: &str = "20252026";

// =============================================================================
// Ranking Defaults
// =============================================================================

/// Teams in the league; size of the pre-ranked regular-season pool
pub const DEFAULT_LEAGUE_SIZE: usize = 32;

/// Rank band fractions of the pool size
pub const TOP_10_FRACTION: f64 = 0.10;
pub const TOP_25_FRACTION: f64 = 0.25;
pub const BOTTOM_25_FRACTION: f64 = 0.75;
pub const BOTTOM_10_FRACTION: f64 = 0.90;

/// Rank-to-tier fractions used by the heatmap legend
pub const TIER_TOP_15: f64 = 0.15;
pub const TIER_TOP_33: f64 = 0.33;
pub const TIER_MIDDLE: f64 = 0.66;

/// Percentage difference from the pool average treated as "even"
pub const DEFAULT_VS_AVERAGE_MARGIN_PCT: f64 = 5.0;

/// Days of rank snapshots retained in the dataset history
pub const DEFAULT_MAX_HISTORY_DAYS: usize = 90;

// =============================================================================
// Archetype Thresholds
// =============================================================================

/// Ratio thresholds calibrated against league-wide distributions.
///
/// "mid" is roughly the 16th-best team of 32, "high" roughly the 8th.
pub mod thresholds {
    pub const HIGH_DANGER_MID: f64 = 0.325;
    pub const HIGH_DANGER_HIGH: f64 = 0.350;
    pub const CREASE_MID: f64 = 0.035;
    pub const CREASE_HIGH: f64 = 0.043;
    pub const LOW_SLOT_MID: f64 = 0.248;
    pub const LOW_SLOT_HIGH: f64 = 0.265;
    pub const POINT_MID: f64 = 0.210;
    pub const POINT_HIGH: f64 = 0.230;
    pub const CIRCLE_MID: f64 = 0.197;
    pub const CIRCLE_HIGH: f64 = 0.210;
    pub const NET_FRONT_MID: f64 = 0.083;
    pub const NET_FRONT_HIGH: f64 = 0.095;
    pub const CORNER_MID: f64 = 0.011;
    pub const CORNER_HIGH: f64 = 0.015;

    /// Defense share of F+D shots above which the attack is D-driven
    pub const DEFENSE_DRIVEN: f64 = 0.300;

    /// Defense share of F+D shots below which the attack is F-driven
    pub const FORWARD_DRIVEN: f64 = 0.252;
}

// =============================================================================
// File Locations
// =============================================================================

/// Dataset filename written by the fetch job
pub const DATASET_FILENAME: &str = "nhl-data.json";

/// Application directory under the platform data dir
pub const APP_DIR_NAME: &str = "shotmap";

/// Dataset location used by the web front end build
pub const PUBLIC_DATASET_PATH: &str = "public/nhl-data.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_table_is_complete() {
        assert_eq!(zones::ALL.len(), 17);

        let mut unique = zones::ALL.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 17);
    }

    #[test]
    fn test_zone_groups_are_named_zones() {
        for group in [
            zones::HIGH_DANGER,
            zones::POINTS,
            zones::CIRCLES,
            zones::NET_FRONT,
            zones::CORNERS,
            zones::SLOT,
            zones::PERIMETER,
        ] {
            for zone in group {
                assert!(zones::ALL.contains(zone), "{} is not a named zone", zone);
            }
        }
    }

    #[test]
    fn test_thresholds_are_ordered() {
        use thresholds::*;
        assert!(HIGH_DANGER_MID < HIGH_DANGER_HIGH);
        assert!(CREASE_MID < CREASE_HIGH);
        assert!(LOW_SLOT_MID < LOW_SLOT_HIGH);
        assert!(POINT_MID < POINT_HIGH);
        assert!(CIRCLE_MID < CIRCLE_HIGH);
        assert!(NET_FRONT_MID < NET_FRONT_HIGH);
        assert!(CORNER_MID < CORNER_HIGH);
        assert!(FORWARD_DRIVEN < DEFENSE_DRIVEN);
    }
}
