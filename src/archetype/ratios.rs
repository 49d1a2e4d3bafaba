//! Zone shot-share ratios

use crate::constants::zones;
use crate::models::{TotalStat, ZoneStat};
use serde::Serialize;

/// Shares of a team's shots on goal taken from groups of named zones.
///
/// Every share is relative to the all-zones sog total. A zero total is
/// replaced by 1 so an empty record yields all-zero shares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRatios {
    pub high_danger: f64,
    pub point_share: f64,
    pub circle_share: f64,
    pub net_front: f64,
    pub corner_share: f64,
    pub crease_rate: f64,
    pub low_slot_rate: f64,
    pub slot_share: f64,
    pub perimeter_share: f64,
    /// Defense share of forward plus defense shots; `None` without F/D shots
    pub def_ratio: Option<f64>,
}

impl ZoneRatios {
    pub fn compute(
        zone_rows: &[ZoneStat],
        totals_all: &TotalStat,
        totals_forwards: Option<&TotalStat>,
        totals_defense: Option<&TotalStat>,
    ) -> Self {
        let total = if totals_all.sog == 0 {
            1.0
        } else {
            f64::from(totals_all.sog)
        };
        let share = |group: &[&str]| f64::from(group_sog(zone_rows, group)) / total;

        let forwards = totals_forwards.map(|row| row.sog).unwrap_or(0);
        let defense = totals_defense.map(|row| row.sog).unwrap_or(0);
        let def_ratio = match forwards + defense {
            0 => None,
            skater_total => Some(f64::from(defense) / f64::from(skater_total)),
        };

        Self {
            high_danger: share(zones::HIGH_DANGER),
            point_share: share(zones::POINTS),
            circle_share: share(zones::CIRCLES),
            net_front: share(zones::NET_FRONT),
            corner_share: share(zones::CORNERS),
            crease_rate: share(&[zones::CREASE]),
            low_slot_rate: share(&[zones::LOW_SLOT]),
            slot_share: share(zones::SLOT),
            perimeter_share: share(zones::PERIMETER),
            def_ratio,
        }
    }
}

/// Shots on goal summed over a zone group; absent zones contribute zero
fn group_sog(zone_rows: &[ZoneStat], group: &[&str]) -> u32 {
    group
        .iter()
        .map(|area| {
            zone_rows
                .iter()
                .find(|z| z.area == *area)
                .map(|z| z.sog)
                .unwrap_or(0)
        })
        .sum()
}
