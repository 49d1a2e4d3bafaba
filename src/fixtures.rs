//! Shared builders for unit tests

use crate::constants::{LOCATION_ALL, zones};
use crate::models::{
    Dataset, GameType, Position, RankHistory, SeasonKey, Team, TeamId, TeamShotRecord, TotalStat,
    ZoneStat,
};
use chrono::{TimeZone, Utc};
use std::collections::BTreeMap;

/// Franchise ids in league order
pub const TEAM_IDS: [TeamId; 32] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 28,
    29, 30, 52, 54, 55, 59,
];

pub fn season() -> SeasonKey {
    SeasonKey::new(2024)
}

pub fn pctg(goals: u32, sog: u32) -> f64 {
    if sog == 0 {
        0.0
    } else {
        f64::from(goals) / f64::from(sog)
    }
}

/// Zone row with placeholder ranks
pub fn zone(area: &str, sog: u32, goals: u32) -> ZoneStat {
    ZoneStat {
        area: area.to_string(),
        sog,
        goals,
        shooting_pctg: pctg(goals, sog),
        sog_rank: 1,
        goals_rank: 1,
        shooting_pctg_rank: 1,
    }
}

/// All-zones totals row with placeholder ranks and averages
pub fn totals(position: Position, sog: u32, goals: u32) -> TotalStat {
    TotalStat {
        location_code: LOCATION_ALL.to_string(),
        position,
        sog,
        goals,
        shooting_pctg: pctg(goals, sog),
        sog_rank: 1,
        goals_rank: 1,
        shooting_pctg_rank: 1,
        sog_league_avg: 0.0,
        goals_league_avg: 0.0,
        shooting_pctg_league_avg: 0.0,
    }
}

/// Totals row carrying explicit ranks
pub fn ranked_totals(
    position: Position,
    sog: u32,
    sog_rank: u32,
    shooting_pctg_rank: u32,
    goals_rank: u32,
) -> TotalStat {
    TotalStat {
        sog_rank,
        shooting_pctg_rank,
        goals_rank,
        ..totals(position, sog, sog / 10)
    }
}

/// Record with zone rows and all/F/D totals derived from them.
///
/// Forwards take `forward_share` of shots and goals; defense the rest.
pub fn record(zone_rows: &[(&str, u32, u32)], forward_share: f64) -> TeamShotRecord {
    let zones: Vec<ZoneStat> = zone_rows
        .iter()
        .map(|&(area, sog, goals)| zone(area, sog, goals))
        .collect();
    let sog: u32 = zones.iter().map(|z| z.sog).sum();
    let goals: u32 = zones.iter().map(|z| z.goals).sum();
    let fwd_sog = (f64::from(sog) * forward_share).round() as u32;
    let fwd_goals = (f64::from(goals) * forward_share).round() as u32;

    TeamShotRecord {
        zones,
        totals: vec![
            totals(Position::All, sog, goals),
            totals(Position::Forwards, fwd_sog, fwd_goals),
            totals(Position::Defense, sog - fwd_sog, goals - fwd_goals),
        ],
    }
}

pub fn team(id: TeamId) -> Team {
    Team {
        id,
        name: format!("Team {}", id),
        city: format!("City {}", id),
        abbr: format!("T{:02}", id),
        color: "#888888".to_string(),
    }
}

/// Dataset over the given team ids and keyed records
pub fn dataset(
    team_ids: &[TeamId],
    records: Vec<(TeamId, SeasonKey, GameType, TeamShotRecord)>,
) -> Dataset {
    let data = records
        .into_iter()
        .map(|(id, season, game_type, record)| {
            (
                format!("{}_{}_{}", id, season, game_type.code()),
                record,
            )
        })
        .collect();

    Dataset {
        fetched_at: Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap(),
        teams: team_ids.iter().map(|&id| team(id)).collect(),
        data,
        leaders: BTreeMap::new(),
        missing_keys: Vec::new(),
        history: RankHistory::default(),
    }
}

/// Deterministic varied record for the team at league index `i`
pub fn league_record(i: usize, scale: u32) -> TeamShotRecord {
    let rows: Vec<(&str, u32, u32)> = zones::ALL
        .iter()
        .enumerate()
        .map(|(z, &area)| {
            let sog = scale * (5 + ((i * 7 + z * 3) % 41) as u32);
            let goals = sog / (6 + ((i + z) % 5) as u32);
            (area, sog, goals)
        })
        .collect();
    record(&rows, 0.65 + (i % 7) as f64 * 0.02)
}

/// 32 teams with regular-season data, the first 16 also with playoff data
pub fn league_dataset() -> Dataset {
    let mut records = Vec::new();
    for (i, &id) in TEAM_IDS.iter().enumerate() {
        records.push((id, season(), GameType::Regular, league_record(i, 10)));
        if i < 16 {
            records.push((id, season(), GameType::Playoffs, league_record(i + 3, 1)));
        }
    }
    dataset(&TEAM_IDS, records)
}
