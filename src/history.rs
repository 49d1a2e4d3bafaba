//! Daily rank history.
//!
//! A snapshot captures the regular-season league ranks on one date so the
//! presentation side can chart how a team's zone ranks move over time.
//! Unlike pool re-ranking, teams lacking a value are left out of a ranking
//! rather than counted as zero.

use crate::models::{
    Dataset, GameType, Metric, Position, RankHistory, RankSnapshot, SeasonKey, TeamId,
    TeamRankSnapshot, TeamShotRecord,
};
use crate::ranking::{RankMap, rerank};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Rank the regular-season pool of a season as of `date`.
///
/// Only teams in the dataset's team list take part. Returns `None` when no
/// team has zone data for the season.
pub fn build_snapshot(dataset: &Dataset, season: SeasonKey, date: NaiveDate) -> Option<RankSnapshot> {
    let members: Vec<(TeamId, &TeamShotRecord)> = dataset
        .teams
        .iter()
        .filter_map(|team| {
            dataset
                .record(team.id, season, GameType::Regular)
                .map(|record| (team.id, record))
        })
        .collect();

    let areas: BTreeSet<&str> = members
        .iter()
        .flat_map(|(_, record)| record.zones.iter().map(|z| z.area.as_str()))
        .collect();
    if areas.is_empty() {
        debug!("No zone data for {}: skipping snapshot", season);
        return None;
    }

    let rank_present = |value: &dyn Fn(&TeamShotRecord) -> Option<f64>| -> RankMap {
        let present: Vec<(TeamId, &TeamShotRecord)> = members
            .iter()
            .filter(|(_, record)| value(*record).is_some())
            .copied()
            .collect();
        rerank(present, |record: &TeamShotRecord| value(record))
    };
    let skater_rank = |position: Position, metric: Metric| {
        rank_present(&|record: &TeamShotRecord| {
            record.overall(position).map(|row| metric.total_value(row))
        })
    };

    let fwd_sog = skater_rank(Position::Forwards, Metric::Sog);
    let def_sog = skater_rank(Position::Defense, Metric::Sog);
    let fwd_goals = skater_rank(Position::Forwards, Metric::Goals);
    let def_goals = skater_rank(Position::Defense, Metric::Goals);
    let fwd_pctg = skater_rank(Position::Forwards, Metric::ShootingPctg);
    let def_pctg = skater_rank(Position::Defense, Metric::ShootingPctg);

    let zone_ranks: BTreeMap<&str, BTreeMap<Metric, RankMap>> = areas
        .iter()
        .map(|&area| {
            let by_metric = Metric::ALL
                .iter()
                .map(|&metric| {
                    let ranks = rank_present(&|record: &TeamShotRecord| {
                        record.zone(area).map(|zone| metric.zone_value(zone))
                    });
                    (metric, ranks)
                })
                .collect();
            (area, by_metric)
        })
        .collect();

    let zone_map = |team_id: TeamId, metric: Metric| -> BTreeMap<String, u32> {
        zone_ranks
            .iter()
            .filter_map(|(area, by_metric)| {
                by_metric
                    .get(&metric)
                    .and_then(|ranks| ranks.get(&team_id))
                    .map(|&rank| (area.to_string(), rank))
            })
            .collect()
    };

    let teams = members
        .iter()
        .map(|&(team_id, _)| {
            let snapshot = TeamRankSnapshot {
                fwd_sog_rank: fwd_sog.get(&team_id).copied(),
                def_sog_rank: def_sog.get(&team_id).copied(),
                fwd_goal_rank: fwd_goals.get(&team_id).copied(),
                def_goal_rank: def_goals.get(&team_id).copied(),
                fwd_pctg_rank: fwd_pctg.get(&team_id).copied(),
                def_pctg_rank: def_pctg.get(&team_id).copied(),
                zone_ranks: zone_map(team_id, Metric::Sog),
                zone_goal_ranks: zone_map(team_id, Metric::Goals),
                zone_pctg_ranks: zone_map(team_id, Metric::ShootingPctg),
            };
            (team_id, snapshot)
        })
        .collect();

    Some(RankSnapshot { date, teams })
}

impl RankHistory {
    /// Append a snapshot unless one exists for its date, keeping at most
    /// `max_days` of the most recent snapshots. Returns whether it was added.
    pub fn record(&mut self, snapshot: RankSnapshot, max_days: usize) -> bool {
        if self.snapshots.iter().any(|s| s.date == snapshot.date) {
            debug!("Snapshot for {} already exists", snapshot.date);
            return false;
        }

        let date = snapshot.date;
        let team_count = snapshot.teams.len();
        self.snapshots.push(snapshot);
        self.snapshots.sort_by_key(|s| s.date);

        if self.snapshots.len() > max_days {
            let excess = self.snapshots.len() - max_days;
            self.snapshots.drain(..excess);
        }

        info!(
            "Added snapshot for {} ({} total days, {} teams)",
            date,
            self.snapshots.len(),
            team_count
        );
        true
    }

    pub fn latest(&self) -> Option<&RankSnapshot> {
        self.snapshots.last()
    }

    /// Dated sog ranks of one team in one zone, oldest first
    pub fn zone_trend(&self, team_id: TeamId, area: &str) -> Vec<(NaiveDate, u32)> {
        self.snapshots
            .iter()
            .filter_map(|snapshot| {
                snapshot
                    .teams
                    .get(&team_id)
                    .and_then(|team| team.zone_ranks.get(area))
                    .map(|&rank| (snapshot.date, rank))
            })
            .collect()
    }
}
