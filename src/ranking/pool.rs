//! Pool-scoped re-ranking of full team records

use super::rerank::{RankMap, rerank};
use crate::models::{
    Dataset, GameType, Metric, PoolMember, Position, SeasonKey, TeamId, TeamShotRecord,
};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Every pool member's record rebuilt with pool ranks and pool averages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolRanks {
    pub pool_size: usize,
    pub records_by_team: BTreeMap<TeamId, TeamShotRecord>,
}

impl PoolRanks {
    /// Pool-scoped record; `None` when the team is not in the pool
    pub fn record(&self, team_id: TeamId) -> Option<&TeamShotRecord> {
        self.records_by_team.get(&team_id)
    }

    pub fn into_record(mut self, team_id: TeamId) -> Option<TeamShotRecord> {
        self.records_by_team.remove(&team_id)
    }
}

#[derive(Debug)]
struct MetricRanking {
    ranks: RankMap,
    average: f64,
}

type MetricTable = BTreeMap<Metric, MetricRanking>;

/// Re-rank every team with zone data for a season and game type.
///
/// Returns `None` when no team qualifies (e.g. playoffs not yet played).
pub fn build_pool_ranks(
    dataset: &Dataset,
    season: SeasonKey,
    game_type: GameType,
) -> Option<PoolRanks> {
    build_pool_ranks_with(dataset, season, game_type, |member| {
        member.record.has_zone_data()
    })
}

/// Re-rank the records for a season and game type accepted by `filter`
pub fn build_pool_ranks_with<F>(
    dataset: &Dataset,
    season: SeasonKey,
    game_type: GameType,
    filter: F,
) -> Option<PoolRanks>
where
    F: Fn(&PoolMember<'_>) -> bool,
{
    let pool: Vec<PoolMember<'_>> = dataset
        .pool_members(season, game_type)
        .into_iter()
        .filter(|member| filter(member))
        .collect();

    if pool.is_empty() {
        debug!("No pool for {} {}: nothing to rank", season, game_type);
        return None;
    }

    let ranks = rank_pool(&pool);
    debug!(
        "Re-ranked {} teams for {} {}",
        ranks.pool_size, season, game_type
    );
    Some(ranks)
}

/// Rank a non-empty pool.
///
/// Each totals combination and each zone is ranked only over the members
/// that carry a row for it, and its average is the mean over those same
/// members. Raw counts pass through unchanged.
pub fn rank_pool(pool: &[PoolMember<'_>]) -> PoolRanks {
    let mut totals_tables: HashMap<(String, Position), MetricTable> = HashMap::new();
    for (location_code, position) in totals_combinations(pool) {
        let with_row: Vec<(TeamId, &TeamShotRecord)> = pool
            .iter()
            .filter(|m| m.record.totals_for(&location_code, position).is_some())
            .map(|m| (m.team_id, m.record))
            .collect();

        let table = Metric::ALL
            .iter()
            .map(|&metric| {
                let value = |record: &TeamShotRecord| {
                    record
                        .totals_for(&location_code, position)
                        .map(|row| metric.total_value(row))
                };
                let ranking = MetricRanking {
                    ranks: rerank(with_row.iter().copied(), &value),
                    average: mean(with_row.iter().filter_map(|(_, r)| value(r))),
                };
                (metric, ranking)
            })
            .collect();

        totals_tables.insert((location_code, position), table);
    }

    let mut zone_tables: HashMap<String, MetricTable> = HashMap::new();
    for area in zone_areas(pool) {
        let with_zone: Vec<(TeamId, &TeamShotRecord)> = pool
            .iter()
            .filter(|m| m.record.zone(&area).is_some())
            .map(|m| (m.team_id, m.record))
            .collect();

        let table = Metric::ALL
            .iter()
            .map(|&metric| {
                let value = |record: &TeamShotRecord| {
                    record.zone(&area).map(|zone| metric.zone_value(zone))
                };
                let ranking = MetricRanking {
                    ranks: rerank(with_zone.iter().copied(), &value),
                    average: mean(with_zone.iter().filter_map(|(_, r)| value(r))),
                };
                (metric, ranking)
            })
            .collect();

        zone_tables.insert(area, table);
    }

    let records_by_team = pool
        .iter()
        .map(|member| {
            let mut record = member.record.clone();

            for row in &mut record.totals {
                let key = (row.location_code.clone(), row.position);
                let Some(table) = totals_tables.get(&key) else {
                    continue;
                };
                for (metric, ranking) in table {
                    if let Some(&rank) = ranking.ranks.get(&member.team_id) {
                        metric.set_total_rank(row, rank);
                    }
                    metric.set_total_average(row, ranking.average);
                }
            }

            for zone in &mut record.zones {
                let Some(table) = zone_tables.get(&zone.area) else {
                    continue;
                };
                for (metric, ranking) in table {
                    if let Some(&rank) = ranking.ranks.get(&member.team_id) {
                        metric.set_zone_rank(zone, rank);
                    }
                }
            }

            (member.team_id, record)
        })
        .collect();

    PoolRanks {
        pool_size: pool.len(),
        records_by_team,
    }
}

/// Distinct (location code, position) pairs in first-seen order
fn totals_combinations(pool: &[PoolMember<'_>]) -> Vec<(String, Position)> {
    let mut seen = HashSet::new();
    let mut combos = Vec::new();
    for member in pool {
        for row in &member.record.totals {
            let key = (row.location_code.clone(), row.position);
            if seen.insert(key.clone()) {
                combos.push(key);
            }
        }
    }
    combos
}

/// Distinct zone names in first-seen order
fn zone_areas(pool: &[PoolMember<'_>]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut areas = Vec::new();
    for member in pool {
        for zone in &member.record.zones {
            if seen.insert(zone.area.as_str()) {
                areas.push(zone.area.clone());
            }
        }
    }
    areas
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}
