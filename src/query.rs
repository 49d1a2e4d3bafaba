//! Query layer over a dataset snapshot.
//!
//! Resolves a (team, season, game type) selection to a record whose ranks
//! are scoped to the right pool, classifies it, and assembles the report
//! the presentation side renders. Missing data is `None`, never an error.

use crate::archetype::{Archetype, ZoneRatios, classify_with};
use crate::config::ShotMapConfig;
use crate::constants::{TIER_MIDDLE, TIER_TOP_15, TIER_TOP_33};
use crate::error::{Result, ShotMapError};
use crate::models::{
    Dataset, GameType, Leaders, Metric, Position, SeasonKey, Team, TeamId, TeamShotRecord,
    TotalStat, ZoneStat,
};
use crate::ranking::build_pool_ranks;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// A team's record with ranks relative to a pool of `pool_size` teams
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedRecord<'a> {
    pub record: Cow<'a, TeamShotRecord>,
    pub pool_size: usize,
}

/// Record for a selection with pool-appropriate ranks.
///
/// Regular-season records are already ranked league-wide and are borrowed
/// as-is. Playoff records are re-ranked over the teams with playoff data
/// for the season. `None` means no data for the selection.
pub fn get_record<'a>(
    dataset: &'a Dataset,
    team_id: TeamId,
    season: SeasonKey,
    game_type: GameType,
    config: &ShotMapConfig,
) -> Option<ScopedRecord<'a>> {
    let raw = dataset.record(team_id, season, game_type)?;

    match game_type {
        GameType::Regular => Some(ScopedRecord {
            record: Cow::Borrowed(raw),
            pool_size: config.league_size,
        }),
        GameType::Playoffs => {
            let pool = build_pool_ranks(dataset, season, game_type)?;
            let pool_size = pool.pool_size;
            let record = pool.into_record(team_id)?;
            Some(ScopedRecord {
                record: Cow::Owned(record),
                pool_size,
            })
        }
    }
}

/// Archetype for a record using default thresholds
pub fn get_archetype(record: &TeamShotRecord, pool_size: usize) -> Option<Archetype> {
    get_archetype_with(&ShotMapConfig::default(), record, pool_size)
}

pub fn get_archetype_with(
    config: &ShotMapConfig,
    record: &TeamShotRecord,
    pool_size: usize,
) -> Option<Archetype> {
    classify_with(
        config,
        &record.zones,
        record.overall(Position::All),
        record.overall(Position::Forwards),
        record.overall(Position::Defense),
        pool_size,
    )
}

/// Colour band of a rank relative to its pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RankTier {
    Top15,
    Top33,
    Middle,
    Bottom,
}

impl RankTier {
    /// `None` for an unranked value or an empty pool
    pub fn from_rank(rank: u32, pool_size: usize) -> Option<Self> {
        if rank == 0 || pool_size == 0 {
            return None;
        }

        let fraction = f64::from(rank) / pool_size as f64;
        Some(if fraction <= TIER_TOP_15 {
            RankTier::Top15
        } else if fraction <= TIER_TOP_33 {
            RankTier::Top33
        } else if fraction <= TIER_MIDDLE {
            RankTier::Middle
        } else {
            RankTier::Bottom
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            RankTier::Top15 => "top 15%",
            RankTier::Top33 => "top third",
            RankTier::Middle => "middle",
            RankTier::Bottom => "bottom third",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Above,
    Below,
    Even,
}

/// Percentage difference of a value from the pool average
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VsAverage {
    pub pct_diff: f64,
    pub direction: Direction,
}

impl VsAverage {
    /// Differences within `margin_pct` either way count as even.
    /// `None` when the average is zero or not finite.
    pub fn compare(value: f64, average: f64, margin_pct: f64) -> Option<Self> {
        if average == 0.0 || !average.is_finite() || !value.is_finite() {
            return None;
        }

        let pct_diff = (value - average) / average * 100.0;
        let direction = if pct_diff > margin_pct {
            Direction::Above
        } else if pct_diff < -margin_pct {
            Direction::Below
        } else {
            Direction::Even
        };
        Some(Self {
            pct_diff,
            direction,
        })
    }
}

/// One metric of a totals row or zone, with its rank context
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricLine {
    pub metric: Metric,
    pub value: f64,
    pub rank: u32,
    pub tier: Option<RankTier>,
    pub vs_average: Option<VsAverage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsLine {
    pub position: Position,
    pub metrics: Vec<MetricLine>,
}

impl TotalsLine {
    fn from_row(row: &TotalStat, pool_size: usize, margin_pct: f64) -> Self {
        let metrics = Metric::ALL
            .iter()
            .map(|&metric| {
                let value = metric.total_value(row);
                let rank = metric.total_rank(row);
                MetricLine {
                    metric,
                    value,
                    rank,
                    tier: RankTier::from_rank(rank, pool_size),
                    vs_average: VsAverage::compare(value, metric.total_average(row), margin_pct),
                }
            })
            .collect();

        Self {
            position: row.position,
            metrics,
        }
    }

    pub fn metric(&self, metric: Metric) -> Option<&MetricLine> {
        self.metrics.iter().find(|line| line.metric == metric)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneLine {
    pub area: String,
    pub metrics: Vec<MetricLine>,
}

impl ZoneLine {
    fn from_zone(zone: &ZoneStat, pool_size: usize) -> Self {
        let metrics = Metric::ALL
            .iter()
            .map(|&metric| {
                let rank = metric.zone_rank(zone);
                MetricLine {
                    metric,
                    value: metric.zone_value(zone),
                    rank,
                    tier: RankTier::from_rank(rank, pool_size),
                    vs_average: None,
                }
            })
            .collect();

        Self {
            area: zone.area.clone(),
            metrics,
        }
    }

    pub fn metric(&self, metric: Metric) -> Option<&MetricLine> {
        self.metrics.iter().find(|line| line.metric == metric)
    }
}

/// Everything shown for one team and selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamReport {
    pub team: Team,
    pub season: SeasonKey,
    pub season_label: String,
    pub game_type: GameType,
    pub pool_size: usize,
    pub archetype: Option<Archetype>,
    pub ratios: Option<ZoneRatios>,
    /// All, forwards, defense; rows missing from the record are skipped
    pub totals: Vec<TotalsLine>,
    /// Sorted by shots on goal, highest first
    pub zones: Vec<ZoneLine>,
    pub leaders: Option<Leaders>,
    pub fetched_at: DateTime<Utc>,
}

impl TeamReport {
    /// `None` when the dataset has no data for the selection
    pub fn build(
        dataset: &Dataset,
        team: &Team,
        season: SeasonKey,
        game_type: GameType,
        config: &ShotMapConfig,
    ) -> Option<Self> {
        let scoped = get_record(dataset, team.id, season, game_type, config)?;
        let record: &TeamShotRecord = &scoped.record;
        let pool_size = scoped.pool_size;

        let archetype = get_archetype_with(config, record, pool_size);
        let ratios = record.overall(Position::All).map(|all| {
            ZoneRatios::compute(
                &record.zones,
                all,
                record.overall(Position::Forwards),
                record.overall(Position::Defense),
            )
        });

        let totals = Position::ALL
            .iter()
            .filter_map(|&position| record.overall(position))
            .map(|row| TotalsLine::from_row(row, pool_size, config.vs_average_margin_pct))
            .collect();

        let mut sorted_zones: Vec<&ZoneStat> = record.zones.iter().collect();
        sorted_zones.sort_by(|a, b| b.sog.cmp(&a.sog));
        let zones = sorted_zones
            .into_iter()
            .map(|zone| ZoneLine::from_zone(zone, pool_size))
            .collect();

        debug!(
            "Built report for {} {} {} (pool of {})",
            team.abbr, season, game_type, pool_size
        );

        Some(Self {
            team: team.clone(),
            season,
            season_label: season.label(),
            game_type,
            pool_size,
            archetype,
            ratios,
            totals,
            zones,
            leaders: dataset.leaders(team.id, season, game_type).cloned(),
            fetched_at: dataset.fetched_at,
        })
    }

    pub fn totals_for(&self, position: Position) -> Option<&TotalsLine> {
        self.totals.iter().find(|line| line.position == position)
    }
}

/// Find a team by id, abbreviation, nickname, city or full name
pub fn resolve_team<'a>(dataset: &'a Dataset, query: &str) -> Result<&'a Team> {
    let query = query.trim();
    let unknown = || ShotMapError::UnknownTeam {
        query: query.to_string(),
    };

    if let Ok(id) = query.parse::<TeamId>() {
        return dataset.team(id).ok_or_else(unknown);
    }

    let teams = &dataset.teams;
    teams
        .iter()
        .find(|t| t.abbr.eq_ignore_ascii_case(query))
        .or_else(|| teams.iter().find(|t| t.name.eq_ignore_ascii_case(query)))
        .or_else(|| {
            teams
                .iter()
                .find(|t| t.full_name().eq_ignore_ascii_case(query))
        })
        .or_else(|| teams.iter().find(|t| t.city.eq_ignore_ascii_case(query)))
        .ok_or_else(unknown)
}

/// One row of the league-wide archetype table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueEntry {
    pub team: Team,
    pub archetype: Option<Archetype>,
    pub sog_rank: Option<u32>,
    pub pool_size: usize,
}

/// Classify every team with data for a selection, in team-list order
pub fn league_archetypes(
    dataset: &Dataset,
    season: SeasonKey,
    game_type: GameType,
    config: &ShotMapConfig,
) -> Vec<LeagueEntry> {
    let playoff_pool = match game_type {
        GameType::Regular => None,
        GameType::Playoffs => build_pool_ranks(dataset, season, game_type),
    };

    dataset
        .teams
        .iter()
        .filter_map(|team| {
            let (record, pool_size) = match (game_type, &playoff_pool) {
                (GameType::Regular, _) => (
                    dataset.record(team.id, season, game_type)?,
                    config.league_size,
                ),
                (GameType::Playoffs, Some(pool)) => (pool.record(team.id)?, pool.pool_size),
                (GameType::Playoffs, None) => return None,
            };

            Some(LeagueEntry {
                team: team.clone(),
                archetype: get_archetype_with(config, record, pool_size),
                sog_rank: record.overall(Position::All).map(|row| row.sog_rank),
                pool_size,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, TEAM_IDS, season};
    use crate::models::{Leader, RecordKey};

    #[test]
    fn test_regular_season_record_is_borrowed() {
        let dataset = fixtures::league_dataset();
        let config = ShotMapConfig::default();

        let scoped = get_record(&dataset, TEAM_IDS[3], season(), GameType::Regular, &config).unwrap();

        assert_eq!(scoped.pool_size, 32);
        assert!(matches!(scoped.record, Cow::Borrowed(_)));
        assert_eq!(
            Some(&*scoped.record),
            dataset.record(TEAM_IDS[3], season(), GameType::Regular)
        );
    }

    #[test]
    fn test_playoff_record_is_ranked_within_participants() {
        let dataset = fixtures::league_dataset();
        let config = ShotMapConfig::default();

        let scoped = get_record(&dataset, TEAM_IDS[0], season(), GameType::Playoffs, &config).unwrap();

        assert_eq!(scoped.pool_size, 16);
        let record: &TeamShotRecord = &scoped.record;
        for row in &record.totals {
            for metric in Metric::ALL {
                let rank = metric.total_rank(row);
                assert!((1..=16).contains(&rank), "rank {} out of pool", rank);
            }
        }
        for zone in &record.zones {
            assert!((1..=16).contains(&zone.sog_rank));
        }
    }

    #[test]
    fn test_playoff_record_absent_for_non_participant() {
        let dataset = fixtures::league_dataset();
        let config = ShotMapConfig::default();

        assert!(get_record(&dataset, TEAM_IDS[20], season(), GameType::Playoffs, &config).is_none());
        assert!(get_record(&dataset, TEAM_IDS[20], season(), GameType::Regular, &config).is_some());
    }

    #[test]
    fn test_unknown_season_has_no_record() {
        let dataset = fixtures::league_dataset();
        let config = ShotMapConfig::default();
        let other = SeasonKey::new(2019);

        assert!(get_record(&dataset, TEAM_IDS[0], other, GameType::Regular, &config).is_none());
        assert!(get_record(&dataset, TEAM_IDS[0], other, GameType::Playoffs, &config).is_none());
    }

    #[test]
    fn test_get_archetype_reads_all_position_rows() {
        let dataset = fixtures::league_dataset();
        let record = dataset
            .record(TEAM_IDS[0], season(), GameType::Regular)
            .unwrap();

        assert!(get_archetype(record, 32).is_some());
        assert!(get_archetype(&TeamShotRecord::default(), 32).is_none());
    }

    #[test]
    fn test_rank_tier_bands() {
        assert_eq!(RankTier::from_rank(4, 32), Some(RankTier::Top15));
        assert_eq!(RankTier::from_rank(5, 32), Some(RankTier::Top33));
        assert_eq!(RankTier::from_rank(10, 32), Some(RankTier::Top33));
        assert_eq!(RankTier::from_rank(21, 32), Some(RankTier::Middle));
        assert_eq!(RankTier::from_rank(22, 32), Some(RankTier::Bottom));
        assert_eq!(RankTier::from_rank(0, 32), None);
        assert_eq!(RankTier::from_rank(1, 0), None);
    }

    #[test]
    fn test_vs_average_margin() {
        let even = VsAverage::compare(105.0, 100.0, 5.0).unwrap();
        assert_eq!(even.direction, Direction::Even);

        let above = VsAverage::compare(106.0, 100.0, 5.0).unwrap();
        assert_eq!(above.direction, Direction::Above);
        assert!((above.pct_diff - 6.0).abs() < 1e-9);

        let below = VsAverage::compare(90.0, 100.0, 5.0).unwrap();
        assert_eq!(below.direction, Direction::Below);

        assert!(VsAverage::compare(10.0, 0.0, 5.0).is_none());
    }

    #[test]
    fn test_resolve_team_by_id_abbr_and_name() {
        let dataset = fixtures::league_dataset();

        assert_eq!(resolve_team(&dataset, "9").unwrap().id, 9);
        assert_eq!(resolve_team(&dataset, "t09").unwrap().id, 9);
        assert_eq!(resolve_team(&dataset, " Team 10 ").unwrap().id, 10);
        assert_eq!(resolve_team(&dataset, "city 12 team 12").unwrap().id, 12);
        assert_eq!(resolve_team(&dataset, "City 13").unwrap().id, 13);

        assert!(matches!(
            resolve_team(&dataset, "Quebec"),
            Err(ShotMapError::UnknownTeam { .. })
        ));
        assert!(resolve_team(&dataset, "11").is_err());
    }

    #[test]
    fn test_playoff_report_compares_against_pool_average() {
        let mut dataset = fixtures::league_dataset();
        let key = RecordKey::new(TEAM_IDS[0], season(), GameType::Playoffs).to_string();
        dataset.leaders.insert(
            key,
            Leaders {
                shots: Some(Leader {
                    name: "Stutzle".to_string(),
                    first_name: Some("Tim".to_string()),
                    player_id: None,
                    val: 41.0,
                }),
                goals: None,
                pctg: None,
            },
        );
        let team = dataset.team(TEAM_IDS[0]).unwrap().clone();
        let config = ShotMapConfig::default();

        let report =
            TeamReport::build(&dataset, &team, season(), GameType::Playoffs, &config).unwrap();

        assert_eq!(report.pool_size, 16);
        assert_eq!(report.season_label, "2024–25");
        assert_eq!(report.totals.len(), 3);
        assert!(report.archetype.is_some());
        assert!(report.ratios.is_some());
        assert_eq!(
            report.leaders.as_ref().and_then(|l| l.shots.as_ref()).map(|l| l.name.as_str()),
            Some("Stutzle")
        );

        let sog = report
            .totals_for(Position::All)
            .and_then(|line| line.metric(Metric::Sog))
            .unwrap();
        assert!(sog.vs_average.is_some());
        assert!(sog.tier.is_some());

        let shots: Vec<f64> = report
            .zones
            .iter()
            .filter_map(|z| z.metric(Metric::Sog).map(|m| m.value))
            .collect();
        assert_eq!(shots.len(), 17);
        assert!(shots.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_report_absent_without_data() {
        let dataset = fixtures::league_dataset();
        let team = dataset.team(TEAM_IDS[31]).unwrap().clone();
        let config = ShotMapConfig::default();

        assert!(TeamReport::build(&dataset, &team, season(), GameType::Playoffs, &config).is_none());
    }

    #[test]
    fn test_league_archetypes_cover_pool() {
        let dataset = fixtures::league_dataset();
        let config = ShotMapConfig::default();

        let regular = league_archetypes(&dataset, season(), GameType::Regular, &config);
        assert_eq!(regular.len(), 32);
        assert!(regular.iter().all(|e| e.pool_size == 32 && e.archetype.is_some()));

        let playoffs = league_archetypes(&dataset, season(), GameType::Playoffs, &config);
        assert_eq!(playoffs.len(), 16);
        let mut ranks: Vec<u32> = playoffs.iter().filter_map(|e| e.sog_rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=16).collect::<Vec<u32>>());
    }
}
