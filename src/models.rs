//! Core data structures for shot map processing.
//!
//! Mirrors the dataset document written by the fetch job: teams, per-key
//! shot records (zone rows plus aggregate totals), skater leaders and the
//! daily rank history. Field names follow the upstream camelCase JSON.

use crate::constants::{GAME_TYPE_PLAYOFFS, GAME_TYPE_REGULAR, LOCATION_ALL};
use crate::error::ShotMapError;
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// NHL franchise identifier
pub type TeamId = u32;

/// Static team reference entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub city: String,
    pub abbr: String,
    pub color: String,
}

impl Team {
    /// City and nickname, e.g. "Ottawa Senators"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.city, self.name)
    }
}

/// Season identifier: two consecutive years, rendered as "20252026"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeasonKey {
    start_year: u16,
}

impl SeasonKey {
    pub const fn new(start_year: u16) -> Self {
        Self { start_year }
    }

    pub fn start_year(&self) -> u16 {
        self.start_year
    }

    pub fn end_year(&self) -> u16 {
        self.start_year + 1
    }

    /// Display label, e.g. "2025–26"
    pub fn label(&self) -> String {
        format!("{}–{:02}", self.start_year, self.end_year() % 100)
    }
}

impl FromStr for SeasonKey {
    type Err = ShotMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ShotMapError::invalid_season(s, "expected 8 digits"));
        }

        let start: u16 = s[..4]
            .parse()
            .map_err(|_| ShotMapError::invalid_season(s, "start year out of range"))?;
        let end: u16 = s[4..]
            .parse()
            .map_err(|_| ShotMapError::invalid_season(s, "end year out of range"))?;

        if end != start + 1 {
            return Err(ShotMapError::invalid_season(
                s,
                "years must be consecutive",
            ));
        }

        Ok(Self::new(start))
    }
}

impl TryFrom<String> for SeasonKey {
    type Error = ShotMapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeasonKey> for String {
    fn from(season: SeasonKey) -> Self {
        season.to_string()
    }
}

impl fmt::Display for SeasonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start_year, self.end_year())
    }
}

/// Regular season or playoffs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GameType {
    Regular,
    Playoffs,
}

impl GameType {
    /// Upstream numeric code (2 or 3)
    pub fn code(&self) -> u8 {
        match self {
            GameType::Regular => GAME_TYPE_REGULAR,
            GameType::Playoffs => GAME_TYPE_PLAYOFFS,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            GAME_TYPE_REGULAR => Some(GameType::Regular),
            GAME_TYPE_PLAYOFFS => Some(GameType::Playoffs),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameType::Regular => "Regular Season",
            GameType::Playoffs => "Playoffs",
        }
    }
}

impl FromStr for GameType {
    type Err = ShotMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2" | "regular" | "regular-season" | "r" => Ok(GameType::Regular),
            "3" | "playoffs" | "playoff" | "p" => Ok(GameType::Playoffs),
            other => Err(ShotMapError::InvalidGameType {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<u8> for GameType {
    type Error = ShotMapError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        GameType::from_code(code).ok_or_else(|| ShotMapError::InvalidGameType {
            value: code.to_string(),
        })
    }
}

impl From<GameType> for u8 {
    fn from(game_type: GameType) -> Self {
        game_type.code()
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Player-position filter of a totals row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "F")]
    Forwards,
    #[serde(rename = "D")]
    Defense,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::All, Position::Forwards, Position::Defense];

    pub fn code(&self) -> &'static str {
        match self {
            Position::All => "all",
            Position::Forwards => "F",
            Position::Defense => "D",
        }
    }
}

/// One of the three ranked shot metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Sog,
    Goals,
    ShootingPctg,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Sog, Metric::Goals, Metric::ShootingPctg];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Sog => "sog",
            Metric::Goals => "goals",
            Metric::ShootingPctg => "shootingPctg",
        }
    }

    pub fn zone_value(&self, zone: &ZoneStat) -> f64 {
        match self {
            Metric::Sog => f64::from(zone.sog),
            Metric::Goals => f64::from(zone.goals),
            Metric::ShootingPctg => zone.shooting_pctg,
        }
    }

    pub fn total_value(&self, row: &TotalStat) -> f64 {
        match self {
            Metric::Sog => f64::from(row.sog),
            Metric::Goals => f64::from(row.goals),
            Metric::ShootingPctg => row.shooting_pctg,
        }
    }

    pub fn zone_rank(&self, zone: &ZoneStat) -> u32 {
        match self {
            Metric::Sog => zone.sog_rank,
            Metric::Goals => zone.goals_rank,
            Metric::ShootingPctg => zone.shooting_pctg_rank,
        }
    }

    pub fn total_rank(&self, row: &TotalStat) -> u32 {
        match self {
            Metric::Sog => row.sog_rank,
            Metric::Goals => row.goals_rank,
            Metric::ShootingPctg => row.shooting_pctg_rank,
        }
    }

    pub fn total_average(&self, row: &TotalStat) -> f64 {
        match self {
            Metric::Sog => row.sog_league_avg,
            Metric::Goals => row.goals_league_avg,
            Metric::ShootingPctg => row.shooting_pctg_league_avg,
        }
    }

    pub(crate) fn set_zone_rank(&self, zone: &mut ZoneStat, rank: u32) {
        match self {
            Metric::Sog => zone.sog_rank = rank,
            Metric::Goals => zone.goals_rank = rank,
            Metric::ShootingPctg => zone.shooting_pctg_rank = rank,
        }
    }

    pub(crate) fn set_total_rank(&self, row: &mut TotalStat, rank: u32) {
        match self {
            Metric::Sog => row.sog_rank = rank,
            Metric::Goals => row.goals_rank = rank,
            Metric::ShootingPctg => row.shooting_pctg_rank = rank,
        }
    }

    pub(crate) fn set_total_average(&self, row: &mut TotalStat, average: f64) {
        match self {
            Metric::Sog => row.sog_league_avg = average,
            Metric::Goals => row.goals_league_avg = average,
            Metric::ShootingPctg => row.shooting_pctg_league_avg = average,
        }
    }
}

/// Shot statistics for one named zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStat {
    pub area: String,
    #[serde(default)]
    pub sog: u32,
    #[serde(default)]
    pub goals: u32,
    /// Decimal in [0, 1]; multiplied by 100 only for display
    #[serde(default)]
    pub shooting_pctg: f64,
    /// 0 when the row carries no rank
    #[serde(default)]
    pub sog_rank: u32,
    #[serde(default)]
    pub goals_rank: u32,
    #[serde(default)]
    pub shooting_pctg_rank: u32,
}

/// Aggregate shot statistics for one location code and position filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalStat {
    pub location_code: String,
    pub position: Position,
    #[serde(default)]
    pub sog: u32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub shooting_pctg: f64,
    #[serde(default)]
    pub sog_rank: u32,
    #[serde(default)]
    pub goals_rank: u32,
    #[serde(default)]
    pub shooting_pctg_rank: u32,
    #[serde(default)]
    pub sog_league_avg: f64,
    #[serde(default)]
    pub goals_league_avg: f64,
    #[serde(default)]
    pub shooting_pctg_league_avg: f64,
}

/// One team's shot snapshot for a (season, game type) key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamShotRecord {
    #[serde(rename = "shotLocationDetails", default)]
    pub zones: Vec<ZoneStat>,
    #[serde(rename = "shotLocationTotals", default)]
    pub totals: Vec<TotalStat>,
}

impl TeamShotRecord {
    /// First zone row with the given area name
    pub fn zone(&self, area: &str) -> Option<&ZoneStat> {
        self.zones.iter().find(|z| z.area == area)
    }

    /// Shots on goal for a zone, zero when the zone is absent
    pub fn zone_sog(&self, area: &str) -> u32 {
        self.zone(area).map(|z| z.sog).unwrap_or(0)
    }

    /// First totals row matching location code and position
    pub fn totals_for(&self, location_code: &str, position: Position) -> Option<&TotalStat> {
        self.totals
            .iter()
            .find(|t| t.location_code == location_code && t.position == position)
    }

    /// All-zones totals row for a position filter
    pub fn overall(&self, position: Position) -> Option<&TotalStat> {
        self.totals_for(LOCATION_ALL, position)
    }

    pub fn has_zone_data(&self) -> bool {
        !self.zones.is_empty()
    }
}

/// A team's top skater for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leader {
    pub name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub player_id: Option<u64>,
    pub val: f64,
}

/// Skater leaders for a record key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaders {
    #[serde(default)]
    pub shots: Option<Leader>,
    #[serde(default)]
    pub goals: Option<Leader>,
    #[serde(default)]
    pub pctg: Option<Leader>,
}

static RECORD_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)_(\d{8})_(\d)$").expect("record key pattern is valid")
});

/// Dataset key "<teamId>_<seasonKey>_<gameType>"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey {
    pub team_id: TeamId,
    pub season: SeasonKey,
    pub game_type: GameType,
}

impl RecordKey {
    pub fn new(team_id: TeamId, season: SeasonKey, game_type: GameType) -> Self {
        Self {
            team_id,
            season,
            game_type,
        }
    }
}

impl FromStr for RecordKey {
    type Err = ShotMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ShotMapError::InvalidRecordKey { key: s.to_string() };
        let caps = RECORD_KEY_PATTERN.captures(s).ok_or_else(invalid)?;

        let team_id = caps[1].parse().map_err(|_| invalid())?;
        let season = caps[2].parse().map_err(|_| invalid())?;
        let code: u8 = caps[3].parse().map_err(|_| invalid())?;
        let game_type = GameType::from_code(code).ok_or_else(invalid)?;

        Ok(Self::new(team_id, season, game_type))
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}",
            self.team_id,
            self.season,
            self.game_type.code()
        )
    }
}

/// A team's record as a member of a ranking pool
#[derive(Debug, Clone, Copy)]
pub struct PoolMember<'a> {
    pub team_id: TeamId,
    pub record: &'a TeamShotRecord,
}

/// Per-team ranks captured in a daily snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRankSnapshot {
    pub fwd_sog_rank: Option<u32>,
    pub def_sog_rank: Option<u32>,
    pub fwd_goal_rank: Option<u32>,
    pub def_goal_rank: Option<u32>,
    pub fwd_pctg_rank: Option<u32>,
    pub def_pctg_rank: Option<u32>,
    #[serde(default)]
    pub zone_ranks: BTreeMap<String, u32>,
    #[serde(default)]
    pub zone_goal_ranks: BTreeMap<String, u32>,
    #[serde(default)]
    pub zone_pctg_ranks: BTreeMap<String, u32>,
}

/// League-wide regular-season ranks on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankSnapshot {
    pub date: NaiveDate,
    pub teams: BTreeMap<TeamId, TeamRankSnapshot>,
}

/// Bounded, date-ordered list of rank snapshots
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankHistory {
    pub snapshots: Vec<RankSnapshot>,
}

/// The full document produced by the fetch job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub fetched_at: DateTime<Utc>,
    pub teams: Vec<Team>,
    pub data: BTreeMap<String, TeamShotRecord>,
    #[serde(default)]
    pub leaders: BTreeMap<String, Leaders>,
    #[serde(default)]
    pub missing_keys: Vec<String>,
    #[serde(default)]
    pub history: RankHistory,
}
