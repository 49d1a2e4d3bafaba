//! Dataset loading, record lookup and snapshot management.
//!
//! The dataset document is owned by the external fetch job and reloaded
//! wholesale. Queries read an immutable snapshot; a refresh swaps a new
//! snapshot in through [`SnapshotStore`] without touching the old one.

use crate::constants::{APP_DIR_NAME, DATASET_FILENAME, PUBLIC_DATASET_PATH};
use crate::error::{Result, ShotMapError};
use crate::models::{
    Dataset, GameType, Leaders, PoolMember, RecordKey, SeasonKey, Team, TeamId, TeamShotRecord,
};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::fs;
use tracing::{debug, warn};

impl Dataset {
    /// Parse a dataset document from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a dataset document from disk
    pub async fn load(path: &Path) -> Result<Self> {
        if !fs::try_exists(path).await? {
            return Err(ShotMapError::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path).await?;
        let dataset: Dataset =
            serde_json::from_str(&contents).map_err(|e| ShotMapError::InvalidDataset {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!(
            "Loaded dataset from {}: {} teams, {} records, {} missing keys, {} history days",
            path.display(),
            dataset.teams.len(),
            dataset.data.len(),
            dataset.missing_keys.len(),
            dataset.history.snapshots.len()
        );

        Ok(dataset)
    }

    /// Write the dataset document back to disk as pretty-printed JSON
    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).await?;
        debug!("Wrote dataset to {}", path.display());
        Ok(())
    }

    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    /// Raw record for a key; `None` means no data for the selection
    pub fn record(
        &self,
        team_id: TeamId,
        season: SeasonKey,
        game_type: GameType,
    ) -> Option<&TeamShotRecord> {
        let key = RecordKey::new(team_id, season, game_type);
        self.data.get(&key.to_string())
    }

    pub fn leaders(
        &self,
        team_id: TeamId,
        season: SeasonKey,
        game_type: GameType,
    ) -> Option<&Leaders> {
        let key = RecordKey::new(team_id, season, game_type);
        self.leaders.get(&key.to_string())
    }

    /// Whether the fetch job recorded the key as having no data
    pub fn is_missing(&self, team_id: TeamId, season: SeasonKey, game_type: GameType) -> bool {
        let key = RecordKey::new(team_id, season, game_type).to_string();
        self.missing_keys.iter().any(|k| *k == key)
    }

    /// Every record for a season and game type, in pool order.
    ///
    /// Pool order is the order of the team list, followed by any teams
    /// absent from the list by ascending id. Equal values keep this order
    /// when ranked. Malformed keys are skipped, and a team appears at most
    /// once: when two keys name the same team the first key wins.
    pub fn pool_members(&self, season: SeasonKey, game_type: GameType) -> Vec<PoolMember<'_>> {
        let team_order: HashMap<TeamId, usize> = self
            .teams
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id, i))
            .collect();

        let mut members = Vec::new();
        let mut seen = HashSet::new();
        for (key, record) in &self.data {
            let parsed = match key.parse::<RecordKey>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    warn!("Skipping malformed record key: {}", key);
                    continue;
                }
            };

            if parsed.season == season && parsed.game_type == game_type {
                if !seen.insert(parsed.team_id) {
                    warn!("Skipping duplicate record key for team {}: {}", parsed.team_id, key);
                    continue;
                }
                members.push(PoolMember {
                    team_id: parsed.team_id,
                    record,
                });
            }
        }

        members.sort_by_key(|m| {
            (
                team_order.get(&m.team_id).copied().unwrap_or(usize::MAX),
                m.team_id,
            )
        });
        members
    }
}

/// Default dataset location: the per-user data dir when a dataset has been
/// installed there, otherwise the web front end's public directory
pub fn default_dataset_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        let candidate = data_dir.join(APP_DIR_NAME).join(DATASET_FILENAME);
        if candidate.exists() {
            return candidate;
        }
    }
    PathBuf::from(PUBLIC_DATASET_PATH)
}

/// Holder of the current immutable dataset snapshot.
///
/// Readers clone the `Arc` and keep working against it while a refresh
/// replaces the stored pointer.
#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Arc<Dataset>>,
}

impl SnapshotStore {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            current: RwLock::new(Arc::new(dataset)),
        }
    }

    /// The snapshot in effect right now
    pub fn current(&self) -> Arc<Dataset> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in a new snapshot, returning the previous one
    pub fn replace(&self, dataset: Dataset) -> Arc<Dataset> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(dataset))
    }

    /// Load a fresh dataset from disk and swap it in
    pub async fn reload(&self, path: &Path) -> Result<Arc<Dataset>> {
        let dataset = Dataset::load(path).await?;
        self.replace(dataset);
        Ok(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Position, TotalStat, ZoneStat};
    use tempfile::TempDir;

    fn dataset_json() -> String {
        r##"{
            "fetchedAt": "2026-03-01T12:00:00Z",
            "teams": [
                { "id": 9, "name": "Senators", "city": "Ottawa", "abbr": "OTT", "color": "#C52032" },
                { "id": 6, "name": "Bruins", "city": "Boston", "abbr": "BOS", "color": "#FFB81C" }
            ],
            "data": {
                "6_20252026_2": {
                    "shotLocationDetails": [
                        { "area": "Crease", "sog": 40, "goals": 9, "shootingPctg": 0.225,
                          "sogRank": 3, "goalsRank": 2, "shootingPctgRank": 5 }
                    ],
                    "shotLocationTotals": [
                        { "locationCode": "all", "position": "all", "sog": 900, "goals": 90,
                          "shootingPctg": 0.1, "sogRank": 10, "goalsRank": 9, "shootingPctgRank": 12,
                          "sogLeagueAvg": 880.0, "goalsLeagueAvg": 85.0, "shootingPctgLeagueAvg": 0.097 }
                    ]
                },
                "9_20252026_2": { "shotLocationDetails": [], "shotLocationTotals": [] },
                "9_20252026_3": { "shotLocationDetails": [], "shotLocationTotals": [] },
                "bogus": { "shotLocationDetails": [], "shotLocationTotals": [] }
            },
            "leaders": {
                "6_20252026_2": { "shots": { "name": "Pastrnak", "val": 210 }, "goals": null, "pctg": null }
            },
            "missingKeys": ["6_20252026_3"]
        }"##
        .to_string()
    }

    #[test]
    fn test_parse_dataset_document() {
        let dataset = Dataset::from_json_str(&dataset_json()).unwrap();
        let season: SeasonKey = "20252026".parse().unwrap();

        assert_eq!(dataset.teams.len(), 2);
        assert!(dataset.history.snapshots.is_empty());

        let record = dataset.record(6, season, GameType::Regular).unwrap();
        assert_eq!(
            record.zone("Crease"),
            Some(&ZoneStat {
                area: "Crease".to_string(),
                sog: 40,
                goals: 9,
                shooting_pctg: 0.225,
                sog_rank: 3,
                goals_rank: 2,
                shooting_pctg_rank: 5,
            })
        );
        let totals: &TotalStat = record.overall(Position::All).unwrap();
        assert_eq!(totals.sog_league_avg, 880.0);

        assert!(dataset.record(6, season, GameType::Playoffs).is_none());
        assert!(dataset.is_missing(6, season, GameType::Playoffs));

        let leaders = dataset.leaders(6, season, GameType::Regular).unwrap();
        assert_eq!(leaders.shots.as_ref().unwrap().name, "Pastrnak");
        assert!(leaders.goals.is_none());
    }

    #[test]
    fn test_pool_members_follow_team_list_order() {
        let dataset = Dataset::from_json_str(&dataset_json()).unwrap();
        let season: SeasonKey = "20252026".parse().unwrap();

        let members = dataset.pool_members(season, GameType::Regular);
        let ids: Vec<TeamId> = members.iter().map(|m| m.team_id).collect();

        // Ottawa precedes Boston in the team list even though "6_" sorts first
        assert_eq!(ids, vec![9, 6]);

        let playoff_ids: Vec<TeamId> = dataset
            .pool_members(season, GameType::Playoffs)
            .iter()
            .map(|m| m.team_id)
            .collect();
        assert_eq!(playoff_ids, vec![9]);
    }

    #[test]
    fn test_pool_members_skip_duplicate_team_keys() {
        let mut dataset = Dataset::from_json_str(&dataset_json()).unwrap();
        let season: SeasonKey = "20252026".parse().unwrap();
        let original = dataset.record(6, season, GameType::Regular).unwrap().clone();
        dataset
            .data
            .insert("06_20252026_2".to_string(), TeamShotRecord::default());

        let members = dataset.pool_members(season, GameType::Regular);
        let ids: Vec<TeamId> = members.iter().map(|m| m.team_id).collect();
        assert_eq!(ids, vec![9, 6]);

        // "06_..." sorts before "6_..." so it is the key kept
        assert_eq!(*members[1].record, TeamShotRecord::default());
        assert_ne!(*members[1].record, original);

        let pool = crate::ranking::build_pool_ranks_with(&dataset, season, GameType::Regular, |_| true)
            .unwrap();
        assert_eq!(pool.pool_size, 2);
    }

    #[tokio::test]
    async fn test_save_preserves_shooting_percentages_exactly() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nhl-data.json");

        let mut dataset = Dataset::from_json_str(&dataset_json()).unwrap();
        let season: SeasonKey = "20252026".parse().unwrap();
        let key = RecordKey::new(6, season, GameType::Regular).to_string();
        let record = dataset.data.get_mut(&key).unwrap();
        for (i, zone) in (1u32..).zip(record.zones.iter_mut()) {
            zone.shooting_pctg = 1.0 / f64::from(i + 10);
        }
        record.totals[0].shooting_pctg = 7.0 / 77.0;
        record.totals[0].shooting_pctg_league_avg = 100.0 / 1099.0;

        dataset.save(&path).await.unwrap();
        let reloaded = Dataset::load(&path).await.unwrap();

        assert_eq!(reloaded, dataset);
        let totals = reloaded.record(6, season, GameType::Regular).unwrap();
        assert_eq!(totals.totals[0].shooting_pctg.to_bits(), (7.0f64 / 77.0).to_bits());
    }

    #[tokio::test]
    async fn test_load_and_save_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nhl-data.json");
        tokio::fs::write(&path, dataset_json()).await.unwrap();

        let dataset = Dataset::load(&path).await.unwrap();

        let out_path = temp_dir.path().join("out").join("nhl-data.json");
        dataset.save(&out_path).await.unwrap();
        let reloaded = Dataset::load(&out_path).await.unwrap();

        assert_eq!(dataset, reloaded);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");

        match Dataset::load(&path).await {
            Err(ShotMapError::DatasetNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("Expected DatasetNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        assert!(matches!(
            Dataset::load(&path).await,
            Err(ShotMapError::InvalidDataset { .. })
        ));
    }

    #[test]
    fn test_snapshot_store_swaps_atomically() {
        let first = Dataset::from_json_str(&dataset_json()).unwrap();
        let mut second = first.clone();
        second.teams.truncate(1);

        let store = SnapshotStore::new(first);
        let held = store.current();
        assert_eq!(held.teams.len(), 2);

        let previous = store.replace(second);
        assert_eq!(previous.teams.len(), 2);

        // A reader holding the old snapshot is unaffected by the swap
        assert_eq!(held.teams.len(), 2);
        assert_eq!(store.current().teams.len(), 1);
    }
}
