//! Statistics file store
//!
//! Reads and writes the counters as a small JSON document. Writes go to a
//! sibling temp file first and are renamed over the target.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::errors::GameResult;
use crate::models::statistics::{Statistics, StatsRecord};

pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when there is no file yet.
    pub fn load(&self) -> GameResult<Option<Statistics>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record: StatsRecord = serde_json::from_str(&text)?;
        let stats = Statistics::try_from(record)?;
        log::info!(
            "loaded {} games from {}",
            stats.total_games(),
            self.path.display()
        );
        Ok(Some(stats))
    }

    pub fn save(&self, stats: &Statistics) -> GameResult<()> {
        let json = serde_json::to_string_pretty(&StatsRecord::from(stats))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::info!(
            "saved {} games to {}",
            stats.total_games(),
            self.path.display()
        );
        Ok(())
    }

    /// Removes the file. Absent is fine.
    pub fn clear(&self) -> GameResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("removed {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::GameError;
    use crate::models::moves::Outcome;

    fn store_in(dir: &tempfile::TempDir) -> StatsStore {
        StatsStore::new(dir.path().join("stats.json"))
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).load().unwrap().is_none());
    }

    #[test]
    fn save_writes_keys_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut stats = Statistics::new();
        stats.record(Outcome::Win);
        stats.record(Outcome::Tie);
        store.save(&stats).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        let keys = ["player_wins", "computer_wins", "ties", "total_games", "win_rate"];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| text.find(&format!("\"{}\"", k)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", text);
        assert!(text.contains("\"win_rate\": 50.0"), "{}", text);
        assert!(!dir.path().join("stats.json.tmp").exists());
    }

    #[test]
    fn malformed_json_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(store.load(), Err(GameError::Corrupt(_))));
    }

    #[test]
    fn counters_that_do_not_add_up_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{"player_wins":1,"computer_wins":1,"ties":1,"total_games":9,"win_rate":11.1}"#,
        )
        .unwrap();
        assert!(matches!(store.load(), Err(GameError::Inconsistent { .. })));
    }

    #[test]
    fn negative_counter_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{"player_wins":-1,"computer_wins":1,"ties":0,"total_games":0,"win_rate":0.0}"#,
        )
        .unwrap();
        assert!(matches!(store.load(), Err(GameError::Corrupt(_))));
    }

    #[test]
    fn full_counters_load_and_keep_recording_safely() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let json = serde_json::json!({
            "player_wins": u32::MAX,
            "computer_wins": 0,
            "ties": 0,
            "total_games": u32::MAX,
            "win_rate": 100.0,
        });
        fs::write(store.path(), json.to_string()).unwrap();
        let mut stats = store.load().unwrap().unwrap();
        stats.record(Outcome::Win);
        assert_eq!(stats.total_games(), u32::MAX);
        assert_eq!(stats.player_wins(), u32::MAX);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path().join("nested").join("deeper").join("stats.json"));
        store.save(&Statistics::new()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&Statistics::new()).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        store.clear().unwrap();
    }
}
