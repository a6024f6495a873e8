use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::accounts;
use super::leaderboard::build_leaderboard;
use super::stats_aggregator::apply_to_collection;
use crate::error::Result;
use crate::model::{GameResult, GameStats, LeaderboardEntry, PlayerRecord, ScoreBreakdown};

pub const PLAYER_FILE_NAME: &str = "player_stats.json";
pub const GAME_FILE_NAME: &str = "hangman_stats.json";

/// Whole-collection persistence of player records.
pub trait PlayerStore {
    fn load_all(&self) -> Result<Vec<PlayerRecord>>;
    fn save_all(&self, records: &[PlayerRecord]) -> Result<()>;
}

/// Reads a JSON list, treating a missing, empty or corrupt file as empty.
fn read_json_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    match serde_json::from_str(&contents) {
        Ok(items) => Ok(items),
        Err(e) => {
            warn!(target: "stats", "Ignoring unreadable {}: {}", path.display(), e);
            Ok(Vec::new())
        }
    }
}

fn write_json_list<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let contents = serde_json::to_string_pretty(items)?;
    fs::write(path, contents)?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct JsonPlayerStore {
    path: PathBuf,
}

impl JsonPlayerStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PlayerStore for JsonPlayerStore {
    fn load_all(&self) -> Result<Vec<PlayerRecord>> {
        read_json_list(&self.path)
    }

    fn save_all(&self, records: &[PlayerRecord]) -> Result<()> {
        write_json_list(&self.path, records)
    }
}

#[derive(Debug)]
pub struct StatsManager<S: PlayerStore = JsonPlayerStore> {
    players: S,
    history_path: PathBuf,
}

impl StatsManager<JsonPlayerStore> {
    pub fn new(data_dir: &Path) -> Result<Self> {
        if !data_dir.exists() {
            fs::create_dir_all(data_dir)?;
        }
        Ok(Self::with_store(
            JsonPlayerStore::new(data_dir.join(PLAYER_FILE_NAME)),
            data_dir.join(GAME_FILE_NAME),
        ))
    }
}

impl<S: PlayerStore> StatsManager<S> {
    pub fn with_store(players: S, history_path: PathBuf) -> Self {
        Self {
            players,
            history_path,
        }
    }

    pub fn find_player(&self, name: &str) -> Result<Option<PlayerRecord>> {
        Ok(self
            .players
            .load_all()?
            .into_iter()
            .find(|record| record.name == name))
    }

    pub fn register_player(&self, name: &str, password: &str) -> Result<PlayerRecord> {
        let mut records = self.players.load_all()?;
        accounts::register_player(&mut records, name, password)?;
        self.players.save_all(&records)?;
        Ok(accounts::new_player(name, password))
    }

    pub fn game_history(&self) -> Result<Vec<GameStats>> {
        read_json_list(&self.history_path)
    }

    /// Every word `player_name` has already been given.
    pub fn words_played(&self, player_name: &str) -> Result<HashSet<String>> {
        Ok(self
            .game_history()?
            .into_iter()
            .filter(|game| game.result.player_name == player_name)
            .map(|game| game.result.hangman_word.clone())
            .collect())
    }

    /// Folds a finished game into the player's record and appends it to the history.
    /// The player record is updated first so a missing player leaves both files untouched.
    pub fn record_game(
        &self,
        result: &GameResult,
        breakdown: &ScoreBreakdown,
    ) -> Result<PlayerRecord> {
        let mut records = self.players.load_all()?;
        let updated = apply_to_collection(&mut records, result, breakdown)?;
        self.players.save_all(&records)?;

        let mut history = self.game_history()?;
        history.push(GameStats {
            result: result.clone(),
            score: breakdown.clone(),
        });
        write_json_list(&self.history_path, &history)?;
        info!(
            target: "stats",
            "Recorded {} points for {}", breakdown.total_score, result.player_name
        );
        Ok(updated)
    }

    /// Leaderboard of every player with at least one finished game.
    pub fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        let played: Vec<PlayerRecord> = self
            .players
            .load_all()?
            .into_iter()
            .filter(|record| record.totals.games > 0)
            .collect();
        build_leaderboard(&played)
    }
}

#[cfg(test)]
mod tests {
    use test_context::test_context;

    use super::*;
    use crate::error::HangmanError;
    use crate::game::scoring::{score, ScoringConfig};
    use crate::model::{Difficulty, GuessedMask};
    use crate::tests::UsingLogger;
    use std::collections::BTreeSet;
    use tempfile::tempdir;

    fn finished(name: &str, word: &str, won: bool) -> (GameResult, ScoreBreakdown) {
        let mask = if won {
            word.parse::<GuessedMask>().unwrap()
        } else {
            GuessedMask::hidden(word)
        };
        let result = GameResult::new(
            name,
            won,
            word,
            mask,
            BTreeSet::new(),
            12.0,
            Difficulty::Normal,
            1_700_000_000,
        );
        let breakdown = score(&result, &ScoringConfig::default()).unwrap();
        (result, breakdown)
    }

    #[test]
    fn test_register_then_find() {
        let dir = tempdir().unwrap();
        let manager = StatsManager::new(dir.path()).unwrap();
        assert_eq!(manager.find_player("alice").unwrap(), None);
        manager.register_player("alice", "Secret=1").unwrap();
        let record = manager.find_player("alice").unwrap().unwrap();
        assert!(record.has_password());
        assert!(manager.register_player("alice", "").is_err());
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_record_game_persists_across_managers(_: &mut UsingLogger) {
        let dir = tempdir().unwrap();
        let manager = StatsManager::new(dir.path()).unwrap();
        manager.register_player("alice", "").unwrap();
        let (result, breakdown) = finished("alice", "cat", true);
        let updated = manager.record_game(&result, &breakdown).unwrap();
        assert_eq!(updated.totals.games, 1);

        let reopened = StatsManager::new(dir.path()).unwrap();
        let record = reopened.find_player("alice").unwrap().unwrap();
        assert_eq!(record, updated);
        assert!(reopened.words_played("alice").unwrap().contains("cat"));
        assert!(reopened.words_played("bob").unwrap().is_empty());
        assert_eq!(reopened.game_history().unwrap().len(), 1);
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_record_game_for_unknown_player_writes_nothing(_: &mut UsingLogger) {
        let dir = tempdir().unwrap();
        let manager = StatsManager::new(dir.path()).unwrap();
        let (result, breakdown) = finished("ghost", "cat", true);
        let error = manager.record_game(&result, &breakdown).unwrap_err();
        assert!(matches!(error, HangmanError::PreconditionViolation(_)));
        assert!(manager.game_history().unwrap().is_empty());
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_corrupt_files_load_as_empty(_: &mut UsingLogger) {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(PLAYER_FILE_NAME), "{not json").unwrap();
        fs::write(dir.path().join(GAME_FILE_NAME), "").unwrap();
        let manager = StatsManager::new(dir.path()).unwrap();
        assert_eq!(manager.find_player("alice").unwrap(), None);
        assert!(manager.game_history().unwrap().is_empty());
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_leaderboard_skips_players_without_games(_: &mut UsingLogger) {
        let dir = tempdir().unwrap();
        let manager = StatsManager::new(dir.path()).unwrap();
        manager.register_player("alice", "").unwrap();
        manager.register_player("bob", "").unwrap();
        manager.register_player("carol", "").unwrap();
        let (lost, lost_score) = finished("alice", "cat", false);
        manager.record_game(&lost, &lost_score).unwrap();
        let (won, won_score) = finished("carol", "dog", true);
        manager.record_game(&won, &won_score).unwrap();

        let board = manager.leaderboard().unwrap();
        let names: Vec<_> = board.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["carol", "alice"]);
        assert_eq!(board[0].win_ratio, 100.0);
        assert_eq!(board[1].win_ratio, 0.0);
    }
}
