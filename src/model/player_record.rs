use crate::model::Difficulty;
use serde::{Deserialize, Serialize};

/// Statistics scoped to one difficulty.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DifficultyStats {
    pub games: u32,
    pub wins: u32,
    pub highest_score: i64,
    pub average_score: f64,
    pub average_time: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TotalStats {
    pub games: u32,
    pub wins: u32,
    pub score: i64,
    pub average_score: f64,
    pub average_time: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DifficultyBuckets {
    pub easy: DifficultyStats,
    pub normal: DifficultyStats,
    pub hard: DifficultyStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    #[serde(default)]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub by_difficulty: DifficultyBuckets,
    #[serde(default)]
    pub totals: TotalStats,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, password_hash: Option<String>) -> Self {
        Self {
            name: name.into(),
            password_hash,
            by_difficulty: DifficultyBuckets::default(),
            totals: TotalStats::default(),
        }
    }

    pub fn bucket(&self, difficulty: Difficulty) -> &DifficultyStats {
        match difficulty {
            Difficulty::Easy => &self.by_difficulty.easy,
            Difficulty::Normal => &self.by_difficulty.normal,
            Difficulty::Hard => &self.by_difficulty.hard,
        }
    }

    pub fn bucket_mut(&mut self, difficulty: Difficulty) -> &mut DifficultyStats {
        match difficulty {
            Difficulty::Easy => &mut self.by_difficulty.easy,
            Difficulty::Normal => &mut self.by_difficulty.normal,
            Difficulty::Hard => &mut self.by_difficulty.hard,
        }
    }

    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Sum of the per-difficulty game counters; always equals `totals.games`.
    pub fn bucket_games(&self) -> u32 {
        Difficulty::all()
            .into_iter()
            .map(|difficulty| self.bucket(difficulty).games)
            .sum()
    }
}
