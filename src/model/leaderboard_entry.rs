use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub win_ratio: f64,
    pub total_score: i64,
    pub total_wins: u32,
    pub total_games: u32,
    pub average_score: f64,
    pub average_time: f64,
}
