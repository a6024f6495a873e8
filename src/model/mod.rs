mod difficulty;
mod game_result;
mod game_stats;
mod guessed_mask;
mod leaderboard_entry;
mod player_record;
mod score_breakdown;
mod timer_state;

pub use difficulty::Difficulty;
pub use game_result::GameResult;
pub use game_stats::GameStats;
pub use guessed_mask::{GuessedMask, BLANK};
pub use leaderboard_entry::LeaderboardEntry;
pub use player_record::{DifficultyBuckets, DifficultyStats, PlayerRecord, TotalStats};
pub use score_breakdown::ScoreBreakdown;
pub use timer_state::GameTimer;
