pub mod accounts;
pub mod leaderboard;
pub mod round;
pub mod scoring;
pub mod settings;
pub mod stats_aggregator;
pub mod stats_manager;
pub mod word_source;

pub use leaderboard::build_leaderboard;
pub use scoring::{score, ScoringConfig};
pub use stats_aggregator::apply_result;
