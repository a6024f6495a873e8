use crate::model::{GameResult, ScoreBreakdown};
use serde::{Deserialize, Serialize};

/// One entry of the per-game history file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameStats {
    #[serde(flatten)]
    pub result: GameResult,
    pub score: ScoreBreakdown,
}
