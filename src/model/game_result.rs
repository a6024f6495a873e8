use crate::model::{Difficulty, GuessedMask};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Raw telemetry of one finished round.
#[readonly::make]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameResult {
    pub player_name: String,
    pub won: bool,
    pub hangman_word: String,
    pub guessed_mask: GuessedMask,
    pub wrong_letters: BTreeSet<char>,
    pub elapsed_seconds: f64,
    pub difficulty: Difficulty,
    /// Unix seconds at which the round was opened.
    pub opened_at: i64,
    pub playthrough_id: Uuid,
}

impl GameResult {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        player_name: impl Into<String>,
        won: bool,
        hangman_word: impl Into<String>,
        guessed_mask: GuessedMask,
        wrong_letters: BTreeSet<char>,
        elapsed_seconds: f64,
        difficulty: Difficulty,
        opened_at: i64,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            won,
            hangman_word: hangman_word.into(),
            guessed_mask,
            wrong_letters,
            elapsed_seconds,
            difficulty,
            opened_at,
            playthrough_id: Uuid::new_v4(),
        }
    }

    pub fn word_length(&self) -> usize {
        self.hangman_word.chars().count()
    }
}
