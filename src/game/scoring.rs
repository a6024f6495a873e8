use log::trace;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::{HangmanError, Result};
use crate::model::{GameResult, ScoreBreakdown};

/// Point multipliers applied by [`score`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoringConfig {
    pub points_per_correct_letter: u32,
    pub points_per_wrong_letter: u32,
    pub seconds_per_letter_grace: u32,
    pub points_per_second_over_or_under_grace: u32,
    pub win_bonus: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_per_correct_letter: 10,
            points_per_wrong_letter: 5,
            seconds_per_letter_grace: 5,
            points_per_second_over_or_under_grace: 5,
            win_bonus: 50,
        }
    }
}

impl ScoringConfig {
    pub fn fields(&self) -> [(&'static str, u32); 5] {
        [
            ("points_per_correct_letter", self.points_per_correct_letter),
            ("points_per_wrong_letter", self.points_per_wrong_letter),
            ("seconds_per_letter_grace", self.seconds_per_letter_grace),
            (
                "points_per_second_over_or_under_grace",
                self.points_per_second_over_or_under_grace,
            ),
            ("win_bonus", self.win_bonus),
        ]
    }
}

/// Elapsed seconds are rounded half-to-even before being compared to the grace period.
fn rounded_seconds(elapsed_seconds: f64) -> i64 {
    elapsed_seconds.round_ties_even() as i64
}

/// Scores a finished round. The word must hold at least one letter.
pub fn score(result: &GameResult, config: &ScoringConfig) -> Result<ScoreBreakdown> {
    let word_length = result.word_length();
    if word_length == 0 {
        return Err(HangmanError::PreconditionViolation(format!(
            "cannot score a round for {} with an empty word",
            result.player_name
        )));
    }

    let correct_letter_count = result.guessed_mask.revealed_count();
    let wrong_letter_count = result.wrong_letters.len();
    let correct_letters_points =
        correct_letter_count as i64 * i64::from(config.points_per_correct_letter);
    let wrong_letters_points =
        wrong_letter_count as i64 * i64::from(config.points_per_wrong_letter);

    let grace_period_seconds = word_length as i64 * i64::from(config.seconds_per_letter_grace);
    let rounded_elapsed_seconds = rounded_seconds(result.elapsed_seconds);
    let rate = i64::from(config.points_per_second_over_or_under_grace);
    let time_points = match rounded_elapsed_seconds.cmp(&grace_period_seconds) {
        Ordering::Less => (grace_period_seconds - rounded_elapsed_seconds) * rate,
        Ordering::Greater => -(rounded_elapsed_seconds - grace_period_seconds) * rate,
        Ordering::Equal => 0,
    };

    let win_bonus = if result.won {
        i64::from(config.win_bonus)
    } else {
        0
    };
    let total_score = correct_letters_points - wrong_letters_points + time_points + win_bonus;

    trace!(
        target: "scoring",
        "{} scored {} for '{}' (correct {}, wrong -{}, time {}, bonus {})",
        result.player_name,
        total_score,
        result.hangman_word,
        correct_letters_points,
        wrong_letters_points,
        time_points,
        win_bonus
    );

    Ok(ScoreBreakdown {
        hangman_word: result.hangman_word.clone(),
        won: result.won,
        correct_letter_count,
        correct_letters_points,
        wrong_letter_count,
        wrong_letters_points,
        grace_period_seconds,
        rounded_elapsed_seconds,
        time_points,
        win_bonus,
        total_score,
    })
}
