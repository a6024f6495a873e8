use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Itemized points of one finished round. `wrong_letters_points` is stored as a
/// positive penalty; `time_points` is signed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub hangman_word: String,
    pub won: bool,
    pub correct_letter_count: usize,
    pub correct_letters_points: i64,
    pub wrong_letter_count: usize,
    pub wrong_letters_points: i64,
    pub grace_period_seconds: i64,
    pub rounded_elapsed_seconds: i64,
    pub time_points: i64,
    pub win_bonus: i64,
    pub total_score: i64,
}

const RULE_WIDTH: usize = 20;

impl ScoreBreakdown {
    fn time_line(&self) -> String {
        match self.rounded_elapsed_seconds.cmp(&self.grace_period_seconds) {
            Ordering::Less => format!(
                "\t+ {} pts ({}s under the {}s grace period)",
                self.time_points,
                self.grace_period_seconds - self.rounded_elapsed_seconds,
                self.grace_period_seconds
            ),
            Ordering::Greater => format!(
                "\t- {} pts ({}s over the {}s grace period)",
                -self.time_points,
                self.rounded_elapsed_seconds - self.grace_period_seconds,
                self.grace_period_seconds
            ),
            Ordering::Equal => format!(
                "\t  0 pts (finished exactly on the {}s grace period)",
                self.grace_period_seconds
            ),
        }
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let finished = if self.won { "WON" } else { "LOST" };
        let rule = "#".repeat(RULE_WIDTH);
        writeln!(f, "YOU {}!", finished)?;
        writeln!(f, "Hangman word was: {}", self.hangman_word.to_uppercase())?;
        writeln!(f, "Score Summary:")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Points:")?;
        writeln!(
            f,
            "\t+ {} pts ({} correct letters)",
            self.correct_letters_points, self.correct_letter_count
        )?;
        if self.won {
            writeln!(f, "\t+ {} pts (win bonus)", self.win_bonus)?;
        }
        writeln!(f, "Penalties:")?;
        writeln!(
            f,
            "\t- {} pts ({} wrong letters)",
            self.wrong_letters_points, self.wrong_letter_count
        )?;
        writeln!(f, "Time:")?;
        writeln!(f, "{}", self.time_line())?;
        writeln!(f, "Total Score:")?;
        writeln!(f, "\t= {} pts", self.total_score)?;
        writeln!(f, "{}", rule)
    }
}
