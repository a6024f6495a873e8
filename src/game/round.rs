use log::trace;
use std::collections::BTreeSet;
use std::time::SystemTime;

use crate::error::{HangmanError, Result};
use crate::model::{Difficulty, GameResult, GameTimer, GuessedMask};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct(usize),
    Wrong,
    AlreadyTried,
    Invalid,
    RoundOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// Turn-by-turn state of one word.
#[derive(Debug, Clone)]
pub struct HangmanRound {
    word: String,
    mask: GuessedMask,
    right_letters: BTreeSet<char>,
    wrong_letters: BTreeSet<char>,
    max_wrong: usize,
}

impl HangmanRound {
    pub fn new(word: &str, max_wrong: usize) -> Result<Self> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(HangmanError::PreconditionViolation(
                "a round needs a word of at least one letter".to_string(),
            ));
        }
        if max_wrong == 0 {
            return Err(HangmanError::PreconditionViolation(
                "a round needs at least one allowed wrong guess".to_string(),
            ));
        }
        Ok(Self {
            mask: GuessedMask::hidden(&word),
            word,
            right_letters: BTreeSet::new(),
            wrong_letters: BTreeSet::new(),
            max_wrong,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn mask(&self) -> &GuessedMask {
        &self.mask
    }

    pub fn wrong_letters(&self) -> &BTreeSet<char> {
        &self.wrong_letters
    }

    pub fn tries_left(&self) -> usize {
        self.max_wrong.saturating_sub(self.wrong_letters.len())
    }

    /// Alphabet letters not yet guessed.
    pub fn remaining_letters(&self) -> Vec<char> {
        ('a'..='z')
            .filter(|ch| !self.right_letters.contains(ch) && !self.wrong_letters.contains(ch))
            .collect()
    }

    pub fn status(&self) -> RoundStatus {
        if self.mask.is_complete() {
            RoundStatus::Won
        } else if self.wrong_letters.len() >= self.max_wrong {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        self.status() != RoundStatus::InProgress
    }

    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::RoundOver;
        }
        let input = input.trim().to_lowercase();
        let mut chars = input.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_ascii_lowercase() => letter,
            _ => return GuessOutcome::Invalid,
        };

        let tried = self.right_letters.contains(&letter) || self.wrong_letters.contains(&letter);
        let outcome = if tried {
            GuessOutcome::AlreadyTried
        } else if self.word.contains(letter) {
            self.right_letters.insert(letter);
            GuessOutcome::Correct(self.mask.reveal(&self.word, letter))
        } else {
            self.wrong_letters.insert(letter);
            GuessOutcome::Wrong
        };
        trace!(target: "round", "Guess {:?} -> {:?} ({})", letter, outcome, self.mask);
        outcome
    }

    /// Closes the round and produces its telemetry.
    pub fn finish(
        &self,
        player_name: &str,
        difficulty: Difficulty,
        timer: &GameTimer,
        now: SystemTime,
    ) -> Result<GameResult> {
        let won = match self.status() {
            RoundStatus::Won => true,
            RoundStatus::Lost => false,
            RoundStatus::InProgress => {
                return Err(HangmanError::PreconditionViolation(format!(
                    "round for '{}' is still in progress",
                    self.word
                )))
            }
        };
        let timer = timer.ended(now);
        Ok(GameResult::new(
            player_name,
            won,
            self.word.clone(),
            self.mask.clone(),
            self.wrong_letters.clone(),
            timer.elapsed_seconds(),
            difficulty,
            timer.started_unix_seconds(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_correct_guess_reveals_all_positions() {
        let mut round = HangmanRound::new("banana", 3).unwrap();
        assert_eq!(round.guess("a"), GuessOutcome::Correct(3));
        assert_eq!(round.mask().to_string(), "_a_a_a");
        assert_eq!(round.status(), RoundStatus::InProgress);
    }

    #[test]
    fn test_input_is_normalised() {
        let mut round = HangmanRound::new("Cat", 3).unwrap();
        assert_eq!(round.word(), "cat");
        assert_eq!(round.guess(" C \n"), GuessOutcome::Correct(1));
    }

    #[test]
    fn test_invalid_and_repeated_guesses_cost_nothing() {
        let mut round = HangmanRound::new("cat", 3).unwrap();
        assert_eq!(round.guess("ca"), GuessOutcome::Invalid);
        assert_eq!(round.guess("7"), GuessOutcome::Invalid);
        assert_eq!(round.guess(""), GuessOutcome::Invalid);
        assert_eq!(round.guess("z"), GuessOutcome::Wrong);
        assert_eq!(round.guess("z"), GuessOutcome::AlreadyTried);
        assert_eq!(round.tries_left(), 2);
        assert!(!round.remaining_letters().contains(&'z'));
        assert_eq!(round.remaining_letters().len(), 25);
    }

    #[test]
    fn test_win_and_loss_conditions() {
        let mut won = HangmanRound::new("cat", 2).unwrap();
        for letter in ["c", "a", "t"] {
            won.guess(letter);
        }
        assert_eq!(won.status(), RoundStatus::Won);
        assert_eq!(won.guess("x"), GuessOutcome::RoundOver);

        let mut lost = HangmanRound::new("cat", 2).unwrap();
        lost.guess("x");
        lost.guess("y");
        assert_eq!(lost.status(), RoundStatus::Lost);
    }

    #[test]
    fn test_finish_produces_result() {
        let mut round = HangmanRound::new("cat", 2).unwrap();
        round.guess("c");
        round.guess("q");
        round.guess("w");
        let start = SystemTime::now();
        let timer = GameTimer::started_at(start);
        let result = round
            .finish("alice", Difficulty::Hard, &timer, start + Duration::from_secs(12))
            .unwrap();
        assert!(!result.won);
        assert_eq!(result.guessed_mask.to_string(), "c__");
        assert_eq!(result.wrong_letters.len(), 2);
        assert_eq!(result.elapsed_seconds, 12.0);
        assert_eq!(result.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_finish_in_progress_is_rejected() {
        let round = HangmanRound::new("cat", 2).unwrap();
        let timer = GameTimer::default();
        assert!(round
            .finish("alice", Difficulty::Easy, &timer, SystemTime::now())
            .is_err());
    }

    #[test]
    fn test_empty_word_is_rejected() {
        assert!(HangmanRound::new("  ", 3).is_err());
    }
}
