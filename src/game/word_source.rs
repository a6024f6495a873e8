use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::fs;
use std::path::Path;

use crate::error::{HangmanError, Result};

const BUILTIN_WORDS: &str = include_str!("words.txt");

/// Supplies random words of an exact length.
pub trait WordSource {
    fn get_word(&mut self, length: usize) -> Option<String>;
}

#[derive(Debug)]
pub struct WordList {
    words: Vec<String>,
    rng: StdRng,
}

impl WordList {
    pub fn new(words: Vec<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { words, rng }
    }

    /// Lowercase alphabetic lines of `text`; everything else is skipped.
    fn parse(text: &str) -> Vec<String> {
        text.lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty() && word.chars().all(|ch| ch.is_ascii_lowercase()))
            .collect()
    }

    pub fn builtin(seed: Option<u64>) -> Self {
        Self::new(Self::parse(BUILTIN_WORDS), seed)
    }

    pub fn from_file(path: &Path, seed: Option<u64>) -> Result<Self> {
        let words = Self::parse(&fs::read_to_string(path)?);
        info!(target: "words", "Loaded {} words from {}", words.len(), path.display());
        Ok(Self::new(words, seed))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordList {
    fn get_word(&mut self, length: usize) -> Option<String> {
        let candidates: Vec<&String> = self
            .words
            .iter()
            .filter(|word| word.chars().count() == length)
            .collect();
        candidates.choose(&mut self.rng).map(|word| (*word).clone())
    }
}

/// Draws words until one passes `is_used`, giving up after `max_attempts` draws.
pub fn pick_unused_word<S, F>(
    source: &mut S,
    length: usize,
    max_attempts: usize,
    is_used: F,
) -> Result<String>
where
    S: WordSource + ?Sized,
    F: Fn(&str) -> bool,
{
    for attempt in 1..=max_attempts {
        let word = source.get_word(length).ok_or_else(|| {
            HangmanError::WordSource(format!("no words of length {} available", length))
        })?;
        if !is_used(&word) {
            return Ok(word);
        }
        debug!(target: "words", "'{}' already played, drawing again (attempt {})", word, attempt);
    }
    Err(HangmanError::WordSource(format!(
        "no unused word of length {} after {} attempts",
        length, max_attempts
    )))
}
