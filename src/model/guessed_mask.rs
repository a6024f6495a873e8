use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const BLANK: char = '_';

/// The word as the player currently sees it: one slot per letter, `None` while hidden.
#[derive(Debug, Clone, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub struct GuessedMask(Vec<Option<char>>);

impl GuessedMask {
    pub fn hidden(word: &str) -> Self {
        GuessedMask(word.chars().map(|_| None).collect())
    }

    /// Reveals every position of `word` holding `letter`, returning how many were uncovered.
    pub fn reveal(&mut self, word: &str, letter: char) -> usize {
        let mut revealed = 0;
        for (slot, ch) in self.0.iter_mut().zip(word.chars()) {
            if ch == letter && slot.is_none() {
                *slot = Some(ch);
                revealed += 1;
            }
        }
        revealed
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    pub fn slots(&self) -> &[Option<char>] {
        &self.0
    }
}

impl fmt::Display for GuessedMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            write!(f, "{}", slot.unwrap_or(BLANK))?;
        }
        Ok(())
    }
}

impl FromStr for GuessedMask {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(GuessedMask(
            s.chars()
                .map(|ch| if ch == BLANK { None } else { Some(ch) })
                .collect(),
        ))
    }
}
