use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::scoring::ScoringConfig;
use crate::error::{HangmanError, Result};
use crate::model::Difficulty;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PerDifficulty {
    pub easy: u32,
    pub normal: u32,
    pub hard: u32,
}

impl PerDifficulty {
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default = "default_word_lengths")]
    pub word_lengths: PerDifficulty,

    #[serde(default = "default_max_wrong_guesses")]
    pub max_wrong_guesses: PerDifficulty,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default = "default_min_password_length")]
    pub min_password_length: u32,

    #[serde(default = "default_password_attempts")]
    pub password_attempts: u32,

    #[serde(default = "default_true")]
    pub clear_screen: bool,

    #[serde(default)]
    pub show_word: bool,

    #[serde(default)]
    pub word_list: Option<PathBuf>,
}

// Helper functions for default values
fn default_version() -> u32 {
    1
}
fn default_true() -> bool {
    true
}
fn default_word_lengths() -> PerDifficulty {
    PerDifficulty {
        easy: 8,
        normal: 10,
        hard: 15,
    }
}
fn default_max_wrong_guesses() -> PerDifficulty {
    PerDifficulty {
        easy: 9,
        normal: 9,
        hard: 6,
    }
}
fn default_min_password_length() -> u32 {
    8
}
fn default_password_attempts() -> u32 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: default_version(),
            word_lengths: default_word_lengths(),
            max_wrong_guesses: default_max_wrong_guesses(),
            scoring: ScoringConfig::default(),
            min_password_length: default_min_password_length(),
            password_attempts: default_password_attempts(),
            clear_screen: true,
            show_word: false,
            word_list: None,
        }
    }
}

impl Settings {
    /// Reads settings from `path`, writing the defaults there first if the file is missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let default = Settings::default();
            default.save(path)?;
            info!(target: "settings", "Created default settings at {}", path.display());
            return Ok(default.with_env_overrides());
        }

        let contents = fs::read_to_string(path)?;
        let mut settings = serde_json::from_str::<Settings>(&contents).map_err(|e| {
            HangmanError::Configuration(format!("cannot parse {}: {}", path.display(), e))
        })?;
        settings.migrate();
        settings.validate()?;
        Ok(settings.with_env_overrides())
    }

    /// `DEBUG=1` reveals the word during play. Never written back to disk.
    fn with_env_overrides(mut self) -> Self {
        if Self::is_debug_mode() && !self.show_word {
            warn!(target: "settings", "DEBUG=1, revealing words during play");
            self.show_word = true;
        }
        self
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure the directory exists
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    fn migrate(&mut self) {
        match self.version {
            0 => {
                self.version = 1;
            }
            _ => (),
        }
    }

    /// Every numeric setting must be a positive integer.
    pub fn validate(&self) -> Result<()> {
        let mut checks: Vec<(String, u32)> = self
            .scoring
            .fields()
            .iter()
            .map(|(name, value)| (format!("scoring.{}", name), *value))
            .collect();
        for difficulty in Difficulty::all() {
            let key = difficulty.label().to_lowercase();
            checks.push((
                format!("word_lengths.{}", key),
                self.word_lengths.get(difficulty),
            ));
            checks.push((
                format!("max_wrong_guesses.{}", key),
                self.max_wrong_guesses.get(difficulty),
            ));
        }
        checks.push(("min_password_length".to_string(), self.min_password_length));
        checks.push(("password_attempts".to_string(), self.password_attempts));

        match checks.into_iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(HangmanError::Configuration(format!(
                "{} must be a positive integer",
                name
            ))),
            None => Ok(()),
        }
    }

    pub fn word_length(&self, difficulty: Difficulty) -> usize {
        self.word_lengths.get(difficulty) as usize
    }

    pub fn max_wrong(&self, difficulty: Difficulty) -> usize {
        self.max_wrong_guesses.get(difficulty) as usize
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    pub fn seed_from_env() -> Option<u64> {
        std::env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok())
    }
}
