use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use itertools::Itertools;
use log::{info, warn};
use std::io::{BufRead, ErrorKind, Write};
use std::time::SystemTime;

use super::render;
use crate::error::{HangmanError, Result};
use crate::game::accounts::{self, PASSWORD_SPECIAL_CHARS};
use crate::game::round::{GuessOutcome, HangmanRound};
use crate::game::scoring::score;
use crate::game::settings::Settings;
use crate::game::stats_manager::{PlayerStore, StatsManager};
use crate::game::word_source::{pick_unused_word, WordSource};
use crate::model::{Difficulty, GameTimer};

/// Bound on how many times any single prompt is repeated.
pub const MAX_PROMPT_ATTEMPTS: usize = 5;
pub const MAX_WORD_ATTEMPTS: usize = 50;

/// Writes `prompt` and reads one line without its terminator. A closed input is an error.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(std::io::Error::new(ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Interactive terminal session for one player.
pub struct Session<'a, R: BufRead, W: Write, S: PlayerStore> {
    input: R,
    output: W,
    settings: &'a Settings,
    stats: &'a StatsManager<S>,
    words: &'a mut dyn WordSource,
}

impl<'a, R: BufRead, W: Write, S: PlayerStore> Session<'a, R, W, S> {
    pub fn new(
        input: R,
        output: W,
        settings: &'a Settings,
        stats: &'a StatsManager<S>,
        words: &'a mut dyn WordSource,
    ) -> Self {
        Self {
            input,
            output,
            settings,
            stats,
            words,
        }
    }

    fn clear(&mut self) -> Result<()> {
        if self.settings.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        prompt_line(&mut self.input, &mut self.output, prompt)
    }

    /// Re-asks `prompt` until `parse` accepts the answer, at most [`MAX_PROMPT_ATTEMPTS`] times.
    fn ask_until<T, F>(&mut self, prompt: &str, what: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, String>,
    {
        for _ in 0..MAX_PROMPT_ATTEMPTS {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(message) => self.say(&message)?,
            }
        }
        Err(HangmanError::PreconditionViolation(format!(
            "no valid {} after {} attempts",
            what, MAX_PROMPT_ATTEMPTS
        )))
    }

    pub fn run(&mut self) -> Result<()> {
        self.say(&format!("{}\nWelcome to Hangman\n{}", render::RULE, render::RULE))?;
        let name = self.sign_in()?;

        loop {
            if !self.play_round(&name)? {
                break;
            }
            self.say("\n======================================")?;
            let again = self.ask("Play Again? (yes) or Enter to exit: ")?;
            if !again.trim().eq_ignore_ascii_case("yes") {
                break;
            }
        }
        self.say("Goodbye!")?;
        Ok(())
    }

    fn sign_in(&mut self) -> Result<String> {
        let name = self.ask_until(
            "\nEnter your name (3 or more characters): ",
            "player name",
            accounts::validate_player_name,
        )?;

        match self.stats.find_player(&name)? {
            Some(record) => {
                self.say("Welcome back, lets play!")?;
                let attempts = self.settings.password_attempts;
                let input = &mut self.input;
                let output = &mut self.output;
                let outcome = accounts::verify_login(&record, attempts, |left| {
                    if left < attempts {
                        writeln!(output, "Incorrect Password, {} attempts left", left)?;
                    }
                    prompt_line(&mut *input, &mut *output, "Password: ")
                });
                if let Err(e) = outcome {
                    if matches!(e, HangmanError::Authentication(_)) {
                        self.say("Too many incorrect password attempts, exiting")?;
                    }
                    return Err(e);
                }
            }
            None => {
                self.say("Hi new player, lets build your profile")?;
                let wants_password =
                    self.ask("Do you want to set a password? (yes) or Enter to skip: ")?;
                let password = if wants_password.trim().eq_ignore_ascii_case("yes") {
                    self.create_password()?
                } else {
                    String::new()
                };
                self.stats.register_player(&name, &password)?;
            }
        }
        info!(target: "session", "{} signed in", name);
        Ok(name)
    }

    fn create_password(&mut self) -> Result<String> {
        let min_length = self.settings.min_password_length as usize;
        let specials = PASSWORD_SPECIAL_CHARS.iter().join(",");
        let prompt = format!(
            concat!(
                "\nEnter your password\nRequirements:\n",
                "\t# {} or more characters\n",
                "\t# min 1 upper case\n",
                "\t# min 1 lower case\n",
                "\t# 1 special character ({}): "
            ),
            min_length, specials
        );
        self.ask_until(&prompt, "password", |answer| {
            accounts::validate_password(answer, min_length).map(|()| answer.to_string())
        })
    }

    fn select_difficulty(&mut self) -> Result<Difficulty> {
        self.clear()?;
        let settings = self.settings;
        let menu = render::difficulty_menu(|difficulty| settings.word_length(difficulty));
        self.say(&menu)?;
        let difficulty = self.ask_until("Type Number:\n: ", "difficulty", |answer| {
            Difficulty::from_menu_choice(answer)
                .ok_or_else(|| format!("You selected: {}\nInvalid Selection, try again", answer))
        })?;
        self.say(&format!("You selected: {}", difficulty))?;
        Ok(difficulty)
    }

    /// Asks for a difficulty and draws an unused word for it. `None` when the player typed
    /// `exit` at the ready check. A difficulty with no unused words sends the player back
    /// to the menu.
    fn choose_word(&mut self, name: &str) -> Result<Option<(Difficulty, String)>> {
        let mut last_error = None;
        for _ in 0..MAX_PROMPT_ATTEMPTS {
            let difficulty = self.select_difficulty()?;
            let ready = self.ask(
                "Are you ready to play? \n(hit 'Enter/Return' to start or type 'exit'): ",
            )?;
            if ready.trim() == "exit" {
                return Ok(None);
            }
            self.clear()?;

            let length = self.settings.word_length(difficulty);
            let played = self.stats.words_played(name)?;
            self.say("Getting Word...")?;
            match pick_unused_word(&mut *self.words, length, MAX_WORD_ATTEMPTS, |word| {
                played.contains(word)
            }) {
                Ok(word) => return Ok(Some((difficulty, word))),
                Err(HangmanError::WordSource(message)) => {
                    warn!(target: "session", "{}: {}", name, message);
                    self.say(&format!(
                        "No new {} words left for you, pick another difficulty",
                        difficulty
                    ))?;
                    last_error = Some(HangmanError::WordSource(message));
                }
                Err(e) => return Err(e),
            }
        }
        Err(last_error.unwrap_or_else(|| {
            HangmanError::WordSource(format!("no word found for {}", name))
        }))
    }

    /// Plays one word. Returns `false` when the player typed `exit` at the ready check.
    fn play_round(&mut self, name: &str) -> Result<bool> {
        let Some((difficulty, word)) = self.choose_word(name)? else {
            return Ok(false);
        };

        let mut round = HangmanRound::new(&word, self.settings.max_wrong(difficulty))?;
        let timer = GameTimer::default();
        let mut notice = String::new();
        while !round.is_over() {
            self.clear()?;
            if !notice.is_empty() {
                self.say(&notice)?;
            }
            let status = render::round_status(&round, timer.elapsed_seconds());
            self.say(&status)?;
            if self.settings.show_word {
                self.say(&format!("Here is the word to guess: {}", round.word()))?;
            }
            let answer = self.ask("\nType Hangman Letter:\n: ")?;
            notice = match round.guess(&answer) {
                GuessOutcome::Correct(_) | GuessOutcome::Wrong | GuessOutcome::RoundOver => {
                    String::new()
                }
                GuessOutcome::AlreadyTried => "already tried, try again".to_string(),
                GuessOutcome::Invalid => "Invalid Input, try again".to_string(),
            };
        }
        self.clear()?;

        let result = round.finish(name, difficulty, &timer, SystemTime::now())?;
        let breakdown = score(&result, &self.settings.scoring)?;
        self.say(&format!(
            "Game opened at {}",
            render::format_timestamp(result.opened_at)
        ))?;
        self.say("Saving Game Score...")?;
        let record = self.stats.record_game(&result, &breakdown)?;
        self.say(&breakdown.to_string())?;
        self.say(&render::player_stats(&record))?;

        match self.stats.leaderboard() {
            Ok(entries) => self.say(&render::leaderboard_table(&entries))?,
            Err(e) => warn!(target: "session", "Skipping leaderboard: {}", e),
        }
        Ok(true)
    }
}
