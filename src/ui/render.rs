use chrono::{Local, TimeZone};
use itertools::Itertools;

use crate::game::round::HangmanRound;
use crate::model::{Difficulty, LeaderboardEntry, PlayerRecord};

pub const RULE: &str = "====================";

pub fn format_timestamp(timestamp: i64) -> String {
    Local
        .timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format("%d/%m/%y-%H:%M:%S").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

pub fn round_status(round: &HangmanRound, elapsed_seconds: f64) -> String {
    let wrong = round.wrong_letters().iter().join(", ");
    let remaining = round.remaining_letters().iter().join(" ");
    let mask = round.mask().to_string().chars().join(" ");
    format!(
        concat!(
            "Wrong letters so far: {}\n",
            "You have {} tries left.\n",
            "Letters remaining: {}\n",
            "Current Hangman: {}\n",
            "Current Game Time: {:.2} seconds\n",
            "{}\n"
        ),
        wrong,
        round.tries_left(),
        remaining,
        mask,
        elapsed_seconds,
        RULE
    )
}

pub fn difficulty_menu(word_length: impl Fn(Difficulty) -> usize) -> String {
    let mut menu = String::from("Select Difficulty:\n--------------------\n");
    for difficulty in Difficulty::all() {
        menu.push_str(&format!(
            "{} = {} ({} Letters)\n",
            difficulty.menu_number(),
            difficulty,
            word_length(difficulty)
        ));
    }
    menu
}

pub fn leaderboard_table(entries: &[LeaderboardEntry]) -> String {
    let mut table = String::from("All Time Leaderboard:\n--------------------\n");
    table.push_str(&format!(
        "{:>4}  {:<16} {:>8} {:>8} {:>6} {:>6} {:>10} {:>9}\n",
        "Rank", "Player", "Win %", "Score", "Wins", "Games", "Avg Score", "Avg Time"
    ));
    for (i, entry) in entries.iter().enumerate() {
        table.push_str(&format!(
            "{:>4}  {:<16} {:>8.2} {:>8} {:>6} {:>6} {:>10.2} {:>9.2}\n",
            format!("{}.", i + 1),
            entry.name,
            entry.win_ratio,
            entry.total_score,
            entry.total_wins,
            entry.total_games,
            entry.average_score,
            entry.average_time
        ));
    }
    table
}

pub fn player_stats(record: &PlayerRecord) -> String {
    let mut text = format!("Stats for {}:\n", record.name);
    text.push_str(&format!(
        "{:<8} {:>6} {:>6} {:>8} {:>10} {:>9}\n",
        "", "Games", "Wins", "Best", "Avg Score", "Avg Time"
    ));
    for difficulty in Difficulty::all() {
        let bucket = record.bucket(difficulty);
        text.push_str(&format!(
            "{:<8} {:>6} {:>6} {:>8} {:>10.2} {:>9.2}\n",
            difficulty.label(),
            bucket.games,
            bucket.wins,
            bucket.highest_score,
            bucket.average_score,
            bucket.average_time
        ));
    }
    let totals = &record.totals;
    text.push_str(&format!(
        "{:<8} {:>6} {:>6} {:>8} {:>10.2} {:>9.2}\n",
        "Total", totals.games, totals.wins, totals.score, totals.average_score, totals.average_time
    ));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, total_score: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            win_ratio: 50.0,
            total_score,
            total_wins: 1,
            total_games: 2,
            average_score: total_score as f64 / 2.0,
            average_time: 12.345,
        }
    }

    #[test]
    fn test_leaderboard_rows_follow_entry_order() {
        let table = leaderboard_table(&[entry("alice", 90), entry("bob", 40)]);
        let alice = table.find("alice").unwrap();
        let bob = table.find("bob").unwrap();
        assert!(alice < bob);
        assert!(table.contains("  1.  alice"));
        assert!(table.contains("50.00"));
    }

    #[test]
    fn test_round_status_shows_mask_and_tries() {
        let mut round = HangmanRound::new("cat", 4).unwrap();
        round.guess("a");
        round.guess("z");
        let status = round_status(&round, 3.5);
        assert!(status.contains("Current Hangman: _ a _"));
        assert!(status.contains("You have 3 tries left."));
        assert!(status.contains("Wrong letters so far: z"));
        assert!(status.contains("3.50 seconds"));
    }

    #[test]
    fn test_difficulty_menu_lists_word_lengths() {
        let menu = difficulty_menu(|difficulty| 4 + difficulty.index());
        assert!(menu.contains("1 = Easy (4 Letters)"));
        assert!(menu.contains("3 = Hard (6 Letters)"));
    }
}
