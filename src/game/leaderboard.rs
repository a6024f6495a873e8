use crate::error::{HangmanError, Result};
use crate::helpers::round2;
use crate::model::{LeaderboardEntry, PlayerRecord};

fn entry_for(record: &PlayerRecord) -> Result<LeaderboardEntry> {
    let totals = &record.totals;
    if totals.games == 0 {
        return Err(HangmanError::PreconditionViolation(format!(
            "{} has no finished games, cannot compute a win ratio",
            record.name
        )));
    }
    Ok(LeaderboardEntry {
        name: record.name.clone(),
        win_ratio: round2(f64::from(totals.wins) / f64::from(totals.games) * 100.0),
        total_score: totals.score,
        total_wins: totals.wins,
        total_games: totals.games,
        average_score: totals.average_score,
        average_time: totals.average_time,
    })
}

/// Ranks players by total score, highest first. Ties keep their input order.
pub fn build_leaderboard(records: &[PlayerRecord]) -> Result<Vec<LeaderboardEntry>> {
    let mut entries = records.iter().map(entry_for).collect::<Result<Vec<_>>>()?;
    entries.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, games: u32, wins: u32, score: i64) -> PlayerRecord {
        let mut record = PlayerRecord::new(name, None);
        record.totals.games = games;
        record.totals.wins = wins;
        record.totals.score = score;
        record.totals.average_score = score as f64 / f64::from(games.max(1));
        record
    }

    #[test]
    fn test_sorted_by_total_score_descending() {
        let records = vec![
            record("low", 2, 1, 10),
            record("high", 3, 3, 900),
            record("mid", 1, 0, 55),
        ];
        let names: Vec<_> = build_leaderboard(&records)
            .unwrap()
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            record("first", 1, 1, 100),
            record("top", 1, 1, 500),
            record("second", 4, 1, 100),
            record("third", 2, 0, 100),
        ];
        let entries = build_leaderboard(&records).unwrap();
        let names: Vec<_> = entries.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["top", "first", "second", "third"]);
        assert!(entries
            .windows(2)
            .all(|pair| pair[0].total_score >= pair[1].total_score));
    }

    #[test]
    fn test_win_ratio_is_a_rounded_percentage() {
        let entries = build_leaderboard(&[record("alice", 3, 2, 40)]).unwrap();
        assert_eq!(entries[0].win_ratio, 66.67);
        assert_eq!(entries[0].total_wins, 2);
        assert_eq!(entries[0].total_games, 3);
    }

    #[test]
    fn test_win_ratio_tie_rounds_to_even() {
        let entries = build_leaderboard(&[record("alice", 32, 1, 10)]).unwrap();
        assert_eq!(entries[0].win_ratio, 3.12);
    }

    #[test]
    fn test_zero_game_record_is_an_error() {
        let error = build_leaderboard(&[record("alice", 1, 1, 5), record("new", 0, 0, 0)])
            .unwrap_err();
        match error {
            HangmanError::PreconditionViolation(message) => assert!(message.contains("new")),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_empty_collection_builds_empty_board() {
        assert!(build_leaderboard(&[]).unwrap().is_empty());
    }
}
