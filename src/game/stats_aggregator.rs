use log::debug;

use crate::error::{HangmanError, Result};
use crate::helpers::round2;
use crate::model::{GameResult, PlayerRecord, ScoreBreakdown};

/// Folds `value` into a running mean that covered `previous_count` samples.
fn incremental_average(previous_average: f64, previous_count: u32, value: f64) -> f64 {
    (previous_average * f64::from(previous_count) + value) / f64::from(previous_count + 1)
}

/// Returns `record` with one finished game folded in. Nothing is written on error.
pub fn apply_result(
    record: &PlayerRecord,
    result: &GameResult,
    breakdown: &ScoreBreakdown,
) -> Result<PlayerRecord> {
    if record.name != result.player_name {
        return Err(HangmanError::PreconditionViolation(format!(
            "game for {} applied to the record of {}",
            result.player_name, record.name
        )));
    }

    let mut updated = record.clone();
    let total = breakdown.total_score;

    let totals = &mut updated.totals;
    let previous_games = totals.games;
    totals.games += 1;
    totals.score += total;
    totals.average_time = round2(incremental_average(
        totals.average_time,
        previous_games,
        result.elapsed_seconds,
    ));
    totals.average_score = totals.score as f64 / f64::from(totals.games);

    let bucket = updated.bucket_mut(result.difficulty);
    let previous_bucket_games = bucket.games;
    bucket.games += 1;
    if result.won {
        bucket.wins += 1;
        bucket.highest_score = bucket.highest_score.max(total);
        bucket.average_score =
            incremental_average(bucket.average_score, previous_bucket_games, total as f64);
        // Bucket times are stored at the same 2 dp precision as the totals.
        bucket.average_time = round2(incremental_average(
            bucket.average_time,
            previous_bucket_games,
            result.elapsed_seconds,
        ));
        updated.totals.wins += 1;
    }

    debug!(
        target: "stats",
        "{} now has {} games, {} wins, {} points",
        updated.name, updated.totals.games, updated.totals.wins, updated.totals.score
    );
    Ok(updated)
}

/// Applies a finished game to the matching record inside `records`, returning the new record.
pub fn apply_to_collection(
    records: &mut [PlayerRecord],
    result: &GameResult,
    breakdown: &ScoreBreakdown,
) -> Result<PlayerRecord> {
    let record = records
        .iter_mut()
        .find(|record| record.name == result.player_name)
        .ok_or_else(|| {
            HangmanError::PreconditionViolation(format!(
                "no player record named {}",
                result.player_name
            ))
        })?;
    *record = apply_result(record, result, breakdown)?;
    Ok(record.clone())
}
