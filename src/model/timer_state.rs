use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::helpers::round2;

/// Wall-clock timer for one round.
#[derive(Clone, Debug)]
pub struct GameTimer {
    pub started_timestamp: SystemTime,
    pub ended_timestamp: Option<SystemTime>,
}

impl Default for GameTimer {
    fn default() -> Self {
        Self::started_at(SystemTime::now())
    }
}

impl GameTimer {
    pub fn started_at(now: SystemTime) -> Self {
        Self {
            started_timestamp: now,
            ended_timestamp: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.ended_timestamp.is_none()
    }

    pub fn elapsed(&self) -> Duration {
        let until_time = self.ended_timestamp.unwrap_or(SystemTime::now());

        until_time
            .duration_since(self.started_timestamp)
            .unwrap_or(Duration::default())
    }

    /// Elapsed time in seconds, rounded to hundredths.
    pub fn elapsed_seconds(&self) -> f64 {
        round2(self.elapsed().as_secs_f64())
    }

    pub fn started_unix_seconds(&self) -> i64 {
        self.started_timestamp
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }

    pub fn ended(&self, now: SystemTime) -> GameTimer {
        let mut new_state = self.clone();
        new_state.ended_timestamp = Some(now);
        new_state
    }
}
