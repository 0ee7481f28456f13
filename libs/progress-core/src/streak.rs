//! Consecutive-study-day accounting.

use chrono::{DateTime, Utc};

use crate::types::ProgressStats;

/// Record that the user studied at `now`.
///
/// Streaks run on calendar days (UTC, time-of-day truncated): repeated calls
/// on the same day leave the streak alone, the next day extends it by one,
/// any longer gap starts a new streak of 1. `longest_streak` is re-evaluated
/// and `last_study_date` is always set to `now`.
pub fn record_study_event(stats: &mut ProgressStats, now: DateTime<Utc>) {
    let today = now.date_naive();

    match stats.last_study_date {
        None => stats.current_streak = 1,
        Some(last) => {
            let gap_days = (today - last.date_naive()).num_days();
            if gap_days == 1 {
                stats.current_streak += 1;
            } else if gap_days != 0 {
                stats.current_streak = 1;
            }
        }
    }

    stats.longest_streak = stats.longest_streak.max(stats.current_streak);
    stats.last_study_date = Some(now);
}
