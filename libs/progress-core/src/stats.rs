//! Accuracy roll-up, unit completion and daily-goal bookkeeping.

use chrono::{DateTime, Utc};

use crate::types::{DailyGoal, UnitProgress, UserProgress};

/// Overall answer accuracy as a whole percentage over every word entry.
/// A user with no attempts is at 0, not a division by zero.
pub fn accuracy(progress: &UserProgress) -> u32 {
    let total: u64 = progress.words.iter().map(|w| w.total_attempts as u64).sum();
    if total == 0 {
        return 0;
    }
    let correct: u64 = progress
        .words
        .iter()
        .map(|w| w.correct_attempts as u64)
        .sum();
    ((correct as f64 / total as f64) * 100.0).round() as u32
}

/// Mark a unit completed with the given score.
///
/// First completion increments `stats.units_completed`; repeat completions
/// only raise the stored score (`max` of old and new). `last_studied` is
/// always refreshed.
pub fn complete_unit(progress: &mut UserProgress, unit_number: u32, score: u32, now: DateTime<Utc>) {
    match progress
        .units
        .iter_mut()
        .find(|u| u.unit_number == unit_number)
    {
        None => {
            progress.units.push(UnitProgress {
                unit_number,
                completed: true,
                last_studied: now,
                score,
            });
            progress.stats.units_completed += 1;
        }
        Some(unit) => {
            if !unit.completed {
                unit.completed = true;
                progress.stats.units_completed += 1;
            }
            unit.score = unit.score.max(score);
            unit.last_studied = now;
        }
    }
}

/// Zero `today_progress` when `now` falls on a different calendar date than
/// the last reset; same-day calls are a no-op.
pub fn reset_daily_goal_if_new_day(goal: &mut DailyGoal, now: DateTime<Utc>) {
    if goal.last_reset_date.date_naive() != now.date_naive() {
        goal.today_progress = 0;
        goal.last_reset_date = now;
    }
}
