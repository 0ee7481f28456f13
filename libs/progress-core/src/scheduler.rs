//! SM-2 derived spaced repetition scheduling.
//!
//! The quality signal is binary: a correct answer is treated as perfect
//! recall (quality 5), a wrong answer as a blackout (quality 0). The general
//! SM-2 ease formula is kept so a graded quality scale drops in later.

use chrono::{DateTime, Duration, Utc};

use crate::config::SrsConfig;
use crate::types::{PracticeMode, WordProgress, WordStatus};

const QUALITY_CORRECT: u8 = 5;
const QUALITY_WRONG: u8 = 0;

/// Apply one answer to a word's scheduling state.
///
/// Updates attempt counters, the consecutive-correct counter, mode statistics
/// (skipped when `mode` is `None`), the review interval, the ease factor, the
/// next review date and the derived status. All effects are confined to the
/// given record.
pub fn apply_answer(
    word: &mut WordProgress,
    is_correct: bool,
    mode: Option<PracticeMode>,
    now: DateTime<Utc>,
    config: &SrsConfig,
) {
    word.total_attempts += 1;
    if is_correct {
        word.correct_attempts += 1;
        word.repetitions += 1;
    } else {
        word.wrong_attempts += 1;
        word.repetitions = 0;
    }

    if let Some(mode) = mode {
        let counter = word.mode_stats.counter_mut(mode);
        if is_correct {
            counter.correct += 1;
        } else {
            counter.wrong += 1;
        }
    }

    let quality = if is_correct { QUALITY_CORRECT } else { QUALITY_WRONG };

    if quality >= 3 {
        // Interval grows from the ease factor as it stood before this answer.
        word.interval = match word.repetitions {
            1 => config.first_interval,
            2 => config.second_interval,
            _ => (word.interval as f64 * word.ease_factor).round() as u32,
        };
        word.ease_factor = (word.ease_factor + ease_delta(quality)).max(config.minimum_ease);
    } else {
        // Wrong answer: review again soon. Ease factor is left as-is.
        word.repetitions = 0;
        word.interval = 1;
    }

    word.next_review_date = now + Duration::days(word.interval as i64);
    word.last_practiced = now;
    word.status = derive_status(word, config);
}

/// SM-2 ease adjustment: `0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)`.
fn ease_delta(quality: u8) -> f64 {
    let q = quality as f64;
    0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02)
}

/// Status priority: mastered, then review, then learning.
fn derive_status(word: &WordProgress, config: &SrsConfig) -> WordStatus {
    if word.repetitions >= config.mastery_repetitions && word.ease_factor >= config.mastery_ease {
        WordStatus::Mastered
    } else if word.repetitions >= 1 {
        WordStatus::Review
    } else if word.total_attempts > 0 {
        WordStatus::Learning
    } else {
        WordStatus::New
    }
}
