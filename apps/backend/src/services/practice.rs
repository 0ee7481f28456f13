//! Practice submission orchestration.
//!
//! Each submission is one read-modify-write of the user's progress document:
//! scheduler, streak tracker and aggregates are applied in memory, then the
//! document is saved with a version check. A conflicting concurrent
//! submission (double-click, retried request) makes the save fail, and the
//! whole flow is retried from a fresh read rather than merged.

use chrono::Utc;
use uuid::Uuid;

use progress_core::{
    accuracy, apply_answer, complete_unit as complete_unit_entry, due_for_review, new_words,
    record_study_event, reset_daily_goal_if_new_day, PracticeMode, SrsConfig, UserProgress,
    WordStatus,
};

use crate::db::Database;
use crate::error::{ApiError, Result};
use crate::models::{
    DailyGoal, PracticeCounts, PracticeWord, PracticeWordsResponse, ProgressData, StoredProgress,
    SubmitPracticeRequest, SubmitPracticeResponse, SummaryStats, WordProgressSummary,
};

/// Optimistic-save attempts before giving up with a conflict.
const MAX_SAVE_ATTEMPTS: usize = 3;

/// Default batch sizes for a practice session.
pub const DEFAULT_REVIEW_LIMIT: usize = 5;
pub const DEFAULT_NEW_LIMIT: usize = 5;

/// Load a user's progress document, lazily creating an empty one on first
/// access. The insert is idempotent, so a racing first access is resolved by
/// re-reading whichever document won.
pub async fn ensure_progress(
    db: &Database,
    config: &SrsConfig,
    user_id: Uuid,
) -> Result<StoredProgress> {
    if let Some(stored) = db.load_progress(user_id).await? {
        return Ok(stored);
    }

    tracing::debug!("Creating progress document for user {}", user_id);
    let fresh = UserProgress::new(user_id, Utc::now(), config);
    db.create_progress(&fresh).await?;

    db.load_progress(user_id)
        .await?
        .ok_or_else(|| ApiError::Internal("progress document missing after creation".to_string()))
}

/// Apply one practice answer and persist the result.
pub async fn submit_practice(
    db: &Database,
    config: &SrsConfig,
    user_id: Uuid,
    request: &SubmitPracticeRequest,
) -> Result<SubmitPracticeResponse> {
    if request.mode.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Missing required field: mode".to_string(),
        ));
    }

    // An unknown mode still schedules the answer, it just has no per-mode
    // counter to update.
    let mode = PracticeMode::from_str(&request.mode);
    if mode.is_none() {
        tracing::debug!(mode = %request.mode, "Unknown practice mode, skipping mode stats");
    }

    for _ in 0..MAX_SAVE_ATTEMPTS {
        let stored = ensure_progress(db, config, user_id).await?;
        let mut progress = stored.progress;
        let now = Utc::now();

        if progress.word(request.word_id).is_none() {
            // First answer for this word: pull the canonical record from the
            // vocabulary content. A missing unit or word aborts the whole
            // submission before anything is persisted.
            let unit = db.get_unit(request.unit_number).await?.ok_or_else(|| {
                ApiError::NotFound(format!("Unit {} not found", request.unit_number))
            })?;
            let word = unit
                .words
                .0
                .iter()
                .find(|w| w.id == request.word_id)
                .ok_or_else(|| {
                    ApiError::NotFound(format!(
                        "Word {} not found in unit {}",
                        request.word_id, request.unit_number
                    ))
                })?;
            progress.ensure_word_entry(word.id, &word.word, now, config);
        }

        let word_summary = {
            let entry = progress.word_mut(request.word_id).ok_or_else(|| {
                ApiError::Internal("word entry missing after creation".to_string())
            })?;
            apply_answer(entry, request.is_correct, mode, now, config);
            WordProgressSummary {
                status: entry.status,
                repetitions: entry.repetitions,
                next_review_date: entry.next_review_date,
                interval: entry.interval,
            }
        };

        record_study_event(&mut progress.stats, now);
        reset_daily_goal_if_new_day(&mut progress.daily_goal, now);
        progress.daily_goal.today_progress += 1;
        progress.ensure_unit_entry(request.unit_number, now).last_studied = now;

        match db.save_progress(&progress, stored.version).await {
            Ok(()) => {
                return Ok(SubmitPracticeResponse {
                    word_progress: word_summary,
                    stats: SummaryStats {
                        total_words_learned: progress.stats.total_words_learned,
                        accuracy: accuracy(&progress),
                        current_streak: progress.stats.current_streak,
                    },
                })
            }
            Err(ApiError::Conflict(_)) => continue,
            Err(err) => return Err(err),
        }
    }

    Err(ApiError::Conflict(
        "progress document kept changing, submission not applied".to_string(),
    ))
}

/// Build a practice batch for a unit: due reviews first, then unseen words,
/// each carrying its progress metadata.
pub async fn get_practice_words(
    db: &Database,
    config: &SrsConfig,
    user_id: Uuid,
    unit_number: u32,
    review_limit: usize,
    new_limit: usize,
) -> Result<PracticeWordsResponse> {
    let unit = db
        .get_unit(unit_number)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Unit {} not found", unit_number)))?;

    let stored = ensure_progress(db, config, user_id).await?;
    let progress = stored.progress;
    let now = Utc::now();

    let mut words = Vec::new();

    // Due words may belong to other units; only those with canonical data in
    // the requested unit are included in the batch.
    for entry in due_for_review(&progress, now, review_limit) {
        if let Some(word) = unit.words.0.iter().find(|w| w.id == entry.word_id) {
            words.push(PracticeWord {
                word: word.clone(),
                progress_data: ProgressData {
                    status: entry.status,
                    repetitions: entry.repetitions,
                    next_review_date: entry.next_review_date,
                },
            });
        }
    }
    let review_count = words.len();

    let fresh = new_words(&progress, &unit.words.0, new_limit, |w| w.id);
    let new_count = fresh.len();
    for word in fresh {
        words.push(PracticeWord {
            word: word.clone(),
            progress_data: ProgressData {
                status: WordStatus::New,
                repetitions: 0,
                next_review_date: now,
            },
        });
    }

    Ok(PracticeWordsResponse {
        words,
        stats: PracticeCounts {
            new_words: new_count,
            review_words: review_count,
            total_in_unit: unit.words.0.len(),
        },
    })
}

/// Mark a unit completed and persist; returns the lifetime completion count.
pub async fn complete_unit(
    db: &Database,
    config: &SrsConfig,
    user_id: Uuid,
    unit_number: u32,
    score: u32,
) -> Result<u32> {
    for _ in 0..MAX_SAVE_ATTEMPTS {
        let stored = ensure_progress(db, config, user_id).await?;
        let mut progress = stored.progress;

        complete_unit_entry(&mut progress, unit_number, score, Utc::now());

        match db.save_progress(&progress, stored.version).await {
            Ok(()) => return Ok(progress.stats.units_completed),
            Err(ApiError::Conflict(_)) => continue,
            Err(err) => return Err(err),
        }
    }

    Err(ApiError::Conflict(
        "progress document kept changing, completion not applied".to_string(),
    ))
}

/// Reset the daily goal counter when a new day has started. No-op (and no
/// write) when the goal was already reset today.
pub async fn reset_daily(db: &Database, user_id: Uuid) -> Result<DailyGoal> {
    for _ in 0..MAX_SAVE_ATTEMPTS {
        let stored = db
            .load_progress(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("No progress found".to_string()))?;
        let mut progress = stored.progress;

        let last_reset = progress.daily_goal.last_reset_date;
        reset_daily_goal_if_new_day(&mut progress.daily_goal, Utc::now());

        if progress.daily_goal.last_reset_date == last_reset {
            return Ok(progress.daily_goal);
        }

        match db.save_progress(&progress, stored.version).await {
            Ok(()) => return Ok(progress.daily_goal),
            Err(ApiError::Conflict(_)) => continue,
            Err(err) => return Err(err),
        }
    }

    Err(ApiError::Conflict(
        "progress document kept changing, daily reset not applied".to_string(),
    ))
}
