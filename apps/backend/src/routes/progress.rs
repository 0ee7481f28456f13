//! Progress and spaced-repetition endpoints

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::Utc;
use uuid::Uuid;

use progress_core::{accuracy, due_for_review};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::auth::AuthenticatedUser;
use crate::services::practice;
use crate::AppState;

/// GET /api/progress/my-progress
/// Returns the whole progress document, creating it on first access.
pub async fn my_progress(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<UserProgress>> {
    let stored = practice::ensure_progress(&state.db, &state.config, auth.user_id).await?;
    Ok(Json(stored.progress))
}

/// GET /api/progress/stats
/// Dashboard roll-up. Falls back to zeroed stats instead of failing so the
/// dashboard stays usable through transient persistence errors.
pub async fn stats(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Json<StatsResponse> {
    match load_stats(&state, auth.user_id).await {
        Ok(response) => Json(response),
        Err(err) => {
            tracing::warn!("Returning zeroed stats for {}: {}", auth.user_id, err);
            Json(StatsResponse::default())
        }
    }
}

async fn load_stats(state: &AppState, user_id: Uuid) -> Result<StatsResponse> {
    let stored = practice::ensure_progress(&state.db, &state.config, user_id).await?;
    let progress = stored.progress;

    let words_for_review = due_for_review(&progress, Utc::now(), usize::MAX).len() as u32;

    Ok(StatsResponse {
        total_words_learned: progress.stats.total_words_learned,
        units_completed: progress.stats.units_completed,
        accuracy: accuracy(&progress),
        current_streak: progress.stats.current_streak,
        words_for_review,
        longest_streak: progress.stats.longest_streak,
    })
}

/// GET /api/progress/practice-words/:unit_number
pub async fn practice_words(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(unit_number): Path<u32>,
    Query(query): Query<PracticeWordsQuery>,
) -> Result<Json<PracticeWordsResponse>> {
    let response = practice::get_practice_words(
        &state.db,
        &state.config,
        auth.user_id,
        unit_number,
        query.review_limit.unwrap_or(practice::DEFAULT_REVIEW_LIMIT),
        query.new_limit.unwrap_or(practice::DEFAULT_NEW_LIMIT),
    )
    .await?;

    Ok(Json(response))
}

/// POST /api/progress/submit-practice
pub async fn submit_practice(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(payload): Json<SubmitPracticeRequest>,
) -> Result<Json<SubmitPracticeResponse>> {
    let response =
        practice::submit_practice(&state.db, &state.config, auth.user_id, &payload).await?;
    Ok(Json(response))
}

/// POST /api/progress/complete-unit
pub async fn complete_unit(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(payload): Json<CompleteUnitRequest>,
) -> Result<Json<CompleteUnitResponse>> {
    let units_completed = practice::complete_unit(
        &state.db,
        &state.config,
        auth.user_id,
        payload.unit_number,
        payload.score.unwrap_or(0),
    )
    .await?;

    Ok(Json(CompleteUnitResponse { units_completed }))
}

/// GET /api/progress/word-progress/:word_id
pub async fn word_progress(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(word_id): Path<Uuid>,
) -> Result<Json<WordProgress>> {
    let stored = state
        .db
        .load_progress(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No progress found".to_string()))?;

    let word = stored
        .progress
        .word(word_id)
        .ok_or_else(|| ApiError::NotFound("Word not learned yet".to_string()))?;

    Ok(Json(word.clone()))
}

/// POST /api/progress/reset-daily
pub async fn reset_daily(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<ResetDailyResponse>> {
    let daily_goal = practice::reset_daily(&state.db, auth.user_id).await?;
    Ok(Json(ResetDailyResponse { daily_goal }))
}
