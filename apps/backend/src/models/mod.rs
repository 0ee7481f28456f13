//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

// Re-export shared types from progress-core
pub use progress_core::{
    DailyGoal, ModeCounter, ModeStats, PracticeMode, ProgressStats, SrsConfig, UnitProgress,
    UserProgress, WordProgress, WordStatus,
};

// === Database Entity Types ===

/// Registered user with an opaque API token
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub token: String,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

/// A user's progress document together with its storage version.
///
/// The version participates in the optimistic save: a write only succeeds
/// when the row still carries the version the document was read at.
#[derive(Debug, Clone)]
pub struct StoredProgress {
    pub progress: UserProgress,
    pub version: i64,
}

/// Canonical vocabulary word, owned by the content store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VocabWord {
    pub id: Uuid,
    pub word: String,
    pub meaning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    pub difficulty: i32,
}

/// Vocabulary unit row; words live in a JSONB column
#[derive(Debug, Clone, FromRow)]
pub struct DbVocabUnit {
    pub unit_number: i32,
    pub title: String,
    pub words: Json<Vec<VocabWord>>,
}

/// Unit list entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UnitSummary {
    pub unit_number: i32,
    pub title: String,
}

/// Stored practice-session result
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DbPracticeResult {
    pub id: Uuid,
    pub user_id: Uuid,
    pub unit_number: i32,
    pub total: i32,
    pub correct: i32,
    pub wrong: i32,
    pub percentage: i32,
    pub created_at: DateTime<Utc>,
}

// === API Request/Response Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user_id: Uuid,
    pub username: Option<String>,
    pub last_seen_at: DateTime<Utc>,
}

// Practice submission types

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPracticeRequest {
    pub word_id: Uuid,
    pub is_correct: bool,
    pub mode: String,
    pub unit_number: u32,
}

/// Updated scheduling state returned after a submission
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordProgressSummary {
    pub status: WordStatus,
    pub repetitions: u32,
    pub next_review_date: DateTime<Utc>,
    pub interval: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_words_learned: u32,
    pub accuracy: u32,
    pub current_streak: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPracticeResponse {
    pub word_progress: WordProgressSummary,
    pub stats: SummaryStats,
}

// Practice batch types

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeWordsQuery {
    pub review_limit: Option<usize>,
    pub new_limit: Option<usize>,
}

/// Progress metadata attached to each word in a practice batch
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressData {
    pub status: WordStatus,
    pub repetitions: u32,
    pub next_review_date: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeWord {
    #[serde(flatten)]
    pub word: VocabWord,
    pub progress_data: ProgressData,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeCounts {
    pub new_words: usize,
    pub review_words: usize,
    pub total_in_unit: usize,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeWordsResponse {
    pub words: Vec<PracticeWord>,
    pub stats: PracticeCounts,
}

// Dashboard stats

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_words_learned: u32,
    pub units_completed: u32,
    pub accuracy: u32,
    pub current_streak: u32,
    pub words_for_review: u32,
    pub longest_streak: u32,
}

// Unit completion

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteUnitRequest {
    pub unit_number: u32,
    pub score: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteUnitResponse {
    pub units_completed: u32,
}

// Daily goal

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetDailyResponse {
    pub daily_goal: DailyGoal,
}

// Vocabulary content

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabUnitResponse {
    pub unit_number: u32,
    pub title: String,
    pub words: Vec<VocabWord>,
}

impl DbVocabUnit {
    /// Convert to API unit type
    pub fn to_api_unit(&self) -> VocabUnitResponse {
        VocabUnitResponse {
            unit_number: self.unit_number as u32,
            title: self.title.clone(),
            words: self.words.0.clone(),
        }
    }
}

// Practice history

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySubmitRequest {
    pub unit_number: u32,
    pub total: u32,
    pub correct: u32,
    pub wrong: u32,
    pub percentage: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub results: Vec<DbPracticeResult>,
}
