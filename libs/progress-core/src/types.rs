//! Core types for vocabulary progress tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SrsConfig;

/// Word learning status, derived from repetitions and ease factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordStatus {
    New,
    Learning,
    Review,
    Mastered,
}

impl Default for WordStatus {
    fn default() -> Self {
        Self::New
    }
}

/// Practice mode a submission was answered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PracticeMode {
    MultipleChoice,
    FillInBlank,
    Listening,
    Translation,
}

impl PracticeMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multipleChoice",
            Self::FillInBlank => "fillInBlank",
            Self::Listening => "listening",
            Self::Translation => "translation",
        }
    }

    /// Parse from string. Unknown modes yield `None`; callers skip
    /// mode-specific counters but still schedule the answer.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "multipleChoice" => Some(Self::MultipleChoice),
            "fillInBlank" => Some(Self::FillInBlank),
            "listening" => Some(Self::Listening),
            "translation" => Some(Self::Translation),
            _ => None,
        }
    }
}

/// Correct/wrong tally for one practice mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeCounter {
    pub correct: u32,
    pub wrong: u32,
}

/// Per-mode answer counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeStats {
    pub multiple_choice: ModeCounter,
    pub fill_in_blank: ModeCounter,
    pub listening: ModeCounter,
    pub translation: ModeCounter,
}

impl ModeStats {
    /// Mutable counter for the given mode.
    pub fn counter_mut(&mut self, mode: PracticeMode) -> &mut ModeCounter {
        match mode {
            PracticeMode::MultipleChoice => &mut self.multiple_choice,
            PracticeMode::FillInBlank => &mut self.fill_in_blank,
            PracticeMode::Listening => &mut self.listening,
            PracticeMode::Translation => &mut self.translation,
        }
    }
}

/// Per-word scheduling state and lifetime statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordProgress {
    pub word_id: Uuid,
    /// Denormalized display string, set at creation and never updated.
    pub word: String,
    pub ease_factor: f64,
    /// Days until the next review.
    pub interval: u32,
    /// Consecutive-correct counter; resets to 0 on any wrong answer.
    pub repetitions: u32,
    pub next_review_date: DateTime<Utc>,
    pub total_attempts: u32,
    pub correct_attempts: u32,
    pub wrong_attempts: u32,
    pub mode_stats: ModeStats,
    pub last_practiced: DateTime<Utc>,
    pub status: WordStatus,
}

impl WordProgress {
    /// Fresh entry for a word answered for the first time.
    pub fn new(word_id: Uuid, word: &str, now: DateTime<Utc>, config: &SrsConfig) -> Self {
        Self {
            word_id,
            word: word.to_string(),
            ease_factor: config.initial_ease,
            interval: 1,
            repetitions: 0,
            next_review_date: now,
            total_attempts: 0,
            correct_attempts: 0,
            wrong_attempts: 0,
            mode_stats: ModeStats::default(),
            last_practiced: now,
            status: WordStatus::New,
        }
    }
}

/// Per-unit completion bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitProgress {
    pub unit_number: u32,
    pub completed: bool,
    pub last_studied: DateTime<Utc>,
    /// Best completion score; only ever raised.
    pub score: u32,
}

/// Lifetime aggregate statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_words_learned: u32,
    pub units_completed: u32,
    /// Minutes of practice.
    pub total_practice_time: u32,
    /// Consecutive study days including today.
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_study_date: Option<DateTime<Utc>>,
}

/// Daily word-goal tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyGoal {
    pub words_per_day: u32,
    pub today_progress: u32,
    pub last_reset_date: DateTime<Utc>,
}

/// One user's whole progress document.
///
/// Owns its word and unit entries exclusively; entries are keyed by
/// `word_id` / `unit_number` and never shared across users.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub user_id: Uuid,
    pub words: Vec<WordProgress>,
    pub units: Vec<UnitProgress>,
    pub stats: ProgressStats,
    pub daily_goal: DailyGoal,
}

impl UserProgress {
    /// Empty document with zeroed defaults, for lazy creation on first access.
    pub fn new(user_id: Uuid, now: DateTime<Utc>, config: &SrsConfig) -> Self {
        Self {
            user_id,
            words: Vec::new(),
            units: Vec::new(),
            stats: ProgressStats::default(),
            daily_goal: DailyGoal {
                words_per_day: config.default_words_per_day,
                today_progress: 0,
                last_reset_date: now,
            },
        }
    }

    /// Look up a word entry.
    pub fn word(&self, word_id: Uuid) -> Option<&WordProgress> {
        self.words.iter().find(|w| w.word_id == word_id)
    }

    /// Look up a word entry mutably. Absent ids are the caller's no-op case.
    pub fn word_mut(&mut self, word_id: Uuid) -> Option<&mut WordProgress> {
        self.words.iter_mut().find(|w| w.word_id == word_id)
    }

    /// Find-or-create the entry for a word. Inserting counts the word as
    /// learned; at most one entry ever exists per word id.
    pub fn ensure_word_entry(
        &mut self,
        word_id: Uuid,
        word: &str,
        now: DateTime<Utc>,
        config: &SrsConfig,
    ) -> &mut WordProgress {
        match self.words.iter().position(|w| w.word_id == word_id) {
            Some(pos) => &mut self.words[pos],
            None => {
                self.words.push(WordProgress::new(word_id, word, now, config));
                self.stats.total_words_learned += 1;
                self.words.last_mut().unwrap()
            }
        }
    }

    /// Look up a unit entry.
    pub fn unit(&self, unit_number: u32) -> Option<&UnitProgress> {
        self.units.iter().find(|u| u.unit_number == unit_number)
    }

    /// Find-or-create the entry for a unit (uncompleted, zero score).
    pub fn ensure_unit_entry(&mut self, unit_number: u32, now: DateTime<Utc>) -> &mut UnitProgress {
        match self.units.iter().position(|u| u.unit_number == unit_number) {
            Some(pos) => &mut self.units[pos],
            None => {
                self.units.push(UnitProgress {
                    unit_number,
                    completed: false,
                    last_studied: now,
                    score: 0,
                });
                self.units.last_mut().unwrap()
            }
        }
    }
}
