//! Core vocabulary-progress library shared by the backend.
//!
//! Provides:
//! - SM-2 derived spaced repetition scheduling for vocabulary words
//! - Review/new-word batch selection
//! - Study-streak tracking and progress statistics roll-up
//! - Shared types (WordProgress, UserProgress, PracticeMode, etc.)
//!
//! Everything here is pure and synchronous; persistence and HTTP live in the
//! backend crate.

pub mod config;
pub mod scheduler;
pub mod selector;
pub mod stats;
pub mod streak;
pub mod types;

pub use config::SrsConfig;
pub use scheduler::apply_answer;
pub use selector::{due_for_review, new_words};
pub use stats::{accuracy, complete_unit, reset_daily_goal_if_new_day};
pub use streak::record_study_event;
pub use types::{
    DailyGoal, ModeCounter, ModeStats, PracticeMode, ProgressStats, UnitProgress, UserProgress,
    WordProgress, WordStatus,
};
