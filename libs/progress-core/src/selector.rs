//! Review batch selection.
//!
//! Pure queries over a progress document; nothing here mutates state, so the
//! same document can be queried repeatedly while a batch is in flight.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::types::{UserProgress, WordProgress, WordStatus};

/// Words due for review: scheduled at or before `now` and not yet mastered,
/// earliest-due first (stable order on ties), truncated to `limit`.
pub fn due_for_review(
    progress: &UserProgress,
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<&WordProgress> {
    let mut due: Vec<&WordProgress> = progress
        .words
        .iter()
        .filter(|w| w.next_review_date <= now && w.status != WordStatus::Mastered)
        .collect();
    due.sort_by_key(|w| w.next_review_date);
    due.truncate(limit);
    due
}

/// Candidate words the user has no entry for yet, in the candidates' original
/// order, truncated to `limit`. `id_of` extracts the word id from a
/// candidate, so callers can pass their own content type.
pub fn new_words<'a, T>(
    progress: &UserProgress,
    candidates: &'a [T],
    limit: usize,
    id_of: impl Fn(&T) -> Uuid,
) -> Vec<&'a T> {
    candidates
        .iter()
        .filter(|c| progress.word(id_of(c)).is_none())
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SrsConfig;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn progress_with_words(entries: &[(i64, WordStatus)], now: DateTime<Utc>) -> UserProgress {
        let config = SrsConfig::default();
        let mut progress = UserProgress::new(Uuid::new_v4(), now, &config);
        for (offset_days, status) in entries {
            let id = Uuid::new_v4();
            let word = progress.ensure_word_entry(id, "word", now, &config);
            word.next_review_date = now + Duration::days(*offset_days);
            word.status = *status;
        }
        progress
    }

    #[test]
    fn due_words_sorted_earliest_first() {
        let now = Utc::now();
        let progress = progress_with_words(
            &[
                (-1, WordStatus::Review),
                (-5, WordStatus::Learning),
                (0, WordStatus::Review),
                (-3, WordStatus::Review),
            ],
            now,
        );

        let due = due_for_review(&progress, now, 10);
        let offsets: Vec<i64> = due
            .iter()
            .map(|w| (w.next_review_date - now).num_days())
            .collect();
        assert_eq!(offsets, vec![-5, -3, -1, 0]);
    }

    #[test]
    fn future_and_mastered_words_excluded() {
        let now = Utc::now();
        let progress = progress_with_words(
            &[
                (-2, WordStatus::Mastered),
                (3, WordStatus::Review),
                (-1, WordStatus::Review),
            ],
            now,
        );

        let due = due_for_review(&progress, now, 10);
        assert_eq!(due.len(), 1);
        assert!(due.iter().all(|w| w.status != WordStatus::Mastered));
        assert!(due.iter().all(|w| w.next_review_date <= now));
    }

    #[test]
    fn due_words_truncated_to_limit() {
        let now = Utc::now();
        let progress = progress_with_words(
            &[
                (-4, WordStatus::Review),
                (-3, WordStatus::Review),
                (-2, WordStatus::Review),
                (-1, WordStatus::Review),
            ],
            now,
        );

        let due = due_for_review(&progress, now, 2);
        assert_eq!(due.len(), 2);
        assert_eq!((due[0].next_review_date - now).num_days(), -4);
    }

    #[test]
    fn new_words_skip_known_entries_and_keep_order() {
        let now = Utc::now();
        let config = SrsConfig::default();
        let mut progress = UserProgress::new(Uuid::new_v4(), now, &config);

        let candidates: Vec<(Uuid, &str)> = (0..5).map(|i| (Uuid::new_v4(), ["a", "b", "c", "d", "e"][i])).collect();
        progress.ensure_word_entry(candidates[1].0, candidates[1].1, now, &config);
        progress.ensure_word_entry(candidates[3].0, candidates[3].1, now, &config);

        let fresh = new_words(&progress, &candidates, 10, |c| c.0);
        let names: Vec<&str> = fresh.iter().map(|c| c.1).collect();
        assert_eq!(names, vec!["a", "c", "e"]);

        let capped = new_words(&progress, &candidates, 2, |c| c.0);
        assert_eq!(capped.len(), 2);
        assert_eq!(capped[0].1, "a");
    }
}
