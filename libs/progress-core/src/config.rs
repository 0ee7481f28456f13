//! Scheduling parameters.

/// SM-2 parameters and progress defaults, tunable as a unit.
#[derive(Debug, Clone, Copy)]
pub struct SrsConfig {
    /// Ease factor assigned to a freshly created word entry.
    pub initial_ease: f64,
    /// Lower clamp for the ease factor.
    pub minimum_ease: f64,
    /// Interval (days) after the first consecutive correct answer.
    pub first_interval: u32,
    /// Interval (days) after the second consecutive correct answer.
    pub second_interval: u32,
    /// Consecutive correct answers required for mastery.
    pub mastery_repetitions: u32,
    /// Minimum ease factor required for mastery.
    pub mastery_ease: f64,
    /// Default daily word goal for a new progress document.
    pub default_words_per_day: u32,
}

impl Default for SrsConfig {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: 1.3,
            first_interval: 1,
            second_interval: 6,
            mastery_repetitions: 5,
            mastery_ease: 2.5,
            default_words_per_day: 10,
        }
    }
}
