//! Attempt aggregation.
//!
//! Reduces a topic's attempts to the handful of numbers the weak-spot
//! analysis prompt and the mastery record need. An empty attempt list is a
//! distinct outcome rather than a zero-filled one, so callers can never
//! divide by zero or leak NaN into a prompt.

use serde::{Deserialize, Serialize};

use crate::entities::Attempt;

/// Concept name reported when a topic has no attempts yet.
pub const NOT_ENOUGH_DATA: &str = "Not enough data";

/// Confidence assumed for attempts that did not record one (scale 1-5).
pub const DEFAULT_CONFIDENCE: f64 = 3.0;

/// Result of aggregating a list of attempts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttemptSummary {
    /// No attempts to aggregate.
    NotEnoughData,
    Stats(AttemptStats),
}

/// Aggregate figures over a non-empty attempt list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttemptStats {
    pub total: usize,
    pub correct: usize,
    /// `round(100 * correct / total)`, in `[0, 100]`.
    pub accuracy: u32,
    /// Mean seconds per attempt; missing times count as 0.
    pub avg_time: f64,
    /// Mean confidence; missing values count as [`DEFAULT_CONFIDENCE`].
    pub avg_confidence: f64,
}

impl AttemptStats {
    /// Mean time rounded to whole seconds, as stored on the mastery record.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn avg_time_rounded(&self) -> i64 {
        self.avg_time.round() as i64
    }
}

/// Aggregate `attempts` into accuracy, mean time, and mean confidence.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn summarize(attempts: &[Attempt]) -> AttemptSummary {
    if attempts.is_empty() {
        return AttemptSummary::NotEnoughData;
    }

    let total = attempts.len();
    let correct = attempts
        .iter()
        .filter(|a| a.is_correct == Some(true))
        .count();
    let time_sum: f64 = attempts.iter().map(|a| a.time_taken.unwrap_or(0.0)).sum();
    let confidence_sum: f64 = attempts
        .iter()
        .map(|a| a.confidence.unwrap_or(DEFAULT_CONFIDENCE))
        .sum();

    let n = total as f64;
    let accuracy = ((correct as f64 / n) * 100.0).round().clamp(0.0, 100.0) as u32;

    AttemptSummary::Stats(AttemptStats {
        total,
        correct,
        accuracy,
        avg_time: time_sum / n,
        avg_confidence: confidence_sum / n,
    })
}
