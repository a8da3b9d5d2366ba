//! Mastery score for a single submitted attempt.

use crate::aggregate::DEFAULT_CONFIDENCE;

const CORRECT_BASE: f64 = 80.0;
const INCORRECT_BASE: f64 = 20.0;

/// Points added per unit of confidence above the midpoint.
const CONFIDENCE_WEIGHT: f64 = 20.0;

/// Correct answers slower than this lose [`SLOW_PENALTY`].
const SLOW_AFTER_SECS: f64 = 30.0;
const SLOW_PENALTY: f64 = 10.0;

/// Correct answers faster than this gain [`FAST_BONUS`].
const FAST_UNDER_SECS: f64 = 10.0;
const FAST_BONUS: f64 = 5.0;

/// Score one attempt on a 0-100 scale.
///
/// Starts at 80 for a correct answer and 20 otherwise. Confidence (1-5)
/// shifts the score by up to 10 points either way around the neutral 3.
/// Timing only matters for correct answers: over 30 s costs 10 points,
/// under 10 s earns 5.
#[must_use]
pub fn attempt_score(is_correct: bool, time_taken: Option<f64>, confidence: Option<f64>) -> f64 {
    let mut score = if is_correct { CORRECT_BASE } else { INCORRECT_BASE };

    if let Some(confidence) = confidence {
        let unit = ((confidence - 1.0) / 4.0).clamp(0.0, 1.0);
        let neutral = (DEFAULT_CONFIDENCE - 1.0) / 4.0;
        score += (unit - neutral) * CONFIDENCE_WEIGHT;
    }

    if is_correct {
        match time_taken {
            Some(t) if t > SLOW_AFTER_SECS => score -= SLOW_PENALTY,
            Some(t) if t < FAST_UNDER_SECS => score += FAST_BONUS,
            _ => {}
        }
    }

    score.clamp(0.0, 100.0)
}
