//! `submit-attempt`: log one answer and rescore the topic's mastery from it.

use chrono::Utc;
use serde::Deserialize;

use pulse_core::entities::{MasteryRecord, NewAttempt};
use pulse_core::mastery::attempt_score;
use pulse_core::responses::AttemptSubmission;
use pulse_store::StoreError;

use crate::context::FunctionContext;
use crate::error::FunctionError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAttemptRequest {
    pub question_id: String,
    pub is_correct: bool,
    #[serde(default)]
    pub answer: Option<String>,
    /// Seconds.
    #[serde(default)]
    pub time_taken: Option<f64>,
    /// 1 to 5.
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Store the attempt for the question's owner, then overwrite the topic's
/// mastery score with the attempt's own score. Accuracy and mean time on
/// the mastery record are left as they were.
///
/// # Errors
///
/// Fails if the question is missing or has no topic, or a write fails.
pub async fn run(ctx: &FunctionContext, req: SubmitAttemptRequest) -> Result<AttemptSubmission, FunctionError> {
    let store = ctx.store()?;
    let question = store.get_question(&req.question_id).await?;
    let topic_id = question.topic_id.clone().ok_or_else(|| {
        StoreError::InvalidState(format!("question {} has no topic", question.id))
    })?;

    let now = Utc::now();
    let attempt = store
        .insert_attempt(&NewAttempt {
            user_id: question.user_id.clone(),
            question_id: question.id.clone(),
            answer: req.answer,
            is_correct: req.is_correct,
            time_taken: req.time_taken,
            confidence: req.confidence,
            attempted_at: now,
        })
        .await?;

    let mastery_score = attempt_score(req.is_correct, req.time_taken, req.confidence);
    store
        .upsert_mastery(&MasteryRecord {
            user_id: question.user_id,
            topic_id,
            mastery_score,
            accuracy: None,
            avg_time: None,
            last_practiced: Some(now),
        })
        .await?;

    tracing::info!(attempt_id = %attempt.id, mastery_score, "attempt recorded");
    Ok(AttemptSubmission {
        attempt,
        mastery_score,
    })
}
