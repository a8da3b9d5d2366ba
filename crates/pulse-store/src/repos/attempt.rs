//! Attempt repository.

use std::collections::HashMap;

use pulse_core::entities::{Attempt, AttemptDetail, NewAttempt};

use crate::PulseStore;
use crate::error::StoreError;
use crate::helpers::{decode_row, decode_rows};
use crate::query::Query;
use crate::tables::ATTEMPTS;

impl PulseStore {
    pub async fn insert_attempt(&self, attempt: &NewAttempt) -> Result<Attempt, StoreError> {
        let row = serde_json::to_value(attempt).map_err(StoreError::Encode)?;
        let mut inserted = self.backend().insert(ATTEMPTS, vec![row]).await?;
        if inserted.is_empty() {
            return Err(StoreError::InvalidState(format!(
                "insert into {ATTEMPTS} returned no rows"
            )));
        }
        decode_row(ATTEMPTS, inserted.swap_remove(0))
    }

    /// Attempts on the topic's questions, oldest first, each joined with
    /// its question text.
    pub async fn attempts_for_topic(&self, topic_id: &str) -> Result<Vec<AttemptDetail>, StoreError> {
        let questions = self.questions_for_topic(topic_id).await?;
        if questions.is_empty() {
            return Ok(Vec::new());
        }
        let text_by_id: HashMap<String, String> = questions
            .into_iter()
            .map(|q| (q.id, q.question_text))
            .collect();

        let rows = self
            .backend()
            .select(
                ATTEMPTS,
                &Query::new()
                    .is_in("question_id", text_by_id.keys().cloned())
                    .order_by("attempted_at", true),
            )
            .await?;
        let attempts: Vec<Attempt> = decode_rows(ATTEMPTS, rows)?;
        tracing::debug!(topic_id, attempts = attempts.len(), "loaded attempts");

        Ok(attempts
            .into_iter()
            .map(|attempt| {
                let question_text = text_by_id.get(&attempt.question_id).cloned();
                AttemptDetail {
                    attempt,
                    question_text,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use pulse_core::entities::NewAttempt;
    use serde_json::json;

    use crate::test_support::helpers::seeded_store;

    #[tokio::test]
    async fn attempts_join_question_text_in_time_order() {
        let (store, _) = seeded_store(json!({
            "questions": [
                {"id": "q1", "user_id": "u1", "topic_id": "t1", "question_text": "Define focal length"},
                {"id": "q2", "user_id": "u1", "topic_id": "t1", "question_text": "What is Snell's law?"},
                {"id": "q3", "user_id": "u1", "topic_id": "t2", "question_text": "Elsewhere"}
            ],
            "attempts": [
                {"id": "a2", "user_id": "u1", "question_id": "q2", "is_correct": false,
                 "attempted_at": "2026-03-02T10:00:00Z"},
                {"id": "a1", "user_id": "u1", "question_id": "q1", "is_correct": true,
                 "time_taken": 12.5, "confidence": 4, "attempted_at": "2026-03-01T10:00:00Z"},
                {"id": "a3", "user_id": "u1", "question_id": "q3", "is_correct": true,
                 "attempted_at": "2026-03-01T09:00:00Z"}
            ]
        }));

        let attempts = store.attempts_for_topic("t1").await.unwrap();
        let ids: Vec<&str> = attempts.iter().map(|a| a.attempt.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2"]);
        assert_eq!(attempts[0].question_text.as_deref(), Some("Define focal length"));
        assert_eq!(attempts[0].attempt.time_taken, Some(12.5));
        assert_eq!(attempts[1].attempt.confidence, None);
    }

    #[tokio::test]
    async fn inserted_attempt_joins_topic_history() {
        let (store, _) = seeded_store(json!({
            "questions": [{"id": "q1", "user_id": "u1", "topic_id": "t1", "question_text": "Define focal length"}]
        }));
        let stored = store
            .insert_attempt(&NewAttempt {
                user_id: "u1".into(),
                question_id: "q1".into(),
                answer: Some("B".into()),
                is_correct: true,
                time_taken: Some(8.0),
                confidence: None,
                attempted_at: Utc::now(),
            })
            .await
            .unwrap();
        assert!(!stored.id.is_empty());
        assert_eq!(stored.is_correct, Some(true));
        assert_eq!(stored.confidence, None);

        let attempts = store.attempts_for_topic("t1").await.unwrap();
        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0].attempt.id, stored.id);
    }

    #[tokio::test]
    async fn topic_without_questions_has_no_attempts() {
        let (store, _) = seeded_store(json!({"attempts": [
            {"id": "a1", "user_id": "u1", "question_id": "q1"}
        ]}));
        assert!(store.attempts_for_topic("t1").await.unwrap().is_empty());
    }
}
