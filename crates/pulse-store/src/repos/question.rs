//! Question repository.

use pulse_core::entities::{NewQuestion, Question};

use crate::PulseStore;
use crate::error::StoreError;
use crate::helpers::{decode_row, decode_rows, encode_rows};
use crate::query::Query;
use crate::tables::QUESTIONS;

impl PulseStore {
    pub async fn questions_for_topic(&self, topic_id: &str) -> Result<Vec<Question>, StoreError> {
        let rows = self
            .backend()
            .select(
                QUESTIONS,
                &Query::new()
                    .eq("topic_id", topic_id)
                    .order_by("created_at", true),
            )
            .await?;
        decode_rows(QUESTIONS, rows)
    }

    /// Append questions and return the inserted rows. Earlier questions stay,
    /// since attempts reference them.
    pub async fn insert_questions(&self, questions: &[NewQuestion]) -> Result<Vec<Question>, StoreError> {
        let rows = encode_rows(questions)?;
        let inserted = self.backend().insert(QUESTIONS, rows).await?;
        tracing::info!(inserted = inserted.len(), "inserted questions");
        decode_rows(QUESTIONS, inserted)
    }

    pub async fn get_question(&self, id: &str) -> Result<Question, StoreError> {
        let mut rows = self
            .backend()
            .select(QUESTIONS, &Query::new().eq("id", id).limit(1))
            .await?;
        if rows.is_empty() {
            return Err(StoreError::NotFound {
                entity: "Question",
                id: id.to_string(),
            });
        }
        decode_row(QUESTIONS, rows.swap_remove(0))
    }
}

#[cfg(test)]
mod tests {
    use pulse_core::entities::{GeneratedQuestion, NewQuestion};
    use serde_json::json;

    use crate::test_support::helpers::seeded_store;

    fn generated(text: &str) -> NewQuestion {
        NewQuestion {
            user_id: "u1".into(),
            topic_id: "t1".into(),
            question: GeneratedQuestion {
                question_text: text.into(),
                options: vec!["A".into(), "B".into()],
                correct_answer: Some("A".into()),
                difficulty: Some("easy".into()),
            },
        }
    }

    #[tokio::test]
    async fn insert_keeps_earlier_questions() {
        let (store, _) = seeded_store(json!({
            "questions": [
                {"id": "old", "user_id": "u1", "topic_id": "t1", "question_text": "Old?"},
                {"id": "other", "user_id": "u1", "topic_id": "t2", "question_text": "Other?"}
            ]
        }));
        let inserted = store
            .insert_questions(&[generated("What is refraction?")])
            .await
            .unwrap();
        assert_eq!(inserted.len(), 1);
        assert!(!inserted[0].id.is_empty());
        assert_eq!(inserted[0].options.as_deref().map(<[String]>::len), Some(2));

        let current = store.questions_for_topic("t1").await.unwrap();
        let ids: Vec<&str> = current.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"old"));
        assert!(ids.contains(&inserted[0].id.as_str()));
        assert_eq!(store.questions_for_topic("t2").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn get_question_by_id() {
        let (store, _) = seeded_store(json!({
            "questions": [{"id": "q1", "user_id": "u1", "topic_id": "t1", "question_text": "Define focal length"}]
        }));
        assert_eq!(store.get_question("q1").await.unwrap().topic_id.as_deref(), Some("t1"));
        let err = store.get_question("missing").await.unwrap_err();
        assert_eq!(err.to_string(), "Question not found");
    }
}
