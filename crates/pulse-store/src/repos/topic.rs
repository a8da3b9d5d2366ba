//! Topic repository.

use std::collections::HashMap;

use pulse_core::entities::Topic;

use crate::PulseStore;
use crate::error::StoreError;
use crate::helpers::{decode_row, decode_rows};
use crate::query::Query;
use crate::tables::TOPICS;

impl PulseStore {
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] ("Topic not found") when no row has `id`.
    pub async fn get_topic(&self, id: &str) -> Result<Topic, StoreError> {
        let mut rows = self
            .backend()
            .select(TOPICS, &Query::new().eq("id", id).limit(1))
            .await?;
        if rows.is_empty() {
            return Err(StoreError::NotFound {
                entity: "Topic",
                id: id.to_string(),
            });
        }
        decode_row(TOPICS, rows.swap_remove(0))
    }

    pub async fn topics_for_user(&self, user_id: &str) -> Result<Vec<Topic>, StoreError> {
        let rows = self
            .backend()
            .select(TOPICS, &Query::new().eq("user_id", user_id).order_by("name", true))
            .await?;
        decode_rows(TOPICS, rows)
    }

    /// Topic names keyed by id, for the given ids.
    pub async fn topic_names(&self, ids: &[String]) -> Result<HashMap<String, String>, StoreError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = self
            .backend()
            .select(TOPICS, &Query::new().is_in("id", ids.iter().cloned()))
            .await?;
        let topics: Vec<Topic> = decode_rows(TOPICS, rows)?;
        Ok(topics.into_iter().map(|t| (t.id, t.name)).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::StoreError;
    use crate::test_support::helpers::{seeded_store, test_store};

    #[tokio::test]
    async fn get_topic_decodes_row() {
        let (store, _) = seeded_store(json!({
            "topics": [{"id": "t1", "user_id": "u1", "name": "Optics", "subtopics": ["Lenses"]}]
        }));
        let topic = store.get_topic("t1").await.unwrap();
        assert_eq!(topic.name, "Optics");
        assert_eq!(topic.subtopics.as_deref(), Some(&["Lenses".to_string()][..]));
    }

    #[tokio::test]
    async fn missing_topic_is_not_found() {
        let (store, _) = test_store();
        let err = store.get_topic("nope").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity: "Topic", .. }));
        assert_eq!(err.to_string(), "Topic not found");
    }

    #[tokio::test]
    async fn topic_names_maps_ids() {
        let (store, _) = seeded_store(json!({
            "topics": [
                {"id": "t1", "user_id": "u1", "name": "Optics"},
                {"id": "t2", "user_id": "u1", "name": "Waves"},
                {"id": "t3", "user_id": "u2", "name": "Cells"}
            ]
        }));
        let names = store
            .topic_names(&["t1".to_string(), "t2".to_string()])
            .await
            .unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names["t2"], "Waves");
        assert_eq!(store.topics_for_user("u1").await.unwrap().len(), 2);
    }
}
