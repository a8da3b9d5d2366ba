//! Mastery-tracking repository.

use pulse_core::entities::{MasteryRecord, MasteryWithTopic};

use crate::PulseStore;
use crate::error::StoreError;
use crate::helpers::{decode_row, decode_rows, distinct_ids};
use crate::query::Query;
use crate::tables::MASTERY;

const MASTERY_KEY: [&str; 2] = ["user_id", "topic_id"];

impl PulseStore {
    /// The user's mastery records with topic names, weakest first.
    pub async fn mastery_for_user(&self, user_id: &str) -> Result<Vec<MasteryWithTopic>, StoreError> {
        let rows = self
            .backend()
            .select(
                MASTERY,
                &Query::new()
                    .eq("user_id", user_id)
                    .order_by("mastery_score", true),
            )
            .await?;
        let records: Vec<MasteryRecord> = decode_rows(MASTERY, rows)?;
        let topic_ids = distinct_ids(records.iter().map(|r| Some(r.topic_id.as_str())));
        let names = self.topic_names(&topic_ids).await?;
        Ok(records
            .into_iter()
            .map(|record| {
                let topic_name = names.get(&record.topic_id).cloned();
                MasteryWithTopic { record, topic_name }
            })
            .collect())
    }

    /// Insert or overwrite the record for `(user_id, topic_id)`.
    pub async fn upsert_mastery(&self, record: &MasteryRecord) -> Result<MasteryRecord, StoreError> {
        let row = serde_json::to_value(record).map_err(StoreError::Encode)?;
        let stored = self.backend().upsert(MASTERY, row, &MASTERY_KEY).await?;
        tracing::info!(
            user_id = %record.user_id,
            topic_id = %record.topic_id,
            score = record.mastery_score,
            "upserted mastery"
        );
        decode_row(MASTERY, stored)
    }
}
