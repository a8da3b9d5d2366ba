//! Learning-content repository.

use pulse_core::entities::LearningContentRow;

use crate::PulseStore;
use crate::error::StoreError;
use crate::helpers::{decode_rows, encode_rows};
use crate::query::Query;
use crate::tables::LEARNING_CONTENT;

impl PulseStore {
    pub async fn learning_content_for(
        &self,
        weak_spot_id: &str,
    ) -> Result<Vec<LearningContentRow>, StoreError> {
        let rows = self
            .backend()
            .select(LEARNING_CONTENT, &Query::new().eq("weak_spot_id", weak_spot_id))
            .await?;
        decode_rows(LEARNING_CONTENT, rows)
    }

    /// Replace every format row generated for the weak spot.
    pub async fn replace_learning_content(
        &self,
        weak_spot_id: &str,
        rows: &[LearningContentRow],
    ) -> Result<(), StoreError> {
        let rows = encode_rows(rows)?;
        self.replace_rows(LEARNING_CONTENT, "weak_spot_id", weak_spot_id, rows)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pulse_core::entities::LearningContent;
    use pulse_core::enums::LearningFormat;

    use crate::test_support::helpers::test_store;

    #[tokio::test]
    async fn regenerating_overwrites_previous_formats() {
        let (store, _) = test_store();
        let mut content = LearningContent::default();
        content.set(LearningFormat::Feynman, "first".into());
        store
            .replace_learning_content("ws1", &content.to_rows("u1", "ws1"))
            .await
            .unwrap();

        content.set(LearningFormat::Feynman, "second".into());
        store
            .replace_learning_content("ws1", &content.to_rows("u1", "ws1"))
            .await
            .unwrap();

        let rows = store.learning_content_for("ws1").await.unwrap();
        assert_eq!(rows.len(), 5);
        let feynman = rows
            .iter()
            .find(|r| r.format == LearningFormat::Feynman)
            .unwrap();
        assert_eq!(feynman.content, "second");
    }
}
