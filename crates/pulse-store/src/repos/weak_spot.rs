//! Weak-spot repository.

use pulse_core::entities::{NewWeakSpot, WeakSpot, WeakSpotWithTopic};

use crate::PulseStore;
use crate::error::StoreError;
use crate::helpers::{decode_row, decode_rows, distinct_ids, encode_rows};
use crate::query::Query;
use crate::tables::WEAK_SPOTS;

impl PulseStore {
    pub async fn get_weak_spot(&self, id: &str) -> Result<WeakSpot, StoreError> {
        let mut rows = self
            .backend()
            .select(WEAK_SPOTS, &Query::new().eq("id", id).limit(1))
            .await?;
        if rows.is_empty() {
            return Err(StoreError::NotFound {
                entity: "Weak spot",
                id: id.to_string(),
            });
        }
        decode_row(WEAK_SPOTS, rows.swap_remove(0))
    }

    /// The user's weak spots with topic names, most severe first.
    pub async fn weak_spots_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<WeakSpotWithTopic>, StoreError> {
        let rows = self
            .backend()
            .select(
                WEAK_SPOTS,
                &Query::new()
                    .eq("user_id", user_id)
                    .order_by("identified_at", false),
            )
            .await?;
        let mut spots: Vec<WeakSpot> = decode_rows(WEAK_SPOTS, rows)?;
        spots.sort_by_key(|spot| spot.severity.rank());

        let topic_ids = distinct_ids(spots.iter().map(|s| s.topic_id.as_deref()));
        let names = self.topic_names(&topic_ids).await?;
        Ok(spots
            .into_iter()
            .map(|weak_spot| {
                let topic_name = weak_spot
                    .topic_id
                    .as_ref()
                    .and_then(|id| names.get(id))
                    .cloned();
                WeakSpotWithTopic {
                    weak_spot,
                    topic_name,
                }
            })
            .collect())
    }

    /// Replace the topic's weak spots.
    pub async fn replace_weak_spots(
        &self,
        topic_id: &str,
        spots: &[NewWeakSpot],
    ) -> Result<Vec<WeakSpot>, StoreError> {
        let rows = encode_rows(spots)?;
        let inserted = self
            .replace_rows(WEAK_SPOTS, "topic_id", topic_id, rows)
            .await?;
        decode_rows(WEAK_SPOTS, inserted)
    }
}
