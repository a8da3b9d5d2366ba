//! Timetable repository.

use pulse_core::entities::{TimetableEntry, TimetableSlot};

use crate::PulseStore;
use crate::error::StoreError;
use crate::helpers::{decode_rows, encode_rows};
#[cfg(test)]
use crate::query::Query;
use crate::tables::TIMETABLE;

impl PulseStore {
    #[cfg(test)]
    pub(crate) async fn timetable_for_user(&self, user_id: &str) -> Result<Vec<TimetableEntry>, StoreError> {
        let rows = self
            .backend()
            .select(
                TIMETABLE,
                &Query::new()
                    .eq("user_id", user_id)
                    .order_by("day_of_week", true),
            )
            .await?;
        decode_rows(TIMETABLE, rows)
    }

    /// Replace the user's whole timetable and return the inserted entries.
    pub async fn replace_timetable(
        &self,
        user_id: &str,
        slots: Vec<TimetableSlot>,
    ) -> Result<Vec<TimetableEntry>, StoreError> {
        let entries: Vec<TimetableEntry> = slots
            .into_iter()
            .map(|slot| TimetableEntry {
                id: None,
                user_id: user_id.to_string(),
                slot,
            })
            .collect();
        let rows = encode_rows(&entries)?;
        let inserted = self.replace_rows(TIMETABLE, "user_id", user_id, rows).await?;
        decode_rows(TIMETABLE, inserted)
    }
}
