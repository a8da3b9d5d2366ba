//! Profile repository.

use pulse_core::entities::Profile;

use crate::PulseStore;
use crate::error::StoreError;
use crate::helpers::decode_row;
use crate::query::Query;
use crate::tables::PROFILES;

impl PulseStore {
    /// The user's profile, if one exists.
    pub async fn get_profile(&self, id: &str) -> Result<Option<Profile>, StoreError> {
        let rows = self
            .backend()
            .select(PROFILES, &Query::new().eq("id", id).limit(1))
            .await?;
        rows.into_iter()
            .next()
            .map(|row| decode_row(PROFILES, row))
            .transpose()
    }
}
