use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Severity;

/// A concept flagged as poorly understood.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WeakSpot {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub topic_id: Option<String>,
    pub concept: String,
    pub severity: Severity,
    #[serde(default)]
    pub identified_at: Option<DateTime<Utc>>,
}

/// Insert payload for the `weak_spots` table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewWeakSpot {
    pub user_id: String,
    pub topic_id: String,
    pub concept: String,
    pub severity: Severity,
}

/// A weak spot with the name of its topic resolved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WeakSpotWithTopic {
    #[serde(flatten)]
    pub weak_spot: WeakSpot,
    pub topic_name: Option<String>,
}
