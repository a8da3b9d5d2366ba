use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-user, per-topic mastery tracking. Unique on `(user_id, topic_id)`.
///
/// Unset optional columns are left out of the JSON so an upsert keeps
/// whatever the stored row already has.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MasteryRecord {
    pub user_id: String,
    pub topic_id: String,
    /// Derived 0-100 score.
    pub mastery_score: f64,
    /// Rounded accuracy percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<i64>,
    /// Rounded mean seconds per question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_practiced: Option<DateTime<Utc>>,
}

/// A mastery record with the name of its topic resolved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MasteryWithTopic {
    #[serde(flatten)]
    pub record: MasteryRecord,
    pub topic_name: Option<String>,
}
