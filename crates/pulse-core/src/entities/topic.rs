use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A study topic, usually extracted from a scanned note.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Topic {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub subtopics: Option<Vec<String>>,
    #[serde(default)]
    pub note_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
