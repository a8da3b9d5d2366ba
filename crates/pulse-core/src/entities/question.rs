use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A stored diagnostic question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub topic_id: Option<String>,
    pub question_text: String,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A question as returned by the model, before it is attached to a user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GeneratedQuestion {
    pub question_text: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Insert payload for the `questions` table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewQuestion {
    pub user_id: String,
    pub topic_id: String,
    #[serde(flatten)]
    pub question: GeneratedQuestion,
}
