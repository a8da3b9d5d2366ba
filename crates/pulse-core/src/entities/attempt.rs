use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One answer a user gave to a question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Attempt {
    pub id: String,
    pub user_id: String,
    pub question_id: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub is_correct: Option<bool>,
    /// Seconds spent on the question.
    #[serde(default)]
    pub time_taken: Option<f64>,
    /// Self-reported confidence, 1 to 5.
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub attempted_at: Option<DateTime<Utc>>,
}

/// An attempt joined with the text of the question it answers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AttemptDetail {
    #[serde(flatten)]
    pub attempt: Attempt,
    pub question_text: Option<String>,
}

/// Insert payload for the `attempts` table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NewAttempt {
    pub user_id: String,
    pub question_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_taken: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub attempted_at: DateTime<Utc>,
}
