//! Response types returned as JSON by the functions.
//!
//! Field names follow the camelCase contract the front end consumes. The
//! same types decode model output, so every field the model may omit has a
//! serde default; nothing beyond a successful parse is validated.

use schemars::JsonSchema;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::aggregate::NOT_ENOUGH_DATA;
use crate::entities::{Attempt, Question, TimetableEntry};
use crate::enums::Severity;

/// Severity as the model wrote it, folded onto the stored scale.
fn model_severity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Severity, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map_or(Severity::Medium, Severity::from_model))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
}

/// A score written as a number, a numeric string (`"62"`, `"62%"`), or null.
fn model_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Option::<LooseNumber>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(LooseNumber::Number(n)) => Ok(n),
        Some(LooseNumber::Text(text)) => text
            .trim()
            .trim_end_matches('%')
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid score `{text}`"))),
    }
}

/// One weak spot identified by the analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WeakSpotFinding {
    pub concept: String,
    #[serde(default, deserialize_with = "model_severity")]
    #[schemars(with = "Severity")]
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Response from `analyze-weakspots`, and the shape the model is asked to return.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeakSpotReport {
    #[serde(default, deserialize_with = "model_score")]
    #[schemars(with = "f64")]
    pub mastery_score: f64,
    #[serde(default)]
    pub weak_spots: Vec<WeakSpotFinding>,
    #[serde(default)]
    pub gaps: Vec<String>,
}

impl WeakSpotReport {
    /// Sentinel report for a topic without attempts.
    #[must_use]
    pub fn not_enough_data() -> Self {
        Self {
            mastery_score: 0.0,
            weak_spots: vec![WeakSpotFinding {
                concept: NOT_ENOUGH_DATA.to_string(),
                severity: Severity::High,
                reason: None,
            }],
            gaps: Vec::new(),
        }
    }
}

/// Response from `generate-questions`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

/// Response from `submit-attempt`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttemptSubmission {
    pub attempt: Attempt,
    pub mastery_score: f64,
}

/// Response from `generate-timetable`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimetableResponse {
    pub success: bool,
    pub schedule: Vec<TimetableEntry>,
}

/// A topic identified in a scanned document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExtractedTopic {
    pub name: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub subtopics: Vec<String>,
}

/// Response from `process-ocr`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OcrExtraction {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub topics: Vec<ExtractedTopic>,
}

/// Response from `generate-mindmap`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MindmapResponse {
    pub image_url: String,
}

const fn default_time_limit() -> u32 {
    60
}

/// One active-recall question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecallQuestion {
    pub question: String,
    #[serde(default)]
    pub expected_answer: String,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Response from `generate-recall-drill`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecallDrill {
    #[serde(default)]
    pub questions: Vec<RecallQuestion>,
    /// Seconds.
    #[serde(default = "default_time_limit")]
    pub time_limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sentinel_report_shape() {
        let json = serde_json::to_value(WeakSpotReport::not_enough_data()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "masteryScore": 0.0,
                "weakSpots": [{"concept": "Not enough data", "severity": "high"}],
                "gaps": []
            })
        );
    }

    #[test]
    fn report_decodes_model_output_without_gaps() {
        let report: WeakSpotReport = serde_json::from_str(
            r#"{"masteryScore": 42, "weakSpots": [{"concept": "Limits", "severity": "medium", "reason": "slow"}]}"#,
        )
        .unwrap();
        assert!((report.mastery_score - 42.0).abs() < f64::EPSILON);
        assert_eq!(report.weak_spots[0].severity, Severity::Medium);
        assert!(report.gaps.is_empty());
    }

    #[test]
    fn report_accepts_loose_model_output() {
        let report: WeakSpotReport = serde_json::from_str(
            r#"{"masteryScore": "62%", "weakSpots": [
                {"concept": "Snell", "severity": "critical"},
                {"concept": "Lenses", "severity": "Minor"},
                {"concept": "Prisms"}
            ]}"#,
        )
        .unwrap();
        assert!((report.mastery_score - 62.0).abs() < f64::EPSILON);
        let severities: Vec<Severity> = report.weak_spots.iter().map(|w| w.severity).collect();
        assert_eq!(severities, vec![Severity::High, Severity::Low, Severity::Medium]);
    }

    #[test]
    fn report_rejects_non_numeric_score() {
        let err = serde_json::from_str::<WeakSpotReport>(r#"{"masteryScore": "lots"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid score `lots`"));
    }

    #[test]
    fn recall_drill_defaults_time_limit() {
        let drill: RecallDrill = serde_json::from_str(
            r#"{"questions": [{"question": "Define inertia", "expectedAnswer": "resistance to change"}]}"#,
        )
        .unwrap();
        assert_eq!(drill.time_limit, 60);
        assert_eq!(drill.questions[0].expected_answer, "resistance to change");
    }
}
