//! Serde roundtrip and JsonSchema validation tests for entity and response types.

use chrono::Utc;
use pulse_core::entities::*;
use pulse_core::enums::*;
use pulse_core::responses::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    attempt_detail_roundtrip,
    AttemptDetail,
    AttemptDetail {
        attempt: Attempt {
            id: "att-1".into(),
            user_id: "user-1".into(),
            question_id: "q-1".into(),
            answer: Some("B".into()),
            is_correct: Some(true),
            time_taken: Some(12.5),
            confidence: Some(4.0),
            attempted_at: Some(Utc::now()),
        },
        question_text: Some("What is a derivative?".into()),
    }
);

roundtrip_and_validate!(
    topic_roundtrip,
    Topic,
    Topic {
        id: "topic-1".into(),
        user_id: "user-1".into(),
        name: "Kinematics".into(),
        subject: Some("Physics".into()),
        subtopics: Some(vec!["Velocity".into(), "Acceleration".into()]),
        note_id: None,
        created_at: None,
    }
);

roundtrip_and_validate!(
    weak_spot_with_topic_roundtrip,
    WeakSpotWithTopic,
    WeakSpotWithTopic {
        weak_spot: WeakSpot {
            id: "ws-1".into(),
            user_id: "user-1".into(),
            topic_id: Some("topic-1".into()),
            concept: "Vector decomposition".into(),
            severity: Severity::High,
            identified_at: Some(Utc::now()),
        },
        topic_name: Some("Kinematics".into()),
    }
);

roundtrip_and_validate!(
    mastery_roundtrip,
    MasteryRecord,
    MasteryRecord {
        user_id: "user-1".into(),
        topic_id: "topic-1".into(),
        mastery_score: 64.0,
        accuracy: Some(70),
        avg_time: Some(18),
        last_practiced: Some(Utc::now()),
    }
);

roundtrip_and_validate!(
    new_question_roundtrip,
    NewQuestion,
    NewQuestion {
        user_id: "user-1".into(),
        topic_id: "topic-1".into(),
        question: GeneratedQuestion {
            question_text: "Which quantity is a vector?".into(),
            options: vec!["Speed".into(), "Velocity".into()],
            correct_answer: Some("Velocity".into()),
            difficulty: Some("easy".into()),
        },
    }
);

roundtrip_and_validate!(
    timetable_entry_roundtrip,
    TimetableEntry,
    TimetableEntry {
        id: Some("tt-1".into()),
        user_id: "user-1".into(),
        slot: TimetableSlot {
            day_of_week: 3,
            time_slot: "18:00-19:00".into(),
            activity: "Practice problems".into(),
            duration: 60,
            topic_id: Some("topic-1".into()),
        },
    }
);

roundtrip_and_validate!(
    learning_row_roundtrip,
    LearningContentRow,
    LearningContentRow {
        user_id: "user-1".into(),
        weak_spot_id: "ws-1".into(),
        format: LearningFormat::Feynman,
        content: serde_json::Value::String("Imagine a ball...".into()),
    }
);

roundtrip_and_validate!(
    weak_spot_report_roundtrip,
    WeakSpotReport,
    WeakSpotReport {
        mastery_score: 55.0,
        weak_spots: vec![WeakSpotFinding {
            concept: "Chain rule".into(),
            severity: Severity::Medium,
            reason: Some("Errors on composite functions".into()),
        }],
        gaps: vec!["Function composition".into()],
    }
);

roundtrip_and_validate!(
    ocr_extraction_roundtrip,
    OcrExtraction,
    OcrExtraction {
        text: "Newton's laws...".into(),
        topics: vec![ExtractedTopic {
            name: "Newton's Laws".into(),
            subject: Some("Physics".into()),
            subtopics: vec!["Inertia".into()],
        }],
    }
);

roundtrip_and_validate!(
    recall_drill_roundtrip,
    RecallDrill,
    RecallDrill {
        questions: vec![RecallQuestion {
            question: "State Newton's first law".into(),
            expected_answer: "An object stays at rest or in motion unless acted on".into(),
            difficulty: Some("easy".into()),
        }],
        time_limit: 60,
    }
);

roundtrip_and_validate!(
    new_attempt_roundtrip,
    NewAttempt,
    NewAttempt {
        user_id: "user-1".into(),
        question_id: "q-1".into(),
        answer: None,
        is_correct: false,
        time_taken: Some(41.5),
        confidence: Some(2.0),
        attempted_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    attempt_submission_roundtrip,
    AttemptSubmission,
    AttemptSubmission {
        attempt: Attempt {
            id: "a-1".into(),
            user_id: "user-1".into(),
            question_id: "q-1".into(),
            answer: Some("C".into()),
            is_correct: Some(true),
            time_taken: Some(7.0),
            confidence: None,
            attempted_at: Some(Utc::now()),
        },
        mastery_score: 85.0,
    }
);
