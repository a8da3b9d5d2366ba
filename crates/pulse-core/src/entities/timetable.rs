use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One block of a weekly study timetable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimetableSlot {
    /// 1 = Monday ... 5 = Friday.
    pub day_of_week: u8,
    /// `HH:MM-HH:MM`.
    pub time_slot: String,
    pub activity: String,
    /// Minutes.
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
}

impl TimetableSlot {
    /// Schedule used when the model reply cannot be used: a morning study
    /// session and an evening revision block on each weekday.
    #[must_use]
    pub fn fallback_week() -> Vec<Self> {
        (1..=5)
            .flat_map(|day| {
                [
                    Self {
                        day_of_week: day,
                        time_slot: "09:00-10:00".into(),
                        activity: "Morning Study Session".into(),
                        duration: 60,
                        topic_id: None,
                    },
                    Self {
                        day_of_week: day,
                        time_slot: "16:00-17:00".into(),
                        activity: "Evening Revision".into(),
                        duration: 60,
                        topic_id: None,
                    },
                ]
            })
            .collect()
    }
}

/// A timetable slot as stored for a user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimetableEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    #[serde(flatten)]
    pub slot: TimetableSlot,
}
