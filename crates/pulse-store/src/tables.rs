//! Datastore table names.

pub const ATTEMPTS: &str = "attempts";
pub const QUESTIONS: &str = "questions";
pub const TOPICS: &str = "topics";
pub const WEAK_SPOTS: &str = "weak_spots";
pub const MASTERY: &str = "mastery_tracking";
pub const TIMETABLE: &str = "timetable";
pub const PROFILES: &str = "profiles";
pub const LEARNING_CONTENT: &str = "learning_content";

