//! Entity structs mirroring datastore rows.
//!
//! Each entity maps to a table in the managed datastore. Optional columns are
//! `Option` with `#[serde(default)]` so partially selected rows still decode.

mod attempt;
mod learning;
mod mastery;
mod profile;
mod question;
mod timetable;
mod topic;
mod weak_spot;

pub use attempt::{Attempt, AttemptDetail, NewAttempt};
pub use learning::{LearningContent, LearningContentRow};
pub use mastery::{MasteryRecord, MasteryWithTopic};
pub use profile::Profile;
pub use question::{GeneratedQuestion, NewQuestion, Question};
pub use timetable::{TimetableEntry, TimetableSlot};
pub use topic::Topic;
pub use weak_spot::{NewWeakSpot, WeakSpot, WeakSpotWithTopic};
