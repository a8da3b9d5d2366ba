use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A learner's profile.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub class_year: Option<String>,
}
