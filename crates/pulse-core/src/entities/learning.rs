use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::LearningFormat;

/// Generated learning material for one weak spot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LearningContent {
    pub feynman: String,
    pub explanation: String,
    pub analogy: String,
    pub example: String,
    /// HTML fragment: an `<img>` tag, or a placeholder block.
    pub mindmap: String,
}

impl LearningContent {
    /// Store generated text for a format.
    pub fn set(&mut self, format: LearningFormat, text: String) {
        match format {
            LearningFormat::Feynman => self.feynman = text,
            LearningFormat::Explanation => self.explanation = text,
            LearningFormat::Analogy => self.analogy = text,
            LearningFormat::Example => self.example = text,
            LearningFormat::Mindmap => self.mindmap = text,
        }
    }

    #[must_use]
    pub fn get(&self, format: LearningFormat) -> &str {
        match format {
            LearningFormat::Feynman => &self.feynman,
            LearningFormat::Explanation => &self.explanation,
            LearningFormat::Analogy => &self.analogy,
            LearningFormat::Example => &self.example,
            LearningFormat::Mindmap => &self.mindmap,
        }
    }

    /// One `learning_content` row per format.
    #[must_use]
    pub fn to_rows(&self, user_id: &str, weak_spot_id: &str) -> Vec<LearningContentRow> {
        LearningFormat::TEXT_FORMATS
            .iter()
            .copied()
            .chain(std::iter::once(LearningFormat::Mindmap))
            .map(|format| LearningContentRow {
                user_id: user_id.to_string(),
                weak_spot_id: weak_spot_id.to_string(),
                format,
                content: serde_json::Value::String(self.get(format).to_string()),
            })
            .collect()
    }
}

/// Insert payload for the `learning_content` table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LearningContentRow {
    pub user_id: String,
    pub weak_spot_id: String,
    pub format: LearningFormat,
    pub content: serde_json::Value,
}
