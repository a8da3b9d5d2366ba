//! Enums shared across ConceptPulse crates.
//!
//! All enums serialize as lowercase strings, matching the values stored in
//! the datastore. Deserialization also accepts capitalized spellings since
//! model output is not always consistent about case.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// How badly a concept is understood.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[serde(alias = "High", alias = "HIGH")]
    High,
    #[default]
    #[serde(alias = "Medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "Low", alias = "LOW")]
    Low,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Fold a free-form label onto the three stored levels. Labels that
    /// name no level are treated as `medium`.
    #[must_use]
    pub fn from_model(label: &str) -> Self {
        if let Ok(severity) = label.parse() {
            return severity;
        }
        match label.trim().to_ascii_lowercase().as_str() {
            "critical" | "severe" | "major" | "very high" | "urgent" => Self::High,
            "minor" | "mild" | "very low" | "trivial" => Self::Low,
            _ => Self::Medium,
        }
    }

    /// Sort key: `high` first.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(CoreError::UnknownVariant {
                kind: "severity",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// LearningFormat
// ---------------------------------------------------------------------------

/// A teaching format generated for a weak spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LearningFormat {
    Feynman,
    Explanation,
    Analogy,
    Example,
    Mindmap,
}

impl LearningFormat {
    /// Text formats, in generation order. `Mindmap` is produced separately
    /// from an image request.
    pub const TEXT_FORMATS: [Self; 4] = [
        Self::Feynman,
        Self::Explanation,
        Self::Analogy,
        Self::Example,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feynman => "feynman",
            Self::Explanation => "explanation",
            Self::Analogy => "analogy",
            Self::Example => "example",
            Self::Mindmap => "mindmap",
        }
    }
}

impl fmt::Display for LearningFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LearningFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feynman" => Ok(Self::Feynman),
            "explanation" => Ok(Self::Explanation),
            "analogy" => Ok(Self::Analogy),
            "example" => Ok(Self::Example),
            "mindmap" => Ok(Self::Mindmap),
            _ => Err(CoreError::UnknownVariant {
                kind: "learning format",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
                assert_eq!(val.as_str(), $expected_str);
            }
        };
    }

    test_serde_roundtrip!(severity_high, Severity, Severity::High, "high");
    test_serde_roundtrip!(severity_medium, Severity, Severity::Medium, "medium");
    test_serde_roundtrip!(severity_low, Severity, Severity::Low, "low");
    test_serde_roundtrip!(format_feynman, LearningFormat, LearningFormat::Feynman, "feynman");
    test_serde_roundtrip!(format_mindmap, LearningFormat, LearningFormat::Mindmap, "mindmap");

    #[test]
    fn severity_accepts_capitalized_model_output() {
        let s: Severity = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(s, Severity::High);
        let s: Severity = serde_json::from_str("\"LOW\"").unwrap();
        assert_eq!(s, Severity::Low);
    }

    #[test]
    fn severity_from_str_is_case_insensitive() {
        assert_eq!(" Medium ".parse::<Severity>().unwrap(), Severity::Medium);
        assert!("critical".parse::<Severity>().is_err());
    }

    #[test]
    fn severity_from_model_folds_free_labels() {
        assert_eq!(Severity::from_model("LOW"), Severity::Low);
        assert_eq!(Severity::from_model("Critical"), Severity::High);
        assert_eq!(Severity::from_model("mild"), Severity::Low);
        assert_eq!(Severity::from_model("moderate"), Severity::Medium);
        assert_eq!(Severity::from_model(""), Severity::Medium);
    }

    #[test]
    fn severity_rank_orders_high_first() {
        let mut all = vec![Severity::Low, Severity::High, Severity::Medium];
        all.sort_by_key(|s| s.rank());
        assert_eq!(all, vec![Severity::High, Severity::Medium, Severity::Low]);
    }

    #[test]
    fn text_formats_exclude_mindmap() {
        assert!(!LearningFormat::TEXT_FORMATS.contains(&LearningFormat::Mindmap));
        assert_eq!(LearningFormat::TEXT_FORMATS.len(), 4);
    }
}
