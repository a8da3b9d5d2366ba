//! Function names as they appear in `/functions/v1/{name}`.

use std::fmt;
use std::str::FromStr;

use crate::error::FunctionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionName {
    AnalyzeWeakspots,
    GenerateLearning,
    GenerateQuestions,
    GenerateTimetable,
    ProcessOcr,
    GenerateMindmap,
    GenerateRecallDrill,
    SubmitAttempt,
}

impl FunctionName {
    pub const ALL: [Self; 8] = [
        Self::AnalyzeWeakspots,
        Self::GenerateLearning,
        Self::GenerateQuestions,
        Self::GenerateTimetable,
        Self::ProcessOcr,
        Self::GenerateMindmap,
        Self::GenerateRecallDrill,
        Self::SubmitAttempt,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AnalyzeWeakspots => "analyze-weakspots",
            Self::GenerateLearning => "generate-learning",
            Self::GenerateQuestions => "generate-questions",
            Self::GenerateTimetable => "generate-timetable",
            Self::ProcessOcr => "process-ocr",
            Self::GenerateMindmap => "generate-mindmap",
            Self::GenerateRecallDrill => "generate-recall-drill",
            Self::SubmitAttempt => "submit-attempt",
        }
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FunctionName {
    type Err = FunctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| FunctionError::UnknownFunction(s.to_string()))
    }
}
