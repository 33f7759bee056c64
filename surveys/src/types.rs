//! Wire schema for the survey backend.
//!
//! Field names follow the backend JSON exactly (a mix of `camelCase` and
//! `snake_case`). Unknown fields are ignored so backend additions do not
//! break decoding.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SurveyError;

/// Options the backend assigns to a question created without any.
pub const DEFAULT_LIKERT_SCALE: [&str; 5] = ["Totally disagree", "Disagree", "Neutral", "Agree", "Fully Agree"];

/// Question id → answer value.
pub type Answers = BTreeMap<String, String>;

/// The backend writes unset collections as explicit `null`; read those (and
/// missing keys, via `default`) as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// =============================================================================
// SURVEY ID
// =============================================================================

/// A validated survey identifier: non-empty and usable as one URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurveyId(String);

impl SurveyId {
    /// # Errors
    ///
    /// Returns [`SurveyError::InvalidSurveyId`] for an empty id or one that
    /// contains `/`, `?`, `#` or whitespace.
    pub fn parse(raw: &str) -> Result<Self, SurveyError> {
        let invalid = raw.is_empty() || raw.chars().any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace());
        if invalid {
            return Err(SurveyError::InvalidSurveyId(raw.to_owned()));
        }
        Ok(Self(raw.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SurveyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// SURVEY
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub questions: Vec<Question>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub response_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(default)]
    pub survey_id: Option<String>,
    pub text: String,
    #[serde(rename = "responseOptions", default, deserialize_with = "null_as_default")]
    pub response_options: Vec<String>,
}

impl Question {
    /// Response options to render, falling back to [`DEFAULT_LIKERT_SCALE`].
    #[must_use]
    pub fn options(&self) -> Vec<&str> {
        if self.response_options.is_empty() {
            DEFAULT_LIKERT_SCALE.to_vec()
        } else {
            self.response_options.iter().map(String::as_str).collect()
        }
    }

    /// Answer value the backend expects for the option at `index` (1-based string).
    #[must_use]
    pub fn answer_for_option(index: usize) -> String {
        (index + 1).to_string()
    }

    /// Inverse of [`Self::answer_for_option`]; `None` for values that are not
    /// a valid option of this question.
    #[must_use]
    pub fn option_for_answer(&self, answer: &str) -> Option<usize> {
        let n: usize = answer.trim().parse().unwrap_or(0);
        (1..=self.options().len()).contains(&n).then(|| n - 1)
    }
}

// =============================================================================
// RESULTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResults {
    pub survey: SurveySummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<QuestionResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveySummary {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
    #[serde(rename = "responseCount", default)]
    pub response_count: Option<u32>,
}

/// Aggregated answers for one question, keyed by option label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    #[serde(rename = "questionText")]
    pub question_text: String,
    #[serde(rename = "responseOptions", default, deserialize_with = "null_as_default")]
    pub response_options: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub responses: BTreeMap<String, u64>,
}

impl QuestionResult {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.responses.values().sum()
    }

    /// Count per option in declared option order, zero-filled. Labels the
    /// backend returned that are not declared options are appended after.
    #[must_use]
    pub fn tally(&self) -> Vec<(&str, u64)> {
        let mut rows: Vec<(&str, u64)> = self
            .response_options
            .iter()
            .map(|label| (label.as_str(), self.responses.get(label).copied().unwrap_or(0)))
            .collect();
        for (label, count) in &self.responses {
            if !self.response_options.contains(label) {
                rows.push((label.as_str(), *count));
            }
        }
        rows
    }
}

// =============================================================================
// SUBMISSION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAnswersRequest {
    #[serde(rename = "surveyId")]
    pub survey_id: String,
    pub answers: Answers,
}

/// Backend acknowledgement of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub message: String,
}

impl SubmitReceipt {
    /// The backend replies with plain text; a JSON string literal is unwrapped.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        let trimmed = body.trim();
        let message = match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(serde_json::Value::String(s)) => s,
            _ => trimmed.to_owned(),
        };
        Self { message }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
