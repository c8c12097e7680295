//! Resume feedback returned by the analysis service.
//!
//! This shape is independent of [`super::CanonicalResume`] and is never
//! rendered by the template engine. It is kept here so callers have one
//! canonical schema to deserialize into.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category name used when the service returns only an overall score.
pub const GENERAL_CATEGORY: &str = "General Assessment";

/// Scored feedback for an uploaded resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    /// Overall score, 0-100
    pub overall_score: u8,

    /// Per-category scores
    pub categories: Vec<CategoryScore>,

    /// Improvement suggestions
    pub suggestions: Vec<String>,

    /// Job title the resume best matches
    pub job_title_match: Option<String>,

    /// Keyword occurrences
    pub keyword_matches: Vec<KeywordMatch>,
}

/// Score for one feedback category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Category label
    pub name: String,

    /// Score, 0-10
    pub score: u8,

    /// Feedback text
    pub feedback: String,
}

/// A keyword found in the resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub count: u32,
    pub importance: String,
}

impl ResumeAnalysis {
    /// Read an analysis from a service payload.
    ///
    /// Accepts both the full schema and the simplified one that carries only
    /// `overallScore` and `suggestions`. Scores are clamped to their ranges;
    /// a missing category list becomes a single general category whose
    /// score is the overall score scaled to 0-10.
    pub fn from_backend(value: &Value) -> Self {
        let overall_score = value
            .get("overallScore")
            .and_then(Value::as_f64)
            .map(|s| s.clamp(0.0, 100.0).round() as u8)
            .unwrap_or(0);

        let categories = match value.get("categories").and_then(Value::as_array) {
            Some(items) => items.iter().filter_map(CategoryScore::from_value).collect(),
            None => vec![CategoryScore {
                name: GENERAL_CATEGORY.to_string(),
                score: (f64::from(overall_score) / 10.0).round() as u8,
                feedback: "See suggestions below".to_string(),
            }],
        };

        let suggestions = value
            .get("suggestions")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let job_title_match = value
            .get("jobTitleMatch")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let keyword_matches = value
            .get("keywordMatches")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(KeywordMatch::from_value).collect())
            .unwrap_or_default();

        Self {
            overall_score,
            categories,
            suggestions,
            job_title_match,
            keyword_matches,
        }
    }

    /// Check if the analysis has not produced a score yet.
    pub fn is_pending(&self) -> bool {
        self.overall_score == 0
    }
}

impl CategoryScore {
    fn from_value(value: &Value) -> Option<Self> {
        let name = value.get("name")?.as_str()?.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            score: value
                .get("score")
                .and_then(Value::as_f64)
                .map(|s| s.clamp(0.0, 10.0).round() as u8)
                .unwrap_or(0),
            feedback: value
                .get("feedback")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
    }
}

impl KeywordMatch {
    fn from_value(value: &Value) -> Option<Self> {
        let keyword = value.get("keyword")?.as_str()?.trim();
        if keyword.is_empty() {
            return None;
        }
        Some(Self {
            keyword: keyword.to_string(),
            count: value
                .get("count")
                .and_then(Value::as_u64)
                .map(|c| c.min(u64::from(u32::MAX)) as u32)
                .unwrap_or(0),
            importance: value
                .get("importance")
                .and_then(Value::as_str)
                .unwrap_or("medium")
                .to_string(),
        })
    }
}
