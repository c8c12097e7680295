//! Input shape detection.
//!
//! The screen preview accepts whatever the caller currently holds: nothing
//! yet, a markdown string from the generation service, a structured record,
//! or something else entirely. This module classifies a JSON value into one
//! of those shapes before rendering.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::CanonicalResume;
use crate::normalize::normalize_value;

/// Top-level shape of an incoming value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Null, or an empty string
    Missing,
    /// A non-empty string, rendered as markdown
    Markdown,
    /// A JSON object
    Structured,
    /// A JSON array
    List,
    /// A boolean or number
    Scalar,
}

impl ShapeKind {
    /// Get the shape name.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Missing => "missing",
            ShapeKind::Markdown => "markdown",
            ShapeKind::Structured => "structured",
            ShapeKind::List => "list",
            ShapeKind::Scalar => "scalar",
        }
    }

    /// Whether the screen renderer can display this shape.
    pub fn is_supported(self) -> bool {
        !matches!(self, ShapeKind::List | ShapeKind::Scalar)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a JSON value.
///
/// # Example
/// ```
/// use resumekit::detect::{detect_shape, ShapeKind};
/// use serde_json::json;
///
/// assert_eq!(detect_shape(&json!(null)), ShapeKind::Missing);
/// assert_eq!(detect_shape(&json!("")), ShapeKind::Missing);
/// assert_eq!(detect_shape(&json!("# Jane")), ShapeKind::Markdown);
/// assert_eq!(detect_shape(&json!(["a"])), ShapeKind::List);
/// ```
pub fn detect_shape(value: &Value) -> ShapeKind {
    match value {
        Value::Null => ShapeKind::Missing,
        Value::String(s) if s.is_empty() => ShapeKind::Missing,
        Value::String(_) => ShapeKind::Markdown,
        Value::Object(_) => ShapeKind::Structured,
        Value::Array(_) => ShapeKind::List,
        Value::Bool(_) | Value::Number(_) => ShapeKind::Scalar,
    }
}

/// Input to the screen renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewInput {
    /// Nothing to show yet
    Missing,
    /// Markdown text
    Markdown(String),
    /// A normalized resume
    Structured(CanonicalResume),
    /// A value of a shape the preview cannot display
    Unsupported(ShapeKind),
}

impl PreviewInput {
    /// Build preview input from a JSON value, normalizing structured records.
    pub fn from_value(value: &Value) -> Self {
        let shape = detect_shape(value);
        match (shape, value) {
            (ShapeKind::Missing, _) => PreviewInput::Missing,
            (ShapeKind::Markdown, Value::String(s)) => PreviewInput::Markdown(s.clone()),
            (ShapeKind::Structured, _) => PreviewInput::Structured(normalize_value(value)),
            (shape, _) => {
                log::debug!("Preview input has unsupported shape: {}", shape);
                PreviewInput::Unsupported(shape)
            }
        }
    }

    /// Parse JSON text and build preview input.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Shape of this input.
    pub fn shape(&self) -> ShapeKind {
        match self {
            PreviewInput::Missing => ShapeKind::Missing,
            PreviewInput::Markdown(_) => ShapeKind::Markdown,
            PreviewInput::Structured(_) => ShapeKind::Structured,
            PreviewInput::Unsupported(shape) => *shape,
        }
    }

    /// Get the structured resume, or fail for every other shape.
    pub fn require_structured(&self) -> Result<&CanonicalResume> {
        match self {
            PreviewInput::Structured(resume) => Ok(resume),
            other => Err(Error::UnsupportedFormat(format!(
                "expected a structured resume, got {}",
                other.shape()
            ))),
        }
    }
}

impl From<CanonicalResume> for PreviewInput {
    fn from(resume: CanonicalResume) -> Self {
        PreviewInput::Structured(resume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_shapes() {
        assert_eq!(detect_shape(&json!({})), ShapeKind::Structured);
        assert_eq!(detect_shape(&json!(true)), ShapeKind::Scalar);
        assert_eq!(detect_shape(&json!(3.5)), ShapeKind::Scalar);
        assert_eq!(detect_shape(&json!("")), ShapeKind::Missing);
    }

    #[test]
    fn test_whitespace_string_is_markdown() {
        assert_eq!(detect_shape(&json!("   ")), ShapeKind::Markdown);
        assert!(matches!(
            PreviewInput::from_value(&json!(" \n ")),
            PreviewInput::Markdown(_)
        ));
    }

    #[test]
    fn test_from_value_normalizes_objects() {
        let input = PreviewInput::from_value(&json!({"name": "Jane", "skills": "Rust, Go"}));
        let resume = input.require_structured().unwrap();
        assert_eq!(resume.skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_list_is_unsupported() {
        let input = PreviewInput::from_value(&json!(["Rust", "Go"]));
        assert_eq!(input, PreviewInput::Unsupported(ShapeKind::List));
        assert!(!input.shape().is_supported());

        let err = input.require_structured().unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
        assert!(err.to_string().contains("list"));
    }

    #[test]
    fn test_markdown_keeps_original_text() {
        let input = PreviewInput::from_json_str(r##""# Jane\n\nEngineer""##).unwrap();
        assert_eq!(input, PreviewInput::Markdown("# Jane\n\nEngineer".to_string()));
    }

    #[test]
    fn test_from_json_str_syntax_error() {
        assert!(matches!(
            PreviewInput::from_json_str("{"),
            Err(Error::Json(_))
        ));
    }
}
