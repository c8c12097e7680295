//! Error types for resumekit.

use std::io;
use thiserror::Error;

/// Result type alias for resumekit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while normalizing or rendering a resume.
///
/// Data-shape problems in resume input are never reported here: they are
/// resolved by falling back to empty fields or the default template. The
/// variants below cover the few conditions with no safe default.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input could not be parsed as JSON at all.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The resume value is neither an object, a string, nor empty.
    #[error("Unsupported resume format: {0}")]
    UnsupportedFormat(String),

    /// A template style descriptor is missing a field or has a malformed color.
    #[error("Invalid template style: {0}")]
    InvalidStyle(String),

    /// Error during rendering (HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedFormat("list".to_string());
        assert_eq!(err.to_string(), "Unsupported resume format: list");

        let err = Error::InvalidStyle("primaryColor is missing".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid template style: primaryColor is missing"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
