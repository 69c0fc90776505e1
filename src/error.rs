//! Error types for Cinebot
//!
//! This module defines the error types used throughout the crate. Uses
//! `thiserror` for ergonomic error handling with automatic `Display` and
//! `Error` trait implementations.
//!
//! Only storage and configuration problems are errors. Malformed learn
//! commands and unmatched questions are answered with guidance strings and
//! never surface here.

use thiserror::Error;

/// The primary error type for Cinebot operations.
#[derive(Error, Debug)]
pub enum CinebotError {
    /// Configuration-related errors (invalid values, unreadable config file, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Movie table errors (unreadable or malformed dataset, failed writes)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Standard I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV encoding/decoding errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Resource not found (dataset file, movie title, etc.)
    #[error("Not found: {0}")]
    NotFound(String),
}

/// A specialized `Result` type for Cinebot operations.
pub type Result<T> = std::result::Result<T, CinebotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CinebotError::Config("recommendations must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: recommendations must be at least 1"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CinebotError = io_err.into();
        assert!(matches!(err, CinebotError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CinebotError = json_err.into();
        assert!(matches!(err, CinebotError::Json(_)));
    }

    #[test]
    fn test_storage_display() {
        let err = CinebotError::Storage("movies.csv: header mismatch".to_string());
        assert_eq!(err.to_string(), "Storage error: movies.csv: header mismatch");
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }
}
