//! Error types for the textbayes library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`TextBayesError`]. The variants follow the classifier's error taxonomy:
//!
//! - [`TextBayesError::InvalidArgument`] - a bad category name or model path,
//!   always detected before any state is touched
//! - [`TextBayesError::InvalidData`] - a malformed or inconsistent snapshot;
//!   the [`SnapshotError`] names the exact check that failed
//! - [`TextBayesError::Io`] - disk failures while reading or writing a model
//!
//! # Examples
//!
//! ```
//! use textbayes::error::{Result, TextBayesError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextBayesError::invalid_argument("category is required"))
//! }
//!
//! let err = example_operation().unwrap_err();
//! assert!(err.is_invalid_argument());
//! assert_eq!(err.to_string(), "Invalid argument: category is required");
//! ```

use std::io;

use thiserror::Error;

/// The main error type for textbayes operations.
#[derive(Error, Debug)]
pub enum TextBayesError {
    /// I/O errors (model file reads and writes)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Caller supplied an argument that can never succeed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Persisted model failed structural validation
    #[error("Invalid data: {0}")]
    InvalidData(#[from] SnapshotError),

    /// Analysis errors raised by a tokenizer, filter or analyzer
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with [`TextBayesError`].
pub type Result<T> = std::result::Result<T, TextBayesError>;

/// Reasons a persisted model is rejected on load.
///
/// Validation stops at the first failing check, so exactly one of these is
/// reported per rejected snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("unable to deserialize persisted model: {0}")]
    Unreadable(String),

    #[error("unsupported model version: {found} (expected {expected})")]
    UnsupportedVersion { found: i64, expected: i64 },

    #[error("invalid category name: {0:?}")]
    InvalidCategoryName(String),

    #[error("duplicate category name (names are case-insensitive): {0:?}")]
    DuplicateCategory(String),

    #[error("invalid tally for category {category}: {tally}")]
    InvalidTally { category: String, tally: i64 },

    #[error("invalid token name for category {0}")]
    InvalidTokenName(String),

    #[error("invalid token count for category {category}: {count}")]
    InvalidTokenCount { category: String, count: i64 },

    #[error("tally mismatch for category {category}: tally={tally}, sum={sum}")]
    TallyMismatch {
        category: String,
        tally: i64,
        sum: i64,
    },
}

impl TextBayesError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextBayesError::InvalidArgument(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextBayesError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TextBayesError::Other(msg.into())
    }

    /// Returns true for errors caused by the caller's arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TextBayesError::InvalidArgument(_))
    }

    /// Returns true for errors caused by a rejected snapshot.
    pub fn is_invalid_data(&self) -> bool {
        matches!(self, TextBayesError::InvalidData(_))
    }

    /// The snapshot validation failure, if this is one.
    pub fn snapshot_error(&self) -> Option<&SnapshotError> {
        match self {
            TextBayesError::InvalidData(err) => Some(err),
            _ => None,
        }
    }

    /// Returns true when the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TextBayesError::Io(err) if err.kind() == io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TextBayesError::invalid_argument("bad category");
        assert_eq!(error.to_string(), "Invalid argument: bad category");
        assert!(error.is_invalid_argument());
        assert!(!error.is_invalid_data());

        let error = TextBayesError::analysis("tokenizer failed");
        assert_eq!(error.to_string(), "Analysis error: tokenizer failed");
    }

    #[test]
    fn test_snapshot_error_conversion() {
        let error = TextBayesError::from(SnapshotError::UnsupportedVersion {
            found: 2,
            expected: 1,
        });

        assert!(error.is_invalid_data());
        assert_eq!(
            error.snapshot_error(),
            Some(&SnapshotError::UnsupportedVersion {
                found: 2,
                expected: 1
            })
        );
        assert!(error.to_string().contains("unsupported model version: 2"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = TextBayesError::from(io_error);

        match &error {
            TextBayesError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
        assert!(error.is_not_found());
    }
}
