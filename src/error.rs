//! Unified error types for tweetcast.
//!
//! This module provides a single [`TweetcastError`] enum that covers all error
//! cases in the library. Extraction and parse failures are terminal for a
//! transform call; per-post anomalies never surface here and degrade to
//! defaults instead.
//!
//! # Error Kinds
//!
//! - [`Format`](TweetcastError::Format) - the input has no recognizable array
//! - [`Parse`](TweetcastError::Parse) - the array was found but is not valid JSON
//! - everything else comes from I/O, output serialization, date filters or
//!   prompt generation

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for tweetcast operations.
///
/// # Example
///
/// ```rust
/// use tweetcast::error::Result;
/// use tweetcast::Post;
///
/// fn my_function() -> Result<Vec<Post>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, TweetcastError>;

/// The error type for all tweetcast operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TweetcastError {
    /// An I/O error occurred while reading the archive or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input does not contain a recognizable array structure.
    ///
    /// Raised when either the opening `[` or the closing `]` is missing.
    #[error("FormatError: {message}")]
    Format {
        /// Description of what's wrong
        message: String,
    },

    /// The array delimiters were found but the enclosed text is not valid JSON.
    #[error("ParseError: invalid post data ({source})")]
    Parse {
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization error while writing output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid date format in filter configuration.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Unknown output format requested.
    #[error("Invalid output format: {message}")]
    InvalidOutputFormat {
        /// Description of what's wrong
        message: String,
    },

    /// A prompt input was left empty.
    #[error("Missing information: please provide {field}")]
    MissingPromptField {
        /// Which input was empty ("an introduction" or "a topic")
        field: &'static str,
    },

    /// The rendered prompt exceeds its character budget.
    #[error("Too many characters: please reduce your text by {excess} characters (limit: {max})")]
    PromptTooLong {
        /// How many characters over the limit
        excess: usize,
        /// The configured limit
        max: usize,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl TweetcastError {
    /// Creates the error raised when no JSON array delimiters are present.
    pub fn missing_delimiters() -> Self {
        TweetcastError::Format {
            message: "no JSON array delimiters found".to_string(),
        }
    }

    /// Creates a parse error from a JSON error.
    pub fn parse(source: serde_json::Error) -> Self {
        TweetcastError::Parse { source }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        TweetcastError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, TweetcastError::Io(_))
    }

    /// Returns `true` if the input had no array delimiters.
    pub fn is_format(&self) -> bool {
        matches!(self, TweetcastError::Format { .. })
    }

    /// Returns `true` if the embedded array could not be parsed.
    pub fn is_parse(&self) -> bool {
        matches!(self, TweetcastError::Parse { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, TweetcastError::InvalidDate { .. })
    }

    /// Returns `true` if prompt generation was rejected.
    pub fn is_prompt(&self) -> bool {
        matches!(
            self,
            TweetcastError::MissingPromptField { .. } | TweetcastError::PromptTooLong { .. }
        )
    }
}
