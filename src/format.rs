//! Output format selection.
//!
//! Library-first format types that don't depend on the CLI framework.
//!
//! # Example
//!
//! ```rust
//! # fn main() -> tweetcast::Result<()> {
//! use tweetcast::format::{OutputFormat, to_format_string};
//! use tweetcast::Post;
//!
//! let posts = vec![Post::new("hello")];
//! let csv = to_format_string(&posts, OutputFormat::Csv)?;
//! assert!(csv.starts_with("full_text,"));
//!
//! // The posts file is conventionally saved as .txt for upload
//! assert_eq!(OutputFormat::from_path("posts.txt")?, OutputFormat::Csv);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Post;
use crate::error::TweetcastError;

/// Output format for processed posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// The posts CSV (default), accepted by Notebook LM as a text source.
    #[default]
    Csv,

    /// JSON array of posts
    Json,

    /// JSON Lines - one post per line
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Detects format from a file path based on extension.
    ///
    /// `.txt` maps to CSV, matching the conventional `posts.txt` name.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TweetcastError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" | "txt" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(TweetcastError::InvalidOutputFormat {
                message: format!(
                    "Unknown file extension: '.{}'. Expected one of: csv, txt, json, jsonl",
                    ext
                ),
            }),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn feature_disabled(format: OutputFormat) -> TweetcastError {
    TweetcastError::InvalidOutputFormat {
        message: format!(
            "Output format {} requires the 'json-output' feature to be enabled",
            format
        ),
    }
}

/// Writes posts to a file in the specified format.
pub fn write_to_format(
    posts: &[Post],
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), TweetcastError> {
    match format {
        OutputFormat::Csv => crate::core::output::write_csv(posts, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(posts, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(posts, path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Converts posts to a string in the specified format.
pub fn to_format_string(posts: &[Post], format: OutputFormat) -> Result<String, TweetcastError> {
    match format {
        OutputFormat::Csv => Ok(crate::core::output::to_csv(posts)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(posts),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(posts),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}
