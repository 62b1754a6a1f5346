//! Normalized post type.
//!
//! This module provides [`Post`], the record every surviving archive entry is
//! converted into before it is written out.
//!
//! # Examples
//!
//! ```
//! use tweetcast::Post;
//!
//! let post = Post::new("Hello, world!")
//!     .with_id("1234")
//!     .with_created_at("Wed Oct 10 20:19:24 +0000 2018")
//!     .with_counts(5, 2);
//!
//! assert_eq!(post.text, "Hello, world!");
//! assert_eq!(post.favorite_count.to_string(), "5");
//! assert!(post.timestamp().is_some());
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Timestamp layout used by X/Twitter archives, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
pub const ARCHIVE_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// A single post that survived retweet and revision filtering.
///
/// Serialized field names match the CSV header columns, so JSON and CSV
/// output describe posts with the same vocabulary.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `id` | `Option<String>` | Identifier of this revision |
/// | `text` | `String` | Display text (`full_text`, else `text`) |
/// | `created_at` | `String` | Timestamp exactly as exported |
/// | `favorite_count` | [`Count`] | Likes as exported, 0 when missing |
/// | `retweet_count` | [`Count`] | Reposts as exported, 0 when missing |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Identifier of this specific revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub id: Option<String>,

    /// Display text of the post.
    ///
    /// Kept raw here; CSV output collapses newlines and escapes quotes.
    #[serde(rename = "full_text")]
    pub text: String,

    /// Free-form timestamp as authored by the exporting platform.
    #[serde(default)]
    pub created_at: String,

    /// Number of likes.
    #[serde(default)]
    pub favorite_count: Count,

    /// Number of reposts.
    #[serde(default)]
    pub retweet_count: Count,
}

/// An engagement count exactly as the archive stores it.
///
/// Exports mix JSON numbers and numeric strings. The value is carried
/// through untouched and rendered verbatim, so `"05"` stays `05` and `1.5`
/// stays `1.5`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Count {
    /// A JSON number
    Number(Number),
    /// A string, usually numeric
    Text(String),
}

impl Default for Count {
    fn default() -> Self {
        Count::Number(Number::from(0u64))
    }
}

impl From<u64> for Count {
    fn from(n: u64) -> Self {
        Count::Number(Number::from(n))
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Number(n) => write!(f, "{n}"),
            Count::Text(s) => f.write_str(s),
        }
    }
}

impl Post {
    /// Creates a post with only text. Counts default to zero.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Builder-style method to set the revision id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder-style method to set the raw timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    /// Builder-style method to set favorite and retweet counts.
    #[must_use]
    pub fn with_counts(mut self, favorite_count: u64, retweet_count: u64) -> Self {
        self.favorite_count = Count::from(favorite_count);
        self.retweet_count = Count::from(retweet_count);
        self
    }

    /// Parses `created_at` using the archive timestamp layout.
    ///
    /// Returns `None` for timestamps in any other shape; the raw string is
    /// still what gets written to output.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_str(self.created_at.trim(), ARCHIVE_TIMESTAMP_FORMAT)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
