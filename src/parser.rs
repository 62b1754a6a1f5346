//! Archive parser.
//!
//! [`ArchiveParser`] is the single entry point for reading a `tweets.js`
//! export into [`Post`]s, either from a file or from text already in memory.
//!
//! # Example
//!
//! ```rust
//! use tweetcast::parser::ArchiveParser;
//!
//! # fn main() -> tweetcast::Result<()> {
//! let raw = r#"window.YTD.tweets.part0 = [
//!   {"tweet": {"full_text": "hello", "created_at": "t1", "id": "1"}},
//!   {"tweet": {"full_text": "RT @someone: not mine", "id": "2"}}
//! ];"#;
//!
//! let posts = ArchiveParser::new().parse_str(raw)?;
//! assert_eq!(posts.len(), 1);
//! assert_eq!(posts[0].text, "hello");
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::Post;
use crate::config::ArchiveConfig;
use crate::core::processor::{TransformStats, select_posts};
use crate::error::TweetcastError;
use crate::parsing::parse_entries;

/// Parser for X/Twitter `tweets.js` archive exports.
///
/// The export assigns a JSON array to a browser global:
/// ```text
/// window.YTD.tweets.part0 = [
///   {
///     "tweet": {
///       "id": "1580000000000000001",
///       "full_text": "Hello",
///       "created_at": "Wed Oct 12 10:00:00 +0000 2022",
///       "favorite_count": "5",
///       "retweet_count": "2",
///       "edit_info": { "initial": { "editTweetIds": ["1580000000000000001"] } }
///     }
///   }
/// ]
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchiveParser {
    config: ArchiveConfig,
}

impl ArchiveParser {
    /// Creates a parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with a custom configuration.
    pub fn with_config(config: ArchiveConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// Human-readable name of the export format.
    pub fn name(&self) -> &'static str {
        "X/Twitter archive"
    }

    /// Reads and parses an archive file.
    ///
    /// # Errors
    ///
    /// - [`TweetcastError::Io`] if the file cannot be read
    /// - [`TweetcastError::Format`] / [`TweetcastError::Parse`] as for
    ///   [`parse_str`](Self::parse_str)
    pub fn parse(&self, path: &Path) -> Result<Vec<Post>, TweetcastError> {
        self.parse_file_with_stats(path).map(|(posts, _)| posts)
    }

    /// Reads and parses an archive file, also returning run statistics.
    pub fn parse_file_with_stats(
        &self,
        path: &Path,
    ) -> Result<(Vec<Post>, TransformStats), TweetcastError> {
        debug!(path = %path.display(), "reading archive");
        let content = fs::read_to_string(path)?;
        self.parse_with_stats(&content)
    }

    /// Parses archive text already in memory.
    ///
    /// # Errors
    ///
    /// - [`TweetcastError::Format`] if the text has no `[` or `]`
    /// - [`TweetcastError::Parse`] if the delimited text is not valid JSON
    pub fn parse_str(&self, content: &str) -> Result<Vec<Post>, TweetcastError> {
        self.parse_with_stats(content).map(|(posts, _)| posts)
    }

    /// Parses archive text, also returning run statistics.
    pub fn parse_with_stats(
        &self,
        content: &str,
    ) -> Result<(Vec<Post>, TransformStats), TweetcastError> {
        let entries = parse_entries(content)?;
        Ok(select_posts(entries, &self.config))
    }
}
