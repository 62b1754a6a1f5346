//! Archive-to-CSV transformation.
//!
//! [`transform`] is the whole pipeline in one call: extract the embedded
//! array, parse it, drop retweets and superseded revisions, and render the
//! survivors as CSV. It performs no I/O and is safe to call repeatedly on the
//! same input.
//!
//! # Example
//!
//! ```rust
//! # fn main() -> tweetcast::Result<()> {
//! let raw = r#"window.X=[{"tweet":{"full_text":"hello","created_at":"t1","favorite_count":5,"retweet_count":2,"id":"1"}}];"#;
//!
//! let csv = tweetcast::transform(raw)?;
//! assert_eq!(
//!     csv,
//!     "full_text,created_at,favorite_count,retweet_count\n\"hello\",\"t1\",5,2"
//! );
//! # Ok(())
//! # }
//! ```

use crate::config::ArchiveConfig;
use crate::core::output::to_csv;
use crate::core::processor::TransformStats;
use crate::error::Result;
use crate::parser::ArchiveParser;

/// Converts raw `tweets.js` text into a posts CSV document.
///
/// # Errors
///
/// - [`TweetcastError::Format`](crate::TweetcastError::Format) if no array
///   delimiters are found
/// - [`TweetcastError::Parse`](crate::TweetcastError::Parse) if the array is
///   not valid JSON
///
/// No partial output is produced on error. Malformed fields inside
/// individual posts never fail the call.
pub fn transform(raw: &str) -> Result<String> {
    transform_with_config(raw, &ArchiveConfig::default()).map(|(csv, _)| csv)
}

/// Like [`transform`], with a custom configuration and run statistics.
pub fn transform_with_config(
    raw: &str,
    config: &ArchiveConfig,
) -> Result<(String, TransformStats)> {
    let parser = ArchiveParser::with_config(config.clone());
    let (posts, stats) = parser.parse_with_stats(raw)?;
    Ok((to_csv(&posts), stats))
}
