//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Post;
use crate::error::TweetcastError;

/// Writes posts to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"id": "1", "full_text": "hello", "created_at": "...", "favorite_count": 5, "retweet_count": 2}
/// ]
/// ```
pub fn write_json(posts: &[Post], output_path: impl AsRef<Path>) -> Result<(), TweetcastError> {
    let json = to_json(posts)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts posts to a JSON array string.
///
/// Text is emitted as-is; JSON string escaping already handles newlines and
/// quotes.
pub fn to_json(posts: &[Post]) -> Result<String, TweetcastError> {
    Ok(serde_json::to_string_pretty(posts)?)
}
