//! JSON Lines (JSONL) output writer.
//!
//! One post per line, handy for RAG ingestion or piping into `jq`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::Post;
use crate::error::TweetcastError;

/// Writes posts to JSONL format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"id":"1","full_text":"hello","created_at":"t1","favorite_count":5,"retweet_count":2}
/// ```
pub fn write_jsonl(posts: &[Post], output_path: impl AsRef<Path>) -> Result<(), TweetcastError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for post in posts {
        let line = serde_json::to_string(post)?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts posts to a JSONL string, one object per line.
pub fn to_jsonl(posts: &[Post]) -> Result<String, TweetcastError> {
    let mut out = String::new();
    for post in posts {
        out.push_str(&serde_json::to_string(post)?);
        out.push('\n');
    }
    Ok(out)
}
