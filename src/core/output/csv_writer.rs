//! CSV output writer.
//!
//! The CSV layout is fixed:
//!
//! ```text
//! full_text,created_at,favorite_count,retweet_count
//! "cleaned text","raw timestamp",5,2
//! ```
//!
//! Text and timestamp are always quoted, counts never are, and every row is
//! kept on a single line. Rows are joined with `\n` and there is no trailing
//! newline, so the writer is hand-rolled rather than built on a generic CSV
//! serializer.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::Post;
use crate::error::TweetcastError;

/// Header row of every CSV document.
pub const CSV_HEADER: &str = "full_text,created_at,favorite_count,retweet_count";

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("line break pattern is valid"));

/// Collapses each run of `\r`/`\n` into one space and doubles every `"`.
///
/// # Example
///
/// ```rust
/// use tweetcast::core::output::clean_text;
///
/// assert_eq!(clean_text("line1\nline2"), "line1 line2");
/// assert_eq!(clean_text("say \"hi\""), "say \"\"hi\"\"");
/// ```
pub fn clean_text(text: &str) -> String {
    LINE_BREAKS.replace_all(text, " ").replace('"', "\"\"")
}

/// Formats one post as a CSV row, without a line terminator.
///
/// The timestamp keeps its line breaks and is otherwise written raw. Only its
/// quotes are doubled, since a bare `"` inside a quoted field breaks the row.
pub fn format_row(post: &Post) -> String {
    format!(
        "\"{}\",\"{}\",{},{}",
        clean_text(&post.text),
        post.created_at.replace('"', "\"\""),
        post.favorite_count,
        post.retweet_count
    )
}

/// Converts posts to a CSV document string.
///
/// # Example
///
/// ```rust
/// use tweetcast::core::output::to_csv;
/// use tweetcast::Post;
///
/// let posts = vec![Post::new("hello").with_created_at("t1").with_counts(5, 2)];
/// assert_eq!(
///     to_csv(&posts),
///     "full_text,created_at,favorite_count,retweet_count\n\"hello\",\"t1\",5,2"
/// );
/// ```
pub fn to_csv(posts: &[Post]) -> String {
    let mut out = String::from(CSV_HEADER);
    for post in posts {
        out.push('\n');
        out.push_str(&format_row(post));
    }
    out
}

/// Writes posts to a CSV file.
pub fn write_csv(posts: &[Post], output_path: impl AsRef<Path>) -> Result<(), TweetcastError> {
    fs::write(output_path, to_csv(posts))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_clean_text_collapses_line_break_runs() {
        assert_eq!(clean_text("a\r\n\r\nb"), "a b");
        assert_eq!(clean_text("a\rb\nc"), "a b c");
        assert_eq!(clean_text("\ntrailing\n"), " trailing ");
    }

    #[test]
    fn test_clean_text_keeps_other_whitespace() {
        assert_eq!(clean_text("tab\there  two"), "tab\there  two");
    }

    #[test]
    fn test_format_row_quotes_text_and_timestamp_only() {
        let post = Post::new("say \"hi\"")
            .with_created_at("Wed Oct 10 20:19:24 +0000 2018")
            .with_counts(10, 0);
        assert_eq!(
            format_row(&post),
            "\"say \"\"hi\"\"\",\"Wed Oct 10 20:19:24 +0000 2018\",10,0"
        );
    }

    #[test]
    fn test_format_row_keeps_commas_inside_quotes() {
        let post = Post::new("a, b, c");
        assert_eq!(format_row(&post), "\"a, b, c\",\"\",0,0");
    }

    #[test]
    fn test_to_csv_header_only() {
        assert_eq!(to_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn test_to_csv_no_trailing_newline() {
        let posts = vec![Post::new("one"), Post::new("two")];
        let csv = to_csv(&posts);
        assert!(!csv.ends_with('\n'));
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_write_csv_basic() {
        let posts = vec![Post::new("Hello").with_created_at("t1").with_counts(1, 2)];

        let temp_file = NamedTempFile::new().unwrap();
        write_csv(&posts, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content, format!("{CSV_HEADER}\n\"Hello\",\"t1\",1,2"));
    }
}
