//! Archive parsing utilities.
//!
//! An X/Twitter `tweets.js` export is not plain JSON. It assigns an array to
//! a browser global:
//!
//! ```text
//! window.YTD.tweets.part0 = [
//!   { "tweet": { "full_text": "hello", "created_at": "...", "id": "1", ... } },
//!   ...
//! ]
//! ```
//!
//! This module locates the embedded array, parses it into loosely typed
//! entries, and exposes the per-entry lookups the processor needs.

use serde::Deserialize;
use serde_json::Value;

use crate::Post;
use crate::error::{Result, TweetcastError};
use crate::post::Count;

/// Text prefix that marks a reshare of someone else's post.
pub const RETWEET_PREFIX: &str = "RT @";

/// Returns the slice from the first `[` through the last `]`, inclusive.
///
/// This is a textual heuristic rather than a structural parse: whatever
/// prefix (`window.YTD.tweets.part0 =`) and terminator (`;`) surround the
/// array are discarded. Brackets are not depth-matched.
///
/// # Errors
///
/// Returns [`TweetcastError::Format`] if either delimiter is missing, or the
/// last `]` comes before the first `[`.
///
/// # Example
///
/// ```rust
/// use tweetcast::parsing::extract_array;
///
/// let raw = "window.YTD.tweets.part0 = [1, 2];";
/// assert_eq!(extract_array(raw).unwrap(), "[1, 2]");
/// assert!(extract_array("no array here").is_err());
/// ```
pub fn extract_array(raw: &str) -> Result<&str> {
    let start = raw.find('[').ok_or_else(TweetcastError::missing_delimiters)?;
    let end = raw.rfind(']').ok_or_else(TweetcastError::missing_delimiters)?;

    if end < start {
        return Err(TweetcastError::missing_delimiters());
    }

    // Both delimiters are single-byte ASCII, so these are char boundaries.
    Ok(&raw[start..=end])
}

/// Extracts and parses the embedded array into raw JSON values.
///
/// # Errors
///
/// - [`TweetcastError::Format`] when no array delimiters are present
/// - [`TweetcastError::Parse`] when the delimited text is not valid JSON
pub fn parse_entries(raw: &str) -> Result<Vec<Value>> {
    let json = extract_array(raw)?;
    serde_json::from_str::<Vec<Value>>(json).map_err(TweetcastError::parse)
}

/// One element of the archive array: a wrapper around the actual post.
#[derive(Debug, Deserialize)]
pub struct RawEntry {
    /// The wrapped post object
    pub tweet: Option<RawTweet>,
}

impl RawEntry {
    /// Interprets one array element.
    ///
    /// Returns `None` for elements that are not objects or carry no `tweet`
    /// object; such entries are unusable and get skipped.
    pub fn from_value(value: Value) -> Option<RawTweet> {
        serde_json::from_value::<RawEntry>(value).ok()?.tweet
    }
}

/// Raw post fields as exported.
///
/// Every field is an untyped [`Value`] so that unexpected types (a numeric
/// string where a number was expected, say) degrade to defaults instead of
/// failing the whole archive.
#[derive(Debug, Default, Deserialize)]
pub struct RawTweet {
    /// Untruncated text (preferred)
    pub full_text: Option<Value>,
    /// Legacy short text
    pub text: Option<Value>,
    /// Timestamp string
    pub created_at: Option<Value>,
    /// Likes (number or numeric string)
    pub favorite_count: Option<Value>,
    /// Reposts (number or numeric string)
    pub retweet_count: Option<Value>,
    /// Revision identifier
    pub id: Option<Value>,
    /// Revision identifier as a string, used when `id` is absent
    pub id_str: Option<Value>,
    /// Edit lineage metadata
    pub edit_info: Option<Value>,
}

impl RawTweet {
    /// Display text: `full_text`, else `text`, else empty.
    pub fn display_text(&self) -> &str {
        first_non_empty([self.full_text.as_ref(), self.text.as_ref()])
    }

    /// Returns `true` if the display text marks this post as a retweet.
    pub fn is_retweet(&self) -> bool {
        self.display_text().starts_with(RETWEET_PREFIX)
    }

    /// Identifier of this revision.
    pub fn id(&self) -> Option<String> {
        self.id
            .as_ref()
            .and_then(scalar_to_string)
            .or_else(|| self.id_str.as_ref().and_then(scalar_to_string))
    }

    /// Classifies the `edit_info` block.
    pub fn edit_lineage(&self) -> EditLineage {
        EditLineage::from_edit_info(self.edit_info.as_ref())
    }

    /// Converts into a [`Post`], substituting defaults for missing fields.
    pub fn to_post(&self) -> Post {
        Post {
            id: self.id(),
            text: self.display_text().to_string(),
            created_at: self
                .created_at
                .as_ref()
                .and_then(scalar_to_string)
                .unwrap_or_default(),
            favorite_count: parse_count(self.favorite_count.as_ref()),
            retweet_count: parse_count(self.retweet_count.as_ref()),
        }
    }
}

/// Returns the first candidate that is a non-empty string, else `""`.
///
/// Candidates are tried in order, so the caller's ordering is the precedence.
/// Non-string values are skipped.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tweetcast::parsing::first_non_empty;
///
/// let full = json!("");
/// let short = json!("short");
/// assert_eq!(first_non_empty([Some(&full), Some(&short)]), "short");
/// assert_eq!(first_non_empty([None, None]), "");
/// ```
pub fn first_non_empty<'a, I>(candidates: I) -> &'a str
where
    I: IntoIterator<Item = Option<&'a Value>>,
{
    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
        .unwrap_or("")
}

/// Reads a like/repost count, keeping the exported representation.
///
/// Numbers and strings pass through verbatim. Missing, null, empty-string
/// and zero values become `0`, as does anything that is neither a number
/// nor a string.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tweetcast::parsing::parse_count;
///
/// assert_eq!(parse_count(Some(&json!("05"))).to_string(), "05");
/// assert_eq!(parse_count(Some(&json!(1.5))).to_string(), "1.5");
/// assert_eq!(parse_count(None).to_string(), "0");
/// ```
pub fn parse_count(value: Option<&Value>) -> Count {
    match value {
        Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f != 0.0) => {
            Count::Number(n.clone())
        }
        Some(Value::String(s)) if !s.is_empty() => Count::Text(s.clone()),
        _ => Count::default(),
    }
}

/// Renders a string or number as a string. Other types yield `None`.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Where a post sits in the edit history of a logical post.
///
/// Exports store every historical revision of an edited post as its own
/// element. The shape of `edit_info` tells which one this is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditLineage {
    /// No `edit_info` at all: never edited.
    Unedited,

    /// `edit_info.initial.editTweetIds`: the original revision.
    Initial {
        /// Identifiers of every revision of this post
        edit_tweet_ids: Vec<String>,
    },

    /// `edit_info.edit.editControlInitial.editTweetIds`: a later revision.
    Revision {
        /// Identifiers of every revision, oldest first. An empty list matches
        /// no id, so the post is dropped.
        edit_tweet_ids: Vec<String>,
    },

    /// `edit_info` is present but matches neither known shape.
    Unrecognized,
}

impl EditLineage {
    /// Classifies an `edit_info` value. `initial` takes precedence over `edit`.
    pub fn from_edit_info(edit_info: Option<&Value>) -> Self {
        let info = match edit_info {
            None | Some(Value::Null) => return EditLineage::Unedited,
            Some(info) => info,
        };

        if let Some(ids) = id_list(info, "/initial/editTweetIds") {
            return EditLineage::Initial {
                edit_tweet_ids: ids,
            };
        }

        match id_list(info, "/edit/editControlInitial/editTweetIds") {
            Some(ids) => EditLineage::Revision {
                edit_tweet_ids: ids,
            },
            None => EditLineage::Unrecognized,
        }
    }

    /// Decides whether a post with this lineage and id should be kept.
    ///
    /// - `Unedited` and `Unrecognized` are always kept.
    /// - `Initial` is kept only when it is the sole revision.
    /// - `Revision` is kept only when `own_id` is the last listed id.
    pub fn is_current(&self, own_id: Option<&str>) -> bool {
        match self {
            EditLineage::Unedited | EditLineage::Unrecognized => true,
            EditLineage::Initial { edit_tweet_ids } => edit_tweet_ids.len() == 1,
            EditLineage::Revision { edit_tweet_ids } => {
                edit_tweet_ids.last().map(String::as_str) == own_id
            }
        }
    }
}

fn id_list(info: &Value, pointer: &str) -> Option<Vec<String>> {
    info.pointer(pointer)
        .and_then(Value::as_array)
        .map(|ids| ids.iter().filter_map(scalar_to_string).collect())
}
