//! # tweetcast
//!
//! Turns a personal X/Twitter archive export into material for an
//! AI-generated podcast episode.
//!
//! ## Overview
//!
//! The archive's `tweets.js` file is a JavaScript assignment wrapping a JSON
//! array of posts. tweetcast:
//!
//! - extracts and parses that array,
//! - drops retweets and superseded revisions of edited posts,
//! - writes the survivors as a compact CSV (`posts.txt`) ready to upload to
//!   Notebook LM,
//! - and builds the length-bounded prompt to paste alongside it.
//!
//! ## Quick Start
//!
//! ```rust
//! # fn main() -> tweetcast::Result<()> {
//! let raw = r#"window.YTD.tweets.part0 = [
//!   {"tweet": {"full_text": "Shipping it!", "created_at": "t1", "favorite_count": "12", "id": "1"}}
//! ];"#;
//!
//! let csv = tweetcast::transform(raw)?;
//! assert_eq!(
//!     csv,
//!     "full_text,created_at,favorite_count,retweet_count\n\"Shipping it!\",\"t1\",12,0"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`transform`](mod@transform) - raw archive text to CSV in one call
//! - [`parser`] - [`ArchiveParser`] for files and strings
//! - [`parsing`] - array extraction, raw entries, [`EditLineage`](parsing::EditLineage)
//! - [`core`] - filtering policy, date filters, output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`prompt`] - podcast prompt template and character budget
//! - [`config`] - [`ArchiveConfig`](config::ArchiveConfig), [`PromptConfig`](config::PromptConfig)
//! - [`error`] - [`TweetcastError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod parser;
pub mod parsing;
pub mod post;
pub mod prompt;
pub mod transform;

// Re-export the main types at the crate root for convenience
pub use error::{Result, TweetcastError};
pub use parser::ArchiveParser;
pub use post::{Count, Post};
pub use transform::{transform, transform_with_config};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use tweetcast::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Count, Post};

    pub use crate::error::{Result, TweetcastError};

    pub use crate::parser::ArchiveParser;
    pub use crate::transform::{transform, transform_with_config};

    pub use crate::config::{ArchiveConfig, PromptConfig};

    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::processor::TransformStats;

    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    pub use crate::prompt::{generate_prompt, remaining_chars};
}
