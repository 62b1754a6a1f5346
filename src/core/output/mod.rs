//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`] - the canonical posts CSV handed to the podcast service
//! - [`write_json`] / [`to_json`] - JSON array of posts - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> tweetcast::Result<()> {
//! use tweetcast::core::output::{to_csv, write_csv};
//! use tweetcast::Post;
//!
//! let posts = vec![Post::new("hello").with_created_at("t1")];
//!
//! write_csv(&posts, "posts.txt")?;
//! let csv_string = to_csv(&posts);
//! # Ok(())
//! # }
//! ```

mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

pub use csv_writer::{CSV_HEADER, clean_text, format_row, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
