//! Core processing logic for tweetcast.
//!
//! This module contains:
//! - [`processor`] - Retweet and revision filtering with run statistics
//! - [`filter`] - Optional date-range filtering
//! - [`output`] - Format writers (CSV, JSON, JSONL)

pub mod filter;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use processor::{TransformStats, Verdict, classify, select_posts};

pub use crate::Post;

pub use output::{CSV_HEADER, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
