//! Shared parsing utilities for X/Twitter archives.
//!
//! Array extraction, raw entry shapes and edit lineage live here so the
//! parser and the processor agree on a single reading of the export format.

pub mod archive;

// Re-export commonly used items
pub use archive::{
    EditLineage, RETWEET_PREFIX, RawEntry, RawTweet, extract_array, first_non_empty,
    parse_count, parse_entries,
};
