//! Filter posts by date range.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering post collections.
//!
//! # Example
//!
//! ```
//! use tweetcast::core::filter::{FilterConfig, apply_filters};
//! use tweetcast::Post;
//!
//! # fn main() -> tweetcast::Result<()> {
//! let posts = vec![
//!     Post::new("Old").with_created_at("Mon Jan 01 12:00:00 +0000 2024"),
//!     Post::new("New").with_created_at("Sat Jun 15 12:00:00 +0000 2024"),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(posts, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Posts whose `created_at` is not in the archive layout are **excluded**
//!   when a date filter is active
//! - Both bounds are inclusive and evaluated in UTC

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::Post;
use crate::error::TweetcastError;

/// Configuration for filtering posts by date.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only posts on or after this timestamp.
    pub after: Option<DateTime<Utc>>,

    /// Include only posts on or before this timestamp.
    pub before: Option<DateTime<Utc>>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all posts pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`TweetcastError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, TweetcastError> {
        let naive = parse_date(date_str)?;
        self.after = Some(naive.and_time(NaiveTime::MIN).and_utc());
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`TweetcastError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, TweetcastError> {
        let naive = parse_date(date_str)?;

        // End of the day to include the full day
        let end = naive
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| TweetcastError::invalid_date(date_str))?;
        self.before = Some(end.and_utc());
        Ok(self)
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: DateTime<Utc>) -> Self {
        self.after = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the post falls inside the configured range.
    pub fn matches(&self, post: &Post) -> bool {
        if !self.is_active() {
            return true;
        }

        match post.timestamp() {
            Some(ts) => {
                !(self.after.is_some_and(|after| ts < after)
                    || self.before.is_some_and(|before| ts > before))
            }
            None => false,
        }
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, TweetcastError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| TweetcastError::invalid_date(date_str))
}

/// Filters posts based on the provided configuration, preserving order.
///
/// If no filters are active, returns the original posts unchanged.
pub fn apply_filters(posts: Vec<Post>, config: &FilterConfig) -> Vec<Post> {
    if !config.is_active() {
        return posts;
    }

    posts.into_iter().filter(|post| config.matches(post)).collect()
}
