//! Retweet and revision filtering.
//!
//! Turns parsed archive entries into the posts that belong in the output,
//! in their original order, and records what was dropped and why.

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::Post;
use crate::config::ArchiveConfig;
use crate::parsing::{RawEntry, RawTweet};

/// What happens to a single archive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The entry becomes an output row.
    Keep,
    /// The entry is a retweet.
    Retweet,
    /// The entry is an older revision of an edited post.
    Superseded,
}

/// Decides the fate of one entry.
///
/// The retweet check runs first and wins over any edit metadata.
pub fn classify(tweet: &RawTweet, config: &ArchiveConfig) -> Verdict {
    if config.skip_retweets && tweet.is_retweet() {
        return Verdict::Retweet;
    }

    if config.latest_revision_only {
        let id = tweet.id();
        if !tweet.edit_lineage().is_current(id.as_deref()) {
            return Verdict::Superseded;
        }
    }

    Verdict::Keep
}

/// Counters for a single archive run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    /// Array elements seen
    pub total: usize,
    /// Elements without a usable `tweet` object
    pub malformed: usize,
    /// Retweets dropped
    pub retweets: usize,
    /// Superseded revisions dropped
    pub superseded: usize,
    /// Posts kept
    pub kept: usize,
}

impl TransformStats {
    /// Share of entries dropped, as a percentage (0.0 - 100.0).
    pub fn dropped_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (1.0 - (self.kept as f64 / self.total as f64)) * 100.0
    }
}

/// Applies the retweet and revision policy to parsed array elements.
///
/// Elements that do not wrap a `tweet` object are skipped and counted as
/// malformed; they never abort the batch.
pub fn select_posts(entries: Vec<Value>, config: &ArchiveConfig) -> (Vec<Post>, TransformStats) {
    let mut stats = TransformStats {
        total: entries.len(),
        ..TransformStats::default()
    };
    let mut posts = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let Some(tweet) = RawEntry::from_value(entry) else {
            warn!(index, "skipping archive entry without a tweet object");
            stats.malformed += 1;
            continue;
        };

        match classify(&tweet, config) {
            Verdict::Keep => posts.push(tweet.to_post()),
            Verdict::Retweet => {
                trace!(index, "dropping retweet");
                stats.retweets += 1;
            }
            Verdict::Superseded => {
                trace!(index, id = ?tweet.id(), "dropping superseded revision");
                stats.superseded += 1;
            }
        }
    }

    stats.kept = posts.len();
    debug!(
        total = stats.total,
        kept = stats.kept,
        retweets = stats.retweets,
        superseded = stats.superseded,
        malformed = stats.malformed,
        "archive entries processed"
    );

    (posts, stats)
}
