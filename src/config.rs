//! Configuration types for archive processing and prompt generation.
//!
//! These are plain builder structs for library usage, without any CLI
//! framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use tweetcast::config::{ArchiveConfig, PromptConfig};
//!
//! let archive = ArchiveConfig::new().with_skip_retweets(false);
//! let prompt = PromptConfig::new().with_max_chars(800);
//! assert!(archive.latest_revision_only);
//! assert_eq!(prompt.max_chars, 800);
//! ```

use serde::{Deserialize, Serialize};

/// Default character budget for the generated podcast prompt.
pub const DEFAULT_PROMPT_MAX_CHARS: usize = 500;

/// Configuration for turning an archive into posts.
///
/// The defaults drop retweets and keep only the newest revision of edited
/// posts, which is what the CSV handed to the podcast service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Drop posts whose text starts with `RT @` (default: true)
    pub skip_retweets: bool,

    /// Keep only the newest revision of edited posts (default: true)
    pub latest_revision_only: bool,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            skip_retweets: true,
            latest_revision_only: true,
        }
    }
}

impl ArchiveConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether retweets are dropped.
    #[must_use]
    pub fn with_skip_retweets(mut self, skip: bool) -> Self {
        self.skip_retweets = skip;
        self
    }

    /// Sets whether superseded revisions of edited posts are dropped.
    #[must_use]
    pub fn with_latest_revision_only(mut self, latest_only: bool) -> Self {
        self.latest_revision_only = latest_only;
        self
    }
}

/// Configuration for prompt generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Maximum length of the rendered prompt in characters (default: 500)
    pub max_chars: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_PROMPT_MAX_CHARS,
        }
    }
}

impl PromptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the character budget.
    #[must_use]
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }
}
