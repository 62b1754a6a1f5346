//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - top-level CLI arguments
//! - [`Command`] - the `process` and `prompt` subcommands
//! - [`OutputFormat`] - output format options, convertible to
//!   [`crate::format::OutputFormat`]

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PROMPT_MAX_CHARS;

/// Turn your X/Twitter archive into a podcast-ready posts file and prompt.
#[derive(Parser, Debug, Clone)]
#[command(name = "tweetcast")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    tweetcast process data/tweets.js
    tweetcast process data/tweets.js -o posts.txt --after 2024-01-01 --preview
    tweetcast process data/tweets.js -f jsonl -o posts.jsonl
    tweetcast prompt --intro \"I am a backend engineer\" --topic \"Rust at work\"")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. "debug" or "tweetcast=trace")
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert a tweets.js archive file into a posts file
    Process(ProcessArgs),

    /// Generate the podcast prompt
    Prompt(PromptArgs),
}

/// Arguments for `tweetcast process`.
#[derive(clap::Args, Debug, Clone)]
pub struct ProcessArgs {
    /// Path to the archive's tweets.js file
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = "posts.txt")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Keep posts on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep posts on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep retweets instead of dropping them
    #[arg(long)]
    pub keep_retweets: bool,

    /// Keep every revision of edited posts
    #[arg(long)]
    pub all_revisions: bool,

    /// Print the first characters of the output
    #[arg(long)]
    pub preview: bool,
}

/// Arguments for `tweetcast prompt`.
#[derive(clap::Args, Debug, Clone)]
pub struct PromptArgs {
    /// Who you are, in a sentence or two
    #[arg(long)]
    pub intro: String,

    /// What today's episode is about
    #[arg(long)]
    pub topic: String,

    /// Character budget for the whole prompt
    #[arg(long, default_value_t = DEFAULT_PROMPT_MAX_CHARS)]
    pub max_chars: usize,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Posts CSV (default, what Notebook LM gets)
    #[default]
    Csv,

    /// JSON array of posts
    Json,

    /// JSON Lines - one post per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&crate::format::OutputFormat::from(*self), f)
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
