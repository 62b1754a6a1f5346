//! # tweetcast CLI
//!
//! Command-line interface for the tweetcast library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::debug;

use tweetcast::cli::{Args, Command, ProcessArgs, PromptArgs};
use tweetcast::config::{ArchiveConfig, PromptConfig};
use tweetcast::core::{FilterConfig, apply_filters};
use tweetcast::format::{OutputFormat, to_format_string};
use tweetcast::logging::init_tracing;
use tweetcast::prompt::{generate_prompt, remaining_chars};
use tweetcast::{ArchiveParser, TweetcastError};

/// Characters of output shown by `--preview`.
const PREVIEW_CHARS: usize = 200;

fn main() {
    let args = <Args as ClapParser>::parse();

    if let Err(e) = init_tracing(args.verbose, args.log_level.as_deref()) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let result = match &args.command {
        Command::Process(process_args) => run_process(process_args),
        Command::Prompt(prompt_args) => run_prompt(prompt_args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_process(args: &ProcessArgs) -> Result<(), TweetcastError> {
    let total_start = Instant::now();
    let format: OutputFormat = args.format.into();

    println!("tweetcast v{}", env!("CARGO_PKG_VERSION"));
    println!("----------------------------------");
    println!("Input:   {}", args.input);
    println!("Output:  {}", args.output);
    println!("Format:  {}", format);

    let mut filter_config = FilterConfig::new();
    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        println!("After:   {}", after);
    }
    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        println!("Before:  {}", before);
    }
    println!();

    let config = ArchiveConfig::new()
        .with_skip_retweets(!args.keep_retweets)
        .with_latest_revision_only(!args.all_revisions);
    let parser = ArchiveParser::with_config(config);

    println!("Parsing {}...", parser.name());
    let parse_start = Instant::now();
    let (posts, stats) = parser.parse_file_with_stats(Path::new(&args.input))?;
    println!(
        "   Found {} entries, kept {} ({:.2}s)",
        stats.total,
        stats.kept,
        parse_start.elapsed().as_secs_f64()
    );

    let posts = if filter_config.is_active() {
        let filtered = apply_filters(posts, &filter_config);
        println!("   {} posts inside the date range", filtered.len());
        filtered
    } else {
        posts
    };

    println!("Writing {}...", format);
    let rendered = to_format_string(&posts, format)?;
    std::fs::write(&args.output, &rendered)?;
    debug!(bytes = rendered.len(), path = %args.output, "output written");

    println!();
    println!("Done! Output saved to {}", args.output);

    if args.preview {
        println!();
        println!("{}", preview(&rendered));
    }

    println!();
    println!("Summary:");
    println!("   Entries:      {}", stats.total);
    println!("   Retweets:     {}", stats.retweets);
    println!("   Old edits:    {}", stats.superseded);
    if stats.malformed > 0 {
        println!("   Malformed:    {}", stats.malformed);
    }
    println!("   Final:        {} posts", posts.len());
    println!("   Total time:   {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

fn run_prompt(args: &PromptArgs) -> Result<(), TweetcastError> {
    let config = PromptConfig::new().with_max_chars(args.max_chars);
    let prompt = generate_prompt(&args.intro, &args.topic, &config)?;

    println!("{}", prompt);
    eprintln!(
        "({} characters remaining)",
        remaining_chars(&args.intro, &args.topic, &config)
    );
    Ok(())
}

/// First [`PREVIEW_CHARS`] characters followed by an ellipsis.
fn preview(output: &str) -> String {
    let head: String = output.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}
