//! Podcast prompt generation.
//!
//! Fills a fixed template with the user's self-introduction and the episode
//! topic, and enforces the character budget of the podcast service's
//! instruction box.
//!
//! # Example
//!
//! ```rust
//! use tweetcast::config::PromptConfig;
//! use tweetcast::prompt::{generate_prompt, remaining_chars};
//!
//! # fn main() -> tweetcast::Result<()> {
//! let config = PromptConfig::default();
//! let intro = "I am an engineer.";
//! let topic = "Rust in production";
//!
//! assert!(remaining_chars(intro, topic, &config) > 0);
//! let prompt = generate_prompt(intro, topic, &config)?;
//! assert!(prompt.starts_with("I am an engineer. I am sharing my X/twitter feed."));
//! # Ok(())
//! # }
//! ```

use crate::config::PromptConfig;
use crate::error::{Result, TweetcastError};

/// Placeholder replaced by the self-introduction.
pub const INTRO_PLACEHOLDER: &str = "{intro}";

/// Placeholder replaced by the episode topic.
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

/// The prompt template. Each placeholder appears exactly once.
pub const PROMPT_TEMPLATE: &str = "{intro} I am sharing my X/twitter feed.
The topic we are discussing in today's episode is: {topic}

Discuss top posts only related to this topic, not as an interview, but as a discussion. Don't mention the post content as a post, just discuss the topic.

Keep it short. Less than 10 minutes";

/// Length of the template in characters, not counting the placeholders.
pub fn template_length() -> usize {
    PROMPT_TEMPLATE.chars().count()
        - INTRO_PLACEHOLDER.chars().count()
        - TOPIC_PLACEHOLDER.chars().count()
}

/// Length in characters of the prompt that `intro` and `topic` would produce.
pub fn rendered_length(intro: &str, topic: &str) -> usize {
    template_length() + intro.chars().count() + topic.chars().count()
}

/// Characters left in the budget. Negative once the prompt is too long.
pub fn remaining_chars(intro: &str, topic: &str, config: &PromptConfig) -> i64 {
    config.max_chars as i64 - rendered_length(intro, topic) as i64
}

/// Substitutes `intro` and `topic` into the template without any checks.
///
/// Inserted text is never rescanned, so an intro that happens to contain
/// `{topic}` stays literal.
pub fn render(intro: &str, topic: &str) -> String {
    let (head, tail) = PROMPT_TEMPLATE
        .split_once(TOPIC_PLACEHOLDER)
        .unwrap_or((PROMPT_TEMPLATE, ""));
    format!("{}{}{}", head.replacen(INTRO_PLACEHOLDER, intro, 1), topic, tail)
}

/// Builds the podcast prompt.
///
/// # Errors
///
/// - [`TweetcastError::MissingPromptField`] if `intro` or `topic` is empty
/// - [`TweetcastError::PromptTooLong`] if the result exceeds
///   [`PromptConfig::max_chars`]
pub fn generate_prompt(intro: &str, topic: &str, config: &PromptConfig) -> Result<String> {
    if intro.is_empty() {
        return Err(TweetcastError::MissingPromptField {
            field: "an introduction",
        });
    }
    if topic.is_empty() {
        return Err(TweetcastError::MissingPromptField { field: "a topic" });
    }

    let remaining = remaining_chars(intro, topic, config);
    if remaining < 0 {
        return Err(TweetcastError::PromptTooLong {
            excess: remaining.unsigned_abs() as usize,
            max: config.max_chars,
        });
    }

    Ok(render(intro, topic))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_length_excludes_placeholders() {
        assert_eq!(render("", "").chars().count(), template_length());
    }

    #[test]
    fn test_render_substitutes_both() {
        let prompt = render("Hi, I'm Sam.", "AI tooling");
        assert!(prompt.starts_with("Hi, I'm Sam. I am sharing my X/twitter feed.\n"));
        assert!(prompt.contains("episode is: AI tooling\n\n"));
        assert!(prompt.ends_with("Keep it short. Less than 10 minutes"));
        assert!(!prompt.contains(INTRO_PLACEHOLDER));
        assert!(!prompt.contains(TOPIC_PLACEHOLDER));
    }

    #[test]
    fn test_render_does_not_rescan_inserted_text() {
        let prompt = render("about {topic}", "x");
        assert!(prompt.starts_with("about {topic} I am sharing"));
    }

    #[test]
    fn test_rendered_length_matches_render() {
        let (intro, topic) = ("Привет, I'm Иван 👋", "Ferris");
        assert_eq!(
            rendered_length(intro, topic),
            render(intro, topic).chars().count()
        );
    }

    #[test]
    fn test_remaining_chars() {
        let config = PromptConfig::default();
        let base = 500 - template_length() as i64;
        assert_eq!(remaining_chars("", "", &config), base);
        assert_eq!(remaining_chars("abc", "de", &config), base - 5);
    }

    #[test]
    fn test_generate_prompt_ok() {
        let prompt = generate_prompt("I build things.", "Edge compute", &PromptConfig::default())
            .unwrap();
        assert_eq!(prompt, render("I build things.", "Edge compute"));
    }

    #[test]
    fn test_generate_prompt_missing_fields() {
        let config = PromptConfig::default();
        assert!(matches!(
            generate_prompt("", "topic", &config),
            Err(TweetcastError::MissingPromptField { field: "an introduction" })
        ));
        assert!(matches!(
            generate_prompt("intro", "", &config),
            Err(TweetcastError::MissingPromptField { field: "a topic" })
        ));
    }

    #[test]
    fn test_generate_prompt_exact_budget() {
        let config = PromptConfig::new().with_max_chars(template_length() + 2);
        assert!(generate_prompt("a", "b", &config).is_ok());
    }

    #[test]
    fn test_generate_prompt_too_long() {
        let config = PromptConfig::new().with_max_chars(template_length() + 2);
        let err = generate_prompt("ab", "cd", &config).unwrap_err();
        assert!(matches!(
            err,
            TweetcastError::PromptTooLong { excess: 2, .. }
        ));
    }
}
