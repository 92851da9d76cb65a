use async_trait::async_trait;

use super::bounds::{MAX_SUMMARY_TOKENS, MIN_SUMMARY_TOKENS, clamp_to_budget, count_tokens};
use super::{Summarizer, SummarizerError};

/// Summarizer that keeps the leading sentences of the input under the token budget.
///
/// This reproduces what a small non-instruction-following summarization model does with a
/// prompt: the text is shortened, instructions included, rather than obeyed. It requires no
/// model runtime, and the same input always yields the same output.
pub struct ExtractiveSummarizer;

impl ExtractiveSummarizer {
    /// Construct a new extractive summarizer instance.
    pub const fn new() -> Self {
        Self
    }

    fn summarize(text: &str) -> String {
        let mut summary = String::new();
        let mut used = 0usize;

        for sentence in sentences(text) {
            let cost = count_tokens(sentence);
            if cost == 0 {
                continue;
            }
            // Sentences keep flowing past the cap until the minimum is met;
            // the final clamp enforces the hard maximum.
            if !summary.is_empty()
                && used >= MIN_SUMMARY_TOKENS
                && used + cost > MAX_SUMMARY_TOKENS
            {
                break;
            }
            if !summary.is_empty() {
                summary.push(' ');
            }
            summary.push_str(sentence);
            used += cost;
            if used >= MAX_SUMMARY_TOKENS {
                break;
            }
        }

        if summary.is_empty() {
            return clamp_to_budget(text.trim());
        }
        clamp_to_budget(&summary)
    }
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    async fn generate(&self, prompt: &str) -> Result<String, SummarizerError> {
        Ok(Self::summarize(prompt))
    }
}

fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive(|c| matches!(c, '.' | '!' | '?' | '\n'))
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}
