//! Hard token bounds shared by every summarization provider.
//!
//! The bounds mirror the summarization settings the chain was designed around
//! (minimum 30, maximum 130 tokens) and are deliberately not configurable.

use std::sync::OnceLock;
use tiktoken_rs::{CoreBPE, cl100k_base};

/// Minimum summary length, in tokens, targeted by providers.
pub const MIN_SUMMARY_TOKENS: usize = 30;
/// Maximum summary length, in tokens, enforced on every provider's output.
pub const MAX_SUMMARY_TOKENS: usize = 130;

fn tokenizer() -> &'static CoreBPE {
    static BPE: OnceLock<CoreBPE> = OnceLock::new();
    BPE.get_or_init(|| cl100k_base().expect("Failed to load cl100k_base tokenizer"))
}

/// Count tokens in `text` using the shared tokenizer.
pub fn count_tokens(text: &str) -> usize {
    tokenizer().encode_ordinary(text).len()
}

/// Truncate `text` to at most [`MAX_SUMMARY_TOKENS`] tokens.
///
/// A token cut can land inside a multi-byte character; the cut is walked back
/// until the prefix decodes cleanly.
pub fn clamp_to_budget(text: &str) -> String {
    let bpe = tokenizer();
    let tokens = bpe.encode_ordinary(text);
    if tokens.len() <= MAX_SUMMARY_TOKENS {
        return text.to_string();
    }

    let mut cut = MAX_SUMMARY_TOKENS;
    while cut > 0 {
        if let Ok(prefix) = bpe.decode(tokens[..cut].to_vec()) {
            return prefix.trim_end().to_string();
        }
        cut -= 1;
    }
    String::new()
}
