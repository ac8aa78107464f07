//! Word tokenization.
//!
//! Splits free text into lowercase word candidates. Tokens shorter than
//! the configured minimum and tokens starting with a digit are dropped;
//! hyphens are kept inside words ("micro-ct") but trimmed at the edges.

/// Splits text into lowercase word tokens.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    min_len: usize,
}

impl Tokenizer {
    pub fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    /// Lazily yields tokens in original text order. Single pass, no side
    /// effects; an empty input yields an empty iterator.
    pub fn tokenize<'t>(&self, text: &'t str) -> impl Iterator<Item = String> + 't {
        let min_len = self.min_len;
        text.split(|c: char| !(c.is_alphanumeric() || c == '-'))
            .map(|raw| raw.trim_matches('-'))
            .filter(move |raw| keep(raw, min_len))
            .map(str::to_lowercase)
    }
}

fn keep(raw: &str, min_len: usize) -> bool {
    if raw.chars().count() < min_len {
        return false;
    }
    // Rejects pure numbers and number-led tokens like "3d".
    raw.chars().next().is_some_and(|c| !c.is_ascii_digit())
}
