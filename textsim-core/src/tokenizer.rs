//! Tokenizer for term-frequency scoring
//!
//! Unicode-aware lowercasing with ASCII-alphanumeric terms: punctuation
//! and non-Latin letters act as separators.

use regex::Regex;
use std::sync::LazyLock;

// Maximal runs of characters outside [a-z0-9] and whitespace, applied to
// already-lowercased text. Each run becomes a single space.
static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]+").unwrap());

/// Simple tokenizer that normalizes text into scoring terms
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum term length in code points (default: 3)
    pub min_token_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self { min_token_len: 3 }
    }
}

impl Tokenizer {
    /// Create a new tokenizer with a custom minimum term length
    pub fn new(min_token_len: usize) -> Self {
        Self { min_token_len }
    }

    /// Tokenize text into terms
    ///
    /// Lowercases, strips everything outside `[a-z0-9]` to separators,
    /// then drops parts shorter than `min_token_len` and parts that are
    /// purely numeric. Duplicates are retained in input order since the
    /// output feeds a frequency count. Text with no usable tokens yields
    /// an empty Vec, not an error.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let separated = SEPARATOR_RUNS.replace_all(&lowered, " ");

        separated
            .split_whitespace()
            .filter(|part| part.chars().count() >= self.min_token_len)
            .filter(|part| !part.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize("Laravel developer with AWS experience.");
        assert_eq!(
            tokens,
            vec!["laravel", "developer", "with", "aws", "experience"]
        );
    }

    #[test]
    fn test_punctuation_becomes_separators() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize("Laravel, PHP; AWS!");
        assert_eq!(tokens, vec!["laravel", "php", "aws"]);
    }

    #[test]
    fn test_short_and_numeric_parts_dropped() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize("Go is 10 years of C99");
        assert_eq!(tokens, vec!["years", "c99"]);
    }

    #[test]
    fn test_unicode_lowercase_then_separators() {
        let tokenizer = Tokenizer::default();
        // Accented letters lowercase first, then split their words.
        let tokens = tokenizer.tokenize("Café RÉSUMÉ");
        assert_eq!(tokens, vec!["caf", "sum"]);
    }

    #[test]
    fn test_non_latin_text_is_separator() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize("日本語 rust プログラミング");
        assert_eq!(tokens, vec!["rust"]);
    }

    #[test]
    fn test_duplicates_preserved_in_order() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize("php php laravel php");
        assert_eq!(tokens, vec!["php", "php", "laravel", "php"]);
    }

    #[test]
    fn test_no_usable_tokens() {
        let tokenizer = Tokenizer::default();
        assert!(tokenizer.tokenize("@@@ !!! 12 34").is_empty());
        assert!(tokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_custom_min_length() {
        let tokenizer = Tokenizer::new(2);
        let tokens = tokenizer.tokenize("a bb ccc");
        assert_eq!(tokens, vec!["bb", "ccc"]);
    }
}
