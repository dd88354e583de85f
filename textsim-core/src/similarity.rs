//! Term-frequency vectors and cosine similarity
//!
//! TF-only scoring with no IDF and no corpus statistics, so a score for a
//! pair of texts depends on those two texts alone.

use ahash::AHashMap;
use std::collections::hash_map::Entry;

use crate::tokenizer::Tokenizer;

/// Term-frequency vector for a single text
///
/// Counts live in a hash map for O(1) lookup; iteration follows
/// first-insertion order so repeated runs see the same sequence.
#[derive(Debug, Clone, Default)]
pub struct TermVector {
    counts: AHashMap<String, u32>,
    order: Vec<String>,
}

impl TermVector {
    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when the source text yielded no usable tokens
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Occurrence count for a term, 0 when absent
    pub fn count(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Iterate terms and counts in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.order
            .iter()
            .map(|term| (term.as_str(), self.counts[term]))
    }

    fn tally(&mut self, term: String) {
        match self.counts.entry(term) {
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(1);
            }
        }
    }

    fn magnitude_squared(&self) -> f64 {
        self.counts
            .values()
            .map(|&weight| {
                let weight = weight as f64;
                weight * weight
            })
            .sum()
    }

    fn dot(&self, other: &TermVector) -> f64 {
        self.counts
            .iter()
            .map(|(term, &weight)| weight as f64 * other.count(term) as f64)
            .sum()
    }
}

/// Build a term-frequency vector from text
pub fn vectorize(text: &str) -> TermVector {
    let tokenizer = Tokenizer::default();
    let mut vector = TermVector::default();

    for token in tokenizer.tokenize(text) {
        vector.tally(token);
    }

    vector
}

/// Cosine similarity between two texts using term-frequency vectors
///
/// Returns a value in `[0.0, 1.0]`. When either side has no usable
/// tokens the similarity is not meaningful and the result is 0.0.
pub fn cosine_similarity(left_text: &str, right_text: &str) -> f64 {
    let left = vectorize(left_text);
    let right = vectorize(right_text);

    if left.is_empty() || right.is_empty() {
        return 0.0;
    }

    let dot_product = left.dot(&right);
    let left_magnitude_squared = left.magnitude_squared();
    let right_magnitude_squared = right.magnitude_squared();

    // Guard against division by zero.
    if left_magnitude_squared <= 0.0 || right_magnitude_squared <= 0.0 {
        return 0.0;
    }

    dot_product / (left_magnitude_squared.sqrt() * right_magnitude_squared.sqrt())
}
