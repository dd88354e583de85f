//! TextSim Core - TF cosine similarity and evidence snippets in Rust
//!
//! This library scores how similar two texts are using term-frequency
//! cosine similarity, and finds short display snippets around substring
//! matches. TF-only by design: no IDF, no corpus statistics, no state.

pub mod similarity;
pub mod snippet;
pub mod tokenizer;

pub use similarity::{cosine_similarity, vectorize, TermVector};
pub use snippet::{find_evidence_snippet, DEFAULT_SNIPPET_RADIUS};
pub use tokenizer::Tokenizer;
