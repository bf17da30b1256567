//! Vector source trait and the deterministic token-count source.

use std::collections::HashMap;

use tracing::trace;

use crate::error::EmbeddingError;
use crate::vector::SentenceVector;

/// Trait for sources of sentence vectors.
///
/// Implementations must be thread-safe (Send + Sync) so units can be
/// embedded from worker threads. Within a single batch every returned vector
/// must share one representation and, for dense vectors, one dimension.
pub trait VectorSource: Send + Sync {
    /// Produce the vector for a single sentence.
    fn embed(&self, sentence: &str) -> Result<SentenceVector, EmbeddingError>;

    /// Produce vectors for multiple sentences.
    /// Default implementation calls embed() for each sentence.
    fn embed_batch(&self, sentences: &[String]) -> Result<Vec<SentenceVector>, EmbeddingError> {
        sentences.iter().map(|s| self.embed(s)).collect()
    }
}

/// Trait for turning a sentence into tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Lowercase whitespace tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTokenizer;

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .map(|t| t.to_string())
            .collect()
    }
}

/// Deterministic vector source producing sparse token-count vectors.
///
/// No model, no I/O: the vector for a sentence is its bag of tokens. Useful
/// when a trained embedder is unavailable and as a test double for the
/// segmentation pipeline.
pub struct TokenCountSource {
    tokenizer: Box<dyn Tokenizer>,
}

impl TokenCountSource {
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(SimpleTokenizer))
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }
}

impl Default for TokenCountSource {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorSource for TokenCountSource {
    fn embed(&self, sentence: &str) -> Result<SentenceVector, EmbeddingError> {
        let mut counts: HashMap<String, f64> = HashMap::new();
        for token in self.tokenizer.tokenize(sentence) {
            *counts.entry(token).or_insert(0.0) += 1.0;
        }
        trace!(tokens = counts.len(), "Tokenized sentence");
        Ok(SentenceVector::Sparse(counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokenizer_lowercases() {
        let tokens = SimpleTokenizer.tokenize("The Product Was Obtained");
        assert_eq!(tokens, vec!["the", "product", "was", "obtained"]);
    }

    #[test]
    fn test_token_count_source_counts() {
        let source = TokenCountSource::new();
        let vector = source.embed("the product and the solvent").unwrap();
        match vector {
            SentenceVector::Sparse(counts) => {
                assert_eq!(counts["the"], 2.0);
                assert_eq!(counts["product"], 1.0);
            }
            SentenceVector::Dense(_) => panic!("expected sparse vector"),
        }
    }

    #[test]
    fn test_token_count_source_deterministic() {
        let source = TokenCountSource::new();
        let a = source.embed("alkyl fluorides in excellent yields").unwrap();
        let b = source.embed("alkyl fluorides in excellent yields").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_embed_batch_preserves_order() {
        let source = TokenCountSource::new();
        let sentences = vec!["first one".to_string(), "second one".to_string()];
        let vectors = source.embed_batch(&sentences).unwrap();
        assert_eq!(vectors.len(), 2);
        assert!((vectors[0].cosine(&vectors[1]).unwrap() - 0.5).abs() < 1e-9);
    }
}
