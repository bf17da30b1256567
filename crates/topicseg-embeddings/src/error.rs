//! Embedding error types.

use thiserror::Error;

/// Errors that can occur when producing or comparing sentence vectors.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Dense vectors of different lengths
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Dense and sparse vectors mixed within one comparison
    #[error("Mixed vector representations: cannot compare dense and sparse vectors")]
    MixedRepresentation,

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Vector source failure
    #[error("Vector source error: {0}")]
    Source(String),
}
