//! Segmentation error types.

use thiserror::Error;

use topicseg_embeddings::EmbeddingError;

/// Errors that can occur during segmentation.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Vector comparison error (dimension mismatch, mixed representations)
    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
