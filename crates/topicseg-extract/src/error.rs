//! Extraction error types.

use thiserror::Error;

use topicseg_core::SegmentError;
use topicseg_embeddings::EmbeddingError;

/// Errors that can occur during context extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Segmentation error
    #[error("Segmentation error: {0}")]
    Segment(#[from] SegmentError),

    /// Embedding error
    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Anchor points at a sentence the unit does not have
    #[error("Anchor sentence {sentence} out of range for unit of {len} sentences")]
    AnchorOutOfRange { sentence: usize, len: usize },

    /// IO error reading keyword lists
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
