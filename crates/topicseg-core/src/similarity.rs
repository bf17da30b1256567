//! Pairwise cosine similarity matrix.

use tracing::trace;

use topicseg_embeddings::SentenceVector;

use crate::error::SegmentError;
use crate::matrix::SquareMatrix;

/// Build the symmetric cosine similarity matrix over sentence vectors.
///
/// Degenerate (near-zero magnitude) vectors compare as 0 to everything,
/// including themselves. Dense vectors of uneven dimension, or a dense/sparse
/// mixture, fail with [`SegmentError::Embedding`].
pub fn similarity_matrix(vectors: &[SentenceVector]) -> Result<SquareMatrix, SegmentError> {
    let n = vectors.len();
    let mut sim = SquareMatrix::zeros(n);
    for i in 0..n {
        for j in i..n {
            let value = vectors[i].cosine(&vectors[j])?;
            sim.set_symmetric(i, j, value);
        }
    }
    trace!(sentences = n, "Built similarity matrix");
    Ok(sim)
}
