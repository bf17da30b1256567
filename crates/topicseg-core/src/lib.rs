//! # topicseg-core
//!
//! Linear text segmentation by divisive clustering.
//!
//! Given one vector per sentence, [`segment_boundaries`] partitions the
//! sentence sequence into contiguous, topically coherent segments:
//!
//! 1. Pairwise cosine similarity matrix over the sentence vectors
//! 2. Windowed local rank normalization of the similarities
//! 3. 2-D prefix sums for O(1) block density queries
//! 4. Greedy top-down divisive clustering with memoized splits
//! 5. Boundary selection by smoothed gradient thresholding
//!
//! The pipeline is deterministic: identical input produces a bit-identical
//! boundary mask. Memory and time are O(n^2) in the number of sentences.

pub mod boundary;
pub mod cluster;
pub mod config;
pub mod density;
pub mod error;
pub mod matrix;
pub mod rank;
pub mod similarity;

use tracing::debug;

use topicseg_embeddings::SentenceVector;

pub use config::SegmentConfig;
pub use error::SegmentError;

use boundary::select_boundaries;
use cluster::divisive_cluster;
use density::DensitySums;
use rank::rank_matrix;
use similarity::similarity_matrix;

/// Segment a unit given one vector per sentence.
///
/// Returns a mask with one entry per sentence; `mask[k] == 1` means a new
/// segment starts at sentence `k`. `mask[0]` is always 1 for nonempty input.
/// Units of fewer than 3 sentences are a single segment.
pub fn segment_boundaries(
    vectors: &[SentenceVector],
    config: &SegmentConfig,
) -> Result<Vec<u8>, SegmentError> {
    config.validate()?;

    let n = vectors.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    if n < 3 {
        let mut mask = vec![0u8; n];
        mask[0] = 1;
        return Ok(mask);
    }

    let window = config.window.min(n);
    let sim = similarity_matrix(vectors)?;
    let rank = rank_matrix(&sim, window);
    let sums = DensitySums::build(&rank);
    let clustering = divisive_cluster(&sums);
    let mask = select_boundaries(&clustering.densities, &clustering.split_order, config.std_coeff);

    debug!(
        sentences = n,
        segments = mask.iter().filter(|&&b| b == 1).count(),
        "Segmented unit"
    );
    Ok(mask)
}

/// Convert a boundary mask into a non-decreasing per-sentence label sequence.
///
/// The label increments at every 1 in the mask, so the first sentence of a
/// nonempty unit carries label 1.
pub fn labels_from_mask(mask: &[u8]) -> Vec<usize> {
    let mut label = 0usize;
    mask.iter()
        .map(|&b| {
            if b == 1 {
                label += 1;
            }
            label
        })
        .collect()
}
