//! Boundary selection from the clustering density profile.
//!
//! Splits taken early in the clustering loop are the strong topic breaks;
//! splits taken after the density gradient flattens are noise. The cutoff is
//! statistical: smooth the discrete gradient of the density sequence, then
//! keep the split-order prefix up to the last gradient at or above
//! `mean + std_coeff * stddev`.

use tracing::debug;

/// Symmetric gradient smoothing: 1-2-1 kernel inside, 2-1 at the ends.
/// A gradient of length <= 1 is returned unchanged.
fn smooth(grad: &[f64]) -> Vec<f64> {
    let mut smoothed = grad.to_vec();
    if grad.len() <= 1 {
        return smoothed;
    }
    let last = grad.len() - 1;
    smoothed[0] = (2.0 * grad[0] + grad[1]) / 3.0;
    smoothed[last] = (2.0 * grad[last] + grad[last - 1]) / 3.0;
    for k in 1..last {
        smoothed[k] = (grad[k - 1] + 2.0 * grad[k] + grad[k + 1]) / 4.0;
    }
    smoothed
}

/// Derive the boundary mask from the clustering output.
///
/// `densities` has one entry per split plus the unsplit value; `split_order`
/// holds the corresponding split positions, one per split. The returned mask
/// has `densities.len()` entries, `mask[k] == 1` meaning a segment starts at
/// sentence `k`; `mask[0]` is always 1. Selected boundaries closer than two
/// sentences apart have the later one suppressed. Mismatched or empty inputs
/// are caller bugs and panic in debug builds.
pub fn select_boundaries(densities: &[f64], split_order: &[usize], std_coeff: f64) -> Vec<u8> {
    debug_assert!(!densities.is_empty(), "densities must be nonempty");
    debug_assert_eq!(
        split_order.len() + 1,
        densities.len(),
        "one density per split plus the unsplit value"
    );
    let n = densities.len();
    let grad: Vec<f64> = densities.windows(2).map(|w| w[1] - w[0]).collect();
    let grad = smooth(&grad);

    let mean = grad.iter().sum::<f64>() / grad.len() as f64;
    let variance = grad.iter().map(|g| (g - mean) * (g - mean)).sum::<f64>() / grad.len() as f64;
    let cutoff = mean + std_coeff * variance.sqrt();

    let mut mask = vec![0u8; n];
    match grad.iter().rposition(|&g| g >= cutoff) {
        Some(last) => {
            for &p in &split_order[..=last] {
                mask[p] = 1;
                for j in [p.wrapping_sub(1), p + 1] {
                    if j < n && mask[j] == 1 {
                        mask[p] = 0;
                        break;
                    }
                }
            }
            debug!(cutoff, boundaries = last + 1, "Selected boundary prefix");
        }
        None => {
            debug!(cutoff, "No gradient above cutoff; single segment");
        }
    }

    // mask[p] marks a split after sentence p; shift so entry k means a
    // boundary immediately before sentence k, with sentence 0 always first.
    let mut out = Vec::with_capacity(n);
    out.push(1);
    out.extend_from_slice(&mask[..n - 1]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smooth_short_input_unchanged() {
        assert_eq!(smooth(&[0.5]), vec![0.5]);
        assert!(smooth(&[]).is_empty());
    }

    #[test]
    fn test_smooth_kernel() {
        let smoothed = smooth(&[1.0, 2.0, 3.0]);
        assert!((smoothed[0] - (2.0 * 1.0 + 2.0) / 3.0).abs() < 1e-9);
        assert!((smoothed[1] - (1.0 + 2.0 * 2.0 + 3.0) / 4.0).abs() < 1e-9);
        assert!((smoothed[2] - (2.0 * 3.0 + 2.0) / 3.0).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "densities must be nonempty")]
    fn test_empty_densities_panics() {
        select_boundaries(&[], &[], 1.0);
    }

    #[test]
    fn test_first_position_always_boundary() {
        let densities = vec![0.2, 0.3, 0.31, 0.32];
        let split_order = vec![1, 0, 2];
        let mask = select_boundaries(&densities, &split_order, 1.0);
        assert_eq!(mask.len(), 4);
        assert_eq!(mask[0], 1);
    }

    #[test]
    fn test_flat_gradient_yields_single_segment() {
        // A huge std_coeff puts the cutoff out of reach, so no split
        // position survives and the unit stays one segment.
        let densities = vec![0.2, 0.5, 0.52, 0.54, 0.56];
        let split_order = vec![2, 0, 1, 3];
        let mask = select_boundaries(&densities, &split_order, 10.0);
        assert_eq!(mask, vec![1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_adjacent_boundary_suppressed() {
        // Force selection of the full split prefix with std_coeff 0 and a
        // gradient whose last value sits at the mean.
        let densities = vec![0.1, 0.4, 0.7];
        let split_order = vec![0, 1];
        let mask = select_boundaries(&densities, &split_order, 0.0);
        // Split positions 0 and 1 are adjacent; the later (1) is suppressed.
        // After the shift the mask is [1, mask0, mask1][..3].
        assert_eq!(mask[0], 1);
        assert_eq!(mask[1], 1);
        assert_eq!(mask[2], 0);
    }

    #[test]
    fn test_boundary_shift() {
        // Single strong split at position 2 of 6 sentences: the segment
        // starting at sentence 3 is marked at index 3 after the shift.
        let densities = vec![0.1, 0.8, 0.81, 0.82, 0.83, 0.84];
        let split_order = vec![2, 0, 1, 3, 4];
        let mask = select_boundaries(&densities, &split_order, 1.0);
        assert_eq!(mask[0], 1);
        assert_eq!(mask[3], 1);
        assert_eq!(mask.iter().map(|&b| b as usize).sum::<usize>(), 2);
    }
}
