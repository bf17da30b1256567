//! Windowed local rank normalization.
//!
//! Each raw similarity value is replaced by the fraction of values in its
//! local window that fall strictly below it. This controls for the similarity
//! scale varying across a document: a "high" similarity in a diffuse region
//! and one in a tight region become comparable ranks. The window count is
//! exact, not a global-percentile approximation.

use tracing::trace;

use crate::matrix::SquareMatrix;

/// Build the rank matrix from the similarity matrix.
///
/// For a pair (i, j), the window spans rows `[i-w+1, i+w-1]` and columns
/// `[j-w+1, j+w-1]`, clamped to the matrix. `rank[i][j]` is the count of
/// window entries strictly below `sim[i][j]`, divided by the window area,
/// so every rank lies in [0, 1). Callers clip `window` to the matrix size;
/// a zero window is a caller bug and panics in debug builds.
pub fn rank_matrix(sim: &SquareMatrix, window: usize) -> SquareMatrix {
    debug_assert!(window >= 1, "window must be at least 1");
    let n = sim.size();
    let mut rank = SquareMatrix::zeros(n);
    for i in 0..n {
        for j in i..n {
            let r1 = i.saturating_sub(window - 1);
            let r2 = (i + window - 1).min(n - 1);
            let c1 = j.saturating_sub(window - 1);
            let c2 = (j + window - 1).min(n - 1);

            let value = sim.get(i, j);
            let mut below = 0usize;
            for r in r1..=r2 {
                for c in c1..=c2 {
                    if sim.get(r, c) < value {
                        below += 1;
                    }
                }
            }
            let area = (r2 - r1 + 1) * (c2 - c1 + 1);
            rank.set_symmetric(i, j, below as f64 / area as f64);
        }
    }
    trace!(sentences = n, window, "Built rank matrix");
    rank
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_from_rows(rows: &[&[f64]]) -> SquareMatrix {
        let n = rows.len();
        let mut m = SquareMatrix::zeros(n);
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                m.set(i, j, value);
            }
        }
        m
    }

    #[test]
    fn test_ranks_in_unit_interval() {
        let sim = matrix_from_rows(&[
            &[1.0, 0.5, 0.1],
            &[0.5, 1.0, 0.4],
            &[0.1, 0.4, 1.0],
        ]);
        let rank = rank_matrix(&sim, 2);
        for i in 0..3 {
            for j in 0..3 {
                let r = rank.get(i, j);
                assert!((0.0..1.0).contains(&r), "rank {r} out of [0, 1)");
            }
        }
    }

    #[test]
    fn test_rank_is_symmetric() {
        let sim = matrix_from_rows(&[
            &[1.0, 0.8, 0.2],
            &[0.8, 1.0, 0.3],
            &[0.2, 0.3, 1.0],
        ]);
        let rank = rank_matrix(&sim, 2);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(rank.get(i, j), rank.get(j, i));
            }
        }
    }

    #[test]
    fn test_strict_comparison_counts() {
        // Window 1: each window is the single cell itself, so nothing is
        // strictly below it and every rank is 0.
        let sim = matrix_from_rows(&[&[1.0, 0.5], &[0.5, 1.0]]);
        let rank = rank_matrix(&sim, 1);
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(rank.get(i, j), 0.0);
            }
        }
    }

    #[test]
    #[should_panic(expected = "window must be at least 1")]
    fn test_zero_window_panics() {
        let sim = matrix_from_rows(&[&[1.0, 0.5], &[0.5, 1.0]]);
        rank_matrix(&sim, 0);
    }

    #[test]
    fn test_corner_window_clamped() {
        let sim = matrix_from_rows(&[
            &[1.0, 0.9, 0.1],
            &[0.9, 1.0, 0.2],
            &[0.1, 0.2, 1.0],
        ]);
        let rank = rank_matrix(&sim, 3);
        // (0, 0): the window is the whole matrix, 9 cells; entries strictly
        // below 1.0 are the six off-diagonal values.
        assert!((rank.get(0, 0) - 6.0 / 9.0).abs() < 1e-9);
    }
}
