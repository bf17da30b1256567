//! 2-D prefix sums over the rank matrix.
//!
//! The clustering stage queries the total rank inside many square blocks
//! `[l, r] x [l, r]`. Prefix sums make each query O(1) after an O(n^2) build,
//! instead of re-summing the block every time.

use crate::matrix::SquareMatrix;

/// Prefix-sum accumulator answering square block-sum queries.
#[derive(Debug)]
pub struct DensitySums {
    prefix: SquareMatrix,
}

impl DensitySums {
    /// Build prefix sums from the rank matrix.
    pub fn build(rank: &SquareMatrix) -> Self {
        let n = rank.size();
        let mut prefix = SquareMatrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                let mut value = rank.get(i, j);
                if i > 0 {
                    value += prefix.get(i - 1, j);
                }
                if j > 0 {
                    value += prefix.get(i, j - 1);
                }
                if i > 0 && j > 0 {
                    value -= prefix.get(i - 1, j - 1);
                }
                prefix.set(i, j, value);
            }
        }
        Self { prefix }
    }

    pub fn size(&self) -> usize {
        self.prefix.size()
    }

    /// Total rank over the square block `[l, r] x [l, r]`, inclusive.
    #[inline]
    pub fn block(&self, l: usize, r: usize) -> f64 {
        debug_assert!(l <= r && r < self.prefix.size());
        if l == 0 {
            return self.prefix.get(r, r);
        }
        self.prefix.get(r, r) - self.prefix.get(l - 1, r) - self.prefix.get(r, l - 1)
            + self.prefix.get(l - 1, l - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank_fixture(n: usize) -> SquareMatrix {
        let mut m = SquareMatrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                m.set(i, j, (i * n + j) as f64 * 0.01);
            }
        }
        m
    }

    fn naive_block(rank: &SquareMatrix, l: usize, r: usize) -> f64 {
        let mut total = 0.0;
        for i in l..=r {
            for j in l..=r {
                total += rank.get(i, j);
            }
        }
        total
    }

    #[test]
    fn test_block_matches_naive_sum() {
        let rank = rank_fixture(6);
        let sums = DensitySums::build(&rank);
        for l in 0..6 {
            for r in l..6 {
                let fast = sums.block(l, r);
                let slow = naive_block(&rank, l, r);
                assert!(
                    (fast - slow).abs() < 1e-9,
                    "block({l}, {r}): fast {fast} != slow {slow}"
                );
            }
        }
    }

    #[test]
    fn test_single_cell_block() {
        let rank = rank_fixture(4);
        let sums = DensitySums::build(&rank);
        assert!((sums.block(2, 2) - rank.get(2, 2)).abs() < 1e-9);
    }

    #[test]
    fn test_full_block() {
        let rank = rank_fixture(5);
        let sums = DensitySums::build(&rank);
        assert!((sums.block(0, 4) - naive_block(&rank, 0, 4)).abs() < 1e-9);
    }
}
