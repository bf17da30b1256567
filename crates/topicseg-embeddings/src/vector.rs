//! Sentence vector representation.
//!
//! A sentence is represented either as a dense embedding or as a sparse
//! token-count vector. The representation is chosen once at the API boundary
//! and held in a tagged enum; mixing representations within one comparison is
//! an error, never an implicit fallback.

use std::collections::HashMap;

use crate::error::EmbeddingError;

/// Product-of-norms threshold below which cosine similarity is defined as 0.
const NORM_EPSILON: f64 = 1e-9;

/// A numeric feature vector for one sentence.
#[derive(Debug, Clone, PartialEq)]
pub enum SentenceVector {
    /// Fixed-dimension embedding
    Dense(Vec<f64>),
    /// Token -> count (or weight) mapping
    Sparse(HashMap<String, f64>),
}

impl SentenceVector {
    /// Dimension of a dense vector, or number of nonzero entries of a sparse one.
    pub fn len(&self) -> usize {
        match self {
            SentenceVector::Dense(v) => v.len(),
            SentenceVector::Sparse(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Euclidean magnitude.
    pub fn magnitude(&self) -> f64 {
        match self {
            SentenceVector::Dense(v) => v.iter().map(|x| x * x).sum::<f64>().sqrt(),
            SentenceVector::Sparse(m) => m.values().map(|x| x * x).sum::<f64>().sqrt(),
        }
    }

    /// Cosine similarity with another vector, in [-1, 1].
    ///
    /// If either vector has (near-)zero magnitude the similarity is 0 rather
    /// than NaN. Dense vectors of different lengths fail with
    /// [`EmbeddingError::DimensionMismatch`]; a dense/sparse mixture fails
    /// with [`EmbeddingError::MixedRepresentation`].
    pub fn cosine(&self, other: &SentenceVector) -> Result<f64, EmbeddingError> {
        let dot = match (self, other) {
            (SentenceVector::Dense(a), SentenceVector::Dense(b)) => {
                if a.len() != b.len() {
                    return Err(EmbeddingError::DimensionMismatch {
                        expected: a.len(),
                        actual: b.len(),
                    });
                }
                a.iter().zip(b.iter()).map(|(x, y)| x * y).sum::<f64>()
            }
            (SentenceVector::Sparse(a), SentenceVector::Sparse(b)) => a
                .iter()
                .filter_map(|(token, x)| b.get(token).map(|y| x * y))
                .sum::<f64>(),
            _ => return Err(EmbeddingError::MixedRepresentation),
        };

        let norms = self.magnitude() * other.magnitude();
        if norms < NORM_EPSILON {
            return Ok(0.0);
        }
        Ok(dot / norms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse(pairs: &[(&str, f64)]) -> SentenceVector {
        SentenceVector::Sparse(pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect())
    }

    #[test]
    fn test_dense_cosine_identical() {
        let a = SentenceVector::Dense(vec![1.0, 0.0, 0.0]);
        let b = SentenceVector::Dense(vec![1.0, 0.0, 0.0]);
        assert!((a.cosine(&b).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_dense_cosine_orthogonal() {
        let a = SentenceVector::Dense(vec![1.0, 0.0]);
        let b = SentenceVector::Dense(vec![0.0, 1.0]);
        assert!(a.cosine(&b).unwrap().abs() < 1e-9);
    }

    #[test]
    fn test_dense_cosine_opposite() {
        let a = SentenceVector::Dense(vec![1.0, 0.0]);
        let b = SentenceVector::Dense(vec![-1.0, 0.0]);
        assert!((a.cosine(&b).unwrap() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_vector_cosine_is_zero() {
        let a = SentenceVector::Dense(vec![0.0, 0.0]);
        let b = SentenceVector::Dense(vec![1.0, 0.0]);
        assert_eq!(a.cosine(&b).unwrap(), 0.0);
    }

    #[test]
    fn test_sparse_cosine() {
        let a = sparse(&[("alkyl", 2.0), ("fluoride", 1.0)]);
        let b = sparse(&[("alkyl", 2.0), ("fluoride", 1.0)]);
        assert!((a.cosine(&b).unwrap() - 1.0).abs() < 1e-9);

        let c = sparse(&[("silver", 1.0)]);
        assert!(a.cosine(&c).unwrap().abs() < 1e-9);
    }

    #[test]
    fn test_sparse_empty_cosine_is_zero() {
        let a = sparse(&[]);
        let b = sparse(&[("alkyl", 1.0)]);
        assert_eq!(a.cosine(&b).unwrap(), 0.0);
    }

    #[test]
    fn test_dense_dimension_mismatch() {
        let a = SentenceVector::Dense(vec![1.0, 0.0]);
        let b = SentenceVector::Dense(vec![1.0, 0.0, 0.0]);
        assert!(matches!(
            a.cosine(&b),
            Err(EmbeddingError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_mixed_representation_rejected() {
        let a = SentenceVector::Dense(vec![1.0]);
        let b = sparse(&[("alkyl", 1.0)]);
        assert!(matches!(
            a.cosine(&b),
            Err(EmbeddingError::MixedRepresentation)
        ));
    }
}
