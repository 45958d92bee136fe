use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Dense pairwise similarity matrix: `dim` x `dim` scores, row-major.
///
/// Row/column positions correspond 1:1 to item index positions in the
/// catalog built alongside it. The matrix is symmetric by construction and
/// its diagonal holds self-similarity (1.0, or 0.0 for items with no
/// recognized vocabulary terms).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityMatrix {
    dim: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Create a matrix from a row-major score buffer.
    ///
    /// Fails with [`Error::InvalidDimension`] if the buffer is not exactly
    /// `dim * dim` entries.
    pub fn new(dim: usize, scores: Vec<f32>) -> Result<Self> {
        if scores.len() != dim * dim {
            return Err(Error::InvalidDimension {
                expected: dim * dim,
                actual: scores.len(),
            });
        }
        Ok(Self { dim, scores })
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Score for the ordered pair `(i, j)`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        assert!(i < self.dim && j < self.dim, "matrix index out of bounds");
        self.scores[i * self.dim + j]
    }

    /// Row `i`: similarity of item `i` against every item, in index order.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[f32] {
        assert!(i < self.dim, "matrix row out of bounds");
        &self.scores[i * self.dim..(i + 1) * self.dim]
    }

    #[inline]
    #[must_use]
    pub fn scores(&self) -> &[f32] {
        &self.scores
    }

    /// Re-check the shape invariant.
    ///
    /// Deserialization bypasses [`SimilarityMatrix::new`], so loaders must
    /// call this before serving a freshly decoded matrix.
    pub fn validate(&self) -> Result<()> {
        if self.scores.len() != self.dim * self.dim {
            return Err(Error::InvalidDimension {
                expected: self.dim * self.dim,
                actual: self.scores.len(),
            });
        }
        Ok(())
    }

    /// True if `sim[i][j] == sim[j][i]` for every pair, within `tolerance`.
    #[must_use]
    pub fn is_symmetric(&self, tolerance: f32) -> bool {
        for i in 0..self.dim {
            for j in (i + 1)..self.dim {
                if (self.get(i, j) - self.get(j, i)).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}
