use serde::{Deserialize, Serialize};

/// A sparse feature vector in the shared vocabulary space.
///
/// Indices are strictly ascending column positions; values are the
/// non-negative TF-IDF weights. An item with no recognized vocabulary terms
/// is represented by an empty vector.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SparseVector {
    indices: Vec<u32>,
    values: Vec<f32>,
}

impl SparseVector {
    /// Create a sparse vector from parallel index/value arrays.
    ///
    /// Indices must be strictly ascending and the arrays the same length.
    #[inline]
    #[must_use]
    pub fn new(indices: Vec<u32>, values: Vec<f32>) -> Self {
        debug_assert_eq!(indices.len(), values.len());
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self { indices, values }
    }

    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Dot product with another sparse vector (sorted-index merge).
    #[must_use]
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let mut sum = 0.0;
        let (mut a, mut b) = (0, 0);
        while a < self.indices.len() && b < other.indices.len() {
            match self.indices[a].cmp(&other.indices[b]) {
                std::cmp::Ordering::Less => a += 1,
                std::cmp::Ordering::Greater => b += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.values[a] * other.values[b];
                    a += 1;
                    b += 1;
                }
            }
        }
        sum
    }

    /// L2 norm.
    #[inline]
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.values.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    /// Normalize the vector to unit length in place.
    /// A zero-magnitude vector is left unchanged.
    #[inline]
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > f32::EPSILON {
            let inv_norm = 1.0 / norm;
            for v in &mut self.values {
                *v *= inv_norm;
            }
        }
    }

    /// Get normalized copy.
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut v = self.clone();
        v.normalize();
        v
    }

    /// Compute cosine similarity with another vector.
    /// Returns 0.0 if either vector has zero magnitude.
    #[must_use]
    pub fn cosine_similarity(&self, other: &SparseVector) -> f32 {
        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        self.dot(other) / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_disjoint() {
        let v1 = SparseVector::new(vec![0, 2], vec![1.0, 1.0]);
        let v2 = SparseVector::new(vec![1, 3], vec![1.0, 1.0]);
        assert_eq!(v1.dot(&v2), 0.0);
    }

    #[test]
    fn test_cosine_similarity() {
        let v1 = SparseVector::new(vec![0, 1], vec![1.0, 0.0]);
        let v2 = SparseVector::new(vec![0, 1], vec![1.0, 0.0]);
        assert!((v1.cosine_similarity(&v2) - 1.0).abs() < 1e-6);

        let v3 = SparseVector::new(vec![0], vec![1.0]);
        let v4 = SparseVector::new(vec![1], vec![1.0]);
        assert!((v3.cosine_similarity(&v4) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_cosine_is_zero() {
        let empty = SparseVector::default();
        let v = SparseVector::new(vec![0], vec![1.0]);
        assert_eq!(empty.cosine_similarity(&v), 0.0);
        assert_eq!(empty.cosine_similarity(&empty), 0.0);
    }

    #[test]
    fn test_normalize() {
        let mut v = SparseVector::new(vec![0, 1], vec![3.0, 4.0]);
        v.normalize();
        assert!((v.norm() - 1.0).abs() < 1e-6);
        assert!((v.values()[0] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_vector_is_noop() {
        let mut v = SparseVector::default();
        v.normalize();
        assert!(v.is_empty());
    }
}
