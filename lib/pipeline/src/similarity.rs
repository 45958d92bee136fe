use rayon::prelude::*;
use reelrank_core::{Error, Result, SimilarityMatrix, SparseVector};
use tracing::info;

/// Dense O(N^2) storage ceiling. A 20k-item catalog already holds a
/// ~1.6 GB resident matrix; beyond this an approximate-nearest-neighbor
/// index would have to replace the dense builder.
pub const MAX_DENSE_ITEMS: usize = 20_000;

/// Compute the full pairwise cosine similarity matrix.
///
/// Vectors are expected to be L2-normalized (the vectorizer's output), so
/// cosine similarity is a plain sparse dot product. Each unordered pair is
/// computed once and mirrored, making the matrix exactly symmetric. The
/// diagonal is written as 1.0; rows and columns of zero-magnitude vectors,
/// including their diagonal, stay 0.0.
///
/// Rows are computed in parallel over disjoint chunks of the score buffer;
/// per-entry values do not depend on scheduling, so the result is identical
/// to the sequential computation.
pub fn build_matrix(vectors: &[SparseVector]) -> Result<SimilarityMatrix> {
    let n = vectors.len();
    if n > MAX_DENSE_ITEMS {
        return Err(Error::Build(format!(
            "catalog of {n} items exceeds the dense similarity ceiling of {MAX_DENSE_ITEMS}"
        )));
    }

    let mut scores = vec![0.0f32; n * n];

    // Upper triangle (j >= i), one row per worker.
    scores
        .par_chunks_mut(n.max(1))
        .enumerate()
        .for_each(|(i, row)| {
            if vectors[i].is_empty() {
                return;
            }
            row[i] = 1.0;
            for j in (i + 1)..n {
                if !vectors[j].is_empty() {
                    row[j] = vectors[i].dot(&vectors[j]);
                }
            }
        });

    // Mirror into the lower triangle.
    for i in 0..n {
        for j in 0..i {
            scores[i * n + j] = scores[j * n + i];
        }
    }

    let matrix = SimilarityMatrix::new(n, scores)?;
    info!(dim = n, "built similarity matrix");
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(indices: Vec<u32>, values: Vec<f32>) -> SparseVector {
        SparseVector::new(indices, values).normalized()
    }

    #[test]
    fn test_identical_vectors_score_one() {
        let v = unit(vec![0, 1], vec![1.0, 2.0]);
        let matrix = build_matrix(&[v.clone(), v]).unwrap();
        assert!((matrix.get(0, 1) - 1.0).abs() < 1e-6);
        assert_eq!(matrix.get(0, 0), 1.0);
    }

    #[test]
    fn test_exact_symmetry() {
        let vectors = vec![
            unit(vec![0, 1], vec![1.0, 0.5]),
            unit(vec![1, 2], vec![0.7, 0.3]),
            unit(vec![0, 2], vec![0.2, 0.9]),
        ];
        let matrix = build_matrix(&vectors).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    #[test]
    fn test_zero_vector_row_is_zero() {
        let vectors = vec![unit(vec![0], vec![1.0]), SparseVector::default()];
        let matrix = build_matrix(&vectors).unwrap();
        assert_eq!(matrix.get(1, 0), 0.0);
        assert_eq!(matrix.get(0, 1), 0.0);
        assert_eq!(matrix.get(1, 1), 0.0);
    }

    #[test]
    fn test_scores_bounded() {
        let vectors = vec![
            unit(vec![0, 1, 2], vec![1.0, 1.0, 1.0]),
            unit(vec![1, 2, 3], vec![2.0, 0.5, 1.0]),
            unit(vec![3, 4], vec![1.0, 4.0]),
        ];
        let matrix = build_matrix(&vectors).unwrap();
        for &score in matrix.scores() {
            assert!((0.0..=1.0 + 1e-6).contains(&score));
        }
    }

    #[test]
    fn test_matches_sequential_reference() {
        let vectors: Vec<SparseVector> = (0..8)
            .map(|i| unit(vec![i, i + 1, i + 2], vec![1.0, 0.5, 0.25]))
            .collect();
        let matrix = build_matrix(&vectors).unwrap();
        for i in 0..vectors.len() {
            for j in 0..vectors.len() {
                let expected = if vectors[i].is_empty() || vectors[j].is_empty() {
                    0.0
                } else if i == j {
                    1.0
                } else {
                    vectors[i].dot(&vectors[j])
                };
                assert_eq!(matrix.get(i, j), expected);
            }
        }
    }

    #[test]
    fn test_empty_input_builds_empty_matrix() {
        let matrix = build_matrix(&[]).unwrap();
        assert_eq!(matrix.dim(), 0);
    }
}
