use reelrank_core::{Catalog, Error, Item, Result, SimilarityMatrix};
use serde::{Deserialize, Serialize};

/// Default number of neighbors returned by a query.
pub const DEFAULT_K: usize = 5;

/// One ranked neighbor. The presentation layer consumes `(title, id)`;
/// `score` is exposed so callers can observe ordering and bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub id: u64,
    pub score: f32,
}

/// Read-only query engine over one loaded artifact pair.
///
/// Stateless per call: `recommend` is a pure function of the loaded catalog,
/// matrix, title and k. Nothing is mutated after construction, so one
/// `Recommender` may be shared across any number of concurrent queries
/// without locking.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    matrix: SimilarityMatrix,
}

impl Recommender {
    /// Pair a catalog with its similarity matrix.
    ///
    /// Re-checks the build invariant (item count == matrix dimension) so a
    /// mixed pair from different builds can never be served.
    pub fn new(catalog: Catalog, matrix: SimilarityMatrix) -> Result<Self> {
        if catalog.len() != matrix.dim() {
            return Err(Error::ArtifactIntegrity(format!(
                "item table has {} entries but matrix dimension is {}",
                catalog.len(),
                matrix.dim()
            )));
        }
        Ok(Self { catalog, matrix })
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// The `k` highest-similarity neighbors of `title`, best first.
    ///
    /// Title resolution is an exact match against the item table; duplicate
    /// titles resolve to the first occurrence in index order (see
    /// [`Catalog::find_title`]). The queried item itself is never part of
    /// the result. Equal scores preserve ascending item-index order. When
    /// fewer than `k` other items exist the list is simply shorter; padding
    /// is a presentation-layer concern.
    pub fn recommend(&self, title: &str, k: usize) -> Result<Vec<Recommendation>> {
        let query_index = self
            .catalog
            .find_title(title)
            .ok_or_else(|| Error::TitleNotFound(title.to_string()))?;

        let row = self.matrix.row(query_index);
        let mut ranked: Vec<(usize, f32)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(index, _)| index != query_index)
            .collect();

        // Stable sort: equal scores keep ascending item-index order.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(k);

        Ok(ranked
            .into_iter()
            .map(|(index, score)| {
                // index comes from enumerating the row, always in bounds
                let Item { id, title, .. } = &self.catalog.items()[index];
                Recommendation {
                    title: title.clone(),
                    id: *id,
                    score,
                }
            })
            .collect())
    }
}
