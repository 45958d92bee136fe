use crate::query::Recommender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Process-wide handle to the active [`Recommender`].
///
/// Readers grab an `Arc` snapshot of the current engine and query it without
/// holding any lock, so concurrent queries never contend with each other.
/// [`SharedRecommender::swap`] replaces the whole artifact pair at once on a
/// dataset reload; a query sees either the old pair or the new pair, never a
/// matrix from one build against an item table from another.
#[derive(Debug, Clone)]
pub struct SharedRecommender {
    inner: Arc<RwLock<Arc<Recommender>>>,
}

impl SharedRecommender {
    #[must_use]
    pub fn new(recommender: Recommender) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(recommender))),
        }
    }

    /// Snapshot of the currently active engine.
    #[must_use]
    pub fn current(&self) -> Arc<Recommender> {
        self.inner.read().clone()
    }

    /// Atomically install a new engine, returning the one it replaced.
    /// In-flight queries keep using the snapshot they already hold.
    pub fn swap(&self, next: Recommender) -> Arc<Recommender> {
        std::mem::replace(&mut *self.inner.write(), Arc::new(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelrank_core::{Catalog, Item, SimilarityMatrix};

    fn engine(title: &str) -> Recommender {
        let catalog = Catalog::new(vec![Item {
            id: 1,
            title: title.to_string(),
            tag_text: String::new(),
        }])
        .unwrap();
        Recommender::new(catalog, SimilarityMatrix::new(1, vec![1.0]).unwrap()).unwrap()
    }

    #[test]
    fn test_swap_replaces_wholesale() {
        let shared = SharedRecommender::new(engine("Old"));
        assert!(shared.current().recommend("Old", 5).is_ok());

        let previous = shared.swap(engine("New"));
        assert!(previous.recommend("Old", 5).is_ok());
        assert!(shared.current().recommend("Old", 5).is_err());
        assert!(shared.current().recommend("New", 5).is_ok());
    }

    #[test]
    fn test_held_snapshot_survives_swap() {
        let shared = SharedRecommender::new(engine("Old"));
        let snapshot = shared.current();
        shared.swap(engine("New"));
        assert!(snapshot.recommend("Old", 5).is_ok());
    }
}
