use crate::{Error, Result};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// One catalog entry: an externally meaningful id, the human-readable title
/// used as the query lookup key, and the normalized tag text the item was
/// vectorized from.
///
/// Items are immutable once built. Their position in the [`Catalog`] is the
/// item index, which must match the row/column position in the similarity
/// matrix for the life of an artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub tag_text: String,
}

/// The item table for one build: an ordered collection of [`Item`]s whose
/// index positions are fixed at build time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog from an ordered item list.
    ///
    /// Fails with [`Error::Build`] on an empty title or a duplicate id;
    /// a broken item table must never reach the serving path.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut seen_ids = AHashSet::with_capacity(items.len());
        for item in &items {
            if item.title.trim().is_empty() {
                return Err(Error::Build(format!("item {} has an empty title", item.id)));
            }
            if !seen_ids.insert(item.id) {
                return Err(Error::Build(format!("duplicate item id {}", item.id)));
            }
        }
        Ok(Self { items })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Resolve a title to its item index by exact match.
    ///
    /// Duplicate titles resolve to the first (lowest-index) occurrence.
    /// Callers that need to detect ambiguity should use
    /// [`Catalog::find_title_all`] instead.
    #[must_use]
    pub fn find_title(&self, title: &str) -> Option<usize> {
        self.items.iter().position(|item| item.title == title)
    }

    /// Every item index whose title matches exactly, in index order.
    #[must_use]
    pub fn find_title_all(&self, title: &str) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.title == title)
            .map(|(index, _)| index)
            .collect()
    }

    /// Iterate over all titles in index order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.title.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}
