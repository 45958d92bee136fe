//! # reelrank Engine
//!
//! Online query engine for the reelrank recommender: given a loaded
//! catalog/matrix pair, answer "top-K most similar to item X" queries.
//!
//! The engine is read-only and stateless aside from the loaded artifacts.
//! All upstream work (feature building, vectorization, the pairwise
//! similarity computation) happens once per dataset version in
//! `reelrank-pipeline`; this crate only ever consults the finished item
//! table and matrix.
//!
//! ## Example
//!
//! ```rust
//! use reelrank_core::{Catalog, Item, SimilarityMatrix};
//! use reelrank_engine::{Recommender, DEFAULT_K};
//!
//! let catalog = Catalog::new(vec![
//!     Item { id: 1, title: "Alien".to_string(), tag_text: String::new() },
//!     Item { id: 2, title: "Aliens".to_string(), tag_text: String::new() },
//! ]).unwrap();
//! let matrix = SimilarityMatrix::new(2, vec![1.0, 0.8, 0.8, 1.0]).unwrap();
//!
//! let engine = Recommender::new(catalog, matrix).unwrap();
//! let results = engine.recommend("Alien", DEFAULT_K).unwrap();
//! assert_eq!(results[0].title, "Aliens");
//! ```

pub mod query;
pub mod shared;

pub use query::{Recommendation, Recommender, DEFAULT_K};
pub use shared::SharedRecommender;
