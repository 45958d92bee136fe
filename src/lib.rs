//! # reelrank
//!
//! A content-based movie recommender: an offline TF-IDF feature pipeline
//! that precomputes a dense pairwise cosine similarity matrix, and a
//! read-only query engine that serves "top-K most similar to item X" from
//! the persisted artifact.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reelrank::prelude::*;
//!
//! // Offline: build the artifact once per dataset version
//! let records: Vec<RawRecord> = vec![/* raw metadata */];
//! let catalog = build_catalog(&records).unwrap();
//! let tag_texts: Vec<&str> = catalog.iter().map(|i| i.tag_text.as_str()).collect();
//! let vectors = TfidfVectorizer::new().fit_transform(&tag_texts).unwrap();
//! let matrix = build_matrix(&vectors).unwrap();
//! reelrank::artifact::save("catalog.artifact".as_ref(), &catalog, &matrix).unwrap();
//!
//! // Online: load and serve
//! let (catalog, matrix) = reelrank::artifact::load("catalog.artifact".as_ref()).unwrap();
//! let engine = Recommender::new(catalog, matrix).unwrap();
//! let results = engine.recommend("Avatar", DEFAULT_K).unwrap();
//! ```
//!
//! ## Crate Structure
//!
//! reelrank is composed of several crates:
//!
//! - [`reelrank-core`](https://docs.rs/reelrank-core) - Catalog, sparse vectors, similarity matrix
//! - [`reelrank-pipeline`](https://docs.rs/reelrank-pipeline) - Feature building, TF-IDF, matrix build
//! - [`reelrank-storage`](https://docs.rs/reelrank-storage) - Compressed, versioned artifact persistence
//! - [`reelrank-engine`](https://docs.rs/reelrank-engine) - Ranked top-K retrieval and atomic reload
//!
//! ## Features
//!
//! - **Deterministic builds**: identical input and parameters always produce
//!   identical vectors and matrices
//! - **Exact symmetry**: each unordered pair is computed once and mirrored
//! - **Integrity-checked artifacts**: a mismatched catalog/matrix pair is
//!   rejected at load time instead of serving wrong results
//! - **Lock-free reads**: queries share an immutable snapshot; dataset
//!   reloads swap the whole pair atomically

// Re-export core types
pub use reelrank_core::{Catalog, Error, Item, Result, SimilarityMatrix, SparseVector};

// Re-export the offline pipeline
pub use reelrank_pipeline::{build_catalog, build_matrix, RawRecord, StopWords, TfidfVectorizer};

// Re-export storage
pub use reelrank_storage as artifact;
pub use reelrank_storage::ArtifactDescription;

// Re-export the query engine
pub use reelrank_engine::{Recommendation, Recommender, SharedRecommender, DEFAULT_K};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        build_catalog, build_matrix, ArtifactDescription, Catalog, Error, Item, RawRecord,
        Recommendation, Recommender, Result, SharedRecommender, SimilarityMatrix, SparseVector,
        StopWords, TfidfVectorizer, DEFAULT_K,
    };
}
