//! # reelrank Pipeline
//!
//! Offline build pipeline for the reelrank recommender. Runs once per
//! dataset version, in three strictly ordered steps:
//!
//! - [`features::build_catalog`] - raw metadata records to one normalized
//!   tag text per item, fixing the item index
//! - [`TfidfVectorizer`] - tag texts to L2-normalized sparse vectors in a
//!   shared vocabulary space
//! - [`similarity::build_matrix`] - pairwise cosine similarity over the
//!   vector space
//!
//! The resulting catalog/matrix pair is handed to `reelrank-storage` for
//! persistence; nothing in this crate is needed at query time.
//!
//! ## Example
//!
//! ```rust
//! use reelrank_pipeline::{build_catalog, build_matrix, RawRecord, TfidfVectorizer};
//!
//! let records = vec![
//!     RawRecord {
//!         id: 1,
//!         title: "Alien".to_string(),
//!         overview: "A crew encounters a deadly creature in deep space".to_string(),
//!         genres: vec!["Horror".to_string(), "Science Fiction".to_string()],
//!         ..RawRecord::default()
//!     },
//!     RawRecord {
//!         id: 2,
//!         title: "Aliens".to_string(),
//!         overview: "Marines return to the deadly creature in deep space".to_string(),
//!         genres: vec!["Action".to_string(), "Science Fiction".to_string()],
//!         ..RawRecord::default()
//!     },
//! ];
//!
//! let catalog = build_catalog(&records).unwrap();
//! let tag_texts: Vec<&str> = catalog.iter().map(|item| item.tag_text.as_str()).collect();
//! let vectors = TfidfVectorizer::new().fit_transform(&tag_texts).unwrap();
//! let matrix = build_matrix(&vectors).unwrap();
//! assert_eq!(matrix.dim(), catalog.len());
//! ```

pub mod features;
pub mod similarity;
pub mod stopwords;
pub mod tfidf;

pub use features::{build_catalog, RawRecord};
pub use similarity::{build_matrix, MAX_DENSE_ITEMS};
pub use stopwords::StopWords;
pub use tfidf::TfidfVectorizer;
