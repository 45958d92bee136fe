//! # reelrank Core
//!
//! Core library for the reelrank recommender.
//!
//! This crate provides the fundamental data structures shared by the offline
//! build pipeline and the online query engine:
//!
//! - [`SparseVector`] - Sparse TF-IDF feature vector with cosine operations
//! - [`Item`] / [`Catalog`] - The ordered item table; index position is the
//!   item index
//! - [`SimilarityMatrix`] - Dense pairwise cosine similarity scores
//!
//! ## Example
//!
//! ```rust
//! use reelrank_core::{Catalog, Item, SimilarityMatrix};
//!
//! let catalog = Catalog::new(vec![
//!     Item { id: 1, title: "Alien".to_string(), tag_text: "space horror".to_string() },
//!     Item { id: 2, title: "Aliens".to_string(), tag_text: "space horror war".to_string() },
//! ]).unwrap();
//!
//! let matrix = SimilarityMatrix::new(2, vec![1.0, 0.8, 0.8, 1.0]).unwrap();
//! assert_eq!(catalog.len(), matrix.dim());
//! assert_eq!(catalog.find_title("Aliens"), Some(1));
//! ```

pub mod catalog;
pub mod error;
pub mod matrix;
pub mod vector;

pub use catalog::{Catalog, Item};
pub use error::{Error, Result};
pub use matrix::SimilarityMatrix;
pub use vector::SparseVector;
