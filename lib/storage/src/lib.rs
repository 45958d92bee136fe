//! # reelrank Storage
//!
//! Artifact store for the reelrank recommender. Serializes the item table
//! and the similarity matrix produced by one offline build into a single
//! gzip-compressed bincode blob, and loads it back with integrity checks
//! (format version, square matrix shape, item count == matrix dimension).
//!
//! The pair is always persisted and loaded together from the same build;
//! a serving process that mixes a matrix with a mismatched item table would
//! silently return wrong results, so [`load`] refuses such an artifact.

pub mod artifact;

pub use artifact::{load, save, ArtifactDescription};
