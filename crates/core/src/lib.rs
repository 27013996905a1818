//! Game tree core - shared types and errors
//!
//! This crate holds the vocabulary shared by the search crate and the
//! `gametree` binary.
//!
//! # Types
//!
//! - [`Score`] - Integer node value
//! - [`Role`] - Maximizing or minimizing player at an internal node
//! - [`EdgeTag`] - Kept/pruned annotation produced by alpha-beta
//! - [`LeafValues`] - Leaf sequence whose length is exactly `2^depth`

mod error;
mod types;

pub use error::{GameTreeError, Result};
pub use types::{leaf_count, Branch, EdgeTag, LeafValues, Role, Score};
