//! Gathering and validating user input before it reaches the tree builder.

use gametree_core::{leaf_count, GameTreeError, LeafValues, Result, Score};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Parse a tree depth; only positive integers are accepted.
pub fn parse_depth(raw: &str) -> Result<u32> {
    let raw = raw.trim();
    match raw.parse::<u32>() {
        Ok(depth) if depth >= 1 => Ok(depth),
        _ => Err(GameTreeError::InvalidDepth(format!(
            "{raw:?}: expected a positive integer"
        ))),
    }
}

/// Split a leaf list on commas and/or whitespace: `"3, 5 2,9"`.
pub fn split_leaves(raw: &str) -> Vec<&str> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse a textual leaf list for a tree of `depth` levels.
pub fn parse_leaves(raw: &str, depth: u32) -> Result<LeafValues> {
    LeafValues::parse(&split_leaves(raw), depth)
}

/// Parse a single leaf typed at a prompt; `index` is zero-based.
pub fn parse_leaf(raw: &str, index: usize) -> Result<Score> {
    let raw = raw.trim();
    raw.parse().map_err(|_| GameTreeError::NonIntegerLeafValue {
        index,
        input: raw.to_string(),
    })
}

/// Reproducible random leaves drawn uniformly from `min..=max`.
pub fn random_leaves(depth: u32, seed: u64, min: Score, max: Score) -> Result<LeafValues> {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = (0..leaf_count(depth)?)
        .map(|_| rng.gen_range(low..=high))
        .collect();
    LeafValues::new(values, depth)
}
