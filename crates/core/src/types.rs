//! Game tree domain types with enforced invariants.
//!
//! - [`Role`]: which player moves at an internal node
//! - [`EdgeTag`]: alpha-beta annotation of an explored edge
//! - [`Branch`]: a left/right step used to address nodes from the root
//! - [`LeafValues`]: a leaf sequence whose length is exactly `2^depth`

use crate::{GameTreeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a node. Leaves carry it from input, internal nodes get it from evaluation.
pub type Score = i32;

/// Player role of an internal node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Maximizing,
    Minimizing,
}

impl Role {
    /// Get the opposing role.
    pub fn opponent(self) -> Self {
        match self {
            Role::Maximizing => Role::Minimizing,
            Role::Minimizing => Role::Maximizing,
        }
    }

    /// Role of a node built with `remaining` levels below it in a tree of
    /// `full_depth` levels.
    ///
    /// The top-level call (`remaining == full_depth`) is always Maximizing and
    /// every level below flips. For odd full depths this is exactly
    /// "Maximizing when `remaining` is odd".
    pub fn for_remaining_depth(remaining: u32, full_depth: u32) -> Self {
        if remaining % 2 == full_depth % 2 {
            Role::Maximizing
        } else {
            Role::Minimizing
        }
    }

    pub fn is_maximizing(self) -> bool {
        self == Role::Maximizing
    }

    /// Short label used in reports ("Max" / "Min").
    pub fn label(self) -> &'static str {
        match self {
            Role::Maximizing => "Max",
            Role::Minimizing => "Min",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Alpha-beta annotation of an explored parent→child edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeTag {
    /// The child was explored and the window stayed open.
    Kept,
    /// The child was explored and closed the window; later siblings are skipped.
    Pruned,
}

impl fmt::Display for EdgeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeTag::Kept => write!(f, "kept"),
            EdgeTag::Pruned => write!(f, "pruned"),
        }
    }
}

/// One step down a binary tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    Left,
    Right,
}

impl Branch {
    /// Index into a node's `[left, right]` children.
    pub fn index(self) -> usize {
        match self {
            Branch::Left => 0,
            Branch::Right => 1,
        }
    }

    /// Parse a path like `"LRL"` (case-insensitive). The empty path is the root.
    ///
    /// # Errors
    /// Returns `GameTreeError::InvalidPath` on any character other than L/R.
    pub fn parse_path(path: &str) -> Result<Vec<Branch>> {
        path.trim()
            .chars()
            .map(|c| match c.to_ascii_uppercase() {
                'L' => Ok(Branch::Left),
                'R' => Ok(Branch::Right),
                _ => Err(GameTreeError::InvalidPath(path.to_string())),
            })
            .collect()
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Left => write!(f, "L"),
            Branch::Right => write!(f, "R"),
        }
    }
}

/// Number of leaves in a perfect binary tree of `depth` levels.
///
/// # Errors
/// Returns `GameTreeError::InvalidDepth` if `2^depth` does not fit in `usize`.
pub fn leaf_count(depth: u32) -> Result<usize> {
    1usize
        .checked_shl(depth)
        .filter(|&n| n != 0)
        .ok_or_else(|| {
            GameTreeError::InvalidDepth(format!("{depth}: 2^depth leaves do not fit in memory"))
        })
}

/// An ordered leaf sequence for a tree of a given depth.
///
/// Invariant: `len() == 2^depth`.
///
/// # Example
/// ```
/// use gametree_core::LeafValues;
///
/// let leaves = LeafValues::new(vec![3, 5, 2, 9], 2).unwrap();
/// assert_eq!(leaves.depth(), 2);
/// assert!(LeafValues::new(vec![3, 5, 2], 2).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeafValues {
    values: Vec<Score>,
    depth: u32,
}

impl LeafValues {
    /// Create a leaf sequence for a tree of `depth` levels.
    ///
    /// # Errors
    /// Returns `GameTreeError::LeafCountMismatch` if `values.len() != 2^depth`,
    /// or `GameTreeError::InvalidDepth` if `2^depth` overflows.
    pub fn new(values: Vec<Score>, depth: u32) -> Result<Self> {
        let expected = leaf_count(depth)?;
        if values.len() != expected {
            return Err(GameTreeError::LeafCountMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { values, depth })
    }

    /// Parse one leaf per input string, reporting the first non-integer.
    ///
    /// # Errors
    /// Returns `GameTreeError::NonIntegerLeafValue` for unparsable input and
    /// the errors of [`LeafValues::new`] for a wrong count.
    pub fn parse<S: AsRef<str>>(inputs: &[S], depth: u32) -> Result<Self> {
        let values = inputs
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let raw = raw.as_ref().trim();
                raw.parse::<Score>()
                    .map_err(|_| GameTreeError::NonIntegerLeafValue {
                        index,
                        input: raw.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(values, depth)
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true: a valid sequence holds at least one leaf.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[Score] {
        &self.values
    }

    /// Get the underlying vector (consumes self).
    pub fn into_inner(self) -> Vec<Score> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_opponent() {
        assert_eq!(Role::Maximizing.opponent(), Role::Minimizing);
        assert_eq!(Role::Minimizing.opponent(), Role::Maximizing);
    }

    #[test]
    fn test_role_root_is_maximizing() {
        for depth in 0..10 {
            assert_eq!(Role::for_remaining_depth(depth, depth), Role::Maximizing);
        }
    }

    #[test]
    fn test_role_odd_depth_matches_parity_rule() {
        // With an odd full depth the role is Maximizing exactly on odd remaining depth.
        for remaining in 1..=7 {
            let expected = if remaining % 2 == 1 {
                Role::Maximizing
            } else {
                Role::Minimizing
            };
            assert_eq!(Role::for_remaining_depth(remaining, 7), expected);
        }
    }

    #[test]
    fn test_role_alternates() {
        for full in 1..8 {
            for remaining in 1..=full {
                assert_eq!(
                    Role::for_remaining_depth(remaining - 1, full),
                    Role::for_remaining_depth(remaining, full).opponent()
                );
            }
        }
    }

    #[test]
    fn test_branch_parse_path() {
        assert_eq!(Branch::parse_path("").unwrap(), vec![]);
        assert_eq!(
            Branch::parse_path("lR").unwrap(),
            vec![Branch::Left, Branch::Right]
        );
        assert_eq!(
            Branch::parse_path("LX"),
            Err(GameTreeError::InvalidPath("LX".to_string()))
        );
    }

    #[test]
    fn test_leaf_count() {
        assert_eq!(leaf_count(0).unwrap(), 1);
        assert_eq!(leaf_count(3).unwrap(), 8);
        assert!(leaf_count(usize::BITS).is_err());
    }

    #[test]
    fn test_leaf_values_new_valid() {
        let leaves = LeafValues::new(vec![1, 2, 3, 4], 2).unwrap();
        assert_eq!(leaves.len(), 4);
        assert_eq!(leaves.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_leaf_values_count_mismatch() {
        assert_eq!(
            LeafValues::new(vec![1, 2, 3], 2),
            Err(GameTreeError::LeafCountMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_leaf_values_parse() {
        let leaves = LeafValues::parse(&[" 3", "-5 ", "2", "9"], 2).unwrap();
        assert_eq!(leaves.into_inner(), vec![3, -5, 2, 9]);
    }

    #[test]
    fn test_leaf_values_parse_non_integer() {
        assert_eq!(
            LeafValues::parse(&["3", "4.5"], 1),
            Err(GameTreeError::NonIntegerLeafValue {
                index: 1,
                input: "4.5".to_string()
            })
        );
    }

    #[test]
    fn test_edge_tag_display() {
        assert_eq!(EdgeTag::Kept.to_string(), "kept");
        assert_eq!(EdgeTag::Pruned.to_string(), "pruned");
    }
}
