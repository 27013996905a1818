//! Construction of perfect binary game trees from a flat leaf sequence.

use crate::node::{Node, NodeId};
use crate::tree::GameTree;
use gametree_core::{LeafValues, Result, Role, Score};
use tracing::debug;

/// Build a tree of `depth` levels over `leaves`.
///
/// # Errors
/// Returns `GameTreeError::LeafCountMismatch` unless `leaves.len() == 2^depth`.
///
/// # Example
/// ```
/// use gametree_core::Role;
///
/// let tree = gametree_search::build(&[3, 5, 2, 9], 2).unwrap();
/// assert_eq!(tree.root().role(), Some(Role::Maximizing));
/// assert_eq!(tree.leaf_values(), vec![3, 5, 2, 9]);
/// ```
pub fn build(leaves: &[Score], depth: u32) -> Result<GameTree> {
    let leaves = LeafValues::new(leaves.to_vec(), depth)?;
    Ok(GameTree::from_leaves(&leaves))
}

impl GameTree {
    /// Build a tree from a leaf sequence already checked to hold `2^depth` values.
    pub fn from_leaves(leaves: &LeafValues) -> Self {
        let depth = leaves.depth();
        let mut tree = GameTree::with_capacity(depth, 2 * leaves.len() - 1);
        build_subtree(&mut tree, leaves.as_slice(), depth, depth);
        debug!(depth, nodes = tree.len(), "built game tree");
        tree
    }
}

/// Allocate the subtree over `values` in pre-order and return its root.
///
/// The role depends on the remaining depth of this call, anchored so the
/// top-level call (`remaining == full_depth`) is Maximizing.
fn build_subtree(tree: &mut GameTree, values: &[Score], remaining: u32, full_depth: u32) -> NodeId {
    if remaining == 0 {
        return tree.add(Node::leaf(values[0]));
    }

    let id = tree.add(Node::internal(Role::for_remaining_depth(remaining, full_depth)));
    let (left_values, right_values) = values.split_at(values.len() / 2);
    let left = build_subtree(tree, left_values, remaining - 1, full_depth);
    let right = build_subtree(tree, right_values, remaining - 1, full_depth);
    tree.get_mut(id).attach(left, right);
    id
}
