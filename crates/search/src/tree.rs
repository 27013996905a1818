//! Arena-allocated game tree.
//!
//! Using a Vec<Node> with indices gives every node exactly one owner (the
//! arena) and lets evaluation passes rewrite values without `Rc<RefCell<_>>`.

use crate::node::{Node, NodeId, NodeInfo};
use gametree_core::{Branch, GameTreeError, Result, Score};

/// A perfect binary game tree.
///
/// Built by [`crate::build`] or [`GameTree::from_leaves`]; the root is at
/// [`NodeId::ROOT`].
#[derive(Clone, Debug)]
pub struct GameTree {
    nodes: Vec<Node>,
    depth: u32,
}

impl GameTree {
    pub(crate) fn with_capacity(depth: u32, capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            depth,
        }
    }

    /// Get a reference to a node by ID.
    ///
    /// # Panics
    /// Panics if the NodeId does not belong to this tree.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Get a mutable reference to a node by ID.
    ///
    /// # Panics
    /// Panics if the NodeId does not belong to this tree.
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Add a new node to the tree, returning its ID.
    pub(crate) fn add(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Number of levels below the root.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Get the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true for a built tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> &Node {
        self.get(NodeId::ROOT)
    }

    /// Iterate over all nodes with their ids, in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Leaf ids in left-to-right order.
    pub fn leaves(&self) -> Vec<NodeId> {
        // Pre-order allocation keeps leaves in left-to-right order.
        self.iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(id, _)| id)
            .collect()
    }

    /// Leaf values in left-to-right order.
    pub fn leaf_values(&self) -> Vec<Score> {
        self.leaves()
            .into_iter()
            .filter_map(|id| self.get(id).value())
            .collect()
    }

    /// Follow `path` from the root, returning `None` if it walks past a leaf.
    pub fn node_at_path(&self, path: &[Branch]) -> Option<NodeId> {
        path.iter().try_fold(NodeId::ROOT, |id, branch| {
            self.get(id).children().map(|c| c[branch.index()])
        })
    }

    /// Resolve a textual path such as `"LR"`.
    ///
    /// # Errors
    /// Returns `GameTreeError::InvalidPath` on malformed text or a path that
    /// goes below a leaf.
    pub fn resolve(&self, path: &str) -> Result<NodeId> {
        let branches = Branch::parse_path(path)?;
        self.node_at_path(&branches)
            .ok_or_else(|| GameTreeError::InvalidPath(path.to_string()))
    }

    /// Inspect the node at `path` without mutating it.
    pub fn inspect(&self, path: &str) -> Result<NodeInfo> {
        self.resolve(path).map(|id| self.get(id).info())
    }

    /// Branch path of every node, indexed by [`NodeId::index`].
    pub fn paths(&self) -> Vec<Vec<Branch>> {
        let mut paths = vec![Vec::new(); self.nodes.len()];
        for (id, node) in self.iter() {
            if let Some(children) = node.children() {
                for (child, branch) in children.into_iter().zip([Branch::Left, Branch::Right]) {
                    let mut path = paths[id.0].clone();
                    path.push(branch);
                    paths[child.0] = path;
                }
            }
        }
        paths
    }

    /// Printable label of a node's path; the root is `"root"`.
    pub fn label(&self, id: NodeId) -> String {
        label_of(&self.paths()[id.0])
    }
}

/// Render a branch path as `"LRL"`, or `"root"` for the empty path.
pub fn label_of(path: &[Branch]) -> String {
    if path.is_empty() {
        "root".to_string()
    } else {
        path.iter().map(Branch::to_string).collect()
    }
}
