//! Game tree node types for arena storage.
//!
//! Nodes are referenced by index, so parent→child links are plain ids and the
//! tree needs no back-references.

use gametree_core::{Role, Score};
use serde::Serialize;

/// Index into the node arena.
///
/// This is a lightweight handle that references a node in a [`GameTree`].
/// Nodes are allocated in pre-order, so ids also give left-to-right order
/// among nodes at the same level.
///
/// [`GameTree`]: crate::GameTree
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A vertex of the game tree.
///
/// Shape (`children`) and `role` are fixed at construction; only `value` is
/// rewritten by evaluation passes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    value: Option<Score>,
    role: Option<Role>,
    children: Option<[NodeId; 2]>,
}

impl Node {
    /// Create a terminal node holding an input value.
    pub(crate) fn leaf(value: Score) -> Self {
        Self {
            value: Some(value),
            role: None,
            children: None,
        }
    }

    /// Create an unevaluated internal node. Children are attached by the builder.
    pub(crate) fn internal(role: Role) -> Self {
        Self {
            value: None,
            role: Some(role),
            children: None,
        }
    }

    pub(crate) fn attach(&mut self, left: NodeId, right: NodeId) {
        debug_assert!(self.children.is_none(), "children are attached once");
        self.children = Some([left, right]);
    }

    pub(crate) fn set_value(&mut self, value: Score) {
        self.value = Some(value);
    }

    /// Current value: the input for a leaf, the last computed value for an
    /// internal node, or `None` before the first evaluation.
    pub fn value(&self) -> Option<Score> {
        self.value
    }

    /// Player role, `None` for leaves.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// `[left, right]` for internal nodes, `None` for leaves.
    pub fn children(&self) -> Option<[NodeId; 2]> {
        self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Read-only snapshot for display.
    pub fn info(&self) -> NodeInfo {
        NodeInfo {
            value: self.value,
            role: self.role,
        }
    }
}

/// What a display collaborator shows when a node is inspected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    pub value: Option<Score>,
    pub role: Option<Role>,
}

impl NodeInfo {
    /// "Max", "Min" or "Leaf".
    pub fn kind(&self) -> &'static str {
        self.role.map_or("Leaf", Role::label)
    }
}
