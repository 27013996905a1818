//! Evaluation abstraction for game trees.
//!
//! The `Evaluator` trait lets callers swap between strategies that share one
//! recursive contract:
//! - [`Minimax`](crate::Minimax) visits every node and records the chosen child
//!   of each internal node
//! - [`AlphaBeta`](crate::AlphaBeta) narrows an `(alpha, beta)` window and
//!   records each explored edge as kept or pruned
//!
//! Every pass returns its own [`Evaluation`]; nothing about a previous pass is
//! kept outside the node values it overwrote.

use crate::node::NodeId;
use crate::tree::GameTree;
use gametree_core::{EdgeTag, Score};
use serde::Serialize;
use std::collections::HashMap;

/// Result of one evaluation pass: the root value and the edges recorded on the way.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Evaluation<E> {
    /// Value computed for the root (its leaf value when the tree has depth 0).
    pub root_value: Score,

    /// Edges in the order the pass recorded them.
    pub edges: Vec<E>,
}

/// Trait for evaluation strategies.
pub trait Evaluator {
    /// Edge record produced by this strategy.
    type Edge;

    /// Evaluate the whole tree from the root, writing each visited internal
    /// node's value in place.
    fn evaluate(&self, tree: &mut GameTree) -> Evaluation<Self::Edge>;
}

/// A principal-variation edge: `child` is the best child of `parent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PvEdge {
    pub parent: NodeId,
    pub child: NodeId,
}

/// An alpha-beta edge and whether it closed the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PruningEdge {
    pub parent: NodeId,
    pub child: NodeId,
    pub tag: EdgeTag,
}

impl Evaluation<PvEdge> {
    /// Best child recorded for `parent`, if it is an evaluated internal node.
    pub fn best_child(&self, parent: NodeId) -> Option<NodeId> {
        self.edges
            .iter()
            .find(|edge| edge.parent == parent)
            .map(|edge| edge.child)
    }

    /// Node chain from the root to a leaf, following recorded edges.
    ///
    /// A depth-0 tree yields just the root.
    pub fn principal_variation(&self) -> Vec<NodeId> {
        let next: HashMap<NodeId, NodeId> = self
            .edges
            .iter()
            .map(|edge| (edge.parent, edge.child))
            .collect();

        let mut chain = vec![NodeId::ROOT];
        let mut current = NodeId::ROOT;
        while let Some(&child) = next.get(&current) {
            chain.push(child);
            current = child;
        }
        chain
    }

    /// Values along the principal variation.
    pub fn path_values(&self, tree: &GameTree) -> Vec<Score> {
        self.principal_variation()
            .into_iter()
            .filter_map(|id| tree.get(id).value())
            .collect()
    }

    /// Human-readable trace such as `"3 -> 3 -> 3"`.
    pub fn path_trace(&self, tree: &GameTree) -> String {
        self.path_values(tree)
            .iter()
            .map(Score::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl Evaluation<PruningEdge> {
    /// Edges that triggered a cutoff.
    pub fn pruned(&self) -> impl Iterator<Item = &PruningEdge> {
        self.edges.iter().filter(|e| e.tag == EdgeTag::Pruned)
    }

    /// Edges explored without closing the window.
    pub fn kept(&self) -> impl Iterator<Item = &PruningEdge> {
        self.edges.iter().filter(|e| e.tag == EdgeTag::Kept)
    }

    /// Roots of subtrees never visited because an earlier sibling cut off.
    pub fn skipped(&self, tree: &GameTree) -> Vec<NodeId> {
        self.pruned()
            .filter_map(|edge| {
                let [left, right] = tree.get(edge.parent).children()?;
                (edge.child == left).then_some(right)
            })
            .collect()
    }
}
