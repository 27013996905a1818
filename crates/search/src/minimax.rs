//! Plain minimax over the whole tree.

use crate::evaluator::{Evaluation, Evaluator, PvEdge};
use crate::node::NodeId;
use crate::tree::GameTree;
use gametree_core::{Role, Score};
use tracing::{debug, trace};

/// Full-traversal minimax.
///
/// Every internal node gets exactly one [`PvEdge`] to its best child. Ties
/// keep the earlier (left) child. Edges are recorded in post-order: a node's
/// edge follows every edge recorded inside its subtrees.
#[derive(Clone, Copy, Debug, Default)]
pub struct Minimax;

impl Evaluator for Minimax {
    type Edge = PvEdge;

    fn evaluate(&self, tree: &mut GameTree) -> Evaluation<PvEdge> {
        let mut edges = Vec::new();
        let role = tree.root().role().unwrap_or(Role::Maximizing);
        let depth = tree.depth();
        let root_value = minimax(tree, NodeId::ROOT, depth, role, &mut edges);
        debug!(root_value, edges = edges.len(), "minimax pass complete");
        Evaluation { root_value, edges }
    }
}

fn minimax(
    tree: &mut GameTree,
    id: NodeId,
    remaining: u32,
    role: Role,
    edges: &mut Vec<PvEdge>,
) -> Score {
    let node = tree.get(id);
    let children = match node.children() {
        Some(children) if remaining > 0 => children,
        // INVARIANT: leaves always carry their input value
        _ => return node.value().expect("BUG: terminal node without a value"),
    };

    let mut best: Option<(Score, NodeId)> = None;
    for child in children {
        let value = minimax(tree, child, remaining - 1, role.opponent(), edges);
        if best.map_or(true, |(best_value, _)| improves(role, value, best_value)) {
            best = Some((value, child));
        }
    }

    // INVARIANT: the loop above ran over two children
    let (best_value, best_child) = best.expect("BUG: internal node without children");
    trace!(node = id.index(), child = best_child.index(), value = best_value, %role, "best child");
    tree.get_mut(id).set_value(best_value);
    edges.push(PvEdge {
        parent: id,
        child: best_child,
    });
    best_value
}

/// Strict comparison, so an equal later child never replaces the incumbent.
fn improves(role: Role, candidate: Score, incumbent: Score) -> bool {
    match role {
        Role::Maximizing => candidate > incumbent,
        Role::Minimizing => candidate < incumbent,
    }
}
