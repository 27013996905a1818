//! Alpha-beta pruning with per-edge kept/pruned bookkeeping.

use crate::evaluator::{Evaluation, Evaluator, PruningEdge};
use crate::node::NodeId;
use crate::tree::GameTree;
use gametree_core::{EdgeTag, Role, Score};
use tracing::{debug, trace};

/// Window bounds are carried wider than [`Score`] so the infinities never
/// coincide with a real node value.
type Bound = i64;

const NEG_INFINITY: Bound = Bound::MIN;
const INFINITY: Bound = Bound::MAX;

/// Alpha-beta search over the same tree shape as [`Minimax`](crate::Minimax).
///
/// Each explored child produces one [`PruningEdge`], recorded after the child
/// returns. The child that closes the window is tagged `Pruned` and its later
/// siblings are neither visited nor recorded.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlphaBeta;

impl Evaluator for AlphaBeta {
    type Edge = PruningEdge;

    fn evaluate(&self, tree: &mut GameTree) -> Evaluation<PruningEdge> {
        let mut edges = Vec::new();
        let role = tree.root().role().unwrap_or(Role::Maximizing);
        let depth = tree.depth();
        let root_value = alpha_beta(
            tree,
            NodeId::ROOT,
            depth,
            NEG_INFINITY,
            INFINITY,
            role,
            &mut edges,
        );
        debug!(
            root_value,
            edges = edges.len(),
            pruned = edges.iter().filter(|e| e.tag == EdgeTag::Pruned).count(),
            "alpha-beta pass complete"
        );
        Evaluation { root_value, edges }
    }
}

fn alpha_beta(
    tree: &mut GameTree,
    id: NodeId,
    remaining: u32,
    mut alpha: Bound,
    mut beta: Bound,
    role: Role,
    edges: &mut Vec<PruningEdge>,
) -> Score {
    let node = tree.get(id);
    let children = match node.children() {
        Some(children) if remaining > 0 => children,
        // INVARIANT: leaves always carry their input value
        _ => return node.value().expect("BUG: terminal node without a value"),
    };

    // At least one child is always visited, so the sentinel never survives.
    let mut best_value = match role {
        Role::Maximizing => Score::MIN,
        Role::Minimizing => Score::MAX,
    };

    for child in children {
        let value = alpha_beta(tree, child, remaining - 1, alpha, beta, role.opponent(), edges);
        let cutoff = match role {
            Role::Maximizing => {
                best_value = best_value.max(value);
                alpha = alpha.max(Bound::from(value));
                alpha >= beta
            }
            Role::Minimizing => {
                best_value = best_value.min(value);
                beta = beta.min(Bound::from(value));
                beta <= alpha
            }
        };

        if cutoff {
            trace!(node = id.index(), child = child.index(), alpha, beta, %role, "cutoff");
            edges.push(PruningEdge {
                parent: id,
                child,
                tag: EdgeTag::Pruned,
            });
            break;
        }
        edges.push(PruningEdge {
            parent: id,
            child,
            tag: EdgeTag::Kept,
        });
    }

    tree.get_mut(id).set_value(best_value);
    best_value
}
