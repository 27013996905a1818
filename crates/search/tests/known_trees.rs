//! Hand-computed trees and a seeded comparison against a reference solver.

use gametree_core::{EdgeTag, GameTreeError, LeafValues, Role, Score};
use gametree_search::{build, AlphaBeta, Evaluator, GameTree, Minimax, SearchConfig, Session};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Straightforward minimax over a leaf slice, used as ground truth.
fn reference_value(leaves: &[Score], role: Role) -> Score {
    if leaves.len() == 1 {
        return leaves[0];
    }
    let (left, right) = leaves.split_at(leaves.len() / 2);
    let l = reference_value(left, role.opponent());
    let r = reference_value(right, role.opponent());
    match role {
        Role::Maximizing => l.max(r),
        Role::Minimizing => l.min(r),
    }
}

fn labelled_tags(tree: &GameTree, edges: &[gametree_search::PruningEdge]) -> Vec<String> {
    edges
        .iter()
        .map(|e| format!("{}->{}:{}", tree.label(e.parent), tree.label(e.child), e.tag))
        .collect()
}

#[test]
fn test_depth_two_values() {
    let mut tree = build(&[3, 5, 2, 9], 2).unwrap();
    let evaluation = Minimax.evaluate(&mut tree);

    assert_eq!(tree.inspect("L").unwrap().value, Some(3));
    assert_eq!(tree.inspect("R").unwrap().value, Some(2));
    assert_eq!(evaluation.root_value, 3);
    assert_eq!(evaluation.path_trace(&tree), "3 -> 3 -> 3");
}

#[test]
fn test_depth_two_pruning_trace() {
    let mut tree = build(&[3, 5, 2, 9], 2).unwrap();
    let evaluation = AlphaBeta.evaluate(&mut tree);

    assert_eq!(
        labelled_tags(&tree, &evaluation.edges),
        vec![
            "L->LL:kept",
            "L->LR:kept",
            "root->L:kept",
            "R->RL:pruned",
            "root->R:kept",
        ]
    );
    assert_eq!(evaluation.pruned().count(), 1);
}

#[test]
fn test_depth_three_textbook_tree() {
    // Max / Min / Max over eight leaves.
    let leaves = [5, 6, 7, 4, 5, 3, 6, 6];
    let mut tree = build(&leaves, 3).unwrap();

    let minimax = Minimax.evaluate(&mut tree);
    assert_eq!(minimax.root_value, reference_value(&leaves, Role::Maximizing));
    assert_eq!(minimax.root_value, 6);
    assert_eq!(minimax.path_trace(&tree), "6 -> 6 -> 6 -> 6");

    let alpha_beta = AlphaBeta.evaluate(&mut tree);
    assert_eq!(alpha_beta.root_value, 6);
    assert_eq!(
        labelled_tags(&tree, &alpha_beta.edges),
        vec![
            "LL->LLL:kept",
            "LL->LLR:kept",
            "L->LL:kept",
            "LR->LRL:pruned",
            "L->LR:kept",
            "root->L:kept",
            "RL->RLL:kept",
            "RL->RLR:kept",
            "R->RL:pruned",
            "root->R:kept",
        ]
    );
    let skipped: Vec<_> = alpha_beta.skipped(&tree).iter().map(|id| tree.label(*id)).collect();
    assert_eq!(skipped, vec!["LRR", "RR"]);
}

#[test]
fn test_seeded_random_trees_match_reference() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..200 {
        let depth = rng.gen_range(0..9);
        let leaves: Vec<Score> = (0..1usize << depth).map(|_| rng.gen_range(-50..50)).collect();
        let expected = reference_value(&leaves, Role::Maximizing);

        let mut tree = build(&leaves, depth).unwrap();
        assert_eq!(Minimax.evaluate(&mut tree).root_value, expected);
        assert_eq!(AlphaBeta.evaluate(&mut tree).root_value, expected);
    }
}

#[test]
fn test_single_leaf_both_evaluators() {
    let mut tree = build(&[13], 0).unwrap();

    let minimax = Minimax.evaluate(&mut tree);
    let alpha_beta = AlphaBeta.evaluate(&mut tree);
    assert_eq!((minimax.root_value, minimax.edges.len()), (13, 0));
    assert_eq!((alpha_beta.root_value, alpha_beta.edges.len()), (13, 0));
}

#[test]
fn test_ties_pick_leftmost() {
    let mut tree = build(&[2, 2, 2, 2], 2).unwrap();
    let evaluation = Minimax.evaluate(&mut tree);

    let chain: Vec<_> = evaluation
        .principal_variation()
        .into_iter()
        .map(|id| tree.label(id))
        .collect();
    assert_eq!(chain, vec!["root", "L", "LL"]);
}

#[test]
fn test_pruned_edge_is_still_a_visited_child() {
    let mut tree = build(&[3, 5, 2, 9], 2).unwrap();
    let evaluation = AlphaBeta.evaluate(&mut tree);

    let pruned = evaluation.pruned().next().unwrap();
    assert_eq!(pruned.tag, EdgeTag::Pruned);
    // The child that triggered the cutoff was evaluated; its sibling was not.
    assert_eq!(tree.get(pruned.child).value(), Some(2));
    assert_eq!(tree.label(pruned.child), "RL");
}

#[test]
fn test_session_workflow() {
    let mut session = Session::new(SearchConfig::with_max_depth(3));
    assert_eq!(session.alpha_beta().unwrap_err(), GameTreeError::EvaluateBeforeBuild);

    let leaves = LeafValues::parse(&["3", "5", "2", "9"], 2).unwrap();
    session.generate(&leaves).unwrap();

    let minimax = session.minimax().unwrap();
    let tree = session.tree().unwrap();
    assert_eq!(minimax.path_trace(tree), "3 -> 3 -> 3");

    let info = session.inspect("RL").unwrap();
    assert_eq!(info.value, Some(2));
    assert_eq!(info.kind(), "Leaf");
    assert!(matches!(session.inspect("RLL"), Err(GameTreeError::InvalidPath(_))));
}
