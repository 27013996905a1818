//! Build-then-evaluate workflow over a single owned tree.

use crate::config::SearchConfig;
use crate::evaluator::{Evaluation, Evaluator, PruningEdge, PvEdge};
use crate::node::NodeInfo;
use crate::tree::GameTree;
use crate::{AlphaBeta, Minimax};
use gametree_core::{GameTreeError, LeafValues, Result};
use tracing::info;

/// Owns the current tree and runs evaluation passes on it.
///
/// A `generate` replaces the tree wholesale. Evaluation passes are only
/// available once a tree exists; each returns its own fresh [`Evaluation`].
#[derive(Debug, Default)]
pub struct Session {
    config: SearchConfig,
    tree: Option<GameTree>,
}

impl Session {
    pub fn new(config: SearchConfig) -> Self {
        Self { config, tree: None }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The current tree, if one was generated.
    pub fn tree(&self) -> Option<&GameTree> {
        self.tree.as_ref()
    }

    /// Build a new tree from `leaves`, discarding any previous one.
    ///
    /// # Errors
    /// Returns `GameTreeError::InvalidDepth` if the depth exceeds the
    /// configured limit. The previous tree is kept in that case.
    pub fn generate(&mut self, leaves: &LeafValues) -> Result<&GameTree> {
        self.config.check_depth(leaves.depth())?;
        let tree = GameTree::from_leaves(leaves);
        info!(depth = leaves.depth(), leaves = leaves.len(), "generated tree");
        Ok(&*self.tree.insert(tree))
    }

    /// Run a plain minimax pass.
    ///
    /// # Errors
    /// Returns `GameTreeError::EvaluateBeforeBuild` if no tree exists.
    pub fn minimax(&mut self) -> Result<Evaluation<PvEdge>> {
        self.evaluate_with(&Minimax)
    }

    /// Run an alpha-beta pass.
    ///
    /// # Errors
    /// Returns `GameTreeError::EvaluateBeforeBuild` if no tree exists.
    pub fn alpha_beta(&mut self) -> Result<Evaluation<PruningEdge>> {
        self.evaluate_with(&AlphaBeta)
    }

    /// Run any evaluator over the current tree.
    pub fn evaluate_with<E: Evaluator>(&mut self, evaluator: &E) -> Result<Evaluation<E::Edge>> {
        let tree = self
            .tree
            .as_mut()
            .ok_or(GameTreeError::EvaluateBeforeBuild)?;
        Ok(evaluator.evaluate(tree))
    }

    /// Inspect the node at a branch path such as `"LR"`.
    ///
    /// # Errors
    /// Returns `GameTreeError::EvaluateBeforeBuild` without a tree and
    /// `GameTreeError::InvalidPath` for a path that does not name a node.
    pub fn inspect(&self, path: &str) -> Result<NodeInfo> {
        self.tree
            .as_ref()
            .ok_or(GameTreeError::EvaluateBeforeBuild)?
            .inspect(path)
    }
}
