//! Search session configuration.

use gametree_core::{GameTreeError, Result};

/// Limits applied by a [`Session`](crate::Session) before it builds a tree.
///
/// Evaluation itself enforces no depth cap; recursion depth equals tree
/// depth and the arena holds `2^(depth + 1) - 1` nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Largest depth accepted by `generate`. `None` accepts any depth whose
    /// leaf count fits in memory.
    pub max_depth: Option<u32>,
}

impl SearchConfig {
    /// Create a config that rejects trees deeper than `max_depth`.
    pub fn with_max_depth(max_depth: u32) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// Check `depth` against the configured limit.
    ///
    /// # Errors
    /// Returns `GameTreeError::InvalidDepth` if the depth exceeds `max_depth`.
    pub fn check_depth(&self, depth: u32) -> Result<()> {
        match self.max_depth {
            Some(max) if depth > max => Err(GameTreeError::InvalidDepth(format!(
                "{depth} (maximum is {max})"
            ))),
            _ => Ok(()),
        }
    }
}
