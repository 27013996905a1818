use thiserror::Error;

/// Errors raised at the boundary of the game tree core.
///
/// All of these are caller errors: they are detected before a tree is built
/// or before an evaluation pass starts, never in the middle of one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameTreeError {
    #[error("invalid depth {0}")]
    InvalidDepth(String),

    #[error("expected {expected} leaf values (2^depth), got {actual}")]
    LeafCountMismatch { expected: usize, actual: usize },

    #[error("leaf {index} value {input:?} is not an integer")]
    NonIntegerLeafValue { index: usize, input: String },

    #[error("no tree was generated, generate a tree first")]
    EvaluateBeforeBuild,

    #[error("invalid node path {0:?}: expected a sequence of L/R steps ending at a node")]
    InvalidPath(String),
}

/// Convenience Result type for game tree operations
pub type Result<T> = std::result::Result<T, GameTreeError>;
