//! Minimax and alpha-beta evaluation of perfect binary game trees.
//!
//! A tree is built from `2^depth` leaf values; the root maximizes and roles
//! alternate level by level. Two evaluators share one recursive contract:
//!
//! - **Minimax**: visits every node and records each internal node's best
//!   child, giving the principal variation
//! - **Alpha-beta**: narrows an `(alpha, beta)` window and records each
//!   explored edge as kept or pruned
//!
//! # Example
//!
//! ```
//! use gametree_search::{build, AlphaBeta, Evaluator, Minimax};
//!
//! let mut tree = build(&[3, 5, 2, 9], 2).unwrap();
//!
//! let minimax = Minimax.evaluate(&mut tree);
//! assert_eq!(minimax.root_value, 3);
//! assert_eq!(minimax.path_trace(&tree), "3 -> 3 -> 3");
//!
//! let alpha_beta = AlphaBeta.evaluate(&mut tree);
//! assert_eq!(alpha_beta.root_value, 3);
//! assert_eq!(alpha_beta.pruned().count(), 1);
//! ```

mod alphabeta;
mod builder;
pub mod config;
pub mod evaluator;
mod minimax;
mod node;
pub mod session;
mod tree;

pub use alphabeta::AlphaBeta;
pub use builder::build;
pub use config::SearchConfig;
pub use evaluator::{Evaluation, Evaluator, PruningEdge, PvEdge};
pub use minimax::Minimax;
pub use node::{Node, NodeId, NodeInfo};
pub use session::Session;
pub use tree::{label_of, GameTree};
