//! Interactive line shell: generate a tree, then evaluate and inspect it.
//!
//! Leaf values are gathered one prompt at a time after `generate <depth>`,
//! or given inline as `generate <depth> v1 v2 ...`.

use crate::input::{parse_depth, parse_leaf, parse_leaves, split_leaves};
use crate::render::{render_edges, render_node_info, render_tree, AlphaBetaSummary, MinimaxSummary, Overlay};
use anyhow::Result;
use gametree_core::{leaf_count, GameTreeError, LeafValues, Score};
use gametree_search::{SearchConfig, Session};
use std::fmt::Write as _;
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  generate <depth> [values...]  build a tree with 2^depth leaves
  minimax                       evaluate and show the optimal path
  alphabeta                     evaluate with alpha-beta pruning
  inspect <path>                show a node, e.g. `inspect LR` (empty path = root)
  show                          draw the current tree
  help                          show this message
  quit                          leave the shell";

/// Leaf values collected so far for a pending `generate`.
#[derive(Debug)]
struct PendingLeaves {
    depth: u32,
    expected: usize,
    values: Vec<Score>,
}

impl PendingLeaves {
    fn prompt(&self) -> String {
        format!("Value for Leaf {} of {}: ", self.values.len() + 1, self.expected)
    }
}

/// Result of handling one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Quit,
}

pub struct Shell {
    session: Session,
    pending: Option<PendingLeaves>,
    overlay: Overlay,
}

impl Shell {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            session: Session::new(config),
            pending: None,
            overlay: Overlay::default(),
        }
    }

    /// Prompt to show before reading the next line.
    pub fn prompt(&self) -> String {
        match &self.pending {
            Some(pending) => pending.prompt(),
            None => "gametree> ".to_string(),
        }
    }

    /// Drive the shell until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{HELP}")?;
        write!(output, "{}", self.prompt())?;
        output.flush()?;

        for line in input.lines() {
            match self.execute(&line?) {
                Reply::Quit => return Ok(()),
                Reply::Continue(text) if text.is_empty() => {}
                Reply::Continue(text) => writeln!(output, "{text}")?,
            }
            write!(output, "{}", self.prompt())?;
            output.flush()?;
        }
        writeln!(output)?;
        Ok(())
    }

    /// Handle one line of input. Errors are reported in the reply text.
    pub fn execute(&mut self, line: &str) -> Reply {
        let result = if self.pending.is_some() {
            self.collect_leaf(line.trim())
        } else {
            self.command(line.trim())
        };
        match result {
            Ok(Some(text)) => Reply::Continue(text),
            Ok(None) => Reply::Quit,
            Err(e) => Reply::Continue(format!("error: {e}")),
        }
    }

    fn command(&mut self, line: &str) -> Result<Option<String>, GameTreeError> {
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        debug!(command = name, "shell command");
        let text = match name.to_ascii_lowercase().as_str() {
            "" => String::new(),
            "generate" | "gen" => self.generate(rest)?,
            "minimax" => self.minimax()?,
            "alphabeta" | "alpha-beta" | "ab" => self.alpha_beta()?,
            "inspect" => render_node_info(&self.session.inspect(rest)?),
            "show" => self.show()?,
            "help" | "?" => HELP.to_string(),
            "quit" | "exit" => return Ok(None),
            other => format!("unknown command {other:?}, type `help` for the list"),
        };
        Ok(Some(text))
    }

    fn generate(&mut self, args: &str) -> Result<String, GameTreeError> {
        let args = split_leaves(args);
        let (raw_depth, values) = args.split_first().ok_or_else(|| {
            GameTreeError::InvalidDepth("missing: expected a positive integer".to_string())
        })?;
        let depth = parse_depth(raw_depth)?;
        self.session.config().check_depth(depth)?;

        if values.is_empty() {
            let pending = PendingLeaves {
                depth,
                expected: leaf_count(depth)?,
                values: Vec::new(),
            };
            let text = format!("Enter {} leaf values (`cancel` to abort).", pending.expected);
            self.pending = Some(pending);
            return Ok(text);
        }

        let leaves = parse_leaves(&values.join(" "), depth)?;
        self.install(&leaves)
    }

    fn collect_leaf(&mut self, line: &str) -> Result<Option<String>, GameTreeError> {
        if line.eq_ignore_ascii_case("cancel") {
            self.pending = None;
            return Ok(Some("generate cancelled".to_string()));
        }

        let Some(mut pending) = self.pending.take() else {
            return Ok(Some(String::new()));
        };
        let value = match parse_leaf(line, pending.values.len()) {
            Ok(value) => value,
            Err(e) => {
                self.pending = Some(pending);
                return Err(e);
            }
        };
        pending.values.push(value);
        if pending.values.len() < pending.expected {
            self.pending = Some(pending);
            return Ok(Some(String::new()));
        }

        let leaves = LeafValues::new(pending.values, pending.depth)?;
        self.install(&leaves).map(Some)
    }

    /// Replace the tree, then run minimax and show the optimal path.
    fn install(&mut self, leaves: &LeafValues) -> Result<String, GameTreeError> {
        self.session.generate(leaves)?;
        self.overlay = Overlay::default();
        self.minimax()
    }

    fn minimax(&mut self) -> Result<String, GameTreeError> {
        let evaluation = self.session.minimax()?;
        let tree = self.session.tree().ok_or(GameTreeError::EvaluateBeforeBuild)?;
        let summary = MinimaxSummary::new(tree, &evaluation);
        self.overlay = Overlay::default().with_minimax(&evaluation);

        let mut out = render_tree(tree, &self.overlay);
        let _ = write!(out, "Optimal Path : {}", summary.trace);
        Ok(out)
    }

    fn alpha_beta(&mut self) -> Result<String, GameTreeError> {
        let evaluation = self.session.alpha_beta()?;
        let tree = self.session.tree().ok_or(GameTreeError::EvaluateBeforeBuild)?;
        let summary = AlphaBetaSummary::new(tree, &evaluation);
        self.overlay = Overlay::default().with_alpha_beta(tree, &evaluation);

        let mut out = render_tree(tree, &self.overlay);
        let _ = writeln!(
            out,
            "Alpha-beta value: {} ({} kept, {} pruned)",
            summary.root_value, summary.kept, summary.pruned
        );
        out.push_str(render_edges(&summary.edges).trim_end());
        Ok(out)
    }

    fn show(&self) -> Result<String, GameTreeError> {
        let tree = self.session.tree().ok_or(GameTreeError::EvaluateBeforeBuild)?;
        Ok(render_tree(tree, &self.overlay).trim_end().to_string())
    }
}
