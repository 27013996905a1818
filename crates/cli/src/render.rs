//! Text and JSON presentation of trees and evaluation passes.

use gametree_core::{EdgeTag, Score};
use gametree_search::{label_of, Evaluation, GameTree, NodeId, NodeInfo, PruningEdge, PvEdge};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt::Write;

/// Edge marks overlaid on the tree drawing.
#[derive(Debug, Default)]
pub struct Overlay {
    principal: HashSet<NodeId>,
    tags: HashMap<NodeId, EdgeTag>,
    skipped: HashSet<NodeId>,
}

impl Overlay {
    /// Mark the principal variation of a minimax pass.
    pub fn with_minimax(mut self, evaluation: &Evaluation<PvEdge>) -> Self {
        self.principal = evaluation.principal_variation().into_iter().collect();
        self
    }

    /// Mark kept/pruned/skipped children of an alpha-beta pass.
    pub fn with_alpha_beta(mut self, tree: &GameTree, evaluation: &Evaluation<PruningEdge>) -> Self {
        self.tags = evaluation.edges.iter().map(|e| (e.child, e.tag)).collect();
        self.skipped = evaluation.skipped(tree).into_iter().collect();
        self
    }
}

/// Draw the tree top-down, one node per line.
///
/// ```text
/// [Max] 3 *
/// ├── [Min] 3 (kept) *
/// │   ├── 3 (kept) *
/// │   └── 5 (kept)
/// └── [Min] 2 (kept)
///     ├── 2 (pruned)
///     └── 9 (skipped)
/// ```
pub fn render_tree(tree: &GameTree, overlay: &Overlay) -> String {
    let mut out = String::new();
    write_node(&mut out, tree, overlay, NodeId::ROOT, "", "");
    out
}

fn write_node(out: &mut String, tree: &GameTree, overlay: &Overlay, id: NodeId, lead: &str, prefix: &str) {
    let node = tree.get(id);
    let mut line = format!("{lead}{}", describe(&node.info()));
    if let Some(tag) = overlay.tags.get(&id) {
        let _ = write!(line, " ({tag})");
    } else if overlay.skipped.contains(&id) {
        line.push_str(" (skipped)");
    }
    if overlay.principal.contains(&id) {
        line.push_str(" *");
    }
    out.push_str(&line);
    out.push('\n');

    if let Some([left, right]) = node.children() {
        write_node(out, tree, overlay, left, &format!("{prefix}├── "), &format!("{prefix}│   "));
        write_node(out, tree, overlay, right, &format!("{prefix}└── "), &format!("{prefix}    "));
    }
}

/// `"[Max] 3"`, `"[Min] ?"` or `"7"` for a leaf.
fn describe(info: &NodeInfo) -> String {
    let value = info.value.map_or_else(|| "?".to_string(), |v| v.to_string());
    match info.role {
        Some(role) => format!("[{role}] {value}"),
        None => value,
    }
}

/// Node inspection text, one field per line.
pub fn render_node_info(info: &NodeInfo) -> String {
    let value = info.value.map_or_else(|| "unevaluated".to_string(), |v| v.to_string());
    format!("Value : {value}\nType : {}", info.kind())
}

/// Minimax pass summary, captured before any later pass rewrites node values.
#[derive(Debug, Clone, Serialize)]
pub struct MinimaxSummary {
    pub root_value: Score,
    pub principal_variation: Vec<String>,
    pub path_values: Vec<Score>,
    pub trace: String,
    pub edges: Vec<EdgeReport>,
}

impl MinimaxSummary {
    pub fn new(tree: &GameTree, evaluation: &Evaluation<PvEdge>) -> Self {
        let paths = tree.paths();
        let label = |id: NodeId| label_of(&paths[id.index()]);
        Self {
            root_value: evaluation.root_value,
            principal_variation: evaluation.principal_variation().into_iter().map(label).collect(),
            path_values: evaluation.path_values(tree),
            trace: evaluation.path_trace(tree),
            edges: evaluation
                .edges
                .iter()
                .map(|e| EdgeReport {
                    parent: label(e.parent),
                    child: label(e.child),
                    tag: None,
                })
                .collect(),
        }
    }
}

/// Alpha-beta pass summary.
#[derive(Debug, Clone, Serialize)]
pub struct AlphaBetaSummary {
    pub root_value: Score,
    pub kept: usize,
    pub pruned: usize,
    pub skipped: Vec<String>,
    pub edges: Vec<EdgeReport>,
}

impl AlphaBetaSummary {
    pub fn new(tree: &GameTree, evaluation: &Evaluation<PruningEdge>) -> Self {
        let paths = tree.paths();
        let label = |id: NodeId| label_of(&paths[id.index()]);
        Self {
            root_value: evaluation.root_value,
            kept: evaluation.kept().count(),
            pruned: evaluation.pruned().count(),
            skipped: evaluation.skipped(tree).into_iter().map(label).collect(),
            edges: evaluation
                .edges
                .iter()
                .map(|e| EdgeReport {
                    parent: label(e.parent),
                    child: label(e.child),
                    tag: Some(e.tag),
                })
                .collect(),
        }
    }
}

/// One recorded edge, with nodes named by their branch path.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeReport {
    pub parent: String,
    pub child: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<EdgeTag>,
}

/// Everything `gametree run` reports.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub depth: u32,
    pub leaves: Vec<Score>,
    pub minimax: MinimaxSummary,
    pub alpha_beta: AlphaBetaSummary,
    #[serde(skip)]
    pub drawing: String,
}

impl Report {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let leaves: Vec<String> = self.leaves.iter().map(Score::to_string).collect();
        let _ = writeln!(out, "Depth: {}", self.depth);
        let _ = writeln!(out, "Leaves: {}", leaves.join(", "));
        out.push('\n');
        out.push_str(&self.drawing);
        out.push('\n');
        let _ = writeln!(out, "Minimax value: {}", self.minimax.root_value);
        let _ = writeln!(out, "Optimal Path : {}", self.minimax.trace);
        let _ = writeln!(out, "Optimal nodes: {}", self.minimax.principal_variation.join(" -> "));
        out.push('\n');
        let _ = writeln!(out, "Alpha-beta value: {}", self.alpha_beta.root_value);
        let _ = writeln!(
            out,
            "Edges: {} kept, {} pruned",
            self.alpha_beta.kept, self.alpha_beta.pruned
        );
        out.push_str(&render_edges(&self.alpha_beta.edges));
        if !self.alpha_beta.skipped.is_empty() {
            let _ = writeln!(out, "Skipped subtrees: {}", self.alpha_beta.skipped.join(", "));
        }
        out
    }
}

/// One line per edge: `"  root -> L  kept"`.
pub fn render_edges(edges: &[EdgeReport]) -> String {
    let mut out = String::new();
    for edge in edges {
        let _ = match edge.tag {
            Some(tag) => writeln!(out, "  {} -> {}  {}", edge.parent, edge.child, tag),
            None => writeln!(out, "  {} -> {}", edge.parent, edge.child),
        };
    }
    out
}
