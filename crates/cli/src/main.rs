//! Build binary game trees and explain minimax and alpha-beta decisions.
//!
//! Gathers a depth and `2^depth` leaf values, builds the tree, runs plain
//! minimax to find the optimal path and alpha-beta to show which edges were
//! kept or pruned.

mod config;
mod input;
mod render;
mod shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::Config;
use gametree_core::{GameTreeError, LeafValues, Score};
use gametree_search::Session;
use render::{render_node_info, render_tree, AlphaBetaSummary, MinimaxSummary, Overlay, Report};
use shell::Shell;
use std::io;
use tracing::info;

/// Minimax and alpha-beta explorer for perfect binary game trees.
#[derive(Parser)]
#[command(name = "gametree")]
#[command(about = "Build a binary game tree and explain minimax and alpha-beta decisions")]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a tree, run minimax and alpha-beta, print the report.
    Run {
        /// Tree depth (positive integer); the tree has 2^depth leaves.
        #[arg(short, long, value_parser = input::parse_depth)]
        depth: u32,

        /// Leaf values, comma or space separated, left to right.
        #[arg(short, long, allow_hyphen_values = true, required_unless_present = "random")]
        leaves: Option<String>,

        /// Draw leaf values at random instead of reading --leaves.
        #[arg(long, conflicts_with = "leaves")]
        random: bool,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Smallest random leaf value.
        #[arg(long, default_value = "-9", allow_hyphen_values = true)]
        min: Score,

        /// Largest random leaf value.
        #[arg(long, default_value = "9", allow_hyphen_values = true)]
        max: Score,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Build a tree, run minimax, and show one node's value and type.
    Inspect {
        /// Tree depth (positive integer).
        #[arg(short, long, value_parser = input::parse_depth)]
        depth: u32,

        /// Leaf values, comma or space separated, left to right.
        #[arg(short, long, allow_hyphen_values = true)]
        leaves: String,

        /// Node path from the root, e.g. "LR" (empty for the root).
        #[arg(short, long, default_value = "")]
        path: String,
    },

    /// Interactive shell: generate, minimax, alphabeta, inspect.
    Shell,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    Ok(())
}

/// Collect leaves from --leaves or the seeded generator.
fn gather_leaves(
    depth: u32,
    leaves: Option<&str>,
    seed: u64,
    min: Score,
    max: Score,
) -> Result<LeafValues, GameTreeError> {
    match leaves {
        Some(raw) => input::parse_leaves(raw, depth),
        None => input::random_leaves(depth, seed, min, max),
    }
}

/// Build the tree and run both passes, minimax first.
fn build_report(session: &mut Session, leaves: &LeafValues) -> Result<Report> {
    session
        .generate(leaves)
        .with_context(|| format!("Failed to generate a tree of depth {}", leaves.depth()))?;

    let minimax = session.minimax()?;
    let tree = session.tree().ok_or(GameTreeError::EvaluateBeforeBuild)?;
    let minimax_summary = MinimaxSummary::new(tree, &minimax);

    let alpha_beta = session.alpha_beta()?;
    let tree = session.tree().ok_or(GameTreeError::EvaluateBeforeBuild)?;
    let alpha_beta_summary = AlphaBetaSummary::new(tree, &alpha_beta);

    let overlay = Overlay::default()
        .with_minimax(&minimax)
        .with_alpha_beta(tree, &alpha_beta);

    Ok(Report {
        depth: leaves.depth(),
        leaves: leaves.as_slice().to_vec(),
        minimax: minimax_summary,
        alpha_beta: alpha_beta_summary,
        drawing: render_tree(tree, &overlay),
    })
}

/// Run the run command.
fn cmd_run(
    config: &Config,
    depth: u32,
    leaves: Option<String>,
    seed: u64,
    min: Score,
    max: Score,
    format: OutputFormat,
) -> Result<()> {
    let leaves = gather_leaves(depth, leaves.as_deref(), seed, min, max)
        .context("Invalid leaf input")?;
    info!(depth, leaves = leaves.len(), "running minimax and alpha-beta");

    let mut session = Session::new(config.search_config());
    let report = build_report(&mut session, &leaves)?;

    match format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!(
            "{}",
            report.to_json().context("Failed to serialize report")?
        ),
    }
    Ok(())
}

/// Run the inspect command.
fn cmd_inspect(config: &Config, depth: u32, leaves: &str, path: &str) -> Result<()> {
    let leaves = input::parse_leaves(leaves, depth).context("Invalid leaf input")?;

    let mut session = Session::new(config.search_config());
    session.generate(&leaves)?;
    session.minimax()?;
    let node = session
        .inspect(path)
        .with_context(|| format!("Failed to inspect node {path:?}"))?;

    println!("{}", render_node_info(&node));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.config.validate()?;
    init_tracing(&cli.config.log_level)?;

    match cli.command {
        Commands::Run {
            depth,
            leaves,
            random: _,
            seed,
            min,
            max,
            format,
        } => cmd_run(&cli.config, depth, leaves, seed, min, max, format),

        Commands::Inspect {
            depth,
            leaves,
            path,
        } => cmd_inspect(&cli.config, depth, &leaves, &path),

        Commands::Shell => {
            let mut shell = Shell::new(cli.config.search_config());
            shell.run(io::stdin().lock(), io::stdout().lock())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            log_level: "warn".into(),
            max_depth: 8,
        }
    }

    #[test]
    fn test_cli_parses_run() {
        let cli = Cli::try_parse_from(["gametree", "run", "-d", "2", "-l", "-3,5,2,9"]).unwrap();
        match cli.command {
            Commands::Run { depth, leaves, .. } => {
                assert_eq!(depth, 2);
                assert_eq!(leaves.as_deref(), Some("-3,5,2,9"));
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_cli_rejects_non_positive_depth() {
        assert!(Cli::try_parse_from(["gametree", "run", "-d", "0", "-l", "1"]).is_err());
        assert!(Cli::try_parse_from(["gametree", "run", "-d", "x", "-l", "1"]).is_err());
    }

    #[test]
    fn test_cli_requires_leaves_or_random() {
        assert!(Cli::try_parse_from(["gametree", "run", "-d", "2"]).is_err());
        assert!(Cli::try_parse_from(["gametree", "run", "-d", "2", "--random"]).is_ok());
        assert!(
            Cli::try_parse_from(["gametree", "run", "-d", "1", "-l", "1,2", "--random"]).is_err()
        );
    }

    #[test]
    fn test_build_report() {
        let mut session = Session::new(config().search_config());
        let leaves = LeafValues::new(vec![3, 5, 2, 9], 2).unwrap();
        let report = build_report(&mut session, &leaves).unwrap();

        assert_eq!(report.minimax.root_value, 3);
        assert_eq!(report.minimax.trace, "3 -> 3 -> 3");
        assert_eq!(report.alpha_beta.root_value, 3);
        assert_eq!(report.alpha_beta.pruned, 1);

        let text = report.to_text();
        assert!(text.contains("Optimal Path : 3 -> 3 -> 3"));
        assert!(text.contains("Edges: 4 kept, 1 pruned"));
        assert!(text.contains("Skipped subtrees: RR"));
    }

    #[test]
    fn test_build_report_depth_limit() {
        let mut session = Session::new(config().search_config());
        let leaves = LeafValues::new(vec![0; 512], 9).unwrap();
        let err = build_report(&mut session, &leaves).unwrap_err();
        assert!(format!("{err:#}").contains("maximum is 8"));
    }

    #[test]
    fn test_gather_leaves_random_is_seeded() {
        let a = gather_leaves(3, None, 5, -9, 9).unwrap();
        let b = gather_leaves(3, None, 5, -9, 9).unwrap();
        assert_eq!(a, b);
        assert_eq!(gather_leaves(1, Some("4 8"), 5, 0, 0).unwrap().as_slice(), &[4, 8]);
    }
}
