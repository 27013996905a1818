//! Global configuration for the `gametree` binary.
//!
//! Values come from command-line flags, falling back to `GAMETREE_*`
//! environment variables, then to built-in defaults.

use anyhow::{anyhow, Result};
use clap::Args;
use gametree_search::SearchConfig;
use tracing::level_filters::LevelFilter;

/// Deepest tree accepted unless overridden: 2^20 leaves, about two million nodes.
const DEFAULT_MAX_DEPTH: u32 = 20;

/// Hard ceiling on `--max-depth`; leaf counts beyond this are not gatherable.
const MAX_DEPTH_CEILING: u32 = 30;

fn default_log_level() -> String {
    std::env::var("GAMETREE_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string())
}

fn default_max_depth() -> u32 {
    std::env::var("GAMETREE_MAX_DEPTH")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_DEPTH)
}

#[derive(Args, Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value_t = default_log_level())]
    pub log_level: String,

    /// Largest tree depth accepted when generating a tree
    #[arg(long, global = true, default_value_t = default_max_depth())]
    pub max_depth: u32,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        if self.max_depth == 0 || self.max_depth > MAX_DEPTH_CEILING {
            return Err(anyhow!(
                "max_depth must be between 1 and {}, got {}",
                MAX_DEPTH_CEILING,
                self.max_depth
            ));
        }

        Ok(())
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::with_max_depth(self.max_depth)
    }
}
