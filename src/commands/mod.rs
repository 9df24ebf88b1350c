use anyhow::{bail, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::hexgraph::{build_adjacency, AdjacencyGraph, Strategy, TieBreak};
use crate::store;

pub mod adjacency;
pub mod bearing;
pub mod check;
pub mod config;
pub mod logging;
pub mod route;

#[derive(Args, Debug, Clone, Default)]
pub struct CommonOpts {
    /// Decimal places two vertices must agree on to count as shared (default: 3 or HEXROUTE_PRECISION)
    #[arg(long = "precision", global = true, value_parser = parse_precision_arg)]
    pub precision: Option<u32>,
    /// Neighbor search strategy (pairwise|indexed)
    #[arg(long = "strategy", global = true)]
    pub strategy: Option<Strategy>,
    /// Route reconstruction tie-break (discovery|lexical)
    #[arg(long = "tie-break", global = true)]
    pub tie_break: Option<TieBreak>,
    /// Number of worker threads (rayon)
    #[arg(long = "threads", global = true)]
    pub threads: Option<usize>,
    /// Log level (trace|debug|info|warn|error)
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<String>,
}

fn parse_precision_arg(s: &str) -> std::result::Result<u32, String> {
    config::parse_precision(s).ok_or_else(|| format!("precision must be an integer between 0 and {}", crate::hexgraph::Precision::MAX))
}

/// Merge CLI options with environment defaults, then set up logging and the
/// rayon pool. Environment values override CLI values when set.
pub fn prepare(common: &CommonOpts) -> config::Config {
    let mut cfg = config::Config {
        precision: common.precision,
        strategy: common.strategy,
        tie_break: common.tie_break,
        threads: common.threads,
        log_level: common.log_level.clone(),
    };
    cfg.overlay(config::Config::from_env_defaults());

    logging::init(cfg.log_level.as_deref());
    if let Some(n) = cfg.threads {
        let _ = rayon::ThreadPoolBuilder::new().num_threads(n).build_global();
    }
    cfg
}

/// Where a command gets its adjacency graph from.
#[derive(Clone, Debug)]
pub enum GraphSource {
    /// Raw cell geometry; the graph is built on load.
    Cells(PathBuf),
    /// A previously written adjacency file.
    Adjacency(PathBuf),
}

impl GraphSource {
    /// Pick a source from optional CLI paths, falling back to the default
    /// adjacency file, then the default cells file.
    pub fn resolve(cells: Option<PathBuf>, adjacency: Option<PathBuf>) -> Result<Self> {
        match (cells, adjacency) {
            (Some(_), Some(_)) => bail!("pass either --cells or --adjacency, not both"),
            (Some(c), None) => Ok(GraphSource::Cells(c)),
            (None, Some(a)) => Ok(GraphSource::Adjacency(a)),
            (None, None) => {
                let (def_cells, def_adj) = crate::util::default_paths();
                if def_adj.exists() {
                    Ok(GraphSource::Adjacency(def_adj))
                } else {
                    Ok(GraphSource::Cells(def_cells))
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            GraphSource::Cells(p) | GraphSource::Adjacency(p) => p,
        }
    }

    pub fn load(&self, cfg: &config::Config) -> Result<AdjacencyGraph> {
        match self {
            GraphSource::Cells(p) => {
                let cells = store::load_cells(p)?;
                Ok(build_adjacency(&cells, &cfg.build_options()))
            }
            GraphSource::Adjacency(p) => store::load_adjacency(p),
        }
    }
}
