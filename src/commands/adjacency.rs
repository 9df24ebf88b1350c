use anyhow::Result;
use log::warn;
use std::path::Path;

use super::config::Config;
use crate::hexgraph::{build_adjacency, AdjacencyGraph};
use crate::store;

/// Build the adjacency graph for a cells file and write it as JSON.
pub fn cmd_adjacency(cells_path: &Path, out_path: &Path, cfg: &Config) -> Result<AdjacencyGraph> {
    println!("Using cells file    : {}", cells_path.display());
    println!("Using adjacency file: {}", out_path.display());

    let cells = store::load_cells(cells_path)?;
    let graph = build_adjacency(&cells, &cfg.build_options());

    let asym = graph.asymmetric_pairs();
    if !asym.is_empty() {
        warn!("adjacency: {} asymmetric neighbor entries; vertex data may be inconsistent", asym.len());
    }

    store::save_adjacency(out_path, &graph)?;
    println!(
        "Wrote adjacency for {} cells ({} neighbor entries, {} isolated) to {}",
        graph.len(),
        graph.edge_count(),
        graph.isolated().len(),
        out_path.display()
    );
    Ok(graph)
}
