use anyhow::{bail, Result};
use std::collections::{HashMap, HashSet};

use super::config::Config;
use super::GraphSource;
use crate::hexgraph::{hop_distances, AdjacencyGraph};

#[derive(Clone, Debug, Default)]
pub struct CheckReport {
    pub cells: usize,
    pub neighbor_entries: usize,
    pub components: usize,
    pub asymmetric: Vec<(String, String)>,
    pub isolated: Vec<String>,
}

pub fn inspect(graph: &AdjacencyGraph) -> CheckReport {
    CheckReport {
        cells: graph.len(),
        neighbor_entries: graph.edge_count(),
        components: count_components(graph),
        asymmetric: graph
            .asymmetric_pairs()
            .into_iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect(),
        isolated: graph.isolated().into_iter().map(str::to_string).collect(),
    }
}

// Flood from every not-yet-seen cell. On asymmetric graphs this counts
// forward-reachable groups rather than strict components.
fn count_components(graph: &AdjacencyGraph) -> usize {
    let none = HashSet::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut count = 0;
    for id in graph.ids() {
        if seen.contains(id) { continue; }
        let reach: HashMap<&str, usize> = match hop_distances(id, graph, &none) {
            Ok(r) => r,
            Err(_) => continue,
        };
        seen.extend(reach.into_keys());
        count += 1;
    }
    count
}

/// Report graph consistency. With `strict`, any asymmetric neighbor entry is an error.
pub fn cmd_check(source: &GraphSource, strict: bool, cfg: &Config) -> Result<CheckReport> {
    let graph = source.load(cfg)?;
    let report = inspect(&graph);

    println!("cells            : {}", report.cells);
    println!("neighbor entries : {}", report.neighbor_entries);
    println!("components       : {}", report.components);
    println!("isolated         : {}", report.isolated.len());
    for id in report.isolated.iter() {
        println!("  isolated {}", id);
    }
    println!("asymmetric pairs : {}", report.asymmetric.len());
    for (a, b) in report.asymmetric.iter() {
        println!("  {} lists {} but not the reverse", a, b);
    }

    if strict && !report.asymmetric.is_empty() {
        bail!("{} asymmetric neighbor entries in {}", report.asymmetric.len(), source.path().display());
    }
    Ok(report)
}
