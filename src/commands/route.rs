use anyhow::{Context, Result};
use log::info;
use std::collections::HashSet;

use super::config::Config;
use super::GraphSource;
use crate::hexgraph::{find_route, CellId};

/// Find and print the route from `from` to `to`. Returns `None` when the
/// cells are not connected under the given exclusions.
pub fn cmd_route(
    source: &GraphSource,
    from: &str,
    to: &str,
    exclude: &[String],
    json: bool,
    cfg: &Config,
) -> Result<Option<Vec<CellId>>> {
    let graph = source.load(cfg)?;
    let excluded: HashSet<CellId> = exclude.iter().map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect();

    let route = find_route(from, to, &graph, &excluded, cfg.tie_break())
        .with_context(|| format!("route {} -> {} in {}", from, to, source.path().display()))?;

    match &route {
        Some(path) => {
            info!("route: {} -> {}: {} hops", from, to, path.len() - 1);
            if json {
                println!("{}", serde_json::to_string(path)?);
            } else {
                for id in path {
                    println!("{}", id);
                }
            }
        }
        None => {
            if json {
                println!("null");
            } else {
                println!("no route");
            }
        }
    }
    Ok(route)
}
