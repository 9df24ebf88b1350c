use log::debug;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use thiserror::Error;

use super::graph::AdjacencyGraph;
use super::models::CellId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown cell '{0}'")]
    UnknownCell(CellId),
}

/// Which cell to step back to when several cells of the previous ring touch
/// the current path cell.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TieBreak {
    /// First such cell in ring order, i.e. whatever the map data order yields.
    #[default]
    Discovery,
    /// Lexicographically smallest cell id.
    Lexical,
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discovery" => Ok(TieBreak::Discovery),
            "lexical" => Ok(TieBreak::Lexical),
            other => Err(format!("unknown tie-break '{}' (expected discovery|lexical)", other)),
        }
    }
}

/// Cells grouped by hop count from the start cell. `rings[i]` holds the
/// cells first reached after `i` hops, in discovery order.
struct Rings {
    rings: Vec<Vec<usize>>,
    reached_end: bool,
}

/// Layered flood fill from `start`. Stops once `end` is reached (if given)
/// or when a ring comes up empty. Blocked cells are never entered.
fn flood(graph: &AdjacencyGraph, start: usize, end: Option<usize>, blocked: &[bool]) -> Rings {
    let mut visited = vec![false; graph.len()];
    visited[start] = true;
    let mut rings: Vec<Vec<usize>> = vec![vec![start]];

    loop {
        let mut next: Vec<usize> = Vec::new();
        for &c in rings.last().map(Vec::as_slice).unwrap_or_default() {
            for &n in graph.adj(c) {
                if !visited[n] && !blocked[n] {
                    visited[n] = true;
                    next.push(n);
                }
            }
        }
        if next.is_empty() {
            return Rings { rings, reached_end: false };
        }
        rings.push(next);
        if let Some(e) = end {
            if visited[e] {
                return Rings { rings, reached_end: true };
            }
        }
    }
}

fn resolve(graph: &AdjacencyGraph, id: &str) -> Result<usize, RouteError> {
    graph.index_of(id).ok_or_else(|| RouteError::UnknownCell(id.to_string()))
}

fn blocked_mask(graph: &AdjacencyGraph, excluded: &HashSet<CellId>, exempt: &[usize]) -> Vec<bool> {
    let mut blocked = vec![false; graph.len()];
    for id in excluded {
        match graph.index_of(id) {
            Some(i) => blocked[i] = true,
            None => debug!("route: excluded cell {} is not in the graph", id),
        }
    }
    for &i in exempt {
        blocked[i] = false;
    }
    blocked
}

/// Shortest route (by hop count) from `start` to `end` avoiding `excluded`.
///
/// `Ok(None)` means no route exists. Start and end are never treated as
/// excluded. Unknown start or end ids fail before any search.
pub fn find_route(
    start: &str,
    end: &str,
    graph: &AdjacencyGraph,
    excluded: &HashSet<CellId>,
    tie_break: TieBreak,
) -> Result<Option<Vec<CellId>>, RouteError> {
    let s = resolve(graph, start)?;
    let e = resolve(graph, end)?;
    if s == e {
        return Ok(Some(vec![start.to_string()]));
    }

    let blocked = blocked_mask(graph, excluded, &[s, e]);
    let Rings { rings, reached_end } = flood(graph, s, Some(e), &blocked);
    if !reached_end {
        debug!("route: {} unreachable from {} ({} rings explored)", end, start, rings.len());
        return Ok(None);
    }

    // Walk back one ring at a time. Every cell in ring i+1 was discovered
    // from some cell of ring i, so a predecessor always exists.
    let mut path = vec![e];
    let mut step = e;
    for ring in rings[..rings.len() - 1].iter().rev() {
        let mut preds = ring.iter().copied().filter(|&d| graph.adj(d).contains(&step));
        let prev = match tie_break {
            TieBreak::Discovery => preds.next(),
            TieBreak::Lexical => preds.min_by(|&a, &b| graph.id(a).cmp(graph.id(b))),
        };
        let Some(prev) = prev else { break };
        path.push(prev);
        step = prev;
    }
    path.reverse();

    debug!("route: {} -> {} in {} hops", start, end, path.len() - 1);
    Ok(Some(path.into_iter().map(|i| graph.id(i).to_string()).collect()))
}

/// Hop count from `start` to every cell reachable without entering
/// `excluded` (start itself is exempt).
pub fn hop_distances<'g>(
    start: &str,
    graph: &'g AdjacencyGraph,
    excluded: &HashSet<CellId>,
) -> Result<HashMap<&'g str, usize>, RouteError> {
    let s = resolve(graph, start)?;
    let blocked = blocked_mask(graph, excluded, &[s]);
    let Rings { rings, .. } = flood(graph, s, None, &blocked);
    let mut out = HashMap::new();
    for (hops, ring) in rings.iter().enumerate() {
        for &c in ring {
            out.insert(graph.id(c), hops);
        }
    }
    Ok(out)
}
