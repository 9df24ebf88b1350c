use log::{debug, info};
use rayon::prelude::*;
use std::collections::HashMap;
use std::str::FromStr;

use super::graph::AdjacencyGraph;
use super::models::{Cell, CellId};
use super::vertex_key::{cell_keys, Precision, VertexKey};

/// How candidate neighbor pairs are found. Both produce the same graph.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Strategy {
    /// Compare every ordered pair of cells vertex by vertex.
    Pairwise,
    /// Bucket cells by vertex key and only compare cells sharing a bucket.
    #[default]
    Indexed,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pairwise" => Ok(Strategy::Pairwise),
            "indexed" => Ok(Strategy::Indexed),
            other => Err(format!("unknown strategy '{}' (expected pairwise|indexed)", other)),
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct BuildOptions {
    pub precision: Precision,
    pub strategy: Strategy,
}

/// Build the adjacency graph for `cells`.
///
/// Two distinct cells are adjacent when any of their absolute vertices share
/// a [`VertexKey`]. Every cell gets an entry; neighbors are listed in input
/// order. Cells without usable vertices end up isolated.
pub fn build_adjacency(cells: &[Cell], opts: &BuildOptions) -> AdjacencyGraph {
    let keys: Vec<Vec<VertexKey>> = cells
        .par_iter()
        .map(|c| cell_keys(c, opts.precision))
        .collect();

    for (c, k) in cells.iter().zip(keys.iter()) {
        if k.is_empty() {
            debug!("adjacency: cell {} has no usable vertices", c.key);
        }
    }

    let neighbors = match opts.strategy {
        Strategy::Pairwise => pairwise(cells, &keys),
        Strategy::Indexed => indexed(cells, &keys),
    };

    let graph = AdjacencyGraph::from_lists(cells.iter().zip(neighbors).map(|(c, list)| {
        let ids: Vec<CellId> = list.into_iter().map(|j| cells[j].key.clone()).collect();
        (c.key.clone(), ids)
    }));

    info!(
        "adjacency: {} cells, {} neighbor entries, {} isolated ({:?}, precision {})",
        graph.len(),
        graph.edge_count(),
        graph.isolated().len(),
        opts.strategy,
        opts.precision.0
    );
    graph
}

fn pairwise(cells: &[Cell], keys: &[Vec<VertexKey>]) -> Vec<Vec<usize>> {
    (0..cells.len())
        .into_par_iter()
        .map(|a| {
            (0..cells.len())
                .filter(|&b| cells[a].key != cells[b].key && touches(&keys[a], &keys[b]))
                .collect()
        })
        .collect()
}

fn touches(a: &[VertexKey], b: &[VertexKey]) -> bool {
    a.iter().any(|ka| b.iter().any(|kb| ka == kb))
}

fn indexed(cells: &[Cell], keys: &[Vec<VertexKey>]) -> Vec<Vec<usize>> {
    let mut buckets: HashMap<VertexKey, Vec<usize>> = HashMap::new();
    for (i, ks) in keys.iter().enumerate() {
        for k in ks {
            let bucket = buckets.entry(*k).or_default();
            if bucket.last() != Some(&i) {
                bucket.push(i);
            }
        }
    }

    (0..cells.len())
        .into_par_iter()
        .map(|a| {
            let mut out: Vec<usize> = keys[a]
                .iter()
                .flat_map(|k| buckets[k].iter().copied())
                .filter(|&b| cells[a].key != cells[b].key)
                .collect();
            // input order, same as the pairwise scan
            out.sort_unstable();
            out.dedup();
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexgraph::models::{hex_vertices, Vertex};

    fn hex_at(key: &str, q: i32, r: i32) -> Cell {
        let size = 1.0;
        let x = 3f64.sqrt() * size * (q as f64 + r as f64 / 2.0);
        let y = 1.5 * size * r as f64;
        Cell::new(key, x, y, hex_vertices(size))
    }

    fn both(cells: &[Cell]) -> (AdjacencyGraph, AdjacencyGraph) {
        let p = build_adjacency(cells, &BuildOptions { strategy: Strategy::Pairwise, ..Default::default() });
        let i = build_adjacency(cells, &BuildOptions { strategy: Strategy::Indexed, ..Default::default() });
        (p, i)
    }

    fn names<'a>(g: &'a AdjacencyGraph, id: &str) -> Vec<&'a str> {
        g.neighbors(id).unwrap().collect()
    }

    #[test]
    fn three_cells_in_a_row() {
        let cells = vec![hex_at("A", 0, 0), hex_at("B", 1, 0), hex_at("C", 2, 0)];
        let (p, i) = both(&cells);
        for g in [&p, &i] {
            assert_eq!(names(g, "A"), vec!["B"]);
            assert_eq!(names(g, "B"), vec!["A", "C"]);
            assert_eq!(names(g, "C"), vec!["B"]);
        }
    }

    #[test]
    fn ring_around_center_is_symmetric_without_self_loops() {
        let coords = [(0, 0), (1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];
        let cells: Vec<Cell> = coords
            .iter()
            .enumerate()
            .map(|(n, &(q, r))| hex_at(&format!("h{}", n), q, r))
            .collect();
        let (p, i) = both(&cells);
        assert_eq!(p, i);
        assert!(p.asymmetric_pairs().is_empty());
        for id in p.ids() {
            assert!(!p.are_adjacent(id, id));
        }
        assert_eq!(p.neighbors("h0").unwrap().count(), 6);
        // outer ring cells touch the center and two ring neighbours
        assert_eq!(p.neighbors("h1").unwrap().count(), 3);
    }

    #[test]
    fn malformed_cells_are_isolated() {
        let mut broken = hex_at("X", 1, 0);
        broken.vertices.clear();
        let nan = Cell::new("N", f64::NAN, 0.0, hex_vertices(1.0));
        let cells = vec![hex_at("A", 0, 0), broken, nan];
        let (p, i) = both(&cells);
        assert_eq!(p, i);
        assert_eq!(p.len(), 3);
        assert_eq!(p.isolated(), vec!["A", "X", "N"]);
    }

    #[test]
    fn single_shared_vertex_is_enough() {
        let a = Cell::new("A", 0.0, 0.0, vec![Vertex { x: 1.0, y: 1.0 }, Vertex { x: -1.0, y: -1.0 }]);
        let b = Cell::new("B", 2.0, 2.0, vec![Vertex { x: -1.0004, y: -0.9996 }]);
        let (p, i) = both(&[a, b]);
        assert_eq!(p, i);
        assert!(p.are_adjacent("A", "B"));
        assert!(p.are_adjacent("B", "A"));
    }

    #[test]
    fn neighbors_follow_input_order_not_geometry() {
        let cells = vec![hex_at("east", 1, 0), hex_at("mid", 0, 0), hex_at("west", -1, 0)];
        let (p, i) = both(&cells);
        assert_eq!(p, i);
        assert_eq!(names(&p, "mid"), vec!["east", "west"]);
    }

    #[test]
    fn strategy_parses_case_insensitively() {
        assert_eq!("Pairwise".parse::<Strategy>(), Ok(Strategy::Pairwise));
        assert_eq!(" indexed ".parse::<Strategy>(), Ok(Strategy::Indexed));
        assert!("grid".parse::<Strategy>().is_err());
    }
}
