use log::warn;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

use super::models::CellId;

/// Cell id -> neighbor ids, stored densely by index.
///
/// Key order is the order cells were supplied in; each neighbor list keeps
/// discovery order. Both orders feed route tie-breaking, so they are part of
/// the graph's identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    ids: Vec<CellId>,
    index: HashMap<CellId, usize>,
    adj: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Build from `(id, neighbors)` lists.
    ///
    /// Neighbors that are not keys themselves are appended as isolated
    /// cells. Self references are dropped. Repeated keys merge their lists.
    pub fn from_lists<I>(lists: I) -> Self
    where
        I: IntoIterator<Item = (CellId, Vec<CellId>)>,
    {
        let lists: Vec<(CellId, Vec<CellId>)> = lists.into_iter().collect();
        let mut g = Self::default();
        for (id, _) in lists.iter() {
            g.intern(id);
        }
        for (id, neighbors) in lists.into_iter() {
            let a = g.index[&id];
            for n in neighbors {
                if n == id { continue; }
                let b = match g.index.get(&n) {
                    Some(&b) => b,
                    None => {
                        warn!("neighbor {} of {} is not a known cell; adding it as isolated", n, id);
                        g.intern(&n)
                    }
                };
                if !g.adj[a].contains(&b) {
                    g.adj[a].push(b);
                }
            }
        }
        g
    }

    fn intern(&mut self, id: &str) -> usize {
        if let Some(&i) = self.index.get(id) { return i; }
        let i = self.ids.len();
        self.ids.push(id.to_string());
        self.index.insert(id.to_string(), i);
        self.adj.push(Vec::new());
        i
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn id(&self, idx: usize) -> &str {
        &self.ids[idx]
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.ids.iter().map(String::as_str)
    }

    pub(crate) fn adj(&self, idx: usize) -> &[usize] {
        &self.adj[idx]
    }

    /// Neighbors of `id` in discovery order, or `None` for an unknown id.
    pub fn neighbors(&self, id: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let i = self.index_of(id)?;
        Some(self.adj[i].iter().map(move |&n| self.ids[n].as_str()))
    }

    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(a), Some(b)) => self.adj[a].contains(&b),
            _ => false,
        }
    }

    /// Number of directed neighbor entries.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// `(a, b)` pairs where `a` lists `b` but `b` does not list `a`.
    /// Non-empty only for inconsistent vertex data.
    pub fn asymmetric_pairs(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::new();
        for (a, list) in self.adj.iter().enumerate() {
            for &b in list {
                if !self.adj[b].contains(&a) {
                    out.push((self.ids[a].as_str(), self.ids[b].as_str()));
                }
            }
        }
        out
    }

    /// Cells with no neighbors, in key order.
    pub fn isolated(&self) -> Vec<&str> {
        self.adj
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_empty())
            .map(|(i, _)| self.ids[i].as_str())
            .collect()
    }
}

impl Serialize for AdjacencyGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.ids.len()))?;
        for (i, id) in self.ids.iter().enumerate() {
            let list: Vec<&str> = self.adj[i].iter().map(|&n| self.ids[n].as_str()).collect();
            map.serialize_entry(id, &list)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AdjacencyGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let lists = BTreeMap::<CellId, Vec<CellId>>::deserialize(deserializer)?;
        Ok(Self::from_lists(lists))
    }
}
