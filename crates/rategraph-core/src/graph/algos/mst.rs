//! Minimum spanning forests (Prim and Kruskal)
//!
//! Both run on the undirected projection over `weight_cost` and return one
//! tree per connected component.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::graph::algos::union_find::UnionFind;
use crate::graph::{Graph, NodeIndex};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstEdge {
    /// Lexicographically smaller endpoint
    pub u: String,
    pub v: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstResult {
    /// Sorted by `(u, v)`
    pub edges: Vec<MstEdge>,
    pub total_cost: f64,
    pub is_forest: bool,
    pub num_components: usize,
}

/// Frontier arc for Prim, ordered by (weight, from, to)
#[derive(Debug, Clone, Copy)]
struct Candidate {
    weight: f64,
    from: NodeIndex,
    to: NodeIndex,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

fn finish(graph: &Graph, picked: Vec<(NodeIndex, NodeIndex, f64)>, components: usize) -> MstResult {
    let mut normalized: Vec<(NodeIndex, NodeIndex, f64)> = picked
        .into_iter()
        .map(|(a, b, w)| (a.min(b), a.max(b), w))
        .collect();
    normalized.sort_by(|x, y| (x.0, x.1).cmp(&(y.0, y.1)));

    let total_cost: f64 = normalized.iter().map(|(_, _, w)| w).sum();
    MstResult {
        edges: normalized
            .into_iter()
            .map(|(u, v, weight)| MstEdge {
                u: graph.node_id(u).to_string(),
                v: graph.node_id(v).to_string(),
                weight,
            })
            .collect(),
        total_cost,
        is_forest: components > 1,
        num_components: components,
    }
}

/// Prim's algorithm, restarted from each unvisited node in sorted order
pub fn mst_prim(graph: &Graph) -> MstResult {
    let started = Instant::now();
    let undirected = graph.to_undirected();
    let g = undirected.as_ref();
    let n = g.node_count();

    let mut visited = vec![false; n];
    let mut picked = Vec::with_capacity(n.saturating_sub(1));
    let mut components = 0usize;
    let mut frontier = BinaryHeap::new();

    let push_arcs =
        |frontier: &mut BinaryHeap<Reverse<Candidate>>, visited: &[bool], from: NodeIndex| {
            for edge in g.neighbors(from) {
                if !visited[edge.to] {
                    frontier.push(Reverse(Candidate {
                        weight: edge.weight_cost,
                        from,
                        to: edge.to,
                    }));
                }
            }
        };

    for start in 0..n {
        if visited[start] {
            continue;
        }
        components += 1;
        visited[start] = true;
        push_arcs(&mut frontier, &visited, start);

        while let Some(Reverse(Candidate { weight, from, to })) = frontier.pop() {
            if visited[to] {
                continue;
            }
            visited[to] = true;
            picked.push((from, to, weight));
            push_arcs(&mut frontier, &visited, to);
        }
    }

    let result = finish(g, picked, components);
    debug!(
        nodes = n,
        edges = result.edges.len(),
        components,
        total_cost = result.total_cost,
        "mst_prim"
    );
    crate::trace_time!(started, "mst_prim");
    result
}

/// Kruskal's algorithm over deduplicated undirected edges
pub fn mst_kruskal(graph: &Graph) -> MstResult {
    let started = Instant::now();
    let undirected = graph.to_undirected();
    let g = undirected.as_ref();
    let n = g.node_count();

    let mut unique: BTreeMap<(NodeIndex, NodeIndex), f64> = BTreeMap::new();
    for u in 0..n {
        for edge in g.neighbors(u) {
            if u == edge.to {
                continue;
            }
            let key = (u.min(edge.to), u.max(edge.to));
            unique
                .entry(key)
                .and_modify(|w| *w = w.min(edge.weight_cost))
                .or_insert(edge.weight_cost);
        }
    }

    let mut candidates: Vec<(f64, NodeIndex, NodeIndex)> =
        unique.into_iter().map(|((u, v), w)| (w, u, v)).collect();
    candidates.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.cmp(&b.2))
    });

    let mut uf = UnionFind::new(n);
    let mut picked = Vec::with_capacity(n.saturating_sub(1));
    for (weight, u, v) in candidates {
        if uf.union(u, v) {
            picked.push((u, v, weight));
        }
    }

    let components = uf.num_components();
    let result = finish(g, picked, components);
    debug!(
        nodes = n,
        edges = result.edges.len(),
        components,
        total_cost = result.total_cost,
        "mst_kruskal"
    );
    crate::trace_time!(started, "mst_kruskal");
    result
}
