use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::algos::shared::{distances_by_id, paths_by_id, require_node};
use crate::graph::{Graph, NodeIndex};


/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node: NodeIndex,
    pub cost: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DijkstraResult {
    /// Every node in the graph; `None` where unreached
    pub distances: BTreeMap<String, Option<f64>>,
    /// Source-first path for every reached node
    pub paths: BTreeMap<String, Vec<String>>,
    /// Whether the requested target was reached (always true without a target)
    pub found: bool,
}

/// Single-source shortest paths over `weight_cost`.
///
/// With a target, the search stops as soon as the target is settled.
pub fn dijkstra(graph: &Graph, source: &str, target: Option<&str>) -> Result<DijkstraResult> {
    let started = Instant::now();
    let src = require_node(graph, source, "source")?;
    let goal = target.and_then(|t| graph.index_of(t));
    let n = graph.node_count();

    let mut dist: Vec<Option<f64>> = vec![None; n];
    let mut parent: Vec<Option<NodeIndex>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[src] = Some(0.0);
    heap.push(Reverse(HeapEntry {
        node: src,
        cost: 0.0,
    }));

    while let Some(Reverse(HeapEntry { node: u, cost })) = heap.pop() {
        if settled[u] {
            continue;
        }
        settled[u] = true;

        if goal == Some(u) {
            break;
        }

        for edge in graph.neighbors(u) {
            let v = edge.to;
            if settled[v] {
                continue;
            }
            let candidate = cost + edge.weight_cost;
            if dist[v].is_none_or(|d| candidate < d) {
                dist[v] = Some(candidate);
                parent[v] = Some(u);
                heap.push(Reverse(HeapEntry {
                    node: v,
                    cost: candidate,
                }));
            }
        }
    }

    let found = match (target, goal) {
        (None, _) => true,
        (Some(_), Some(g)) => dist[g].is_some(),
        (Some(_), None) => false,
    };

    debug!(
        source,
        target = ?target,
        found,
        reached = dist.iter().filter(|d| d.is_some()).count(),
        "dijkstra"
    );
    crate::trace_time!(started, "dijkstra");

    Ok(DijkstraResult {
        distances: distances_by_id(graph, &dist),
        paths: paths_by_id(graph, &dist, &parent),
        found,
    })
}
