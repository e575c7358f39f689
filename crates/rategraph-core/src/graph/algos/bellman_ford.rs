//! Bellman-Ford over `weight_neglog` with negative-cycle extraction
//!
//! A negative cycle in neglog space is a loop whose value ratios multiply
//! to more than one. Finding one is a result, not an error.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::graph::algos::shared::{distances_by_id, paths_by_id, require_node};
use crate::graph::{Graph, NodeIndex};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BellmanFordResult {
    pub negative_cycle_found: bool,
    /// Closed loop starting and ending at its smallest node id
    pub cycle: Option<Vec<String>>,
    /// Empty when a negative cycle was found
    pub distances: BTreeMap<String, Option<f64>>,
    /// Empty when a negative cycle was found
    pub paths: BTreeMap<String, Vec<String>>,
}

/// Relax every edge leaving a reached node once.
///
/// Returns the first target whose distance improved, if any.
fn relax_round(
    graph: &Graph,
    dist: &mut [Option<f64>],
    parent: &mut [Option<NodeIndex>],
    stop_at_first: bool,
) -> Option<NodeIndex> {
    let mut first_updated = None;

    for u in 0..graph.node_count() {
        let Some(du) = dist[u] else {
            continue;
        };
        for edge in graph.neighbors(u) {
            let v = edge.to;
            let candidate = du + edge.weight_neglog;
            if dist[v].is_none_or(|d| candidate < d) {
                dist[v] = Some(candidate);
                parent[v] = Some(u);
                if first_updated.is_none() {
                    first_updated = Some(v);
                }
                if stop_at_first {
                    return first_updated;
                }
            }
        }
    }

    first_updated
}

/// Recover the cycle through `start` from parent pointers.
///
/// Walks back |V| steps first so the walk lands inside the loop, then
/// collects until the loop closes. Output is rotated to begin at the
/// smallest node index and closed by repeating that node.
fn extract_cycle(graph: &Graph, parent: &[Option<NodeIndex>], start: NodeIndex) -> Vec<String> {
    let n = graph.node_count();

    let mut anchor = start;
    for _ in 0..n {
        anchor = parent[anchor].unwrap_or(anchor);
    }

    let mut cycle = vec![anchor];
    let mut current = parent[anchor];
    while let Some(node) = current {
        if node == anchor || cycle.len() > n {
            break;
        }
        cycle.push(node);
        current = parent[node];
    }
    cycle.reverse();

    if let Some(min_pos) = cycle
        .iter()
        .enumerate()
        .min_by_key(|(_, node)| **node)
        .map(|(pos, _)| pos)
    {
        cycle.rotate_left(min_pos);
    }
    if let Some(&first) = cycle.first() {
        cycle.push(first);
    }

    cycle.iter().map(|&u| graph.node_id(u).to_string()).collect()
}

/// Single-source shortest paths over `weight_neglog`.
///
/// With `detect_negative_cycle`, runs one extra pass after the |V|-1 rounds;
/// any further improvement from a reached node marks a negative cycle.
pub fn bellman_ford(
    graph: &Graph,
    source: &str,
    detect_negative_cycle: bool,
) -> Result<BellmanFordResult> {
    let started = Instant::now();
    let src = require_node(graph, source, "source")?;
    let n = graph.node_count();

    let mut dist: Vec<Option<f64>> = vec![None; n];
    let mut parent: Vec<Option<NodeIndex>> = vec![None; n];
    dist[src] = Some(0.0);

    let mut rounds = 0usize;
    for _ in 1..n {
        rounds += 1;
        if relax_round(graph, &mut dist, &mut parent, false).is_none() {
            break;
        }
    }

    let cycle_node = if detect_negative_cycle {
        relax_round(graph, &mut dist, &mut parent, true)
    } else {
        None
    };

    crate::trace_time!(started, "bellman_ford");

    if let Some(node) = cycle_node {
        let cycle = extract_cycle(graph, &parent, node);
        warn!(source, cycle = %cycle.join(" -> "), "negative cycle found");
        return Ok(BellmanFordResult {
            negative_cycle_found: true,
            cycle: Some(cycle),
            distances: BTreeMap::new(),
            paths: BTreeMap::new(),
        });
    }

    debug!(
        source,
        rounds,
        reached = dist.iter().filter(|d| d.is_some()).count(),
        "bellman_ford"
    );

    Ok(BellmanFordResult {
        negative_cycle_found: false,
        cycle: None,
        distances: distances_by_id(graph, &dist),
        paths: paths_by_id(graph, &dist, &parent),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, &str, f64)]) -> Graph {
        let mut nodes: Vec<&str> = edges.iter().flat_map(|(u, v, _)| [*u, *v]).collect();
        nodes.sort_unstable();
        nodes.dedup();
        let weighted: Vec<(&str, &str, f64, f64)> =
            edges.iter().map(|(u, v, w)| (*u, *v, 1.0, *w)).collect();
        Graph::new(&nodes, &weighted, true).unwrap()
    }

    #[test]
    fn test_negative_three_cycle_detected() {
        let g = graph(&[("A", "B", -0.5), ("B", "C", -0.5), ("C", "A", -0.5)]);
        let result = bellman_ford(&g, "A", true).unwrap();

        assert!(result.negative_cycle_found);
        let cycle = result.cycle.unwrap();
        assert_eq!(cycle.first(), cycle.last());
        assert_eq!(cycle, vec!["A", "B", "C", "A"]);
        assert!(result.distances.is_empty());
        assert!(result.paths.is_empty());
    }

    #[test]
    fn test_cycle_rotated_to_smallest_id() {
        // Loop B -> C -> D -> B reachable from A
        let g = graph(&[
            ("A", "C", 0.1),
            ("B", "C", -1.0),
            ("C", "D", -1.0),
            ("D", "B", -1.0),
        ]);
        let result = bellman_ford(&g, "A", true).unwrap();

        assert!(result.negative_cycle_found);
        assert_eq!(result.cycle.unwrap(), vec!["B", "C", "D", "B"]);
    }

    #[test]
    fn test_shortest_paths_without_cycle() {
        let g = graph(&[("A", "B", 0.3), ("B", "C", -0.2), ("A", "C", 0.5), ("C", "D", 0.1)]);
        let result = bellman_ford(&g, "A", true).unwrap();

        assert!(!result.negative_cycle_found);
        assert!(result.cycle.is_none());
        let c = result.distances["C"].unwrap();
        assert!((c - 0.1).abs() < 1e-12);
        assert_eq!(result.paths["D"], vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_unreached_nodes_are_none() {
        let g = graph(&[("A", "B", 0.1), ("C", "D", 0.1)]);
        let result = bellman_ford(&g, "A", true).unwrap();

        assert_eq!(result.distances.len(), 4);
        assert_eq!(result.distances["C"], None);
        assert!(!result.paths.contains_key("D"));
    }

    #[test]
    fn test_detection_disabled_reports_no_cycle() {
        let g = graph(&[("A", "B", -0.5), ("B", "C", -0.5), ("C", "A", -0.5)]);
        let result = bellman_ford(&g, "A", false).unwrap();

        assert!(!result.negative_cycle_found);
        assert!(result.cycle.is_none());
        assert_eq!(result.distances.len(), 3);
        // Parent pointers are cyclic; reconstruction must still terminate
        assert!(result.paths["C"].len() <= 3);
    }

    #[test]
    fn test_unreachable_cycle_ignored() {
        let g = graph(&[("A", "B", 0.2), ("C", "D", -1.0), ("D", "C", -1.0)]);
        let result = bellman_ford(&g, "A", true).unwrap();
        assert!(!result.negative_cycle_found);
    }

    #[test]
    fn test_unknown_source() {
        let g = graph(&[("A", "B", 0.2)]);
        let err = bellman_ford(&g, "Q", true).unwrap_err();
        assert_eq!(err.category(), "not_found");
    }
}
