use std::collections::BTreeMap;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeIndex};

/// Resolve a start/source node, failing with NotFound when absent
pub fn require_node(graph: &Graph, id: &str, role: &str) -> Result<NodeIndex> {
    graph
        .index_of(id)
        .ok_or_else(|| GraphError::not_found(&format!("{} node", role), id))
}

/// Walk parent pointers back from `node` and return the path root-first.
///
/// Stops if a node repeats, so corrupted parent pointers cannot loop forever.
pub fn reconstruct_path(
    graph: &Graph,
    parent: &[Option<NodeIndex>],
    node: NodeIndex,
) -> Vec<String> {
    let mut seen = vec![false; parent.len()];
    let mut path = Vec::new();
    let mut current = Some(node);

    while let Some(n) = current {
        if seen[n] {
            break;
        }
        seen[n] = true;
        path.push(graph.node_id(n).to_string());
        current = parent[n];
    }

    path.reverse();
    path
}

/// Distance for every node, `None` where unreached
pub fn distances_by_id(graph: &Graph, dist: &[Option<f64>]) -> BTreeMap<String, Option<f64>> {
    graph
        .nodes()
        .iter()
        .zip(dist)
        .map(|(id, d)| (id.clone(), *d))
        .collect()
}

/// Reconstructed path for every reached node
pub fn paths_by_id(
    graph: &Graph,
    dist: &[Option<f64>],
    parent: &[Option<NodeIndex>],
) -> BTreeMap<String, Vec<String>> {
    dist.iter()
        .enumerate()
        .filter(|(_, d)| d.is_some())
        .map(|(n, _)| {
            (
                graph.node_id(n).to_string(),
                reconstruct_path(graph, parent, n),
            )
        })
        .collect()
}

/// Parent pointers keyed by id, restricted to reached nodes
pub fn parents_by_id(
    graph: &Graph,
    reached: &[bool],
    parent: &[Option<NodeIndex>],
) -> BTreeMap<String, Option<String>> {
    reached
        .iter()
        .enumerate()
        .filter(|(_, r)| **r)
        .map(|(n, _)| {
            (
                graph.node_id(n).to_string(),
                parent[n].map(|p| graph.node_id(p).to_string()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Graph {
        Graph::new(
            &["A", "B", "C"],
            &[("A", "B", 1.0, 0.0), ("B", "C", 1.0, 0.0)],
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_require_node_not_found() {
        let err = require_node(&chain(), "Z", "start").unwrap_err();
        assert_eq!(err.category(), "not_found");
        assert_eq!(err.to_string(), "start node not found: Z");
    }

    #[test]
    fn test_reconstruct_path_follows_parents() {
        let graph = chain();
        let parent = vec![None, Some(0), Some(1)];
        assert_eq!(reconstruct_path(&graph, &parent, 2), vec!["A", "B", "C"]);
        assert_eq!(reconstruct_path(&graph, &parent, 0), vec!["A"]);
    }

    #[test]
    fn test_reconstruct_path_survives_parent_cycle() {
        let graph = chain();
        let parent = vec![Some(2), Some(0), Some(1)];
        let path = reconstruct_path(&graph, &parent, 2);
        assert_eq!(path.len(), 3);
        assert_eq!(path.last().map(String::as_str), Some("C"));
    }
}
