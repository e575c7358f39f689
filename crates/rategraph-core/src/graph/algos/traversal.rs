//! Breadth-first and depth-first traversal
//!
//! Both visit neighbors in the graph's sorted-by-target order, so the visit
//! order is fully determined by the input graph. Unreached nodes are absent
//! from every map.

use std::collections::{BTreeMap, VecDeque};
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::algos::shared::{parents_by_id, require_node};
use crate::graph::{Graph, NodeIndex};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BfsResult {
    pub order: Vec<String>,
    pub parent: BTreeMap<String, Option<String>>,
    pub depth: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DfsResult {
    pub order: Vec<String>,
    pub parent: BTreeMap<String, Option<String>>,
    pub discovery_time: BTreeMap<String, u32>,
    pub finish_time: BTreeMap<String, u32>,
}

/// Level-order traversal from `start`
pub fn bfs(graph: &Graph, start: &str) -> Result<BfsResult> {
    let started = Instant::now();
    let root = require_node(graph, start, "start")?;
    let n = graph.node_count();

    let mut reached = vec![false; n];
    let mut parent: Vec<Option<NodeIndex>> = vec![None; n];
    let mut depth = vec![0usize; n];
    let mut order = Vec::new();
    let mut queue = VecDeque::from([root]);
    reached[root] = true;

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for edge in graph.neighbors(u) {
            let v = edge.to;
            if !reached[v] {
                reached[v] = true;
                parent[v] = Some(u);
                depth[v] = depth[u] + 1;
                queue.push_back(v);
            }
        }
    }

    let depth_by_id = order
        .iter()
        .map(|&u| (graph.node_id(u).to_string(), depth[u]))
        .collect();

    debug!(start, visited = order.len(), "bfs");
    crate::trace_time!(started, "bfs");

    Ok(BfsResult {
        order: order.iter().map(|&u| graph.node_id(u).to_string()).collect(),
        parent: parents_by_id(graph, &reached, &parent),
        depth: depth_by_id,
    })
}

/// One open call on the explicit DFS stack: a node and the next neighbor to try
struct Frame {
    node: NodeIndex,
    next: usize,
}

/// Depth-first traversal from `start` with discovery/finish timestamps.
///
/// Uses an explicit stack; order and timestamps match the recursive
/// formulation exactly.
pub fn dfs(graph: &Graph, start: &str) -> Result<DfsResult> {
    let started = Instant::now();
    let root = require_node(graph, start, "start")?;
    let n = graph.node_count();

    let mut visited = vec![false; n];
    let mut parent: Vec<Option<NodeIndex>> = vec![None; n];
    let mut discovery = vec![0u32; n];
    let mut finish = vec![0u32; n];
    let mut order = Vec::new();
    let mut time = 0u32;

    time += 1;
    discovery[root] = time;
    visited[root] = true;
    order.push(root);
    let mut stack = vec![Frame {
        node: root,
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let u = frame.node;
        let neighbors = graph.neighbors(u);

        if frame.next < neighbors.len() {
            let v = neighbors[frame.next].to;
            frame.next += 1;
            if !visited[v] {
                parent[v] = Some(u);
                time += 1;
                discovery[v] = time;
                visited[v] = true;
                order.push(v);
                stack.push(Frame { node: v, next: 0 });
            }
        } else {
            time += 1;
            finish[u] = time;
            stack.pop();
        }
    }

    let stamp = |times: &[u32]| -> BTreeMap<String, u32> {
        order
            .iter()
            .map(|&u| (graph.node_id(u).to_string(), times[u]))
            .collect()
    };
    let discovery_time = stamp(&discovery[..]);
    let finish_time = stamp(&finish[..]);

    debug!(start, visited = order.len(), "dfs");
    crate::trace_time!(started, "dfs");

    Ok(DfsResult {
        order: order.iter().map(|&u| graph.node_id(u).to_string()).collect(),
        parent: parents_by_id(graph, &visited, &parent),
        discovery_time,
        finish_time,
    })
}
