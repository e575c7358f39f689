use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::graph::{Graph, WeightKind};

pub const CENTRALITY_NOTE: &str = "Central node determined by: (1) maximize reachable_count, (2) minimize sum_distance (finite only)";

/// Per-node reachability summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralityInfo {
    /// Other nodes at finite distance
    pub reachable_count: usize,
    /// Sum of those finite distances; `None` when nothing is reachable
    pub sum_distance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloydWarshallResult {
    pub weight_mode: WeightKind,
    pub node_order: Vec<String>,
    /// `None` marks an unreachable pair
    pub distance_matrix: BTreeMap<String, BTreeMap<String, Option<f64>>>,
    pub central_node: Option<String>,
    pub centrality: BTreeMap<String, CentralityInfo>,
}

/// All-pairs shortest distances under `kind`, plus a central node.
///
/// Duplicate edges keep the lighter weight. The diagonal stays at zero even
/// when negative loops exist.
pub fn floyd_warshall(graph: &Graph, kind: WeightKind) -> FloydWarshallResult {
    let started = Instant::now();
    let n = graph.node_count();

    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
        for edge in graph.neighbors(i) {
            if edge.to != i {
                row[edge.to] = row[edge.to].min(edge.weight(kind));
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let dik = dist[i][k];
            if dik.is_infinite() {
                continue;
            }
            for j in 0..n {
                let dkj = dist[k][j];
                if i == j || dkj.is_infinite() {
                    continue;
                }
                let through = dik + dkj;
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }

    let centrality: Vec<CentralityInfo> = dist
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let finite: Vec<f64> = row
                .iter()
                .enumerate()
                .filter(|&(j, d)| j != i && d.is_finite())
                .map(|(_, d)| *d)
                .collect();
            CentralityInfo {
                reachable_count: finite.len(),
                sum_distance: (!finite.is_empty()).then(|| finite.iter().sum()),
            }
        })
        .collect();

    let central = pick_central(&centrality);

    let distance_matrix = dist
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cells = row
                .iter()
                .enumerate()
                .map(|(j, d)| (graph.node_id(j).to_string(), d.is_finite().then_some(*d)))
                .collect();
            (graph.node_id(i).to_string(), cells)
        })
        .collect();

    debug!(
        nodes = n,
        weight_mode = %kind,
        central = ?central.map(|c| graph.node_id(c)),
        "floyd_warshall"
    );
    crate::trace_time!(started, "floyd_warshall");

    FloydWarshallResult {
        weight_mode: kind,
        node_order: graph.nodes().to_vec(),
        distance_matrix,
        central_node: central.map(|c| graph.node_id(c).to_string()),
        centrality: centrality
            .into_iter()
            .enumerate()
            .map(|(i, info)| (graph.node_id(i).to_string(), info))
            .collect(),
    }
}

/// Most reachable node, ties broken by smaller distance sum, then node order
fn pick_central(centrality: &[CentralityInfo]) -> Option<usize> {
    let mut best: Option<(usize, &CentralityInfo)> = None;

    for (i, info) in centrality.iter().enumerate() {
        if info.reachable_count == 0 {
            continue;
        }
        let better = match best {
            None => true,
            Some((_, current)) => {
                info.reachable_count > current.reachable_count
                    || (info.reachable_count == current.reachable_count
                        && info.sum_distance.unwrap_or(f64::INFINITY)
                            < current.sum_distance.unwrap_or(f64::INFINITY))
            }
        };
        if better {
            best = Some((i, info));
        }
    }

    best.map(|(i, _)| i)
}
