//! Graph payload construction from node values

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::config::CostModelConfig;
use crate::error::{GraphError, Result};
use crate::graph::payload::{GraphEdge, GraphMetadata, GraphNode, GraphPayload};
use crate::graph::weights;

/// Ratio clamp applied before cost scaling
const MIN_VALUE_FACTOR: f64 = 0.5;
const MAX_VALUE_FACTOR: f64 = 2.0;

/// Builds graph payloads from a node-value mapping
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    cost_model: CostModelConfig,
}

impl GraphBuilder {
    pub fn new(cost_model: CostModelConfig) -> Self {
        Self { cost_model }
    }

    /// Build a payload over `nodes`.
    ///
    /// `pairs` lists the directed edges to create; `None` or an empty list
    /// means every ordered pair of distinct nodes. Pairs whose endpoints are
    /// unknown or valueless are skipped, self-pairs are ignored.
    pub fn build(
        &self,
        node_values: &BTreeMap<String, f64>,
        nodes: &[String],
        pairs: Option<&[(String, String)]>,
    ) -> Result<GraphPayload> {
        let mut missing: Vec<&str> = nodes
            .iter()
            .filter(|n| !node_values.contains_key(n.as_str()))
            .map(|n| n.as_str())
            .collect();
        if !missing.is_empty() {
            missing.sort_unstable();
            missing.dedup();
            return Err(GraphError::missing_values(&missing[..]));
        }

        let known: BTreeSet<&str> = nodes.iter().map(|n| n.as_str()).collect();
        let graph_nodes: Vec<GraphNode> = known
            .iter()
            .map(|id| GraphNode { id: id.to_string() })
            .collect();

        let full_pairs;
        let pairs = match pairs {
            Some(list) if !list.is_empty() => list,
            _ => {
                full_pairs = full_pairs_for(nodes);
                &full_pairs[..]
            }
        };

        let mut edges = Vec::with_capacity(pairs.len());
        let mut skipped = 0usize;

        for (source, target) in pairs {
            let available = |id: &str| known.contains(id) && node_values.contains_key(id);
            if !available(source.as_str()) || !available(target.as_str()) {
                skipped += 1;
                continue;
            }
            if source == target {
                continue;
            }
            edges.push(self.create_edge(source, target, node_values)?);
        }

        if skipped > 0 && edges.is_empty() {
            let available: Vec<&str> = known.iter().copied().collect();
            crate::bail_validation!(
                "no valid node pairs found. Available nodes: {}",
                available.join(", ")
            );
        }
        if skipped > 0 {
            warn!(skipped, "skipped pairs with unknown or valueless nodes");
        }

        let metadata = GraphMetadata {
            node_count: graph_nodes.len(),
            edge_count: edges.len(),
        };
        debug!(
            nodes = metadata.node_count,
            edges = metadata.edge_count,
            "graph_built"
        );

        Ok(GraphPayload {
            nodes: graph_nodes,
            edges,
            metadata,
        })
    }

    fn create_edge(
        &self,
        source: &str,
        target: &str,
        node_values: &BTreeMap<String, f64>,
    ) -> Result<GraphEdge> {
        let raw_value = node_values[target] / node_values[source];
        let value_factor = raw_value.clamp(MIN_VALUE_FACTOR, MAX_VALUE_FACTOR);

        let base_cost = self.cost_model.base_cost * (0.7 + 0.6 * value_factor);
        let extra_cost = self.cost_model.extra_cost * (0.8 + 0.4 / value_factor);

        let derived = weights::all_weights(raw_value, base_cost, extra_cost)?;

        Ok(GraphEdge {
            source: source.to_string(),
            target: target.to_string(),
            weight_cost: derived.weight_cost,
            weight_neglog: derived.weight_neglog,
        })
    }
}

/// Every ordered pair of distinct nodes
fn full_pairs_for(nodes: &[String]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for source in nodes {
        for target in nodes {
            if source != target {
                pairs.push((source.clone(), target.clone()));
            }
        }
    }
    pairs
}
