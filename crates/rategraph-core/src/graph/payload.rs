//! Graph payload: the serialized form exchanged with callers and the snapshot cache

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::graph::Graph;

/// Number of hex characters kept from the payload digest
const FINGERPRINT_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    #[serde(rename = "from", alias = "source")]
    pub source: String,
    #[serde(rename = "to", alias = "target")]
    pub target: String,
    pub weight_cost: f64,
    pub weight_neglog: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphMetadata {
    pub node_count: usize,
    pub edge_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphPayload {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub metadata: GraphMetadata,
}

impl GraphPayload {
    /// Reject node ids that are empty or all whitespace
    pub fn validate(&self) -> Result<()> {
        if let Some(pos) = self.nodes.iter().position(|n| n.id.trim().is_empty()) {
            crate::bail_validation!("node id cannot be empty (node #{})", pos);
        }
        Ok(())
    }

    /// Short, stable digest of the payload contents
    pub fn fingerprint(&self) -> Result<String> {
        let canonical = serde_json::to_vec(self)?;
        let digest = Sha256::digest(&canonical);
        let mut hex = hex::encode(&digest[..]);
        hex.truncate(FINGERPRINT_LEN);
        Ok(hex)
    }
}

impl Graph {
    /// Rehydrate a graph from its payload
    pub fn from_payload(payload: &GraphPayload, directed: bool) -> Result<Self> {
        payload.validate()?;

        let nodes: Vec<&str> = payload.nodes.iter().map(|n| n.id.as_str()).collect();
        let edges: Vec<(&str, &str, f64, f64)> = payload
            .edges
            .iter()
            .map(|e| {
                (
                    e.source.as_str(),
                    e.target.as_str(),
                    e.weight_cost,
                    e.weight_neglog,
                )
            })
            .collect();

        Graph::new(&nodes, &edges, directed)
    }
}
