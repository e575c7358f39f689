//! Request and response records
//!
//! Field names are part of the machine-readable output and stay stable.
//! Maps are `BTreeMap` so JSON keys come out sorted.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generation::{DatasetType, ScenarioInfo, Variance};
use crate::graph::{CentralityInfo, GraphPayload, MstEdge, WeightKind};

/// Where a dataset's node values come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Scenario,
    Custom,
    Random,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub mode: GenerationMode,
    #[serde(default, alias = "scenario_name")]
    pub scenario_id: Option<String>,
    #[serde(default)]
    pub custom_values: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    pub anchor_node: Option<String>,
    #[serde(default)]
    pub nodes: Option<Vec<String>>,
    #[serde(default)]
    pub pairs: Option<Vec<(String, String)>>,
    /// Random mode only
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub variance: Option<Variance>,
    #[serde(default)]
    pub value_min: Option<f64>,
    #[serde(default)]
    pub value_max: Option<f64>,
}

/// Graph selection shared by every algorithm request.
///
/// A payload wins over a snapshot id; with neither, the latest cached
/// snapshot is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSource {
    #[serde(default)]
    pub snapshot_id: Option<String>,
    #[serde(default)]
    pub graph_payload: Option<GraphPayload>,
}

impl GraphSource {
    pub fn payload(graph_payload: GraphPayload) -> Self {
        Self {
            snapshot_id: None,
            graph_payload: Some(graph_payload),
        }
    }

    pub fn snapshot(id: impl Into<String>) -> Self {
        Self {
            snapshot_id: Some(id.into()),
            graph_payload: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraversalRequest {
    #[serde(flatten)]
    pub graph: GraphSource,
    pub start_node: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DijkstraRequest {
    #[serde(flatten)]
    pub graph: GraphSource,
    pub source: String,
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BellmanFordRequest {
    #[serde(flatten)]
    pub graph: GraphSource,
    pub source: String,
    #[serde(default = "default_detect_negative_cycle")]
    pub detect_negative_cycle: bool,
}

fn default_detect_negative_cycle() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloydWarshallRequest {
    #[serde(flatten)]
    pub graph: GraphSource,
    pub weight_mode: WeightKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MstRequest {
    #[serde(flatten)]
    pub graph: GraphSource,
}

/// One line of a batch file, tagged by `op`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BatchRequest {
    Generate(GenerationRequest),
    Bfs(TraversalRequest),
    Dfs(TraversalRequest),
    Dijkstra(DijkstraRequest),
    BellmanFord(BellmanFordRequest),
    FloydWarshall(FloydWarshallRequest),
    MstPrim(MstRequest),
    MstKruskal(MstRequest),
    Health,
    Scenarios,
    Nodes,
}

impl BatchRequest {
    pub fn op(&self) -> &'static str {
        match self {
            BatchRequest::Generate(_) => "generate",
            BatchRequest::Bfs(_) => "bfs",
            BatchRequest::Dfs(_) => "dfs",
            BatchRequest::Dijkstra(_) => "dijkstra",
            BatchRequest::BellmanFord(_) => "bellman_ford",
            BatchRequest::FloydWarshall(_) => "floyd_warshall",
            BatchRequest::MstPrim(_) => "mst_prim",
            BatchRequest::MstKruskal(_) => "mst_kruskal",
            BatchRequest::Health => "health",
            BatchRequest::Scenarios => "scenarios",
            BatchRequest::Nodes => "nodes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub snapshot_id: String,
    pub timestamp: DateTime<Utc>,
    pub node_count: usize,
    pub edge_count: usize,
    pub dataset_type: DatasetType,
    #[serde(default)]
    pub scenario_id: Option<String>,
    pub graph_payload: GraphPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BfsResponse {
    pub snapshot_id: String,
    pub algorithm: &'static str,
    pub start_node: String,
    pub order: Vec<String>,
    pub parent: BTreeMap<String, Option<String>>,
    pub depth: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DfsResponse {
    pub snapshot_id: String,
    pub algorithm: &'static str,
    pub start_node: String,
    pub order: Vec<String>,
    pub parent: BTreeMap<String, Option<String>>,
    pub discovery_time: BTreeMap<String, u32>,
    pub finish_time: BTreeMap<String, u32>,
}

/// One hop of a reported path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathDetail {
    #[serde(rename = "from")]
    pub source: String,
    #[serde(rename = "to")]
    pub target: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DijkstraResponse {
    pub snapshot_id: String,
    pub algorithm: &'static str,
    pub source: String,
    pub target: Option<String>,
    pub found: bool,
    pub distance: Option<f64>,
    pub path: Vec<String>,
    pub path_details: Vec<PathDetail>,
    pub all_distances: BTreeMap<String, Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BellmanFordResponse {
    pub snapshot_id: String,
    pub algorithm: &'static str,
    pub source: String,
    pub negative_cycle_found: bool,
    pub cycle: Option<Vec<String>>,
    pub distances: BTreeMap<String, Option<f64>>,
    pub paths: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloydWarshallResponse {
    pub snapshot_id: String,
    pub algorithm: &'static str,
    pub weight_mode: WeightKind,
    pub node_order: Vec<String>,
    pub distance_matrix: BTreeMap<String, BTreeMap<String, Option<f64>>>,
    pub central_node: Option<String>,
    pub centrality: BTreeMap<String, CentralityInfo>,
    pub centrality_note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstResponse {
    pub snapshot_id: String,
    /// `mst_prim` or `mst_kruskal`
    pub algorithm: &'static str,
    pub edges: Vec<MstEdge>,
    pub total_cost: f64,
    pub is_forest: bool,
    pub num_components: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Timestamp of the most recently used snapshot
    pub latest_snapshot: Option<DateTime<Utc>>,
    pub snapshot_count: usize,
}

/// Any engine response, serialized without a wrapper
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EngineResponse {
    Generation(GenerationResponse),
    Bfs(BfsResponse),
    Dfs(DfsResponse),
    Dijkstra(DijkstraResponse),
    BellmanFord(BellmanFordResponse),
    FloydWarshall(FloydWarshallResponse),
    Mst(MstResponse),
    Health(HealthResponse),
    Scenarios(Vec<ScenarioInfo>),
    Nodes(Vec<String>),
}
