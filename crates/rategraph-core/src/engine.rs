//! Engine service: dataset generation, snapshot resolution and algorithm dispatch
//!
//! The engine owns no global state. The snapshot store is injected at
//! construction, so independent engines never share snapshots unless they
//! are handed the same store.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::cache::{LruSnapshotCache, SnapshotStore};
use crate::config::EngineConfig;
use crate::error::{GraphError, Result};
use crate::generation::{
    available_scenarios, get_scenario, DatasetGenerator, GeneratedDataset, RandomParams,
    ScenarioInfo, DEFAULT_SCENARIO_ID,
};
use crate::graph::{self, Graph, GraphBuilder, WeightKind, CENTRALITY_NOTE};
use crate::models::{
    BatchRequest, BellmanFordRequest, BellmanFordResponse, BfsResponse, DfsResponse,
    DijkstraRequest, DijkstraResponse, EngineResponse, FloydWarshallRequest,
    FloydWarshallResponse, GenerationMode, GenerationRequest, GenerationResponse, GraphSource,
    HealthResponse, MstRequest, MstResponse, PathDetail, TraversalRequest,
};

/// A dataset plus the node list and pairs the builder should use
struct PreparedDataset {
    dataset: GeneratedDataset,
    nodes: Vec<String>,
    pairs: Option<Vec<(String, String)>>,
}

pub struct Engine {
    config: EngineConfig,
    store: Arc<dyn SnapshotStore>,
    builder: GraphBuilder,
}

impl Engine {
    pub fn new(config: EngineConfig, store: Arc<dyn SnapshotStore>) -> Self {
        let builder = GraphBuilder::new(config.cost_model);
        Self {
            config,
            store,
            builder,
        }
    }

    /// Engine with a fresh in-memory LRU cache sized from `config`
    pub fn with_config(config: EngineConfig) -> Self {
        let store = Arc::new(LruSnapshotCache::new(config.cache.max_size));
        Self::new(config, store)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn SnapshotStore> {
        &self.store
    }

    /// Generate a dataset, build its graph and cache it under a fresh snapshot id
    pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        let anchor = request
            .anchor_node
            .clone()
            .unwrap_or_else(|| self.config.nodes.anchor_node.clone());

        let prepared = match request.mode {
            GenerationMode::Scenario => self.prepare_scenario(request, &anchor)?,
            GenerationMode::Custom => self.prepare_custom(request, &anchor)?,
            GenerationMode::Random => self.prepare_random(request, &anchor)?,
        };

        let payload = self.builder.build(
            &prepared.dataset.node_values,
            &prepared.nodes,
            prepared.pairs.as_deref(),
        )?;

        let snapshot_id = prepared.dataset.snapshot_id();
        let timestamp = prepared.dataset.timestamp;
        self.store.set(&snapshot_id, payload.clone(), timestamp);

        info!(
            snapshot_id = %snapshot_id,
            dataset_type = %prepared.dataset.dataset_type,
            nodes = payload.metadata.node_count,
            edges = payload.metadata.edge_count,
            "snapshot_generated"
        );

        Ok(GenerationResponse {
            snapshot_id,
            timestamp,
            node_count: payload.metadata.node_count,
            edge_count: payload.metadata.edge_count,
            dataset_type: prepared.dataset.dataset_type,
            scenario_id: prepared.dataset.scenario_id.clone(),
            graph_payload: payload,
        })
    }

    fn prepare_scenario(
        &self,
        request: &GenerationRequest,
        anchor: &str,
    ) -> Result<PreparedDataset> {
        let scenario_id = request.scenario_id.as_deref().unwrap_or(DEFAULT_SCENARIO_ID);
        let scenario = get_scenario(scenario_id)?;

        if !scenario.nodes.iter().any(|n| n == anchor) {
            crate::bail_validation!(
                "anchor_node {} must be part of the selected scenario {}",
                anchor,
                scenario.id
            );
        }

        let dataset = DatasetGenerator::default().from_scenario(
            &scenario.id,
            scenario.values(),
            anchor,
            scenario.nodes.clone(),
        )?;

        Ok(PreparedDataset {
            dataset,
            nodes: scenario.nodes,
            pairs: Some(scenario.pairs),
        })
    }

    fn prepare_custom(
        &self,
        request: &GenerationRequest,
        anchor: &str,
    ) -> Result<PreparedDataset> {
        let values = match &request.custom_values {
            Some(values) if !values.is_empty() => values,
            _ => crate::bail_validation!("custom_values is required for custom mode"),
        };
        let nodes = self.request_nodes(request, anchor)?;
        let dataset = DatasetGenerator::default().from_custom(values, anchor, nodes.clone())?;

        Ok(PreparedDataset {
            dataset,
            nodes,
            pairs: request.pairs.clone(),
        })
    }

    fn prepare_random(
        &self,
        request: &GenerationRequest,
        anchor: &str,
    ) -> Result<PreparedDataset> {
        let defaults = RandomParams::default();
        let params = RandomParams {
            value_min: request.value_min.unwrap_or(defaults.value_min),
            value_max: request.value_max.unwrap_or(defaults.value_max),
            variance: request.variance.unwrap_or(defaults.variance),
        };
        let nodes = self.request_nodes(request, anchor)?;
        let dataset = DatasetGenerator::new(request.seed).random(anchor, nodes.clone(), params)?;

        Ok(PreparedDataset {
            dataset,
            nodes,
            pairs: request.pairs.clone(),
        })
    }

    /// Requested node list (or the configured default), checked and with the
    /// anchor prepended when missing
    fn request_nodes(&self, request: &GenerationRequest, anchor: &str) -> Result<Vec<String>> {
        let mut nodes = request
            .nodes
            .clone()
            .unwrap_or_else(|| self.config.nodes.default_list.clone());

        if nodes.is_empty() {
            crate::bail_validation!("node list cannot be empty");
        }
        let max = self.config.limits.max_custom_nodes;
        if nodes.len() > max {
            crate::bail_validation!("node list too large (max {})", max);
        }
        if nodes.iter().any(|n| n.trim().is_empty()) {
            crate::bail_validation!("node ids must be non-empty strings");
        }

        if !nodes.iter().any(|n| n == anchor) {
            nodes.insert(0, anchor.to_string());
        }
        Ok(nodes)
    }

    /// Resolve a graph from a payload, a snapshot id, or the latest snapshot.
    ///
    /// Returns the resolved snapshot id alongside the directed graph.
    pub fn load_graph(&self, source: &GraphSource) -> Result<(String, Graph)> {
        if let Some(payload) = &source.graph_payload {
            let graph = Graph::from_payload(payload, true)?;
            let resolved = match &source.snapshot_id {
                Some(id) => {
                    self.store.set(id, payload.clone(), Utc::now());
                    id.clone()
                }
                None => format!("local-{}", payload.fingerprint()?),
            };
            debug!(snapshot_id = %resolved, "graph_from_payload");
            return Ok((resolved, graph));
        }

        let (id, entry) = match &source.snapshot_id {
            Some(id) => {
                let entry = self
                    .store
                    .get(id)
                    .ok_or_else(|| GraphError::not_found("snapshot", id))?;
                (id.clone(), entry)
            }
            None => self.store.latest().ok_or_else(|| {
                GraphError::validation(
                    "graph_payload or snapshot_id is required when no snapshot is cached",
                )
            })?,
        };

        let graph = Graph::from_payload(&entry.graph_payload, true)?;
        debug!(snapshot_id = %id, "graph_from_cache");
        Ok((id, graph))
    }

    pub fn bfs(&self, request: &TraversalRequest) -> Result<BfsResponse> {
        let (snapshot_id, graph) = self.load_graph(&request.graph)?;
        let result = graph::bfs(&graph, &request.start_node)?;
        Ok(BfsResponse {
            snapshot_id,
            algorithm: "bfs",
            start_node: request.start_node.clone(),
            order: result.order,
            parent: result.parent,
            depth: result.depth,
        })
    }

    pub fn dfs(&self, request: &TraversalRequest) -> Result<DfsResponse> {
        let (snapshot_id, graph) = self.load_graph(&request.graph)?;
        let result = graph::dfs(&graph, &request.start_node)?;
        Ok(DfsResponse {
            snapshot_id,
            algorithm: "dfs",
            start_node: request.start_node.clone(),
            order: result.order,
            parent: result.parent,
            discovery_time: result.discovery_time,
            finish_time: result.finish_time,
        })
    }

    pub fn dijkstra(&self, request: &DijkstraRequest) -> Result<DijkstraResponse> {
        let (snapshot_id, graph) = self.load_graph(&request.graph)?;
        let result = graph::dijkstra(&graph, &request.source, request.target.as_deref())?;

        let mut path = Vec::new();
        let mut distance = None;
        if let (Some(target), true) = (&request.target, result.found) {
            path = result.paths.get(target).cloned().unwrap_or_default();
            distance = result.distances.get(target).copied().flatten();
        }

        let path_details = path
            .windows(2)
            .filter_map(|hop| {
                graph
                    .weight(&hop[0], &hop[1], WeightKind::Cost)
                    .map(|weight| PathDetail {
                        source: hop[0].clone(),
                        target: hop[1].clone(),
                        weight,
                    })
            })
            .collect();

        Ok(DijkstraResponse {
            snapshot_id,
            algorithm: "dijkstra",
            source: request.source.clone(),
            target: request.target.clone(),
            found: result.found,
            distance,
            path,
            path_details,
            all_distances: result.distances,
        })
    }

    pub fn bellman_ford(&self, request: &BellmanFordRequest) -> Result<BellmanFordResponse> {
        let (snapshot_id, graph) = self.load_graph(&request.graph)?;
        let result = graph::bellman_ford(&graph, &request.source, request.detect_negative_cycle)?;
        Ok(BellmanFordResponse {
            snapshot_id,
            algorithm: "bellman_ford",
            source: request.source.clone(),
            negative_cycle_found: result.negative_cycle_found,
            cycle: result.cycle,
            distances: result.distances,
            paths: result.paths,
        })
    }

    pub fn floyd_warshall(&self, request: &FloydWarshallRequest) -> Result<FloydWarshallResponse> {
        let (snapshot_id, graph) = self.load_graph(&request.graph)?;
        let result = graph::floyd_warshall(&graph, request.weight_mode);
        Ok(FloydWarshallResponse {
            snapshot_id,
            algorithm: "floyd_warshall",
            weight_mode: result.weight_mode,
            node_order: result.node_order,
            distance_matrix: result.distance_matrix,
            central_node: result.central_node,
            centrality: result.centrality,
            centrality_note: CENTRALITY_NOTE,
        })
    }

    pub fn mst_prim(&self, request: &MstRequest) -> Result<MstResponse> {
        let (snapshot_id, graph) = self.load_graph(&request.graph)?;
        Ok(mst_response(snapshot_id, "mst_prim", graph::mst_prim(&graph)))
    }

    pub fn mst_kruskal(&self, request: &MstRequest) -> Result<MstResponse> {
        let (snapshot_id, graph) = self.load_graph(&request.graph)?;
        Ok(mst_response(snapshot_id, "mst_kruskal", graph::mst_kruskal(&graph)))
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "healthy",
            latest_snapshot: self.store.latest().map(|(_, entry)| entry.timestamp),
            snapshot_count: self.store.size(),
        }
    }

    pub fn available_nodes(&self) -> Vec<String> {
        self.config.nodes.available.clone()
    }

    pub fn scenarios(&self) -> Vec<ScenarioInfo> {
        available_scenarios()
    }

    /// Run one tagged request
    pub fn handle(&self, request: &BatchRequest) -> Result<EngineResponse> {
        let response = match request {
            BatchRequest::Generate(req) => EngineResponse::Generation(self.generate(req)?),
            BatchRequest::Bfs(req) => EngineResponse::Bfs(self.bfs(req)?),
            BatchRequest::Dfs(req) => EngineResponse::Dfs(self.dfs(req)?),
            BatchRequest::Dijkstra(req) => EngineResponse::Dijkstra(self.dijkstra(req)?),
            BatchRequest::BellmanFord(req) => EngineResponse::BellmanFord(self.bellman_ford(req)?),
            BatchRequest::FloydWarshall(req) => {
                EngineResponse::FloydWarshall(self.floyd_warshall(req)?)
            }
            BatchRequest::MstPrim(req) => EngineResponse::Mst(self.mst_prim(req)?),
            BatchRequest::MstKruskal(req) => EngineResponse::Mst(self.mst_kruskal(req)?),
            BatchRequest::Health => EngineResponse::Health(self.health()),
            BatchRequest::Scenarios => EngineResponse::Scenarios(self.scenarios()),
            BatchRequest::Nodes => EngineResponse::Nodes(self.available_nodes()),
        };
        Ok(response)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

fn mst_response(
    snapshot_id: String,
    algorithm: &'static str,
    result: graph::MstResult,
) -> MstResponse {
    MstResponse {
        snapshot_id,
        algorithm,
        edges: result.edges,
        total_cost: result.total_cost,
        is_forest: result.is_forest,
        num_components: result.num_components,
    }
}
