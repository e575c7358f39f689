//! Graph representation and algorithms
//!
//! - `weights`: edge weight derivation (cost and negative-log)
//! - `builder`: payload construction from node values
//! - `payload`: serialized graph form
//! - `types`: the in-memory adjacency graph
//! - `algos`: traversal, shortest paths, all-pairs and spanning forests

pub mod algos;
pub mod builder;
pub mod payload;
pub mod types;
pub mod weights;

pub use algos::{
    bellman_ford, bfs, dfs, dijkstra, floyd_warshall, mst_kruskal, mst_prim, BellmanFordResult,
    BfsResult, CentralityInfo, DfsResult, DijkstraResult, FloydWarshallResult, MstEdge, MstResult,
    UnionFind, CENTRALITY_NOTE,
};
pub use builder::GraphBuilder;
pub use payload::{GraphEdge, GraphMetadata, GraphNode, GraphPayload};
pub use types::{Edge, Graph, NodeIndex, WeightKind};
pub use weights::EdgeWeights;
