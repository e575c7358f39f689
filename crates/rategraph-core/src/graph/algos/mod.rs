//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `traversal`: BFS and DFS visit order
//! - `dijkstra`: single-source shortest paths on cost weights
//! - `bellman_ford`: shortest paths on neglog weights with negative-cycle detection
//! - `floyd_warshall`: all-pairs distances and centrality
//! - `mst`: Prim and Kruskal spanning forests
//! - `union_find`: disjoint-set helper for Kruskal
//! - `shared`: common utilities used by multiple algorithms

pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod mst;
pub mod shared;
pub mod traversal;
pub mod union_find;

pub use bellman_ford::{bellman_ford, BellmanFordResult};
pub use dijkstra::{dijkstra, DijkstraResult};
pub use floyd_warshall::{floyd_warshall, CentralityInfo, FloydWarshallResult, CENTRALITY_NOTE};
pub use mst::{mst_kruskal, mst_prim, MstEdge, MstResult};
pub use traversal::{bfs, dfs, BfsResult, DfsResult};
pub use union_find::UnionFind;
