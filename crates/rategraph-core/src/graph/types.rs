use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Stable integer id of a node: its position in the sorted node list
pub type NodeIndex = usize;

/// Which of the two edge weights an algorithm reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightKind {
    /// Additive transaction cost (always non-negative)
    #[default]
    Cost,
    /// Negative log of the effective value ratio (may be negative)
    Neglog,
}

impl WeightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightKind::Cost => "cost",
            WeightKind::Neglog => "neglog",
        }
    }
}

impl fmt::Display for WeightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cost" => Ok(WeightKind::Cost),
            "neglog" => Ok(WeightKind::Neglog),
            other => Err(GraphError::UsageError(format!(
                "unknown weight mode: {} (expected: cost or neglog)",
                other
            ))),
        }
    }
}

/// Outgoing arc stored in a node's adjacency list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: NodeIndex,
    pub weight_cost: f64,
    pub weight_neglog: f64,
}

impl Edge {
    pub fn weight(&self, kind: WeightKind) -> f64 {
        match kind {
            WeightKind::Cost => self.weight_cost,
            WeightKind::Neglog => self.weight_neglog,
        }
    }
}

/// Adjacency-list graph over string node ids.
///
/// Nodes are sorted and deduplicated on construction, and each node id maps
/// to its index in that order. Adjacency lists are sorted by target, so
/// sorting by index is the same as sorting by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: Vec<String>,
    index: HashMap<String, NodeIndex>,
    adj: Vec<Vec<Edge>>,
    directed: bool,
    edge_count: usize,
}

impl Graph {
    /// Build a graph from node ids and `(source, target, weight_cost, weight_neglog)` tuples.
    ///
    /// Undirected graphs store every edge in both adjacency lists.
    pub fn new<N, E>(nodes: &[N], edges: &[(E, E, f64, f64)], directed: bool) -> Result<Self>
    where
        N: AsRef<str>,
        E: AsRef<str>,
    {
        let mut sorted: Vec<String> = Vec::with_capacity(nodes.len());
        for node in nodes {
            let id = node.as_ref();
            if id.trim().is_empty() {
                crate::bail_validation!("node id cannot be empty");
            }
            sorted.push(id.to_string());
        }
        sorted.sort();
        sorted.dedup();

        let index: HashMap<String, NodeIndex> = sorted
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();

        let mut adj: Vec<Vec<Edge>> = vec![Vec::new(); sorted.len()];

        for (source, target, weight_cost, weight_neglog) in edges {
            let u = *index.get(source.as_ref()).ok_or_else(|| {
                GraphError::validation(format!("unknown node in edge: {}", source.as_ref()))
            })?;
            let v = *index.get(target.as_ref()).ok_or_else(|| {
                GraphError::validation(format!("unknown node in edge: {}", target.as_ref()))
            })?;

            adj[u].push(Edge {
                to: v,
                weight_cost: *weight_cost,
                weight_neglog: *weight_neglog,
            });

            if !directed {
                adj[v].push(Edge {
                    to: u,
                    weight_cost: *weight_cost,
                    weight_neglog: *weight_neglog,
                });
            }
        }

        for list in &mut adj {
            list.sort_by_key(|e| e.to);
        }

        Ok(Self {
            nodes: sorted,
            index,
            adj,
            directed,
            edge_count: edges.len(),
        })
    }

    /// Node ids in sorted order
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges the graph was built from
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn node_id(&self, index: NodeIndex) -> &str {
        &self.nodes[index]
    }

    /// Outgoing arcs of a node, sorted by target
    pub fn neighbors(&self, node: NodeIndex) -> &[Edge] {
        &self.adj[node]
    }

    /// Outgoing arcs by node id; empty for unknown ids
    pub fn neighbors_of(&self, id: &str) -> &[Edge] {
        match self.index_of(id) {
            Some(i) => &self.adj[i],
            None => &[],
        }
    }

    /// Weight of the arc `u -> v`, if present
    pub fn weight(&self, u: &str, v: &str, kind: WeightKind) -> Option<f64> {
        let target = self.index_of(v)?;
        self.neighbors_of(u)
            .iter()
            .find(|e| e.to == target)
            .map(|e| e.weight(kind))
    }

    /// Every stored arc as `(source, target, weight)`, in node then target order
    pub fn edges(&self, kind: WeightKind) -> Vec<(&str, &str, f64)> {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, list)| {
                list.iter().map(move |e| {
                    (
                        self.nodes[u].as_str(),
                        self.nodes[e.to].as_str(),
                        e.weight(kind),
                    )
                })
            })
            .collect()
    }

    /// Project onto an undirected graph.
    ///
    /// Each unordered pair keeps the minimum cost and the minimum neglog weight
    /// seen in either direction, chosen independently. Undirected graphs are
    /// returned as-is.
    pub fn to_undirected(&self) -> Cow<'_, Graph> {
        if !self.directed {
            return Cow::Borrowed(self);
        }

        let mut merged: BTreeMap<(NodeIndex, NodeIndex), (f64, f64)> = BTreeMap::new();
        for (u, list) in self.adj.iter().enumerate() {
            for edge in list {
                let key = if u <= edge.to { (u, edge.to) } else { (edge.to, u) };
                merged
                    .entry(key)
                    .and_modify(|(cost, neglog)| {
                        *cost = cost.min(edge.weight_cost);
                        *neglog = neglog.min(edge.weight_neglog);
                    })
                    .or_insert((edge.weight_cost, edge.weight_neglog));
            }
        }

        let mut adj: Vec<Vec<Edge>> = vec![Vec::new(); self.nodes.len()];
        for (&(u, v), &(weight_cost, weight_neglog)) in &merged {
            adj[u].push(Edge {
                to: v,
                weight_cost,
                weight_neglog,
            });
            if u != v {
                adj[v].push(Edge {
                    to: u,
                    weight_cost,
                    weight_neglog,
                });
            }
        }
        for list in &mut adj {
            list.sort_by_key(|e| e.to);
        }

        Cow::Owned(Graph {
            nodes: self.nodes.clone(),
            index: self.index.clone(),
            adj,
            directed: false,
            edge_count: merged.len(),
        })
    }
}
